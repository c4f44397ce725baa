use pathviz_core::Point;

use crate::Algorithm;
use crate::distance::euclidean;
use crate::engine::SearchEngine;
use crate::search::{Parent, ParentMap, SearchResult, VisitationTrace};
use crate::traits::Pather;

impl SearchEngine {
    /// A* search from `from` to `to` with a straight-line heuristic.
    ///
    /// The open list is unsorted; each step takes the entry with the lowest
    /// `f = g + h`, preferring the lower `h` and then the earliest inserted
    /// on ties. A cell seen again through a cheaper route gets its cost and
    /// parent updated. The trace lists cells in discovery order.
    pub fn astar<P: Pather + ?Sized>(&mut self, pather: &P, from: Point, to: Point) -> SearchResult {
        self.prepare(pather.size());
        let (Some(si), Some(gi)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::unreached(Algorithm::AStar, self.n, from, to);
        };

        let cur_gen = self.next_generation();

        let mut parents = ParentMap::new(self.nodes.len());
        let mut trace = Vec::new();

        {
            let h = euclidean(from, to);
            let node = &mut self.nodes[si];
            node.g = 0;
            node.h = h;
            node.f = h;
            node.generation = cur_gen;
            node.closed = false;
        }
        parents.set(si, Parent::Start);
        trace.push(si);
        self.open.push(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.pop_open() {
            if ci == gi {
                break;
            }

            let current_g = {
                let node = &mut self.nodes[ci];
                node.closed = true;
                node.g
            };
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if pather.is_obstacle(ni) {
                    continue;
                }
                let tentative = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                    n.g = tentative;
                    n.f = f64::from(tentative) + n.h;
                    parents.set(ni, Parent::Cell(ci));
                    continue;
                }

                n.generation = cur_gen;
                n.g = tentative;
                n.h = euclidean(np, to);
                n.f = f64::from(tentative) + n.h;
                n.closed = false;
                parents.set(ni, Parent::Cell(ci));
                trace.push(ni);
                self.open.push(ni);
            }
        }

        self.nbuf = nbuf;
        self.open.clear();

        SearchResult {
            algorithm: Algorithm::AStar,
            size: self.n,
            start: from,
            end: to,
            trace: VisitationTrace(trace),
            parents,
        }
    }

    /// Remove and return the open entry with the lowest `f`. Ties go to the
    /// lower `h`, then to the entry inserted first.
    pub(crate) fn pop_open(&mut self) -> Option<usize> {
        let mut best = 0;
        for k in 1..self.open.len() {
            let cand = &self.nodes[self.open[k]];
            let cur = &self.nodes[self.open[best]];
            if cand.f < cur.f || (cand.f == cur.f && cand.h < cur.h) {
                best = k;
            }
        }
        (!self.open.is_empty()).then(|| self.open.remove(best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Grid;

    #[test]
    fn finds_shortest_path_on_open_grid() {
        let g = Grid::new(5);
        let mut engine = SearchEngine::new(5);
        let r = engine.astar(&g, Point::new(0, 0), Point::new(4, 4));
        assert_eq!(r.path_len(), Some(8));
        // The heuristic keeps exploration narrower than BFS.
        let bfs = engine.bfs(&g, Point::new(0, 0), Point::new(4, 4));
        assert!(r.trace.len() <= bfs.trace.len());
    }

    #[test]
    fn never_longer_than_bfs_around_walls() {
        let mut g = Grid::new(8);
        // A U-shaped trap opening away from the goal.
        for y in 2..6 {
            g.mark_obstacle(Point::new(5, y));
        }
        for x in 2..5 {
            g.mark_obstacle(Point::new(x, 2));
            g.mark_obstacle(Point::new(x, 5));
        }
        let mut engine = SearchEngine::new(8);
        for (a, b) in [
            (Point::new(3, 3), Point::new(7, 4)),
            (Point::new(0, 0), Point::new(7, 7)),
            (Point::new(4, 4), Point::new(6, 3)),
        ] {
            let astar = engine.astar(&g, a, b);
            let bfs = engine.bfs(&g, a, b);
            assert!(astar.found());
            assert_eq!(astar.path_len(), bfs.path_len());
        }
    }

    #[test]
    fn records_heuristic_scores() {
        let g = Grid::new(4);
        let mut engine = SearchEngine::new(4);
        engine.astar(&g, Point::new(0, 0), Point::new(0, 3));
        let s = engine.score(Point::new(0, 1));
        assert_eq!(s.map(|s| s.g), Some(1));
        assert_eq!(s.map(|s| s.h), Some(2.0));
        assert_eq!(s.map(|s| s.f), Some(3.0));
    }

    #[test]
    fn blocked_column_is_unreachable() {
        let mut g = Grid::new(3);
        for y in 0..3 {
            g.mark_obstacle(Point::new(1, y));
        }
        let mut engine = SearchEngine::new(3);
        let r = engine.astar(&g, Point::new(0, 1), Point::new(2, 1));
        assert!(!r.found());
        assert!(r.trace.iter().all(|i| i < 3));
    }

    #[test]
    fn selection_prefers_f_then_h_then_insertion() {
        let mut engine = SearchEngine::new(2);
        for (i, (f, h)) in [(4.0, 2.0), (4.0, 1.0), (3.0, 3.0), (4.0, 1.0)]
            .into_iter()
            .enumerate()
        {
            engine.nodes[i].f = f;
            engine.nodes[i].h = h;
            engine.open.push(i);
        }
        let order: Vec<usize> = std::iter::from_fn(|| engine.pop_open()).collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }

    #[test]
    fn trace_is_discovery_order() {
        let g = Grid::new(3);
        let mut engine = SearchEngine::new(3);
        let r = engine.astar(&g, Point::new(0, 0), Point::new(2, 2));
        // After (1, 1) the open list holds 2, 6, 5, 7, all with f = 4; the
        // lower h of 5 and 7 wins, and 5 went in first.
        assert_eq!(r.trace.as_slice(), &[0, 1, 3, 2, 4, 6, 5, 7, 8]);
        assert_eq!(r.path(), Some(vec![8, 5, 4, 1, 0]));
    }
}
