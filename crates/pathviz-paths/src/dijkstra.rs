use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pathviz_core::Point;

use crate::Algorithm;
use crate::engine::{INFINITE, SearchEngine};
use crate::search::{Parent, ParentMap, SearchResult, VisitationTrace};
use crate::traits::Pather;

impl SearchEngine {
    /// Dijkstra search from `from` to `to` over unit-cost edges.
    ///
    /// Each round settles the unsettled cell with the lowest cost; the heap
    /// is keyed on `(cost, index)` so ties go to the lowest index. Parents are
    /// first-write: a cell keeps the predecessor that discovered it. The
    /// search stops when `to` is settled or nothing reachable is left. The
    /// trace lists cells in settlement order.
    pub fn dijkstra<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> SearchResult {
        self.prepare(pather.size());
        let (Some(si), Some(gi)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::unreached(Algorithm::Dijkstra, self.n, from, to);
        };

        let cur_gen = self.next_generation();
        for v in self.dist.iter_mut() {
            *v = INFINITE;
        }
        for s in self.settled.iter_mut() {
            *s = false;
        }

        let mut parents = ParentMap::new(self.nodes.len());
        let mut trace = Vec::new();

        self.dist[si] = 0;
        parents.set(si, Parent::Start);

        let mut open = BinaryHeap::new();
        open.push(Reverse((0, si)));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(Reverse((best_cost, ci))) = open.pop() {
            if self.settled[ci] || best_cost != self.dist[ci] {
                continue;
            }

            self.settled[ci] = true;
            trace.push(ci);

            let node = &mut self.nodes[ci];
            node.g = best_cost;
            node.h = 0.0;
            node.f = f64::from(best_cost);
            node.generation = cur_gen;
            node.closed = true;

            if ci == gi {
                break;
            }

            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if pather.is_obstacle(ni) || self.settled[ni] {
                    continue;
                }
                let tentative = best_cost + 1;
                if tentative < self.dist[ni] {
                    self.dist[ni] = tentative;
                    open.push(Reverse((tentative, ni)));
                }
                if !parents.contains(ni) {
                    parents.set(ni, Parent::Cell(ci));
                }
            }
        }

        self.nbuf = nbuf;

        SearchResult {
            algorithm: Algorithm::Dijkstra,
            size: self.n,
            start: from,
            end: to,
            trace: VisitationTrace(trace),
            parents,
        }
    }
}
