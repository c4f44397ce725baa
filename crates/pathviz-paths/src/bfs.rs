use pathviz_core::Point;

use crate::Algorithm;
use crate::engine::SearchEngine;
use crate::search::{Parent, ParentMap, SearchResult, VisitationTrace};
use crate::traits::Pather;

impl SearchEngine {
    /// Breadth-first search from `from` to `to`.
    ///
    /// A cell gets its parent the first time it is discovered. The search
    /// stops when `to` is dequeued or the queue runs dry. The trace lists
    /// cells in discovery order, starting with `from`.
    pub fn bfs<P: Pather + ?Sized>(&mut self, pather: &P, from: Point, to: Point) -> SearchResult {
        self.prepare(pather.size());
        let (Some(si), Some(gi)) = (self.idx(from), self.idx(to)) else {
            return SearchResult::unreached(Algorithm::Bfs, self.n, from, to);
        };

        let mut parents = ParentMap::new(self.nodes.len());
        let mut trace = Vec::new();

        parents.set(si, Parent::Start);
        trace.push(si);
        self.queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
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
                if pather.is_obstacle(ni) || parents.contains(ni) {
                    continue;
                }
                parents.set(ni, Parent::Cell(ci));
                trace.push(ni);
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        self.queue.clear();

        SearchResult {
            algorithm: Algorithm::Bfs,
            size: self.n,
            start: from,
            end: to,
            trace: VisitationTrace(trace),
            parents,
        }
    }
}
