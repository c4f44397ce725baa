use std::collections::VecDeque;

use pathviz_core::{Point, Range};

use crate::algorithm::Algorithm;
use crate::search::SearchResult;
use crate::traits::Pather;

/// Search scores of a cell from the last A* or Dijkstra run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Cost so far.
    pub g: u32,
    /// Heuristic estimate of the remaining cost.
    pub h: f64,
    /// `g + h`.
    pub f: f64,
}

// ---------------------------------------------------------------------------
// Internal per-cell node for A*/Dijkstra searches
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

/// Sentinel cost meaning "not reached yet" in Dijkstra.
pub(crate) const INFINITE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Runs searches over a square grid.
///
/// `SearchEngine` owns the scratch state of every algorithm (node array,
/// queue, cost map) so that repeated searches reuse their allocations. The
/// returned [`SearchResult`]s are owned and independent of the engine.
pub struct SearchEngine {
    pub(crate) n: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) dist: Vec<u32>,
    pub(crate) settled: Vec<bool>,
    pub(crate) open: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SearchEngine {
    /// Create an engine sized for an `n × n` grid.
    pub fn new(n: i32) -> Self {
        let len = Range::square(n).len();
        Self {
            n: n.max(0),
            nodes: vec![Node::default(); len],
            generation: 0,
            queue: VecDeque::new(),
            dist: vec![INFINITE; len],
            settled: vec![false; len],
            open: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Side of the grid the caches are sized for.
    #[inline]
    pub fn size(&self) -> i32 {
        self.n
    }

    /// Run `algorithm` from `from` to `to`.
    pub fn search(
        &mut self,
        algorithm: Algorithm,
        pather: &dyn Pather,
        from: Point,
        to: Point,
    ) -> SearchResult {
        let result = (algorithm.strategy())(self, pather, from, to);
        log::debug!(
            "{} {} -> {}: visited {} cells, path {:?}",
            algorithm,
            from,
            to,
            result.trace.len(),
            result.path_len()
        );
        result
    }

    /// Scores recorded for `p` by the last A* or Dijkstra run, if that run
    /// reached it.
    pub fn score(&self, p: Point) -> Option<Score> {
        let node = &self.nodes[self.idx(p)?];
        if node.generation != self.generation || self.generation == 0 {
            return None;
        }
        Some(Score {
            g: node.g,
            h: node.h,
            f: node.f,
        })
    }

    /// Size caches for `n`, reallocating only if the grid grew or shrank.
    pub(crate) fn prepare(&mut self, n: i32) {
        let n = n.max(0);
        if n != self.n {
            let len = Range::square(n).len();
            self.n = n;
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
            self.dist.resize(len, INFINITE);
            self.settled.resize(len, false);
        }
        self.queue.clear();
        self.open.clear();
    }

    /// Bump the generation so stale nodes are ignored.
    #[inline]
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            for node in self.nodes.iter_mut() {
                node.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a linear index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        Range::square(self.n).contains(p).then(|| p.index(self.n))
    }

    /// Convert a linear index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::from_index(idx, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Grid;

    #[test]
    fn prepare_resizes_caches() {
        let mut engine = SearchEngine::new(5);
        assert_eq!(engine.nodes.len(), 25);
        engine.prepare(8);
        assert_eq!(engine.size(), 8);
        assert_eq!(engine.nodes.len(), 64);
        assert_eq!(engine.dist.len(), 64);
        engine.prepare(3);
        assert_eq!(engine.nodes.len(), 9);
    }

    #[test]
    fn engine_adapts_to_grid_size() {
        let mut engine = SearchEngine::default();
        let mut g = Grid::new(4);
        g.mark_start(Point::new(0, 0));
        g.mark_end(Point::new(3, 3));
        let r = engine.search(Algorithm::Bfs, &g, Point::new(0, 0), Point::new(3, 3));
        assert_eq!(engine.size(), 4);
        assert_eq!(r.path_len(), Some(6));
    }

    #[test]
    fn score_is_none_before_any_weighted_search() {
        let engine = SearchEngine::new(3);
        assert_eq!(engine.score(Point::new(1, 1)), None);
        assert_eq!(engine.score(Point::new(9, 9)), None);
    }
}
