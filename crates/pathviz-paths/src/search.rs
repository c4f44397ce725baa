//! Search output: the visitation trace, the parent map and the result that
//! bundles them.

use pathviz_core::Point;

use crate::Algorithm;

/// Predecessor of a reached cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parent {
    /// The cell is the search origin.
    Start,
    /// Linear index of the cell the search came from.
    Cell(usize),
}

/// Per-cell predecessor links, indexed by linear cell index.
///
/// A cell without an entry was never reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentMap {
    links: Vec<Option<Parent>>,
}

impl ParentMap {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            links: vec![None; len],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, idx: usize, parent: Parent) {
        self.links[idx] = Some(parent);
    }

    /// The parent of `idx`, if the cell was reached.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Parent> {
        self.links.get(idx).copied().flatten()
    }

    /// Whether `idx` was reached.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.get(idx).is_some()
    }

    /// Number of reached cells.
    pub fn reached(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    /// Follow parent links from `end` back to the origin.
    ///
    /// Returns the cells from `end` to the origin, both included, or `None`
    /// if `end` was not reached. The walk is bounded by the number of cells,
    /// so a corrupted map cannot loop forever.
    pub fn backtrack(&self, end: usize) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        let mut cur = end;
        for _ in 0..self.links.len() {
            path.push(cur);
            match self.get(cur)? {
                Parent::Start => return Some(path),
                Parent::Cell(prev) => cur = prev,
            }
        }
        None
    }
}

/// Cells in the order a search inspected them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitationTrace(pub(crate) Vec<usize>);

impl VisitationTrace {
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

/// The immutable outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Side of the grid that was searched.
    pub size: i32,
    pub start: Point,
    pub end: Point,
    pub trace: VisitationTrace,
    pub parents: ParentMap,
}

impl SearchResult {
    /// A result that reached nothing, used when an endpoint lies outside
    /// the grid.
    pub(crate) fn unreached(algorithm: Algorithm, size: i32, start: Point, end: Point) -> Self {
        Self {
            algorithm,
            size,
            start,
            end,
            trace: VisitationTrace::default(),
            parents: ParentMap::default(),
        }
    }

    /// Whether the end cell has a parent chain back to the start.
    pub fn found(&self) -> bool {
        self.path().is_some()
    }

    /// Linear indices of the path from end to start, both included.
    pub fn path(&self) -> Option<Vec<usize>> {
        if !pathviz_core::Range::square(self.size).contains(self.end) {
            return None;
        }
        self.parents.backtrack(self.end.index(self.size))
    }

    /// The path as points, from start to end.
    pub fn path_points(&self) -> Option<Vec<Point>> {
        let mut pts: Vec<Point> = self
            .path()?
            .into_iter()
            .map(|i| Point::from_index(i, self.size))
            .collect();
        pts.reverse();
        Some(pts)
    }

    /// Path length in edges.
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|p| p.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backtrack_follows_links() {
        let mut pm = ParentMap::new(4);
        pm.set(0, Parent::Start);
        pm.set(1, Parent::Cell(0));
        pm.set(3, Parent::Cell(1));
        assert_eq!(pm.backtrack(3), Some(vec![3, 1, 0]));
        assert_eq!(pm.backtrack(2), None);
        assert_eq!(pm.reached(), 3);
    }

    #[test]
    fn backtrack_stops_on_cycle() {
        let mut pm = ParentMap::new(3);
        pm.set(1, Parent::Cell(2));
        pm.set(2, Parent::Cell(1));
        assert_eq!(pm.backtrack(1), None);
    }

    #[test]
    fn out_of_grid_end_is_not_found() {
        let r = SearchResult::unreached(Algorithm::Bfs, 3, Point::new(0, 0), Point::new(5, 5));
        assert!(!r.found());
        assert_eq!(r.path_len(), None);
    }
}
