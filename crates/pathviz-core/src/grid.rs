//! The [`Grid`] type — a square board of [`Cell`]s with start, end and
//! obstacle markers.
//!
//! The side `n` is fixed for the lifetime of a grid; resizing means building
//! a new one. Cells are stored by linear index `x * n + y`.

use crate::cell::{Cell, Role};
use crate::geom::{Point, Range};

/// A square grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n: i32,
    cells: Vec<Cell>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Create a new `n × n` grid with every cell free.
    pub fn new(n: i32) -> Self {
        let n = n.max(0);
        Self {
            n,
            cells: vec![Cell::default(); (n as usize) * (n as usize)],
            start: None,
            end: None,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.n
    }

    /// Number of cells (`n * n`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding range `[0, n) × [0, n)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::square(self.n)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Linear index of `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| p.index(self.n))
    }

    /// The point at linear index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        Point::from_index(i, self.n)
    }

    /// Read the cell at `p`. Returns `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Read the cell at linear index `i`.
    pub fn cell(&self, i: usize) -> Option<Cell> {
        self.cells.get(i).copied()
    }

    /// Whether the cell at linear index `i` is an obstacle. Indices outside
    /// the grid are not obstacles.
    #[inline]
    pub fn is_obstacle(&self, i: usize) -> bool {
        self.cells.get(i).is_some_and(|c| c.is_obstacle())
    }

    /// Current start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Current end cell, if any.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstacle()).count()
    }

    /// Append the in-bounds cardinal neighbours of `p` to `buf`, in
    /// [`Point::neighbors_4`] order. The caller clears `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&q| self.contains(q)));
    }

    /// Make `p` the start cell. The previous start (if any) becomes free.
    ///
    /// Returns `None` and changes nothing if `p` is outside the grid.
    pub fn mark_start(&mut self, p: Point) -> Option<Point> {
        self.assign(p, Role::Start)
    }

    /// Make `p` the end cell. The previous end (if any) becomes free.
    pub fn mark_end(&mut self, p: Point) -> Option<Point> {
        self.assign(p, Role::End)
    }

    /// Turn `p` into an obstacle, clearing a start or end held there.
    pub fn mark_obstacle(&mut self, p: Point) -> Option<Point> {
        self.assign(p, Role::Obstacle)
    }

    /// Turn an obstacle at `p` back into a free cell. Start and end cells
    /// are left alone.
    pub fn clear_obstacle(&mut self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        if self.cells[i].is_obstacle() {
            self.cells[i].role = Role::Free;
        }
        Some(p)
    }

    /// Iterator over `(Point, Cell)` pairs in linear index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.range().iter().zip(self.cells.iter().copied())
    }

    fn assign(&mut self, p: Point, role: Role) -> Option<Point> {
        let i = self.idx(p)?;

        // Drop whatever singleton role the cell held before.
        match self.cells[i].role {
            Role::Start => self.start = None,
            Role::End => self.end = None,
            _ => {}
        }

        // Singleton roles move: free the previous holder.
        let previous = match role {
            Role::Start => self.start.replace(p),
            Role::End => self.end.replace(p),
            _ => None,
        };
        if let Some(prev) = previous.and_then(|q| self.idx(q)) {
            self.cells[prev].role = Role::Free;
        }

        self.cells[i].role = role;
        Some(p)
    }
}
