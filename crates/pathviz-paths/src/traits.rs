use pathviz_core::{Grid, Point};

/// Minimal pathfinding interface over a square grid of side
/// [`size`](Self::size).
pub trait Pather {
    /// Side of the square grid.
    fn size(&self) -> i32;

    /// Append in-bounds neighbors of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether the cell at linear index `idx` blocks movement.
    fn is_obstacle(&self, idx: usize) -> bool;
}

impl Pather for Grid {
    #[inline]
    fn size(&self) -> i32 {
        Grid::size(self)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf);
    }

    #[inline]
    fn is_obstacle(&self, idx: usize) -> bool {
        Grid::is_obstacle(self, idx)
    }
}
