//! **pathviz-core** — grid model for the pathfinding visualizer.
//!
//! This crate provides the foundational types shared by the search engine,
//! the replay sequencer and the controller: geometry primitives, cells with
//! their start/end/obstacle roles, and the square [`Grid`].

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Role};
pub use geom::{Point, Range};
pub use grid::Grid;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let cell = Cell::default().with_role(Role::Obstacle);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
