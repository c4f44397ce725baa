//! Obstacle layouts for the pathfinding visualizer: random scatter and
//! perfect mazes.

pub mod mapgen;

pub use mapgen::MapGen;
