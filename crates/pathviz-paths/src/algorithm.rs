//! The closed set of search algorithms and their dispatch table.

use std::fmt;
use std::str::FromStr;

use pathviz_core::Point;

use crate::engine::SearchEngine;
use crate::search::SearchResult;
use crate::traits::Pather;

/// A search algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dijkstra,
    AStar,
}

/// Signature shared by every search strategy.
pub type Strategy = fn(&mut SearchEngine, &dyn Pather, Point, Point) -> SearchResult;

fn run_bfs(engine: &mut SearchEngine, pather: &dyn Pather, from: Point, to: Point) -> SearchResult {
    engine.bfs(pather, from, to)
}

fn run_dijkstra(
    engine: &mut SearchEngine,
    pather: &dyn Pather,
    from: Point,
    to: Point,
) -> SearchResult {
    engine.dijkstra(pather, from, to)
}

fn run_astar(
    engine: &mut SearchEngine,
    pather: &dyn Pather,
    from: Point,
    to: Point,
) -> SearchResult {
    engine.astar(pather, from, to)
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar];

    /// The function implementing this algorithm.
    pub fn strategy(self) -> Strategy {
        match self {
            Algorithm::Bfs => run_bfs,
            Algorithm::Dijkstra => run_dijkstra,
            Algorithm::AStar => run_astar,
        }
    }

    /// Short lowercase name, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search algorithm \u{201c}{}\u{201d} (expected bfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
