//! Pathfinding algorithms for the grid visualizer.
//!
//! Three searches over a uniform-cost, 4-connected [`pathviz_core::Grid`]:
//!
//! - **BFS** ([`SearchEngine::bfs`])
//! - **Dijkstra** ([`SearchEngine::dijkstra`])
//! - **A\*** ([`SearchEngine::astar`])
//!
//! Each run yields a [`SearchResult`] carrying a [`VisitationTrace`] (the
//! order cells were inspected, used for animation) and a [`ParentMap`]
//! (used to backtrack the path). [`Algorithm`] selects a search through
//! [`SearchEngine::search`].

mod algorithm;
mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod engine;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError, Strategy};
pub use distance::{euclidean, manhattan};
pub use engine::{Score, SearchEngine};
pub use search::{Parent, ParentMap, SearchResult, VisitationTrace};
pub use traits::Pather;


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for a in Algorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(a, back);
        }
    }

    #[test]
    fn parent_round_trip() {
        let p = Parent::Cell(12);
        let json = serde_json::to_string(&p).unwrap();
        let back: Parent = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
