//! Replay of search results for the pathfinding visualizer.
//!
//! [`Sequencer`] turns a [`pathviz_paths::SearchResult`] into an ordered
//! stream of [`RevealEvent`]s delivered to a [`RevealSink`], either one per
//! scheduler [`Tick`] or all at once.

pub mod sequencer;
pub mod sink;

pub use sequencer::{Phase, PlaybackMode, Sequencer, Tick};
pub use sink::{FnSink, RevealEvent, RevealSink};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn reveal_event_round_trip() {
        for ev in [
            RevealEvent::CellExploring(3),
            RevealEvent::CellOnPath(7),
            RevealEvent::SearchDone { found: true },
            RevealEvent::ClearedAll,
        ] {
            let json = serde_json::to_string(&ev).unwrap();
            let back: RevealEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(ev, back);
        }
    }
}
