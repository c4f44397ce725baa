//! Controller configuration.

use std::time::Duration;

use pathviz_paths::Algorithm;
use pathviz_replay::PlaybackMode;

/// Settings fixed when a grid is created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Side of the square grid.
    pub size: i32,
    /// Largest side accepted by a reset.
    pub max_size: i32,
    pub mode: PlaybackMode,
    /// Pause between two animated reveal steps.
    pub step_delay: Duration,
    /// Algorithm used when a run does not name one.
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 20,
            max_size: 200,
            mode: PlaybackMode::Animated,
            step_delay: Duration::from_millis(4),
            algorithm: Algorithm::Bfs,
        }
    }
}

impl Config {
    /// Whether `n` is an acceptable grid side.
    #[inline]
    pub fn accepts_size(&self, n: i32) -> bool {
        n >= 1 && n <= self.max_size
    }
}
