//! Commands delivered to the controller: [`Msg`] and [`EditKind`].

use pathviz_core::Point;
use pathviz_paths::Algorithm;
use pathviz_replay::Tick;

/// A grid edit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditKind {
    MarkStart,
    MarkEnd,
    MarkObstacle,
    ClearObstacle,
}

/// A message delivered to the application.
#[derive(Clone, Debug)]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// Apply an edit to the cell at `pos`.
    Edit { pos: Point, kind: EditKind },
    /// Run a search; `None` uses the configured algorithm.
    Run(Option<Algorithm>),
    /// Discard the grid and build a fresh one, optionally of a new size.
    Reset { size: Option<i32> },
    /// Reset, then fill the grid with a random maze.
    GenerateMaze,
    /// Scheduled animation step.
    Tick(Tick),
    /// Request to quit.
    Quit,
}

impl Msg {
    /// Convenience: an edit message.
    pub fn edit(kind: EditKind, x: i32, y: i32) -> Self {
        Self::Edit {
            pos: Point::new(x, y),
            kind,
        }
    }
}
