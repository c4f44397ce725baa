//! Command errors.

use std::fmt;

use pathviz_core::Point;

/// Why a command was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The coordinate lies outside `[0, N)`.
    InvalidCoordinate(Point),
    /// The requested grid side is not usable.
    InvalidSize(i32),
    /// A search needs both a start and an end cell.
    MissingEndpoint,
    /// A playback is already in flight.
    ConcurrentRunRejected,
    /// The cell is an obstacle on a grid whose found path is displayed.
    PathLocked(Point),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate(p) => write!(f, "coordinate {p} is outside the grid"),
            Self::InvalidSize(n) => write!(f, "invalid grid size {n}"),
            Self::MissingEndpoint => f.write_str("search needs a start and an end cell"),
            Self::ConcurrentRunRejected => f.write_str("a search is already playing"),
            Self::PathLocked(p) => {
                write!(f, "obstacle at {p} cannot change while a path is shown")
            }
        }
    }
}

impl std::error::Error for Error {}
