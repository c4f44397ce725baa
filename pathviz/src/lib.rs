//! Grid pathfinding visualizer.
//!
//! A [`GridController`] owns an N×N [`Grid`](pathviz_core::Grid), runs
//! BFS, Dijkstra or A* over it and plays the result back through a
//! [`RevealSink`](pathviz_replay::RevealSink). Commands arrive as [`Msg`]s
//! and are processed one at a time by the [`App`] loop; animation steps are
//! scheduled as [`Effect`]s that come back as [`Msg::Tick`].
//!
//! ```no_run
//! use pathviz::{App, Config, Context, EditKind, GridController, Msg};
//! use pathviz::replay::RevealEvent;
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! tx.send(Msg::edit(EditKind::MarkStart, 0, 0)).ok();
//! tx.send(Msg::edit(EditKind::MarkEnd, 19, 19)).ok();
//! tx.send(Msg::Run(None)).ok();
//! drop(tx);
//!
//! let controller = GridController::new(Config::default(), Vec::<RevealEvent>::new())?;
//! let mut app = App::new(controller);
//! app.run(&Context::new(), &rx);
//! # Ok::<(), pathviz::Error>(())
//! ```

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod messages;

pub use app::{App, Context, Effect, Model, cmd};
pub use config::Config;
pub use controller::{GridController, Options};
pub use error::Error;
pub use messages::{EditKind, Msg};

pub use pathviz_core::{Cell, Grid, Point, Role};
pub use pathviz_gen::MapGen;
pub use pathviz_paths as paths;
pub use pathviz_replay as replay;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathviz_paths::Algorithm;
    use pathviz_replay::PlaybackMode;
    use std::time::Duration;

    #[test]
    fn config_round_trip() {
        let cfg = Config {
            size: 32,
            mode: PlaybackMode::Instant,
            step_delay: Duration::from_millis(10),
            algorithm: Algorithm::AStar,
            ..Config::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn edit_kind_round_trip() {
        let json = serde_json::to_string(&EditKind::MarkObstacle).unwrap();
        let back: EditKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EditKind::MarkObstacle);
    }
}
