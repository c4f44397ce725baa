//! The grid controller: applies edits, runs searches and drives playback.

use pathviz_core::{Grid, Point};
use pathviz_gen::MapGen;
use pathviz_paths::{Algorithm, SearchEngine, SearchResult};
use pathviz_replay::{Phase, RevealEvent, RevealSink, Sequencer, Tick};
use rand::Rng;

use crate::app::{Effect, Model, cmd};
use crate::config::Config;
use crate::error::Error;
use crate::messages::{EditKind, Msg};

/// Run state tracked by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// A playback is in flight.
    pub locked: bool,
    /// The last finished playback revealed a path, and it is still shown.
    pub found: bool,
    /// Algorithm of the last run, reused for redraws.
    pub algorithm: Option<Algorithm>,
}

/// Orchestrates the grid, the search engine and the sequencer.
///
/// Reveal events go to the sink `S`.
pub struct GridController<S: RevealSink> {
    config: Config,
    grid: Grid,
    engine: SearchEngine,
    sequencer: Sequencer,
    options: Options,
    sink: S,
}

impl<S: RevealSink> GridController<S> {
    /// Create a controller with a fresh grid of `config.size`.
    pub fn new(config: Config, sink: S) -> Result<Self, Error> {
        if !config.accepts_size(config.size) {
            return Err(Error::InvalidSize(config.size));
        }
        Ok(Self {
            grid: Grid::new(config.size),
            engine: SearchEngine::new(config.size),
            sequencer: Sequencer::new(),
            options: Options::default(),
            config,
            sink,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Playback phase of the sequencer.
    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    // -------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------

    /// Mark `pos` as the start cell.
    pub fn mark_start(&mut self, pos: Point) -> Result<Point, Error> {
        self.apply_edit(pos, EditKind::MarkStart)
    }

    /// Mark `pos` as the end cell.
    pub fn mark_end(&mut self, pos: Point) -> Result<Point, Error> {
        self.apply_edit(pos, EditKind::MarkEnd)
    }

    /// Mark `pos` as an obstacle.
    pub fn mark_obstacle(&mut self, pos: Point) -> Result<Point, Error> {
        self.apply_edit(pos, EditKind::MarkObstacle)
    }

    /// Clear an obstacle at `pos`.
    pub fn clear_obstacle(&mut self, pos: Point) -> Result<Point, Error> {
        self.apply_edit(pos, EditKind::ClearObstacle)
    }

    /// Apply an edit.
    ///
    /// Edits are refused while a playback is in flight. While a found path
    /// is shown, obstacles cannot change and no edit may target an obstacle
    /// cell; moving the start or end re-runs the search and redraws the
    /// result at once.
    pub fn apply_edit(&mut self, pos: Point, kind: EditKind) -> Result<Point, Error> {
        if !self.grid.contains(pos) {
            return Err(Error::InvalidCoordinate(pos));
        }
        if self.options.locked {
            return Err(Error::ConcurrentRunRejected);
        }
        if self.options.found {
            let on_obstacle = self.grid.at(pos).is_some_and(|c| c.is_obstacle());
            let obstacle_edit = matches!(kind, EditKind::MarkObstacle | EditKind::ClearObstacle);
            if on_obstacle || obstacle_edit {
                return Err(Error::PathLocked(pos));
            }
        }

        let applied = match kind {
            EditKind::MarkStart => self.grid.mark_start(pos),
            EditKind::MarkEnd => self.grid.mark_end(pos),
            EditKind::MarkObstacle => self.grid.mark_obstacle(pos),
            EditKind::ClearObstacle => self.grid.clear_obstacle(pos),
        };
        let pos = applied.ok_or(Error::InvalidCoordinate(pos))?;

        if self.options.found {
            self.redraw();
        }
        Ok(pos)
    }

    /// Run `algorithm` between the current start and end.
    ///
    /// In animated mode the first [`Tick`] to schedule is returned; in
    /// instant mode the whole result has been revealed and `None` is
    /// returned.
    pub fn run_search(&mut self, algorithm: Algorithm) -> Result<Option<Tick>, Error> {
        if self.options.locked {
            return Err(Error::ConcurrentRunRejected);
        }
        let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) else {
            return Err(Error::MissingEndpoint);
        };

        log::info!("running {algorithm} from {start} to {end}");
        let result = self.engine.search(algorithm, &self.grid, start, end);
        self.options = Options {
            locked: true,
            found: false,
            algorithm: Some(algorithm),
        };

        let tick = self
            .sequencer
            .start(&result, self.config.mode, &mut self.sink);
        if tick.is_none() {
            self.finish(&result);
        }
        Ok(tick)
    }

    /// Apply one scheduled playback step. Returns the next tick, if any.
    pub fn on_tick(&mut self, tick: Tick) -> Option<Tick> {
        let next = self.sequencer.tick(tick, &mut self.sink);
        if self.options.locked && self.sequencer.phase() == Phase::Done {
            self.options.locked = false;
            self.options.found = self.sequencer.found().unwrap_or(false);
            log::info!(
                "{} playback done, found = {}",
                self.options.algorithm.map_or("search", Algorithm::name),
                self.options.found
            );
        }
        next
    }

    /// Discard the grid and build a fresh one, optionally with a new side.
    ///
    /// Any playback in flight is cancelled; its pending ticks become stale.
    pub fn reset(&mut self, size: Option<i32>) -> Result<(), Error> {
        let n = size.unwrap_or(self.config.size);
        if !self.config.accepts_size(n) {
            return Err(Error::InvalidSize(n));
        }
        self.sequencer.cancel();
        self.config.size = n;
        self.grid = Grid::new(n);
        self.options = Options::default();
        self.sink.reveal(RevealEvent::ClearedAll);
        log::info!("grid reset to {n}x{n}");
        Ok(())
    }

    /// Reset, then fill the grid with a random maze. Returns the number of
    /// wall cells.
    pub fn generate_maze<R: Rng>(&mut self, rng: R) -> Result<usize, Error> {
        self.reset(None)?;
        let walls = MapGen::new(rng).maze(&mut self.grid);
        log::debug!("maze generated with {walls} walls");
        Ok(walls)
    }

    /// Scatter random obstacles over the free cells. A path on display is
    /// cleared first, since the new obstacles may cut it.
    pub fn scatter_obstacles<R: Rng>(&mut self, rng: R, density: f64) -> Result<usize, Error> {
        if self.options.locked {
            return Err(Error::ConcurrentRunRejected);
        }
        if self.options.found {
            self.sequencer.cancel();
            self.sink.reveal(RevealEvent::ClearedAll);
            self.options.found = false;
        }
        Ok(MapGen::new(rng).scatter_obstacles(&mut self.grid, density))
    }

    /// Re-run the last search and show it instantly.
    fn redraw(&mut self) {
        let algorithm = self.options.algorithm.unwrap_or(self.config.algorithm);
        let (Some(start), Some(end)) = (self.grid.start(), self.grid.end()) else {
            // An endpoint was replaced by its counterpart; nothing to show.
            self.sequencer.cancel();
            self.sink.reveal(RevealEvent::ClearedAll);
            self.options.found = false;
            return;
        };
        let result = self.engine.search(algorithm, &self.grid, start, end);
        self.sequencer.redraw(&result, &mut self.sink);
        self.finish(&result);
    }

    fn finish(&mut self, result: &SearchResult) {
        self.options.locked = false;
        self.options.found = result.found();
        log::info!(
            "{} done: visited {}, path {:?}",
            result.algorithm,
            result.trace.len(),
            result.path_len()
        );
    }

    fn tick_effect(&self, tick: Tick) -> Effect {
        let delay = self.config.step_delay;
        cmd(move || {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            Some(Msg::Tick(tick))
        })
    }
}

impl<S: RevealSink> Model for GridController<S> {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => None,
            Msg::Edit { pos, kind } => {
                if let Err(e) = self.apply_edit(pos, kind) {
                    log::debug!("{kind:?} at {pos} rejected: {e}");
                }
                None
            }
            Msg::Run(algorithm) => {
                let algorithm = algorithm.unwrap_or(self.config.algorithm);
                match self.run_search(algorithm) {
                    Ok(tick) => tick.map(|t| self.tick_effect(t)),
                    Err(e) => {
                        log::debug!("run {algorithm} rejected: {e}");
                        None
                    }
                }
            }
            Msg::Tick(tick) => self.on_tick(tick).map(|t| self.tick_effect(t)),
            Msg::Reset { size } => {
                if let Err(e) = self.reset(size) {
                    log::debug!("reset rejected: {e}");
                }
                None
            }
            Msg::GenerateMaze => {
                if let Err(e) = self.generate_maze(rand::rng()) {
                    log::debug!("maze rejected: {e}");
                }
                None
            }
            Msg::Quit => Some(Effect::End),
        }
    }
}
