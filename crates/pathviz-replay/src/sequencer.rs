//! Sequencer — plays a [`SearchResult`] back as reveal events.
//!
//! Playback has two phases: the visitation trace is revealed cell by cell,
//! then the path is revealed from the end back to the start. In animated
//! mode every step waits for a [`Tick`]; in instant mode the whole run is
//! applied at once.

use pathviz_paths::SearchResult;

use crate::sink::{RevealEvent, RevealSink};

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Exploring,
    TracingPath,
    Done,
}

/// How a run is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackMode {
    /// One reveal event per scheduler tick.
    #[default]
    Animated,
    /// Every reveal event applied synchronously.
    Instant,
}

/// A scheduled playback step.
///
/// A tick belongs to one run and one step; the sequencer ignores any tick
/// that does not match its live run and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    run: u64,
    step: usize,
}

impl Tick {
    /// Run the tick was scheduled for.
    #[inline]
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Number of events applied before this tick.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }
}

/// Replays search results as reveal events.
#[derive(Debug, Default)]
pub struct Sequencer {
    phase: Phase,
    run: u64,
    trace: Vec<usize>,
    /// Path cells from end to start.
    path: Vec<usize>,
    cursor: usize,
    step: usize,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a run is in flight.
    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Exploring | Phase::TracingPath)
    }

    /// Id of the live run. Bumped on every start and cancellation.
    #[inline]
    pub fn run_id(&self) -> u64 {
        self.run
    }

    /// Number of events applied in the live run.
    #[inline]
    pub fn steps_applied(&self) -> usize {
        self.step
    }

    /// Whether the finished run revealed a path. `None` until a run is done.
    pub fn found(&self) -> Option<bool> {
        (self.phase == Phase::Done).then(|| !self.path.is_empty())
    }

    /// Start playing `result`, cancelling whatever was playing.
    ///
    /// Emits [`RevealEvent::ClearedAll`] first. In [`PlaybackMode::Instant`]
    /// the run is applied entirely and `None` is returned; otherwise the
    /// first tick to schedule is returned.
    pub fn start<S: RevealSink + ?Sized>(
        &mut self,
        result: &SearchResult,
        mode: PlaybackMode,
        sink: &mut S,
    ) -> Option<Tick> {
        self.load(result);
        sink.reveal(RevealEvent::ClearedAll);
        log::debug!(
            "run {}: {} steps, path of {} cells, {:?}",
            self.run,
            self.trace.len(),
            self.path.len(),
            mode
        );
        match mode {
            PlaybackMode::Instant => {
                while self.advance(sink) {}
                None
            }
            PlaybackMode::Animated => Some(self.next_tick()),
        }
    }

    /// Apply one step if `tick` belongs to the live run.
    ///
    /// Returns the next tick to schedule, or `None` when the run is over or
    /// the tick was stale.
    pub fn tick<S: RevealSink + ?Sized>(&mut self, tick: Tick, sink: &mut S) -> Option<Tick> {
        if tick.run != self.run || tick.step != self.step || !self.is_playing() {
            log::debug!(
                "stale tick (run {}, step {}) ignored; live run {} at step {}",
                tick.run,
                tick.step,
                self.run,
                self.step
            );
            return None;
        }
        self.advance(sink).then(|| self.next_tick())
    }

    /// Show `result` immediately: clear, then apply every step of the run.
    ///
    /// Used when the endpoints move after a path was already shown.
    pub fn redraw<S: RevealSink + ?Sized>(&mut self, result: &SearchResult, sink: &mut S) {
        self.start(result, PlaybackMode::Instant, sink);
    }

    /// Abandon the live run. Outstanding ticks become stale.
    pub fn cancel(&mut self) {
        if self.is_playing() {
            log::debug!("run {} cancelled at step {}", self.run, self.step);
        }
        self.run = self.run.wrapping_add(1);
        self.phase = Phase::Idle;
        self.trace.clear();
        self.path.clear();
        self.cursor = 0;
        self.step = 0;
    }

    fn load(&mut self, result: &SearchResult) {
        self.cancel();
        self.trace.extend(result.trace.iter());
        self.path = result.path().unwrap_or_default();
        self.phase = Phase::Exploring;
    }

    fn next_tick(&self) -> Tick {
        Tick {
            run: self.run,
            step: self.step,
        }
    }

    /// Apply exactly one reveal event. Returns whether more remain.
    fn advance<S: RevealSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        loop {
            match self.phase {
                Phase::Exploring => {
                    if let Some(&i) = self.trace.get(self.cursor) {
                        self.emit(sink, RevealEvent::CellExploring(i));
                        return true;
                    }
                    self.phase = Phase::TracingPath;
                    self.cursor = 0;
                }
                Phase::TracingPath => {
                    if let Some(&i) = self.path.get(self.cursor) {
                        self.emit(sink, RevealEvent::CellOnPath(i));
                        return true;
                    }
                    let found = !self.path.is_empty();
                    self.phase = Phase::Done;
                    sink.reveal(RevealEvent::SearchDone { found });
                    self.step += 1;
                    return false;
                }
                Phase::Idle | Phase::Done => return false,
            }
        }
    }

    #[inline]
    fn emit<S: RevealSink + ?Sized>(&mut self, sink: &mut S, event: RevealEvent) {
        log::trace!("run {} step {}: {:?}", self.run, self.step, event);
        sink.reveal(event);
        self.cursor += 1;
        self.step += 1;
    }
}
