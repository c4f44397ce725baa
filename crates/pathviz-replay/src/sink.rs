//! Reveal events and the sink that consumes them.

/// A visual change produced by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealEvent {
    /// The search inspected the cell at this linear index.
    CellExploring(usize),
    /// The cell at this linear index lies on the found path.
    CellOnPath(usize),
    /// Playback finished; `found` tells whether a path was revealed.
    SearchDone { found: bool },
    /// Every exploring and on-path mark was cleared.
    ClearedAll,
}

/// Consumer of reveal events, typically a renderer.
pub trait RevealSink {
    fn reveal(&mut self, event: RevealEvent);
}

impl RevealSink for Vec<RevealEvent> {
    #[inline]
    fn reveal(&mut self, event: RevealEvent) {
        self.push(event);
    }
}

impl<S: RevealSink + ?Sized> RevealSink for &mut S {
    #[inline]
    fn reveal(&mut self, event: RevealEvent) {
        (**self).reveal(event);
    }
}

/// Adapts a closure into a [`RevealSink`].
pub struct FnSink<F: FnMut(RevealEvent)>(pub F);

impl<F: FnMut(RevealEvent)> RevealSink for FnSink<F> {
    #[inline]
    fn reveal(&mut self, event: RevealEvent) {
        (self.0)(event);
    }
}
