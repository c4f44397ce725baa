//! The Elm-architecture application loop: [`Model`], [`Effect`], [`App`].
//!
//! Everything runs on one thread. Commands sent from outside arrive through
//! a channel and interleave with the messages produced by effects, so a
//! reset can land between two animation ticks.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
pub enum Effect {
    /// A one-shot command that produces an optional follow-up message.
    Cmd(Box<dyn FnOnce() -> Option<Msg> + Send>),
    /// Signal the application loop to stop.
    End,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cmd(_) => f.write_str("Effect::Cmd(..)"),
            Self::End => f.write_str("Effect::End"),
        }
    }
}

/// Convenience constructor for a [`Effect::Cmd`].
pub fn cmd<F>(f: F) -> Effect
where
    F: FnOnce() -> Option<Msg> + Send + 'static,
{
    Effect::Cmd(Box::new(f))
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application runner.
pub struct App<M: Model> {
    model: M,
    queue: VecDeque<Msg>,
}

impl<M: Model> App<M> {
    /// Create a new application around `model`. `Msg::Init` is queued.
    pub fn new(model: M) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(Msg::Init);
        Self { model, queue }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the update loop.
    ///
    /// Before each message, everything waiting on `rx` is moved to the back
    /// of the queue. When the queue is empty the loop blocks on `rx`. The
    /// loop returns when the model asks to end, `ctx` is cancelled, or `rx`
    /// is disconnected with nothing left to process.
    pub fn run(&mut self, ctx: &Context, rx: &Receiver<Msg>) {
        let mut connected = true;
        while !ctx.is_done() {
            while connected {
                match rx.try_recv() {
                    Ok(msg) => self.queue.push_back(msg),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => connected = false,
                }
            }

            let msg = match self.queue.pop_front() {
                Some(msg) => msg,
                None if connected => match rx.recv() {
                    Ok(msg) => msg,
                    Err(_) => break,
                },
                None => break,
            };

            if self.dispatch(msg, ctx) {
                break;
            }
        }
    }

    /// Process queued messages (and the messages their effects produce)
    /// until the queue is empty. Returns `false` if the model asked to end.
    pub fn process_pending(&mut self, ctx: &Context) -> bool {
        while let Some(msg) = self.queue.pop_front() {
            if ctx.is_done() || self.dispatch(msg, ctx) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if the app should stop.
    fn dispatch(&mut self, msg: Msg, ctx: &Context) -> bool {
        match self.model.update(msg) {
            Some(effect) => self.handle_effect(effect, ctx),
            None => false,
        }
    }

    /// Returns `true` if the app should stop.
    fn handle_effect(&mut self, effect: Effect, ctx: &Context) -> bool {
        match effect {
            Effect::End => {
                ctx.cancel();
                true
            }
            Effect::Cmd(f) => {
                if let Some(msg) = f() {
                    self.queue.push_back(msg);
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    /// Counts messages and echoes `Init` once through a command.
    #[derive(Default)]
    struct Echo {
        seen: Vec<String>,
    }

    impl Model for Echo {
        fn update(&mut self, msg: Msg) -> Option<Effect> {
            self.seen.push(format!("{msg:?}"));
            match msg {
                Msg::Init => Some(cmd(|| Some(Msg::GenerateMaze))),
                Msg::Quit => Some(Effect::End),
                _ => None,
            }
        }
    }

    #[test]
    fn cmd_messages_are_requeued() {
        let mut app = App::new(Echo::default());
        let ctx = Context::new();
        assert!(app.process_pending(&ctx));
        assert_eq!(app.model().seen, vec!["Init", "GenerateMaze"]);
    }

    #[test]
    fn run_stops_on_disconnect() {
        let (tx, rx) = mpsc::channel();
        tx.send(Msg::Reset { size: None }).ok();
        drop(tx);
        let mut app = App::new(Echo::default());
        let ctx = Context::new();
        app.run(&ctx, &rx);
        assert_eq!(app.model().seen.len(), 3);
        assert!(!ctx.is_done());
    }

    #[test]
    fn quit_ends_and_cancels_context() {
        let (tx, rx) = mpsc::channel();
        tx.send(Msg::Quit).ok();
        tx.send(Msg::Init).ok();
        let mut app = App::new(Echo::default());
        let ctx = Context::new();
        app.run(&ctx, &rx);
        assert!(ctx.is_done());
        // The Init sent after Quit is never processed.
        assert_eq!(app.model().seen.iter().filter(|s| *s == "Init").count(), 1);
        drop(tx);
    }
}
