//! Cancellation, memory limits, and progress/log callbacks (spec §5, §6).
//!
//! The core never writes to a stream itself; everything it wants to tell the
//! caller goes through an [`Observer`]'s callbacks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag, cheap to clone and safe to share across
/// threads. Replaces the Python source's process-wide abort flag (polled
/// from inside the search) with an explicit token threaded through every
/// call.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Verbosity of [`Observer::on_log`] messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Quiet,
    Verbose,
}

/// Resource policy for one query.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// Upper bound on the bytes the BFS pivot table plus frontier may use.
    pub max_bytes: usize,
    /// States explored between `on_progress` callbacks. 0 = never.
    pub progress_every: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_bytes: usize::MAX,
            progress_every: 0,
        }
    }
}

/// Optional progress/log callbacks for one query. The core calls these; it
/// never writes to stdout/stderr directly.
#[derive(Default)]
pub struct Observer<'a> {
    on_progress: Option<Box<dyn FnMut(u64, u64) + 'a>>,
    on_log: Option<Box<dyn FnMut(LogLevel, &str) + 'a>>,
}

impl<'a> Observer<'a> {
    /// An observer with no callbacks wired up.
    pub fn silent() -> Self {
        Self {
            on_progress: None,
            on_log: None,
        }
    }

    pub fn with_progress(mut self, f: impl FnMut(u64, u64) + 'a) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    pub fn with_log(mut self, f: impl FnMut(LogLevel, &str) + 'a) -> Self {
        self.on_log = Some(Box::new(f));
        self
    }

    pub(crate) fn progress(&mut self, states_explored: u64, pivots: u64) {
        if let Some(f) = self.on_progress.as_mut() {
            f(states_explored, pivots);
        }
    }

    pub(crate) fn log(&mut self, level: LogLevel, message: &str) {
        if let Some(f) = self.on_log.as_mut() {
            f(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_is_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn observer_invokes_wired_callbacks() {
        let mut progress_calls = Vec::new();
        let mut log_calls = Vec::new();
        {
            let mut observer = Observer::silent()
                .with_progress(|explored, pivots| progress_calls.push((explored, pivots)))
                .with_log(|level, msg| log_calls.push((level, msg.to_string())));
            observer.progress(3, 1);
            observer.log(LogLevel::Verbose, "hello");
        }
        assert_eq!(progress_calls, vec![(3, 1)]);
        assert_eq!(log_calls, vec![(LogLevel::Verbose, "hello".to_string())]);
    }

    #[test]
    fn silent_observer_does_not_panic_without_callbacks() {
        let mut observer = Observer::silent();
        observer.progress(1, 1);
        observer.log(LogLevel::Quiet, "ignored");
    }
}
