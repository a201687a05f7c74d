use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Points a kernel row iterates between polls of its cancel token.
pub const CANCEL_CHECK_INTERVAL_POINTS: usize = 512;

/// Iteration stopped because its token signalled; no partial field is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("iteration cancelled before every row finished")
    }
}

impl Error for Cancelled {}

/// Polled by the iteration workers from several threads at once.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Token for callers that never stop a run early.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// One-way switch another thread flips to stop a running generation.
///
/// Share it by reference or through an `Arc`; once cancelled it stays
/// cancelled.
#[derive(Debug, Default)]
pub struct CancelFlag {
    cancelled: AtomicBool,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Any `Fn() -> bool` works as a token, e.g. a deadline check.
impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
