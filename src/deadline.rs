//! Cooperative time limit for a running fill.
//!
//! Algorithms poll [`Deadline::check`] between rows or span batches. A
//! deadline trips when its time budget is spent or when any clone of it has
//! been cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{FillError, Result};

#[derive(Debug, Clone)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
    cancelled: Arc<AtomicBool>,
}

impl Deadline {
    /// A deadline that only trips on explicit cancellation.
    pub fn unbounded() -> Self {
        Self {
            started: Instant::now(),
            limit: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A deadline that trips `limit` from now.
    pub fn within(limit: Duration) -> Self {
        Self {
            limit: Some(limit),
            ..Self::unbounded()
        }
    }

    pub fn from_timeout(limit: Option<Duration>) -> Self {
        match limit {
            Some(limit) => Self::within(limit),
            None => Self::unbounded(),
        }
    }

    /// Cancel this deadline and every clone of it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// `Err(TimedOut)` once cancelled or past the limit.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(FillError::TimedOut {
                elapsed: self.elapsed(),
            });
        }
        if let Some(limit) = self.limit {
            let elapsed = self.elapsed();
            if elapsed > limit {
                return Err(FillError::TimedOut { elapsed });
            }
        }
        Ok(())
    }
}
