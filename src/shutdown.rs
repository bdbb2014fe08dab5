#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Default)]
struct Inner {
    triggered: Mutex<bool>,
    cond: Condvar,
}

/// Cancellation flag shared between the signal handler and the load loop.
#[derive(Clone, Default)]
pub struct Shutdown {
    inner: Arc<Inner>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        let mut triggered = self.inner.triggered.lock();
        *triggered = true;
        self.inner.cond.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        *self.inner.triggered.lock()
    }

    /// Blocks until triggered or `timeout` has fully elapsed.
    /// Returns `true` if shutdown fired.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.wait_forever();
        };
        let mut triggered = self.inner.triggered.lock();
        while !*triggered {
            if self.inner.cond.wait_until(&mut triggered, deadline).timed_out() {
                return *triggered;
            }
        }
        true
    }

    fn wait_forever(&self) -> bool {
        let mut triggered = self.inner.triggered.lock();
        while !*triggered {
            self.inner.cond.wait(&mut triggered);
        }
        true
    }
}
