//! Readiness gating for the underlying vision runtime.
//!
//! Some deployments back the pipeline with a natively-initialized vision
//! runtime that becomes usable only after a one-time asynchronous setup. The
//! pipeline does not own that initialization; it receives a [`Readiness`]
//! handle and performs a bounded wait at the start of every invocation. The
//! initializing side holds the matching [`ReadinessSignal`] and fires it
//! exactly once when the runtime is usable.
//!
//! A pipeline constructed without an explicit gate uses [`Readiness::ready`],
//! which never blocks.

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

#[derive(Debug)]
struct Gate {
    ready: Mutex<bool>,
    cvar: Condvar,
}

/// Waitable view of the runtime readiness state.
#[derive(Clone, Debug)]
pub struct Readiness {
    inner: Arc<Gate>,
}

/// Signalling side of a [`Readiness`] gate.
#[derive(Clone, Debug)]
pub struct ReadinessSignal {
    inner: Arc<Gate>,
}

impl Readiness {
    /// Creates a gate that is already open.
    pub fn ready() -> Self {
        Self {
            inner: Arc::new(Gate {
                ready: Mutex::new(true),
                cvar: Condvar::new(),
            }),
        }
    }

    /// Creates a closed gate together with the signal that opens it.
    pub fn pending() -> (Self, ReadinessSignal) {
        let inner = Arc::new(Gate {
            ready: Mutex::new(false),
            cvar: Condvar::new(),
        });
        (
            Self {
                inner: Arc::clone(&inner),
            },
            ReadinessSignal { inner },
        )
    }

    /// Returns whether the gate is currently open, without blocking.
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.lock().expect("readiness lock poisoned")
    }

    /// Blocks until the gate opens or `timeout` elapses.
    ///
    /// Returns `true` if the runtime became ready within the bound.
    pub fn wait_ready(&self, timeout: Duration) -> bool {
        let guard = self.inner.ready.lock().expect("readiness lock poisoned");
        let (guard, result) = self
            .inner
            .cvar
            .wait_timeout_while(guard, timeout, |ready| !*ready)
            .expect("readiness lock poisoned");
        *guard || !result.timed_out()
    }
}

impl ReadinessSignal {
    /// Opens the gate, waking every waiter. Idempotent.
    pub fn signal(&self) {
        let mut ready = self.inner.ready.lock().expect("readiness lock poisoned");
        *ready = true;
        self.inner.cvar.notify_all();
    }
}
