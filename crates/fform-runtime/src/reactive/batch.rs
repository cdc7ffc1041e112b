#![forbid(unsafe_code)]

//! Deferred notification scopes.
//!
//! Inside a [`BatchScope`], observable writes apply immediately but their
//! notifications wait until the outermost scope exits. Each observable then
//! notifies once, with its final value. Form reset and submit use this so a
//! multi-field update produces a single render.
//!
//! # Invariants
//!
//! 1. Nested scopes are allowed; only the outermost drop flushes.
//! 2. An observable written N times inside a scope notifies at most once.
//! 3. Pending notifications flush in first-write order.
//! 4. Writes made by subscribers during the flush are delivered immediately.
//! 5. A panicking subscriber does not cancel the remaining notifications;
//!    the first panic is re-raised once the flush completes.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

type Deferred = Box<dyn FnOnce()>;

#[derive(Default)]
struct BatchState {
    depth: usize,
    pending: Vec<(usize, Deferred)>,
}

thread_local! {
    static BATCH: RefCell<BatchState> = RefCell::new(BatchState::default());
}

pub(crate) fn is_batching() -> bool {
    BATCH.with(|b| b.borrow().depth > 0)
}

/// Queue `notify` under `key` unless that key is already pending.
pub(crate) fn defer(key: usize, notify: Deferred) {
    BATCH.with(|b| {
        let mut state = b.borrow_mut();
        if !state.pending.iter().any(|(k, _)| *k == key) {
            state.pending.push((key, notify));
        }
    });
}

/// RAII guard that defers observable notifications until it drops.
#[must_use = "the batch ends as soon as the scope is dropped"]
pub struct BatchScope {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl BatchScope {
    /// Open a batch. Scopes nest.
    pub fn new() -> Self {
        BATCH.with(|b| b.borrow_mut().depth += 1);
        Self {
            _not_send: std::marker::PhantomData,
        }
    }

    /// Whether a batch is currently open on this thread.
    #[must_use]
    pub fn is_active() -> bool {
        is_batching()
    }
}

impl Default for BatchScope {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BatchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchScope").finish()
    }
}

impl Drop for BatchScope {
    fn drop(&mut self) {
        let pending = BATCH.with(|b| {
            let mut state = b.borrow_mut();
            state.depth -= 1;
            if state.depth == 0 {
                std::mem::take(&mut state.pending)
            } else {
                Vec::new()
            }
        });
        // A panicking subscriber must not swallow the rest of the flush.
        let mut first_panic = None;
        for (_, notify) in pending {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(notify)) {
                first_panic.get_or_insert(payload);
            }
        }
        if let Some(payload) = first_panic
            && !std::thread::panicking()
        {
            panic::resume_unwind(payload);
        }
    }
}
