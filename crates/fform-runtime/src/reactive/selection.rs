#![forbid(unsafe_code)]

//! Selector-scoped subscriptions.
//!
//! A [`Selection`] derives a value from an [`Observable`] and only reacts
//! when the derived value changes, so a view that depends on one slice of a
//! large state does not re-render on unrelated writes.
//!
//! # Invariants
//!
//! 1. The selector runs once at construction and once per source change.
//! 2. `on_change` runs only when the selected value differs from the last
//!    selected value. It never runs for the initial value.
//! 3. Dropping the `Selection` unsubscribes; `on_change` never runs after.
//!
//! # Failure Modes
//!
//! - Selector panic: propagates to the caller of [`Observable::select`] for
//!   the initial evaluation, or to the writer that triggered the change.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::observable::{Observable, Subscription};

/// A derived slice of an observable, kept current by a subscription.
pub struct Selection<U> {
    current: Rc<RefCell<U>>,
    _subscription: Subscription,
}

impl<U: Clone> Selection<U> {
    /// The most recently selected value.
    #[must_use]
    pub fn get(&self) -> U {
        self.current.borrow().clone()
    }
}

impl<U: fmt::Debug> fmt::Debug for Selection<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("current", &*self.current.borrow())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Track `selector(value)` without a change callback.
    pub fn select<U: Clone + PartialEq + 'static>(
        &self,
        selector: impl Fn(&T) -> U + 'static,
    ) -> Selection<U> {
        self.select_with(selector, |_| {})
    }

    /// Track `selector(value)` and call `on_change` whenever it changes.
    pub fn select_with<U: Clone + PartialEq + 'static>(
        &self,
        selector: impl Fn(&T) -> U + 'static,
        on_change: impl Fn(&U) + 'static,
    ) -> Selection<U> {
        let initial = self.with(&selector);
        let current = Rc::new(RefCell::new(initial));
        let slot = Rc::clone(&current);
        let subscription = self.subscribe(move |value| {
            let next = selector(value);
            if *slot.borrow() == next {
                return;
            }
            *slot.borrow_mut() = next.clone();
            on_change(&next);
        });
        Selection {
            current,
            _subscription: subscription,
        }
    }
}
