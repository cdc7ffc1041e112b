#![forbid(unsafe_code)]

//! Read bindings and subscription scopes for views.
//!
//! A [`Binding<T>`] is a read-only view of reactive state with an optional
//! transform, evaluated on every `get()`. Field renderers use bindings to
//! read the current value of their slot without caching it across renders.
//!
//! A [`BindingScope`] owns the subscriptions of one mounted view. Dropping
//! the scope (unmounting the view) releases all of them at once.
//!
//! # Invariants
//!
//! 1. `Binding::get()` always reflects the current source value.
//! 2. Transforms are not memoized; use [`Observable::select`] for that.
//! 3. After a `BindingScope` is dropped or cleared, none of its callbacks run.
//!
//! # Failure Modes
//!
//! - Transform panic: propagates to the caller of `get()`.

use std::fmt;
use std::rc::Rc;

use super::observable::{Observable, Subscription};
use super::selection::Selection;

/// A lazily evaluated read of reactive state.
pub struct Binding<T> {
    eval: Rc<dyn Fn() -> T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Rc::clone(&self.eval),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").field("value", &self.get()).finish()
    }
}

impl<T: 'static> Binding<T> {
    /// A binding that evaluates `f` on each `get()`.
    pub fn new(f: impl Fn() -> T + 'static) -> Self {
        Self { eval: Rc::new(f) }
    }

    /// A binding that always yields `value`.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone())
    }

    #[must_use]
    pub fn get(&self) -> T {
        (self.eval)()
    }

    /// Chain a further transform.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Binding<U> {
        Binding {
            eval: Rc::new(move || f((self.eval)())),
        }
    }
}

/// Bind directly to an observable's value.
pub fn bind_observable<T: Clone + PartialEq + 'static>(source: &Observable<T>) -> Binding<T> {
    let src = source.clone();
    Binding::new(move || src.get())
}

/// Bind to `map(value)` of an observable, borrowing the value.
pub fn bind_mapped<S: Clone + PartialEq + 'static, T: 'static>(
    source: &Observable<S>,
    map: impl Fn(&S) -> T + 'static,
) -> Binding<T> {
    let src = source.clone();
    Binding::new(move || src.with(&map))
}

/// Collects the subscriptions and selections of one mounted view.
pub struct BindingScope {
    held: Vec<Box<dyn std::any::Any>>,
}

impl BindingScope {
    #[must_use]
    pub fn new() -> Self {
        Self { held: Vec::new() }
    }

    /// Keep `subscription` alive for the life of the scope.
    pub fn hold(&mut self, subscription: Subscription) -> &mut Self {
        self.held.push(Box::new(subscription));
        self
    }

    /// Keep `selection` alive for the life of the scope.
    pub fn hold_selection<U: 'static>(&mut self, selection: Selection<U>) -> &mut Self {
        self.held.push(Box::new(selection));
        self
    }

    /// Subscribe to `source` for the life of the scope.
    pub fn subscribe<T: Clone + PartialEq + 'static>(
        &mut self,
        source: &Observable<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        let sub = source.subscribe(callback);
        self.hold(sub)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Release everything now. The scope stays usable.
    pub fn clear(&mut self) {
        // Release in reverse registration order.
        while let Some(entry) = self.held.pop() {
            drop(entry);
        }
    }
}

impl Default for BindingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BindingScope {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingScope")
            .field("held", &self.held.len())
            .finish()
    }
}
