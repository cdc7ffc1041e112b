#![forbid(unsafe_code)]

//! Reactive state primitives for form views.
//!
//! - [`Observable`]: shared, version-tracked value with change callbacks.
//! - [`Subscription`]: RAII guard; dropping it unsubscribes.
//! - [`Selection`]: a derived slice that only reacts when the slice changes.
//! - [`BatchScope`]: defers notifications so a multi-field write renders once.
//! - [`Binding`] / [`BindingScope`]: read bindings and per-view lifetimes.
//!
//! # Architecture
//!
//! Everything is single-threaded: `Observable<T>` is an `Rc<RefCell<..>>`,
//! subscribers are held as `Weak` callbacks and pruned lazily, and the batch
//! context is thread-local.
//!
//! # Invariants
//!
//! 1. Notifications are delivered in mutation order, subscribers in
//!    registration order.
//! 2. Equal writes are no-ops.
//! 3. No callback runs after its subscription is dropped.
//! 4. Inside a batch, only the final value of each observable is delivered.

pub mod batch;
pub mod binding;
pub mod observable;
pub mod selection;

pub use batch::BatchScope;
pub use binding::{Binding, BindingScope, bind_mapped, bind_observable};
pub use observable::{Observable, Subscription};
pub use selection::Selection;
