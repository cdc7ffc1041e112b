#![forbid(unsafe_code)]

//! Edge-triggered visibility for conditional form sections.
//!
//! A [`VisibilityObserver`] derives a boolean from form state and reports
//! transitions of that boolean. A section wrapped in an observer re-renders
//! only when it appears or disappears, not on every keystroke elsewhere in
//! the form.
//!
//! ```text
//!               notify(false)            notify(true)
//!  Unobserved ─────────────────▶ Hidden ◀────────────▶ Shown
//!       │                          on_show / on_hide     ▲
//!       └───────────── notify(true) ─────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. The first notification enters `Hidden` or `Shown` without callbacks.
//! 2. `on_show` fires only on `Hidden -> Shown`, `on_hide` only on
//!    `Shown -> Hidden`. Self transitions are silent.
//! 3. After [`VisibilityObserver::unmount`] or drop, no callback fires.
//!
//! # Failure Modes
//!
//! - Selector or predicate panic: propagates to [`VisibilityObserver::observe`]
//!   for the initial evaluation, or to the form write that triggered it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::form::{FormApi, FormState};
use crate::reactive::Selection;

/// Where an observer is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisibilityState {
    #[default]
    Unobserved,
    Hidden,
    Shown,
}

impl VisibilityState {
    /// `None` before the first notification.
    #[must_use]
    pub const fn shown(self) -> Option<bool> {
        match self {
            Self::Unobserved => None,
            Self::Hidden => Some(false),
            Self::Shown => Some(true),
        }
    }

    const fn from_shown(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }
}

/// The result of feeding one boolean to an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityTransition {
    pub previous_shown: Option<bool>,
    pub current_shown: bool,
}

impl VisibilityTransition {
    /// `Hidden -> Shown`.
    #[must_use]
    pub fn is_show(&self) -> bool {
        self.previous_shown == Some(false) && self.current_shown
    }

    /// `Shown -> Hidden`.
    #[must_use]
    pub fn is_hide(&self) -> bool {
        self.previous_shown == Some(true) && !self.current_shown
    }

    #[must_use]
    pub fn is_change(&self) -> bool {
        self.is_show() || self.is_hide()
    }
}

type Hook = Rc<dyn Fn()>;
type RenderHook = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct Core {
    state: Cell<VisibilityState>,
    on_show: RefCell<Option<Hook>>,
    on_hide: RefCell<Option<Hook>>,
    on_render: RefCell<Option<RenderHook>>,
}

impl Core {
    fn notify(&self, shown: bool) -> VisibilityTransition {
        let previous = self.state.replace(VisibilityState::from_shown(shown));
        let transition = VisibilityTransition {
            previous_shown: previous.shown(),
            current_shown: shown,
        };
        if !transition.is_change() {
            return transition;
        }
        tracing::debug!(target: "fform::visibility", shown, "visibility changed");

        let edge = if shown {
            self.on_show.borrow().clone()
        } else {
            self.on_hide.borrow().clone()
        };
        if let Some(edge) = edge {
            edge();
        }
        let render = self.on_render.borrow().clone();
        if let Some(render) = render {
            render(shown);
        }
        transition
    }

    fn clear_hooks(&self) {
        self.on_show.borrow_mut().take();
        self.on_hide.borrow_mut().take();
        self.on_render.borrow_mut().take();
    }
}

/// Watches a derived boolean and reports its edges.
#[derive(Default)]
pub struct VisibilityObserver {
    core: Rc<Core>,
    subscription: Option<Selection<bool>>,
}

impl fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("state", &self.core.state.get())
            .field("observing", &self.subscription.is_some())
            .finish()
    }
}

impl VisibilityObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on `Hidden -> Shown`.
    #[must_use]
    pub fn on_show(self, f: impl Fn() + 'static) -> Self {
        *self.core.on_show.borrow_mut() = Some(Rc::new(f));
        self
    }

    /// Called on `Shown -> Hidden`.
    #[must_use]
    pub fn on_hide(self, f: impl Fn() + 'static) -> Self {
        *self.core.on_hide.borrow_mut() = Some(Rc::new(f));
        self
    }

    /// Called with the new visibility whenever it changes.
    #[must_use]
    pub fn on_render(self, f: impl Fn(bool) + 'static) -> Self {
        *self.core.on_render.borrow_mut() = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.core.state.get()
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.core.state.get() == VisibilityState::Shown
    }

    /// Feed one boolean through the state machine.
    pub fn notify(&self, shown: bool) -> VisibilityTransition {
        self.core.notify(shown)
    }

    /// Track `predicate(selector(state))` on `form`.
    ///
    /// The current value is evaluated immediately and counts as the first
    /// notification. Replaces any previous observation.
    pub fn observe<V, U>(
        &mut self,
        form: &FormApi<V>,
        selector: impl Fn(&FormState<V>) -> U + 'static,
        predicate: impl Fn(&U) -> bool + 'static,
    ) where
        V: Clone + PartialEq + 'static,
    {
        self.subscription = None;
        self.core.state.set(VisibilityState::Unobserved);
        let core = Rc::clone(&self.core);
        let selection = form.select(
            move |state| predicate(&selector(state)),
            move |shown| {
                core.notify(*shown);
            },
        );
        self.core.notify(selection.get());
        self.subscription = Some(selection);
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop observing. No callback fires afterwards.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.core.clear_hooks();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.unmount();
    }
}
