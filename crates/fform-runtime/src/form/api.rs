#![forbid(unsafe_code)]

//! The form store: owns [`FormState`] and is the only writer of it.
//!
//! # Invariants
//!
//! 1. Field values change only through [`FormApi::set_field_value`] (and
//!    therefore [`FieldHandle::handle_change`]) or [`FormApi::reset`].
//! 2. A field is dirty exactly when its value differs from the default.
//! 3. Validation output is copied into field meta unchanged; the store never
//!    adds, drops or rewrites messages.
//! 4. Reset produces a single notification. Submit batches its touch and
//!    validation writes into one, however many fields they touch.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Invalid submit | Validator reported errors | `Err(SubmitError::Invalid)`, errors shown on every field |
//! | Re-entrant submit | `handle_submit` from inside a submit callback | `Err(SubmitError::AlreadySubmitting)` |
//! | Subscriber panic | Caller-supplied selector or callback | Propagates to the mutating call |

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::form::field::FieldHandle;
use crate::form::lens::FieldLens;
use crate::form::state::{FormState, ValidationError};
use crate::form::validate::{FieldErrors, ValidationTrigger, ValidationTriggers, Validator};
use crate::logging::Logger;
use crate::reactive::{BatchScope, Observable, Selection, Subscription};

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The validator reported errors.
    Invalid(FieldErrors),
    /// A submission is already in progress.
    AlreadySubmitting,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "form is invalid: {errors}"),
            Self::AlreadySubmitting => f.write_str("form is already submitting"),
        }
    }
}

impl std::error::Error for SubmitError {}

type SubmitCallback<V> = Box<dyn Fn(&V)>;
type InvalidCallback = Box<dyn Fn(&FieldErrors)>;

/// Construction options for a [`FormApi`].
pub struct FormOptions<V> {
    validator: Option<Box<dyn Validator<V>>>,
    triggers: ValidationTriggers,
    on_submit: Option<SubmitCallback<V>>,
    on_submit_invalid: Option<InvalidCallback>,
    logger: Option<Logger>,
}

impl<V> Default for FormOptions<V> {
    fn default() -> Self {
        Self {
            validator: None,
            triggers: ValidationTriggers::SUBMIT,
            on_submit: None,
            on_submit_invalid: None,
            logger: None,
        }
    }
}

impl<V> FormOptions<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn validator(mut self, validator: impl Validator<V> + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Validate on these triggers. Submit is always added.
    #[must_use]
    pub fn validate_on(mut self, triggers: ValidationTriggers) -> Self {
        self.triggers = triggers | ValidationTriggers::SUBMIT;
        self
    }

    /// Called with the values of a valid submission.
    #[must_use]
    pub fn on_submit(mut self, f: impl Fn(&V) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    /// Called with the errors of an invalid submission.
    #[must_use]
    pub fn on_submit_invalid(mut self, f: impl Fn(&FieldErrors) + 'static) -> Self {
        self.on_submit_invalid = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }
}

impl<V> fmt::Debug for FormOptions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormOptions")
            .field("has_validator", &self.validator.is_some())
            .field("triggers", &self.triggers)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

struct Shared<V> {
    defaults: V,
    options: FormOptions<V>,
    registered: RefCell<BTreeSet<&'static str>>,
}

/// Handle to a form store. Clones refer to the same form.
pub struct FormApi<V> {
    state: Observable<FormState<V>>,
    shared: Rc<Shared<V>>,
}

impl<V> Clone for FormApi<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<V: fmt::Debug + Clone + PartialEq + 'static> fmt::Debug for FormApi<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormApi")
            .field("state", &self.state)
            .field("registered", &self.shared.registered.borrow())
            .finish()
    }
}

impl<V: Clone + PartialEq + 'static> FormApi<V> {
    /// A form starting at `defaults`.
    pub fn new(defaults: V, options: FormOptions<V>) -> Self {
        Self {
            state: Observable::new(FormState::new(defaults.clone())),
            shared: Rc::new(Shared {
                defaults,
                options,
                registered: RefCell::new(BTreeSet::new()),
            }),
        }
    }

    /// Snapshot of the whole form state.
    #[must_use]
    pub fn state(&self) -> FormState<V> {
        self.state.get()
    }

    /// Read the state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&FormState<V>) -> R) -> R {
        self.state.with(f)
    }

    #[must_use]
    pub fn values(&self) -> V {
        self.state.with(|s| s.values.clone())
    }

    #[must_use]
    pub fn defaults(&self) -> &V {
        &self.shared.defaults
    }

    /// Notified after every state change.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&FormState<V>) + 'static) -> Subscription {
        self.state.subscribe(callback)
    }

    /// Track a derived slice of the state; `on_change` runs only when the
    /// slice changes.
    pub fn select<U: Clone + PartialEq + 'static>(
        &self,
        selector: impl Fn(&FormState<V>) -> U + 'static,
        on_change: impl Fn(&U) + 'static,
    ) -> Selection<U> {
        self.state.select_with(selector, on_change)
    }

    /// Number of state changes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.state.version()
    }

    /// Bind a renderer to the field described by `lens`.
    pub fn field<T: Clone + PartialEq + 'static>(&self, lens: FieldLens<V, T>) -> FieldHandle<V, T> {
        self.shared.registered.borrow_mut().insert(lens.name());
        FieldHandle::new(self.clone(), lens)
    }

    /// Names of all fields bound so far.
    #[must_use]
    pub fn registered_fields(&self) -> Vec<&'static str> {
        self.shared.registered.borrow().iter().copied().collect()
    }

    /// Write a field value and update its dirty flag.
    pub fn set_field_value<T: PartialEq>(&self, lens: FieldLens<V, T>, value: T) {
        let is_dirty = value != *lens.get(&self.shared.defaults);
        let _batch = BatchScope::new();
        self.state.update(|s| {
            lens.set(&mut s.values, value);
            s.meta_mut(lens.name()).is_dirty = is_dirty;
        });
        if self.validates_on(ValidationTriggers::CHANGE) {
            self.validate(ValidationTrigger::Change);
        }
    }

    /// Mark a field touched after it loses focus.
    pub fn blur_field(&self, name: &str) {
        let _batch = BatchScope::new();
        self.state.update(|s| {
            let meta = s.meta_mut(name);
            meta.is_touched = true;
            meta.is_blurred = true;
        });
        if self.validates_on(ValidationTriggers::BLUR) {
            self.validate(ValidationTrigger::Blur);
        }
    }

    /// Configured triggers, plus every change and blur once a submission
    /// has been attempted so that submit errors clear as they are fixed.
    fn validates_on(&self, trigger: ValidationTriggers) -> bool {
        self.shared.options.triggers.contains(trigger)
            || self.state.with(|s| s.submission_attempts > 0)
    }

    /// Run the validator and store its output in field meta.
    ///
    /// Fields the validator did not mention have their errors cleared.
    /// Returns the validator output; empty if the form has no validator.
    pub fn validate(&self, trigger: ValidationTrigger) -> FieldErrors {
        let Some(validator) = self.shared.options.validator.as_deref() else {
            return FieldErrors::new();
        };
        let _span = tracing::debug_span!("form_validate", trigger = trigger.as_str()).entered();
        let errors = self.state.with(|s| validator.validate(&s.values, trigger));
        tracing::debug!(fields_with_errors = errors.field_count(), "validation finished");
        self.apply_errors(&errors);
        errors
    }

    fn apply_errors(&self, errors: &FieldErrors) {
        let registered = self.shared.registered.borrow().clone();
        self.state.update(|s| {
            for meta in s.fields.values_mut() {
                meta.errors.clear();
            }
            for name in registered {
                s.meta_mut(name);
            }
            for (name, messages) in errors.iter() {
                s.meta_mut(name).errors = messages.iter().map(ValidationError::new).collect();
            }
        });
    }

    /// Mark a field as having a validation pass in flight.
    ///
    /// Existing errors stay in place until [`finish_validation`] replaces
    /// them.
    ///
    /// [`finish_validation`]: Self::finish_validation
    pub fn begin_validation(&self, name: &str) {
        self.state.update(|s| s.meta_mut(name).is_validating = true);
    }

    /// Complete a validation pass for one field with its new messages.
    pub fn finish_validation<M: Into<String>>(
        &self,
        name: &str,
        messages: impl IntoIterator<Item = M>,
    ) {
        let errors: Vec<ValidationError> = messages
            .into_iter()
            .map(ValidationError::new)
            .collect();
        self.state.update(|s| {
            let meta = s.meta_mut(name);
            meta.is_validating = false;
            meta.errors = errors;
        });
    }

    /// Validate and submit.
    ///
    /// Every bound field is marked touched so its errors become visible.
    /// On success the values are returned and `on_submit` runs; on failure
    /// `on_submit_invalid` runs.
    pub fn handle_submit(&self) -> Result<V, SubmitError> {
        if self.state.with(|s| s.is_submitting) {
            return Err(SubmitError::AlreadySubmitting);
        }
        let _span = tracing::debug_span!("form_submit").entered();
        let _submitting = SubmittingGuard { state: &self.state };
        let registered = self.shared.registered.borrow().clone();
        let errors = {
            let _batch = BatchScope::new();
            self.state.update(|s| {
                s.is_submitting = true;
                s.is_submitted = false;
                s.submission_attempts += 1;
                for name in &registered {
                    s.meta_mut(name).is_touched = true;
                }
            });
            self.validate(ValidationTrigger::Submit)
        };

        let options = &self.shared.options;
        if !errors.is_empty() {
            self.state.update(|s| s.is_submitting = false);
            if let Some(logger) = &options.logger {
                logger.warn(format_args!(
                    "submission rejected: {} field(s) invalid",
                    errors.field_count()
                ));
            }
            if let Some(cb) = &options.on_submit_invalid {
                cb(&errors);
            }
            return Err(SubmitError::Invalid(errors));
        }

        let values = self.values();
        if let Some(cb) = &options.on_submit {
            cb(&values);
        }
        self.state.update(|s| {
            s.is_submitting = false;
            s.is_submitted = true;
        });
        if let Some(logger) = &options.logger {
            logger.info("submission accepted");
        }
        Ok(values)
    }

    /// Restore default values and clear all meta.
    pub fn reset(&self) {
        if let Some(logger) = &self.shared.options.logger {
            logger.debug("form reset");
        }
        self.state.set(FormState::new(self.shared.defaults.clone()));
    }
}

/// Clears `is_submitting` when a submission ends, including by unwinding
/// out of a validator or callback.
struct SubmittingGuard<'a, V: Clone + PartialEq + 'static> {
    state: &'a Observable<FormState<V>>,
}

impl<V: Clone + PartialEq + 'static> Drop for SubmittingGuard<'_, V> {
    fn drop(&mut self) {
        self.state.update(|s| s.is_submitting = false);
    }
}
