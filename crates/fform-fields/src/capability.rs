#![forbid(unsafe_code)]

//! Control capabilities.
//!
//! Each trait describes what one kind of control can do with a field,
//! independent of the field's value type. A renderer implements exactly one
//! of them; the value type is handled by the adapter inside the renderer.

use std::fmt;

/// One option as a control sees it: a string key and a display label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChoiceItem {
    pub key: String,
    pub label: String,
}

/// Free-text entry.
pub trait TextCapable {
    fn text(&self) -> String;
    fn input(&self, text: &str);
    fn blur(&self);
}

/// Single choice out of a list (dropdown, radio buttons).
pub trait SelectCapable {
    fn options(&self) -> &[ChoiceItem];
    /// Key of the current value; `None` when the value is not one of the
    /// options.
    fn selected_key(&self) -> Option<String>;
    /// Choose the option with `key`. Unknown keys are ignored.
    fn select(&self, key: &str);
    fn blur(&self);
}

/// Any number of choices out of a list.
pub trait GroupCapable {
    fn options(&self) -> &[ChoiceItem];
    fn selected_keys(&self) -> Vec<String>;
    /// Turn the option with `key` on or off.
    fn toggle(&self, key: &str, on: bool);
    fn blur(&self);
}

/// On/off.
pub trait ToggleCapable {
    fn is_on(&self) -> bool;
    fn set_on(&self, on: bool);
    fn blur(&self);
}

/// Inclusive numeric range with a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Range {
    /// Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        if max < min {
            Self { min: max, max: min, step }
        } else {
            Self { min, max, step }
        }
    }

    /// Clamp `position` into the range and snap it to the nearest step
    /// counted from `min`.
    ///
    /// Never panics. A range built by hand with inverted bounds snaps
    /// everything to `min`.
    #[must_use]
    pub fn snap(&self, position: f64) -> f64 {
        if position.is_nan() {
            return self.min;
        }
        // `f64::clamp` panics on inverted bounds.
        let clamped = position.min(self.max).max(self.min);
        if self.step <= 0.0 || !self.step.is_finite() {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max).max(self.min)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={} step {}", self.min, self.max, self.step)
    }
}

/// A point on a numeric range.
pub trait RangeCapable {
    fn range(&self) -> Range;
    fn position(&self) -> f64;
    /// Move to `position`, clamped and snapped to the range.
    fn set_position(&self, position: f64);
    fn blur(&self);
}

/// Renders a control to a single line of text.
pub trait FieldView {
    fn render(&self) -> String;
}
