#![forbid(unsafe_code)]

//! Numeric slider.

use fform_runtime::FieldHandle;

use crate::capability::{FieldView, Range, RangeCapable};

/// A numeric field type a slider can drive.
pub trait RangeValue: Clone + PartialEq + 'static {
    fn to_f64(&self) -> f64;
    /// Convert a position already clamped and snapped to the slider range.
    fn from_f64(position: f64) -> Self;
}

impl RangeValue for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(position: f64) -> Self {
        position
    }
}

macro_rules! impl_range_value {
    ($($t:ty),*) => {
        $(
            impl RangeValue for $t {
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless
                )]
                fn from_f64(position: f64) -> Self {
                    position.round() as $t
                }
            }
        )*
    };
}

impl_range_value!(f32, i8, i16, i32, i64, u8, u16, u32, u64);

/// A slider over `[min, max]` moving in `step` increments.
#[derive(Clone, Debug)]
pub struct SliderField<V, T> {
    handle: FieldHandle<V, T>,
    label: String,
    range: Range,
}

impl<V: Clone + PartialEq + 'static, T: RangeValue> SliderField<V, T> {
    pub fn new(handle: FieldHandle<V, T>, label: impl Into<String>, range: Range) -> Self {
        Self {
            handle,
            label: label.into(),
            range,
        }
    }

    #[must_use]
    pub fn handle(&self) -> &FieldHandle<V, T> {
        &self.handle
    }

    /// Move one step up (`delta > 0`) or down.
    pub fn nudge(&self, delta: i32) {
        self.set_position(self.position() + f64::from(delta) * self.range.step);
    }
}

impl<V: Clone + PartialEq + 'static, T: RangeValue> RangeCapable for SliderField<V, T> {
    fn range(&self) -> Range {
        self.range
    }

    fn position(&self) -> f64 {
        self.handle.value().to_f64()
    }

    fn set_position(&self, position: f64) {
        let snapped = self.range.snap(position);
        self.handle.handle_change(T::from_f64(snapped));
    }

    fn blur(&self) {
        self.handle.handle_blur();
    }
}

impl<V: Clone + PartialEq + 'static, T: RangeValue> FieldView for SliderField<V, T> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&self) -> String {
        const WIDTH: usize = 10;
        let Range { min, max, .. } = self.range;
        let span = max - min;
        let ratio = if span > 0.0 {
            ((self.position() - min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (ratio * WIDTH as f64).round() as usize;
        format!(
            "{}: [{}{}] {}",
            self.label,
            "#".repeat(filled),
            "-".repeat(WIDTH - filled),
            self.position()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fform_runtime::{FieldLens, FormApi, FormOptions, field_lens};

    #[derive(Clone, Debug, PartialEq)]
    struct Digest {
        frequency: u8,
    }

    const FREQUENCY: FieldLens<Digest, u8> = field_lens!(Digest, frequency: u8);

    fn slider() -> (FormApi<Digest>, SliderField<Digest, u8>) {
        let form = FormApi::new(Digest { frequency: 1 }, FormOptions::new());
        let field = SliderField::new(form.field(FREQUENCY), "Frequency", Range::new(1.0, 10.0, 1.0));
        (form, field)
    }

    #[test]
    fn positions_are_clamped_and_snapped() {
        let (form, field) = slider();
        field.set_position(7.4);
        assert_eq!(form.values().frequency, 7);
        field.set_position(-3.0);
        assert_eq!(form.values().frequency, 1);
        field.set_position(99.0);
        assert_eq!(form.values().frequency, 10);
    }

    #[test]
    fn nudge_moves_one_step() {
        let (form, field) = slider();
        field.nudge(1);
        field.nudge(1);
        field.nudge(-1);
        assert_eq!(form.values().frequency, 2);
        assert_eq!(field.render(), "Frequency: [#---------] 2");
    }
}
