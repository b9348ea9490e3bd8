#![forbid(unsafe_code)]

//! Time input value: `HH:MM` accessor plus strict min/max time bounds.
//!
//! Bound strings that do not parse are skipped, not errors; declaring
//! only one bound enforces only that one. Both comparisons are strict,
//! so a value equal to a bound fails it.

use std::rc::Rc;
use std::time::Duration;

use cardform_controls::TimePicker;
use cardform_core::context::RenderContext;
use cardform_core::datetime::{format_time_of_day, parse_simple_time, time_of_day};
use cardform_core::model::{InputKind, InputModel, TimeInputModel};

use crate::common::{InputFeedback, ValueCommon};
use crate::{BindError, InputValue};

/// Validation wrapper for a time input bound to a [`TimePicker`].
pub struct TimeInputValue {
    common: ValueCommon,
    model: TimeInputModel,
    picker: Rc<TimePicker>,
}

impl TimeInputValue {
    /// Bind a time model to its rendered picker.
    pub fn bind(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        picker: Rc<TimePicker>,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        let time_model = match &*model {
            InputModel::Time(m) => m.clone(),
            other => {
                return Err(BindError::ModelMismatch {
                    expected: InputKind::Time,
                    found: other.kind(),
                });
            }
        };
        let value = Rc::new(Self {
            common: ValueCommon::new(model, feedback),
            model: time_model,
            picker,
        });
        if ctx.inline_validation() {
            Rc::clone(&value).enable_focus_lost_validation()?;
        }
        Ok(value)
    }

    /// A declared bound as a duration since midnight, or `None` when the
    /// bound is absent or does not parse (malformed constraint data is
    /// treated as absent).
    fn parsed_bound(&self, bound: Option<&str>) -> Option<Duration> {
        let raw = bound?;
        match parse_simple_time(raw) {
            Some((hours, minutes)) => Some(time_of_day(hours, minutes)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    id = %self.model.id,
                    bound = raw,
                    "ignoring time bound that does not parse"
                );
                None
            }
        }
    }
}

impl InputValue for TimeInputValue {
    fn model(&self) -> &Rc<InputModel> {
        self.common.model()
    }

    fn common(&self) -> &ValueCommon {
        &self.common
    }

    /// The picker always carries a time, so the value is never empty.
    fn current_value(&self) -> String {
        format_time_of_day(self.picker.time())
    }

    fn is_value_valid(&self) -> bool {
        let base = self.common.required_satisfied(&self.current_value());

        // Raw durations, not the minute-floored serialization.
        let current = self.picker.time();
        let mut bounds_ok = true;
        if let Some(min) = self.parsed_bound(self.model.min.as_deref()) {
            bounds_ok &= current > min;
        }
        if let Some(max) = self.parsed_bound(self.model.max.as_deref()) {
            bounds_ok &= current < max;
        }

        base && bounds_ok
    }

    fn enable_change_validation(self: Rc<Self>) {
        if !self.common.arm_eager() {
            return;
        }
        let weak = Rc::downgrade(&self);
        let token = self.picker.on_time_changed(move |_| {
            if let Some(value) = weak.upgrade() {
                value.validate();
            }
        });
        self.common.hold_token(token);
    }

    fn enable_focus_lost_validation(self: Rc<Self>) -> Result<(), BindError> {
        let weak = Rc::downgrade(&self);
        let token = self.picker.on_focus_lost(move |()| {
            if let Some(value) = weak.upgrade() {
                value.validate();
            }
        });
        self.common.hold_token(token);
        Ok(())
    }
}
