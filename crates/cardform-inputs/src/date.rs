#![forbid(unsafe_code)]

//! Date input value: `YYYY-MM-DD` accessor, required check only.

use std::rc::Rc;

use cardform_controls::DatePicker;
use cardform_core::context::RenderContext;
use cardform_core::model::{InputKind, InputModel};

use crate::common::{InputFeedback, ValueCommon};
use crate::{BindError, InputValue};

/// Validation wrapper for a date input bound to a [`DatePicker`].
pub struct DateInputValue {
    common: ValueCommon,
    picker: Rc<DatePicker>,
}

impl DateInputValue {
    /// Bind a date model to its rendered picker.
    pub fn bind(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        picker: Rc<DatePicker>,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        if !matches!(&*model, InputModel::Date(_)) {
            return Err(BindError::ModelMismatch {
                expected: InputKind::Date,
                found: model.kind(),
            });
        }
        let value = Rc::new(Self {
            common: ValueCommon::new(model, feedback),
            picker,
        });
        if ctx.inline_validation() {
            Rc::clone(&value).enable_focus_lost_validation()?;
        }
        Ok(value)
    }
}

impl InputValue for DateInputValue {
    fn model(&self) -> &Rc<InputModel> {
        self.common.model()
    }

    fn common(&self) -> &ValueCommon {
        &self.common
    }

    /// Empty string until a date is selected.
    fn current_value(&self) -> String {
        match self.picker.date() {
            Some(date) => date.to_string(),
            None => String::new(),
        }
    }

    fn is_value_valid(&self) -> bool {
        self.common.required_satisfied(&self.current_value())
    }

    fn enable_change_validation(self: Rc<Self>) {
        if !self.common.arm_eager() {
            return;
        }
        let weak = Rc::downgrade(&self);
        let token = self.picker.on_date_changed(move |_| {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RevalidationMode;
    use cardform_core::datetime::CivilDate;
    use cardform_core::model::DateInputModel;

    fn model(required: bool) -> Rc<InputModel> {
        Rc::new(InputModel::Date(DateInputModel {
            id: "due".to_string(),
            required,
        }))
    }

    fn bind(model: Rc<InputModel>, picker: Rc<DatePicker>) -> Rc<DateInputValue> {
        DateInputValue::bind(&RenderContext::new(), model, picker, InputFeedback::none()).unwrap()
    }

    #[test]
    fn no_selection_serializes_to_empty() {
        let value = bind(model(true), DatePicker::new());
        assert_eq!(value.current_value(), "");
    }

    #[test]
    fn selection_serializes_iso_style() {
        let picker = DatePicker::new();
        picker.set_date(Some(CivilDate::new(2024, 1, 5)));
        let value = bind(model(true), picker);
        assert_eq!(value.current_value(), "2024-01-05");
    }

    #[test]
    fn required_without_selection_is_invalid_and_arms_eager() {
        let value = bind(model(true), DatePicker::new());
        assert!(!Rc::clone(&value).validate());
        assert_eq!(value.common().revalidation_mode(), RevalidationMode::Eager);
    }

    #[test]
    fn not_required_without_selection_is_valid() {
        let value = bind(model(false), DatePicker::new());
        assert!(Rc::clone(&value).validate());
    }

    #[test]
    fn eager_mode_revalidates_on_date_change() {
        let picker = DatePicker::new();
        let value = bind(model(true), Rc::clone(&picker));

        assert!(!Rc::clone(&value).validate());
        assert_eq!(picker.date_changed_listeners(), 1);

        // Selecting a date re-runs validation through the listener.
        picker.set_date(Some(CivilDate::new(2024, 6, 30)));
        assert!(value.is_value_valid());
    }

    #[test]
    fn repeated_failures_do_not_duplicate_listeners() {
        let picker = DatePicker::new();
        let value = bind(model(true), Rc::clone(&picker));

        assert!(!Rc::clone(&value).validate());
        picker.set_date(None);
        picker.set_date(None);
        assert_eq!(picker.date_changed_listeners(), 1);
    }
}
