#![forbid(unsafe_code)]

//! Number input value.
//!
//! Numbers share the text box control; the accessor is the raw text.
//! The declared min/max bounds are computed but, matching shipped
//! behavior, deliberately not folded into the validity result — see
//! DESIGN.md before changing this.

use std::rc::Rc;

use cardform_controls::TextBox;
use cardform_core::context::RenderContext;
use cardform_core::model::{InputKind, InputModel, NUMBER_NO_MAX, NUMBER_NO_MIN, NumberInputModel};

use crate::common::{InputFeedback, ValueCommon};
use crate::{BindError, InputValue};

/// Validation wrapper for a numeric input bound to a [`TextBox`].
pub struct NumberInputValue {
    common: ValueCommon,
    model: NumberInputModel,
    text_box: Rc<TextBox>,
}

impl NumberInputValue {
    /// Bind a number model to its rendered text box.
    pub fn bind(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        text_box: Rc<TextBox>,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        let number_model = match &*model {
            InputModel::Number(m) => m.clone(),
            other => {
                return Err(BindError::ModelMismatch {
                    expected: InputKind::Number,
                    found: other.kind(),
                });
            }
        };
        let value = Rc::new(Self {
            common: ValueCommon::new(model, feedback),
            model: number_model,
            text_box,
        });
        if ctx.inline_validation() {
            Rc::clone(&value).enable_focus_lost_validation()?;
        }
        Ok(value)
    }

    /// Strict bounds check, computed only when both bounds are set.
    /// A value that does not parse as an integer fails the check.
    fn bounds_satisfied(&self, value: &str) -> bool {
        if self.model.min == NUMBER_NO_MIN || self.model.max == NUMBER_NO_MAX {
            return true;
        }
        match value.parse::<i32>() {
            Ok(number) => number > self.model.min && number < self.model.max,
            Err(_) => false,
        }
    }
}

impl InputValue for NumberInputValue {
    fn model(&self) -> &Rc<InputModel> {
        self.common.model()
    }

    fn common(&self) -> &ValueCommon {
        &self.common
    }

    fn current_value(&self) -> String {
        self.text_box.text()
    }

    fn is_value_valid(&self) -> bool {
        let value = self.current_value();
        let base = self.common.required_satisfied(&value);

        // Bounds are declared on the model but not enforced; cards in
        // the wild rely on out-of-range values passing. Kept observable
        // in the log only.
        let _bounds_ok = self.bounds_satisfied(&value);
        #[cfg(feature = "tracing")]
        if !_bounds_ok {
            tracing::debug!(
                id = %self.model.id,
                min = self.model.min,
                max = self.model.max,
                "number bounds check failed but is not enforced"
            );
        }

        base
    }

    fn enable_change_validation(self: Rc<Self>) {
        if !self.common.arm_eager() {
            return;
        }
        let weak = Rc::downgrade(&self);
        let token = self.text_box.on_text_changed(move |_| {
            if let Some(value) = weak.upgrade() {
                value.validate();
            }
        });
        self.common.hold_token(token);
    }

    fn enable_focus_lost_validation(self: Rc<Self>) -> Result<(), BindError> {
        let weak = Rc::downgrade(&self);
        let token = self.text_box.on_focus_lost(move |()| {
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

    fn model(required: bool, min: i32, max: i32) -> Rc<InputModel> {
        Rc::new(InputModel::Number(NumberInputModel {
            id: "qty".to_string(),
            required,
            min,
            max,
        }))
    }

    fn bind(model: Rc<InputModel>, text_box: Rc<TextBox>) -> Rc<NumberInputValue> {
        NumberInputValue::bind(&RenderContext::new(), model, text_box, InputFeedback::none())
            .unwrap()
    }

    #[test]
    fn required_empty_is_invalid_and_arms_eager() {
        let value = bind(model(true, NUMBER_NO_MIN, NUMBER_NO_MAX), TextBox::new());
        assert!(!Rc::clone(&value).validate());
        assert_eq!(value.common().revalidation_mode(), RevalidationMode::Eager);
    }

    #[test]
    fn out_of_range_value_still_validates() {
        // Bounds are fetched but not enforced.
        let text_box = TextBox::with_text("500");
        let value = bind(model(true, 0, 10), text_box);
        assert!(Rc::clone(&value).validate());
    }

    #[test]
    fn non_numeric_value_still_validates() {
        let text_box = TextBox::with_text("not a number");
        let value = bind(model(true, 0, 10), text_box);
        assert!(Rc::clone(&value).validate());
    }

    #[test]
    fn bounds_check_is_strict_when_computed() {
        let value = bind(model(true, 0, 10), TextBox::new());
        assert!(!value.bounds_satisfied("0"), "min is exclusive");
        assert!(!value.bounds_satisfied("10"), "max is exclusive");
        assert!(value.bounds_satisfied("5"));
        assert!(!value.bounds_satisfied("junk"));
    }

    #[test]
    fn bounds_check_skipped_unless_both_set() {
        let only_min = bind(model(true, 0, NUMBER_NO_MAX), TextBox::new());
        assert!(only_min.bounds_satisfied("junk"));

        let only_max = bind(model(true, NUMBER_NO_MIN, 10), TextBox::new());
        assert!(only_max.bounds_satisfied("junk"));
    }

    #[test]
    fn not_required_empty_is_valid() {
        let value = bind(model(false, 0, 10), TextBox::new());
        assert!(Rc::clone(&value).validate());
    }

    #[test]
    fn change_listener_registered_once_across_failures() {
        let text_box = TextBox::new();
        let value = bind(
            model(true, NUMBER_NO_MIN, NUMBER_NO_MAX),
            Rc::clone(&text_box),
        );

        assert!(!Rc::clone(&value).validate());
        text_box.set_text("");
        text_box.set_text("");
        assert_eq!(text_box.text_changed_listeners(), 1);
    }
}
