#![forbid(unsafe_code)]

//! Toggle input value.
//!
//! The serialized value is always one of the model's declared on/off
//! strings, so the base required check can never fail here. Required
//! instead means the box must actually be checked.

use std::rc::Rc;

use cardform_controls::ToggleBox;
use cardform_core::context::RenderContext;
use cardform_core::model::{InputKind, InputModel, ToggleInputModel};

use crate::common::{InputFeedback, ValueCommon};
use crate::{BindError, InputValue};

/// Validation wrapper for a toggle input bound to a [`ToggleBox`].
pub struct ToggleInputValue {
    common: ValueCommon,
    model: ToggleInputModel,
    toggle: Rc<ToggleBox>,
}

impl ToggleInputValue {
    /// Bind a toggle model to its rendered check box.
    pub fn bind(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        toggle: Rc<ToggleBox>,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        let toggle_model = match &*model {
            InputModel::Toggle(m) => m.clone(),
            other => {
                return Err(BindError::ModelMismatch {
                    expected: InputKind::Toggle,
                    found: other.kind(),
                });
            }
        };
        let value = Rc::new(Self {
            common: ValueCommon::new(model, feedback),
            model: toggle_model,
            toggle,
        });
        if ctx.inline_validation() {
            Rc::clone(&value).enable_focus_lost_validation()?;
        }
        Ok(value)
    }
}

impl InputValue for ToggleInputValue {
    fn model(&self) -> &Rc<InputModel> {
        self.common.model()
    }

    fn common(&self) -> &ValueCommon {
        &self.common
    }

    fn current_value(&self) -> String {
        if self.toggle.is_checked() {
            self.model.value_on.clone()
        } else {
            self.model.value_off.clone()
        }
    }

    fn is_value_valid(&self) -> bool {
        // Not the base required check: an unchecked box still serializes
        // to value_off, so required here means checked.
        if self.model.required {
            self.toggle.is_checked()
        } else {
            true
        }
    }

    fn enable_change_validation(self: Rc<Self>) {
        if !self.common.arm_eager() {
            return;
        }
        let weak = Rc::downgrade(&self);
        let token = self.toggle.on_click(move |()| {
            if let Some(value) = weak.upgrade() {
                value.validate();
            }
        });
        self.common.hold_token(token);
    }

    fn enable_focus_lost_validation(self: Rc<Self>) -> Result<(), BindError> {
        let weak = Rc::downgrade(&self);
        let token = self.toggle.on_focus_lost(move |()| {
            if let Some(value) = weak.upgrade() {
                value.validate();
            }
        });
        self.common.hold_token(token);
        Ok(())
    }
}
