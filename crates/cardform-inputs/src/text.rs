#![forbid(unsafe_code)]

//! Text input value: raw text accessor plus the optional whole-string
//! regex constraint.

use std::cell::OnceCell;
use std::rc::Rc;

use regex::Regex;

use cardform_controls::TextBox;
use cardform_core::context::RenderContext;
use cardform_core::model::{InputKind, InputModel, TextInputModel};

use crate::common::{InputFeedback, ValueCommon};
use crate::{BindError, InputValue};

/// Validation wrapper for a free-text input bound to a [`TextBox`].
pub struct TextInputValue {
    common: ValueCommon,
    model: TextInputModel,
    text_box: Rc<TextBox>,
    // Compiled once per binding; the model is immutable.
    pattern: OnceCell<Option<Regex>>,
}

impl std::fmt::Debug for TextInputValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInputValue")
            .field("id", &self.model.id)
            .finish_non_exhaustive()
    }
}

impl TextInputValue {
    /// Bind a text model to its rendered text box.
    pub fn bind(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        text_box: Rc<TextBox>,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        let text_model = match &*model {
            InputModel::Text(m) => m.clone(),
            other => {
                return Err(BindError::ModelMismatch {
                    expected: InputKind::Text,
                    found: other.kind(),
                });
            }
        };
        let value = Rc::new(Self {
            common: ValueCommon::new(model, feedback),
            model: text_model,
            text_box,
            pattern: OnceCell::new(),
        });
        if ctx.inline_validation() {
            Rc::clone(&value).enable_focus_lost_validation()?;
        }
        Ok(value)
    }

    /// Declared pattern anchored to match the whole value, or `None`
    /// when no pattern is declared or it does not compile (malformed
    /// constraint data is treated as absent).
    fn compiled_pattern(&self) -> Option<&Regex> {
        self.pattern
            .get_or_init(|| {
                let source = self.model.regex.as_deref()?;
                match Regex::new(&format!("^(?:{source})$")) {
                    Ok(pattern) => Some(pattern),
                    Err(_err) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            id = %self.model.id,
                            pattern = source,
                            error = %_err,
                            "ignoring regex constraint that does not compile"
                        );
                        None
                    }
                }
            })
            .as_ref()
    }
}

impl InputValue for TextInputValue {
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
        // The declared pattern applies even to an empty, non-required
        // value; a match must cover the whole string.
        let pattern_ok = match self.compiled_pattern() {
            Some(pattern) => pattern.is_match(&value),
            None => true,
        };
        base && pattern_ok
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
