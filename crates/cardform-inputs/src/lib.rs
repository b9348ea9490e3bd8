#![forbid(unsafe_code)]

//! Input value validation engine.
//!
//! One [`InputValue`] wraps each rendered interactive element. It knows
//! how to read the control's current serialized value, decide whether
//! that value is acceptable under the model's constraints, and drive the
//! error border / error message regions. The form layer calls
//! [`InputValue::validate`] before an action proceeds; after the first
//! failure the value re-validates itself on every subsequent edit.
//!
//! # Escalation
//!
//! Each value starts lazy: nothing happens until `validate()` is called
//! (or, with inline validation enabled on the [`RenderContext`], until
//! the control loses focus). The first failing validation permanently
//! arms change-triggered revalidation for that value; the transition is
//! one-way and registers the kind-appropriate change listener exactly
//! once.
//!
//! # Errors
//!
//! An unacceptable user value is a normal `false` from `validate()`,
//! never an error. [`BindError`] covers the programming-error cases:
//! binding a value to the wrong model or control kind, or wiring focus
//! validation to an empty choice panel.

use std::fmt;
use std::rc::Rc;

use cardform_controls::{ChoicePanel, DatePicker, Selector, TextBox, TimePicker, ToggleBox};
use cardform_core::context::RenderContext;
use cardform_core::model::{InputKind, InputModel};

pub mod choice_set;
pub mod common;
pub mod date;
pub mod form;
pub mod number;
pub mod text;
pub mod time;
pub mod toggle;

pub use choice_set::ChoiceSetInputValue;
pub use common::{InputFeedback, RevalidationMode, ValueCommon};
pub use date::DateInputValue;
pub use form::{FormValidation, InputValueSet};
pub use number::NumberInputValue;
pub use text::TextInputValue;
pub use time::TimeInputValue;
pub use toggle::ToggleInputValue;

/// Failure to bind an input value. See the crate docs: these indicate
/// programming or wiring errors, not bad user data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The model enum variant does not match the value kind.
    ModelMismatch {
        expected: InputKind,
        found: InputKind,
    },
    /// The supplied control cannot back this model.
    ControlMismatch {
        kind: InputKind,
        control: &'static str,
    },
    /// Focus-loss wiring needs a last choice, but the panel is empty.
    EmptyChoicePanel,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelMismatch { expected, found } => {
                write!(f, "expected a {expected} input model, found {found}")
            }
            Self::ControlMismatch { kind, control } => {
                write!(f, "a {kind} input cannot bind to a {control} control")
            }
            Self::EmptyChoicePanel => {
                write!(f, "expanded choice set has no choice controls")
            }
        }
    }
}

impl std::error::Error for BindError {}

/// A validation-capable wrapper around one bound input element.
///
/// Implementations form a closed set, one per [`InputKind`], selected by
/// [`bind_input`]. Listener closures hold weak references to the value,
/// so `Rc<Self>` receivers appear wherever wiring may happen.
pub trait InputValue {
    /// The bound model, for introspection by the form layer.
    fn model(&self) -> &Rc<InputModel>;

    /// Shared facade state: feedback regions, escalation mode, tokens.
    fn common(&self) -> &ValueCommon;

    /// The control's current serialized value.
    ///
    /// Absence of a value is an empty string, never an error.
    fn current_value(&self) -> String;

    /// Whether the current value satisfies the model's constraints.
    ///
    /// Pure policy: no feedback mutation, no escalation.
    fn is_value_valid(&self) -> bool;

    /// Arm change-triggered revalidation. Idempotent; the first call
    /// transitions the value from lazy to eager, later calls are no-ops.
    fn enable_change_validation(self: Rc<Self>);

    /// Arm focus-loss revalidation on the kind's focus target.
    fn enable_focus_lost_validation(self: Rc<Self>) -> Result<(), BindError>;

    /// Compute validity, refresh the feedback regions, and arm eager
    /// revalidation when invalid. Returns the validity so aggregate
    /// callers can collect failures.
    fn validate(self: Rc<Self>) -> bool {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("validate", id = %self.model().id(), kind = %self.model().kind())
                .entered();

        let valid = self.is_value_valid();
        self.common().feedback().apply(valid);
        if !valid {
            Rc::clone(&self).enable_change_validation();
        }
        valid
    }
}

impl fmt::Debug for dyn InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputValue")
            .field("id", &self.model().id())
            .finish_non_exhaustive()
    }
}

/// The native control a model is bound to.
#[derive(Debug, Clone)]
pub enum BoundControl {
    TextBox(Rc<TextBox>),
    DatePicker(Rc<DatePicker>),
    TimePicker(Rc<TimePicker>),
    Toggle(Rc<ToggleBox>),
    Selector(Rc<Selector>),
    ChoicePanel(Rc<ChoicePanel>),
}

impl BoundControl {
    /// Human-readable control name for error reporting.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::TextBox(_) => "text box",
            Self::DatePicker(_) => "date picker",
            Self::TimePicker(_) => "time picker",
            Self::Toggle(_) => "toggle",
            Self::Selector(_) => "selector",
            Self::ChoicePanel(_) => "choice panel",
        }
    }
}

/// Bind a model to its rendered control, selecting the value
/// implementation by the model's kind tag.
///
/// With inline validation enabled on `ctx`, the returned value has
/// focus-loss revalidation armed before any event can reach it.
pub fn bind_input(
    ctx: &RenderContext,
    model: Rc<InputModel>,
    control: BoundControl,
    feedback: InputFeedback,
) -> Result<Rc<dyn InputValue>, BindError> {
    let kind = model.kind();
    let mismatch = |control: &BoundControl| BindError::ControlMismatch {
        kind,
        control: control.describe(),
    };
    match (kind, control) {
        (InputKind::Text, BoundControl::TextBox(text_box)) => {
            Ok(TextInputValue::bind(ctx, model, text_box, feedback)? as Rc<dyn InputValue>)
        }
        (InputKind::Number, BoundControl::TextBox(text_box)) => {
            Ok(NumberInputValue::bind(ctx, model, text_box, feedback)? as Rc<dyn InputValue>)
        }
        (InputKind::Date, BoundControl::DatePicker(picker)) => {
            Ok(DateInputValue::bind(ctx, model, picker, feedback)? as Rc<dyn InputValue>)
        }
        (InputKind::Time, BoundControl::TimePicker(picker)) => {
            Ok(TimeInputValue::bind(ctx, model, picker, feedback)? as Rc<dyn InputValue>)
        }
        (InputKind::Toggle, BoundControl::Toggle(toggle)) => {
            Ok(ToggleInputValue::bind(ctx, model, toggle, feedback)? as Rc<dyn InputValue>)
        }
        (InputKind::ChoiceSet, BoundControl::Selector(selector)) => Ok(
            ChoiceSetInputValue::bind_compact(ctx, model, selector, feedback)?
                as Rc<dyn InputValue>,
        ),
        (InputKind::ChoiceSet, BoundControl::ChoicePanel(panel)) => Ok(
            ChoiceSetInputValue::bind_expanded(ctx, model, panel, feedback)? as Rc<dyn InputValue>,
        ),
        (_, control) => Err(mismatch(&control)),
    }
}
