#![forbid(unsafe_code)]

//! State shared by every input value: feedback regions, the escalation
//! state machine, and the listener token store.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cardform_controls::feedback::{ErrorBorder, ErrorMessage, Thickness, Visibility};
use cardform_core::event::ListenerToken;
use cardform_core::model::InputModel;

/// Border thickness applied while a value is invalid.
const INVALID_BORDER: Thickness = Thickness::uniform(1);

/// Revalidation escalation state. The transition is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevalidationMode {
    /// Validate only when asked (or on focus loss, if inline validation
    /// is enabled).
    Lazy,
    /// Revalidate on every value change. Entered on the first failure.
    Eager,
}

/// The optional feedback regions attached to one input.
///
/// Either region may be absent; applying validity to an absent region
/// is a no-op. Applying never fails.
#[derive(Debug, Clone, Default)]
pub struct InputFeedback {
    border: Option<Rc<ErrorBorder>>,
    message: Option<Rc<ErrorMessage>>,
}

impl InputFeedback {
    /// Both regions present.
    pub fn new(border: Rc<ErrorBorder>, message: Rc<ErrorMessage>) -> Self {
        Self {
            border: Some(border),
            message: Some(message),
        }
    }

    /// No feedback regions; presentation becomes a no-op.
    pub fn none() -> Self {
        Self::default()
    }

    /// Border only.
    pub fn with_border(border: Rc<ErrorBorder>) -> Self {
        Self {
            border: Some(border),
            message: None,
        }
    }

    /// Message only.
    pub fn with_message(message: Rc<ErrorMessage>) -> Self {
        Self {
            border: None,
            message: Some(message),
        }
    }

    /// Show or hide the error affordances for the given validity.
    pub fn apply(&self, valid: bool) {
        if let Some(border) = &self.border {
            border.set_thickness(if valid { Thickness::ZERO } else { INVALID_BORDER });
        }
        if let Some(message) = &self.message {
            message.set_visibility(if valid {
                Visibility::Collapsed
            } else {
                Visibility::Visible
            });
        }
    }
}

/// Per-instance facade state embedded in every input value.
#[derive(Debug)]
pub struct ValueCommon {
    model: Rc<InputModel>,
    feedback: InputFeedback,
    revalidation: Cell<RevalidationMode>,
    tokens: RefCell<Vec<ListenerToken>>,
}

impl ValueCommon {
    pub fn new(model: Rc<InputModel>, feedback: InputFeedback) -> Self {
        Self {
            model,
            feedback,
            revalidation: Cell::new(RevalidationMode::Lazy),
            tokens: RefCell::new(Vec::new()),
        }
    }

    pub fn model(&self) -> &Rc<InputModel> {
        &self.model
    }

    pub fn feedback(&self) -> &InputFeedback {
        &self.feedback
    }

    /// Current escalation state.
    pub fn revalidation_mode(&self) -> RevalidationMode {
        self.revalidation.get()
    }

    /// Transition lazy → eager. Returns `false` if already eager, which
    /// guards change listeners against double registration.
    pub fn arm_eager(&self) -> bool {
        if self.revalidation.get() == RevalidationMode::Eager {
            return false;
        }
        self.revalidation.set(RevalidationMode::Eager);
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.model.id(), "input escalated to eager revalidation");
        true
    }

    /// Keep a listener registration alive for the instance lifetime.
    pub fn hold_token(&self, token: ListenerToken) {
        self.tokens.borrow_mut().push(token);
    }

    /// Keep several registrations alive.
    pub fn hold_tokens(&self, tokens: impl IntoIterator<Item = ListenerToken>) {
        self.tokens.borrow_mut().extend(tokens);
    }

    /// Number of held registrations. Test hook.
    pub fn held_token_count(&self) -> usize {
        self.tokens.borrow().len()
    }

    /// Base required check: the serialized value must be non-empty
    /// unless the model does not require one.
    pub fn required_satisfied(&self, value: &str) -> bool {
        !self.model.is_required() || !value.is_empty()
    }
}
