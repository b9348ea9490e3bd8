#![forbid(unsafe_code)]

//! Cardform public facade crate.
//!
//! This crate provides the stable surface area for hosts embedding the
//! input validation engine. It re-exports common types from internal
//! crates and offers a lightweight prelude for day-to-day usage.
//!
//! A host parses its card document into [`InputModel`]s, renders native
//! controls, then calls [`bind_input`] per element to obtain validation
//! wrappers; an [`InputValueSet`] validates the whole form before an
//! action fires.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use cardform_core::context::RenderContext;
pub use cardform_core::datetime::{CivilDate, format_time_of_day, parse_simple_time, time_of_day};
pub use cardform_core::event::{EventHub, ListenerId, ListenerToken};
pub use cardform_core::model::{
    Choice, ChoiceSetInputModel, ChoiceSetStyle, DateInputModel, InputKind, InputModel,
    NUMBER_NO_MAX, NUMBER_NO_MIN, NumberInputModel, TextInputModel, TimeInputModel,
    ToggleInputModel,
};

// --- Control re-exports ----------------------------------------------------

pub use cardform_controls::feedback::{ErrorBorder, ErrorMessage, Thickness, Visibility};
pub use cardform_controls::{ChoicePanel, DatePicker, Selector, TextBox, TimePicker, ToggleBox};

// --- Engine re-exports -----------------------------------------------------

pub use cardform_inputs::{
    BindError, BoundControl, ChoiceSetInputValue, DateInputValue, FormValidation, InputFeedback,
    InputValue, InputValueSet, NumberInputValue, RevalidationMode, TextInputValue, TimeInputValue,
    ToggleInputValue, bind_input,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for cardform hosts.
#[derive(Debug)]
pub enum Error {
    /// A model could not be bound to its control.
    Bind(BindError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(err) => Some(err),
        }
    }
}

impl From<BindError> for Error {
    fn from(err: BindError) -> Self {
        Self::Bind(err)
    }
}

/// Standard result type for cardform APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BindError, BoundControl, Error, InputFeedback, InputKind, InputModel, InputValue,
        InputValueSet, RenderContext, Result, RevalidationMode, bind_input,
    };

    pub use crate::{controls, core, inputs};
}

pub use cardform_controls as controls;
pub use cardform_core as core;
pub use cardform_inputs as inputs;
