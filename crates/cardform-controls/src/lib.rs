#![forbid(unsafe_code)]

//! Bound native controls and validation feedback regions.
//!
//! The rendering pipeline (out of scope) turns card elements into live
//! controls. These handles are the seam the validation engine binds to:
//! each holds its current user-facing state behind interior mutability
//! and exposes typed [`EventHub`]s for the notifications the engine
//! subscribes to. Every control has a `focus_lost` hub; each kind adds
//! its own value-changed hub.
//!
//! Handles are shared (`Rc`) because the visual tree owns the control
//! while the engine observes it. Setters mutate state and then emit, so
//! tests drive them exactly the way a host toolkit would.
//!
//! [`EventHub`]: cardform_core::EventHub

pub mod choice_panel;
pub mod feedback;
pub mod pickers;
pub mod selector;
pub mod text_box;
pub mod toggle;

pub use choice_panel::ChoicePanel;
pub use feedback::{ErrorBorder, ErrorMessage, Thickness, Visibility};
pub use pickers::{DatePicker, TimePicker};
pub use selector::Selector;
pub use text_box::TextBox;
pub use toggle::ToggleBox;
