#![forbid(unsafe_code)]

//! Core types for the cardform input engine.
//!
//! This crate holds the pieces shared by the control seam and the
//! validation engine: the parsed input element models, the hosting
//! context, the single-threaded event hub, and civil date / time-of-day
//! helpers. It has no opinion about rendering; everything here is plain
//! data plus synchronous event dispatch.

pub mod context;
pub mod datetime;
pub mod event;
pub mod model;

pub use context::RenderContext;
pub use datetime::{CivilDate, format_time_of_day, parse_simple_time, time_of_day};
pub use event::{EventHub, ListenerId, ListenerToken};
pub use model::{
    Choice, ChoiceSetInputModel, ChoiceSetStyle, DateInputModel, InputKind, InputModel,
    NumberInputModel, TextInputModel, TimeInputModel, ToggleInputModel,
};
