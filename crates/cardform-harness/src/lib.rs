#![forbid(unsafe_code)]

//! Test rigs for the input validation engine.
//!
//! A [`Rig`] wires one input model to a fresh in-memory control plus both
//! feedback regions, binds the engine over them, and exposes interaction
//! helpers that simulate what a user (or the hosting toolkit) would do:
//! typing, picking, clicking, blurring. Integration tests under `tests/`
//! drive whole scenarios through rigs; [`ValidationReport`] captures the
//! observable outcome as a serializable snapshot for golden assertions.
//!
//! Rigs are test infrastructure: a helper called against the wrong
//! control kind panics with a message rather than returning an error.

use std::rc::Rc;
use std::time::Duration;

use cardform_controls::feedback::{ErrorBorder, ErrorMessage};
use cardform_controls::{ChoicePanel, DatePicker, Selector, TextBox, TimePicker, ToggleBox};
use cardform_core::context::RenderContext;
use cardform_core::datetime::CivilDate;
use cardform_core::model::InputModel;
use cardform_inputs::{
    BindError, BoundControl, InputFeedback, InputValue, InputValueSet, RevalidationMode, bind_input,
};

use serde::Serialize;

/// The control a rig built for its model.
enum RigControl {
    Text(Rc<TextBox>),
    Date(Rc<DatePicker>),
    Time(Rc<TimePicker>),
    Toggle(Rc<ToggleBox>),
    Selector(Rc<Selector>),
    Panel(Rc<ChoicePanel>),
}

/// One model bound to one fresh control with full feedback wiring.
pub struct Rig {
    value: Rc<dyn InputValue>,
    border: Rc<ErrorBorder>,
    message: Rc<ErrorMessage>,
    control: RigControl,
}

impl Rig {
    /// Build the kind-appropriate control for `model` and bind it.
    ///
    /// Compact single-select choice sets get a [`Selector`]; every other
    /// choice set gets a [`ChoicePanel`] with one toggle per declared
    /// choice.
    pub fn bind(ctx: &RenderContext, model: Rc<InputModel>) -> Result<Self, BindError> {
        let control = match &*model {
            InputModel::Text(_) | InputModel::Number(_) => RigControl::Text(TextBox::new()),
            InputModel::Date(_) => RigControl::Date(DatePicker::new()),
            InputModel::Time(_) => RigControl::Time(TimePicker::new()),
            InputModel::Toggle(_) => RigControl::Toggle(ToggleBox::new()),
            InputModel::ChoiceSet(set) if set.is_compact_single() => {
                RigControl::Selector(Selector::new())
            }
            InputModel::ChoiceSet(set) => {
                RigControl::Panel(ChoicePanel::with_choice_count(set.choices.len()))
            }
        };

        let bound = match &control {
            RigControl::Text(c) => BoundControl::TextBox(Rc::clone(c)),
            RigControl::Date(c) => BoundControl::DatePicker(Rc::clone(c)),
            RigControl::Time(c) => BoundControl::TimePicker(Rc::clone(c)),
            RigControl::Toggle(c) => BoundControl::Toggle(Rc::clone(c)),
            RigControl::Selector(c) => BoundControl::Selector(Rc::clone(c)),
            RigControl::Panel(c) => BoundControl::ChoicePanel(Rc::clone(c)),
        };

        let border = ErrorBorder::new();
        let message = ErrorMessage::new();
        let feedback = InputFeedback::new(Rc::clone(&border), Rc::clone(&message));
        let value = bind_input(ctx, model, bound, feedback)?;

        Ok(Self {
            value,
            border,
            message,
            control,
        })
    }

    /// Bind under a default (no inline validation) context.
    pub fn bind_default(model: Rc<InputModel>) -> Result<Self, BindError> {
        Self::bind(&RenderContext::new(), model)
    }

    pub fn value(&self) -> &Rc<dyn InputValue> {
        &self.value
    }

    /// Run one explicit validation pass, as the action layer would.
    pub fn validate(&self) -> bool {
        Rc::clone(&self.value).validate()
    }

    pub fn current_value(&self) -> String {
        self.value.current_value()
    }

    pub fn revalidation_mode(&self) -> RevalidationMode {
        self.value.common().revalidation_mode()
    }

    /// Whether the error border is currently showing.
    pub fn border_shown(&self) -> bool {
        !self.border.is_collapsed()
    }

    /// Whether the error message region is currently showing.
    pub fn message_shown(&self) -> bool {
        self.message.is_visible()
    }

    // Interaction helpers. Each panics when the rig's control kind does
    // not support the interaction.

    pub fn type_text(&self, text: &str) {
        self.text_box().set_text(text);
    }

    pub fn pick_date(&self, date: Option<CivilDate>) {
        match &self.control {
            RigControl::Date(picker) => picker.set_date(date),
            _ => panic!("rig has no date picker"),
        }
    }

    pub fn pick_time(&self, since_midnight: Duration) {
        match &self.control {
            RigControl::Time(picker) => picker.set_time(since_midnight),
            _ => panic!("rig has no time picker"),
        }
    }

    pub fn click_toggle(&self) {
        match &self.control {
            RigControl::Toggle(toggle) => toggle.click(),
            _ => panic!("rig has no toggle"),
        }
    }

    pub fn select(&self, index: Option<usize>) {
        match &self.control {
            RigControl::Selector(selector) => selector.set_selected_index(index),
            _ => panic!("rig has no selector"),
        }
    }

    /// Click the `index`-th choice of an expanded choice set.
    pub fn click_choice(&self, index: usize) {
        match &self.control {
            RigControl::Panel(panel) => match panel.child(index) {
                Some(child) => child.click(),
                None => panic!("rig panel has no choice {index}"),
            },
            _ => panic!("rig has no choice panel"),
        }
    }

    /// Blur the control that carries focus-loss wiring for this kind.
    pub fn blur(&self) {
        match &self.control {
            RigControl::Text(c) => c.blur(),
            RigControl::Date(c) => c.blur(),
            RigControl::Time(c) => c.blur(),
            RigControl::Toggle(c) => c.blur(),
            RigControl::Selector(c) => c.blur(),
            RigControl::Panel(panel) => match panel.last_child() {
                Some(child) => child.blur(),
                None => panic!("rig panel is empty"),
            },
        }
    }

    /// Change-listener count on the rig's control, for idempotence
    /// assertions.
    pub fn change_listeners(&self) -> usize {
        match &self.control {
            RigControl::Text(c) => c.text_changed_listeners(),
            RigControl::Date(c) => c.date_changed_listeners(),
            RigControl::Time(c) => c.time_changed_listeners(),
            RigControl::Toggle(c) => c.click_listeners(),
            RigControl::Selector(c) => c.selection_changed_listeners(),
            RigControl::Panel(panel) => panel
                .children()
                .iter()
                .map(|child| child.click_listeners())
                .sum(),
        }
    }

    fn text_box(&self) -> &Rc<TextBox> {
        match &self.control {
            RigControl::Text(text_box) => text_box,
            _ => panic!("rig has no text box"),
        }
    }

    /// Snapshot the rig's observable state without validating.
    pub fn report(&self) -> InputReport {
        InputReport {
            id: self.value.model().id().to_string(),
            kind: self.value.model().kind().to_string(),
            value: self.current_value(),
            valid: self.value.is_value_valid(),
            border_shown: self.border_shown(),
            message_shown: self.message_shown(),
            eager: self.revalidation_mode() == RevalidationMode::Eager,
        }
    }
}

/// A whole card's worth of rigs, validated together.
#[derive(Default)]
pub struct CardRig {
    rigs: Vec<Rig>,
}

impl CardRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every model in order under one context.
    pub fn bind_all(
        ctx: &RenderContext,
        models: impl IntoIterator<Item = Rc<InputModel>>,
    ) -> Result<Self, BindError> {
        let mut card = Self::new();
        for model in models {
            card.rigs.push(Rig::bind(ctx, model)?);
        }
        Ok(card)
    }

    pub fn rigs(&self) -> &[Rig] {
        &self.rigs
    }

    pub fn rig(&self, index: usize) -> &Rig {
        &self.rigs[index]
    }

    /// The aggregate set the action layer would hold.
    pub fn value_set(&self) -> InputValueSet {
        let mut set = InputValueSet::new();
        for rig in &self.rigs {
            set.push(Rc::clone(rig.value()));
        }
        set
    }

    /// Snapshot every rig's observable state.
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            inputs: self.rigs.iter().map(Rig::report).collect(),
        }
    }
}

/// Observable state of one bound input, for golden assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReport {
    pub id: String,
    pub kind: String,
    pub value: String,
    pub valid: bool,
    pub border_shown: bool,
    pub message_shown: bool,
    pub eager: bool,
}

/// Observable state of a whole card, in rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub inputs: Vec<InputReport>,
}

impl ValidationReport {
    /// Stable JSON rendering for snapshot comparison.
    pub fn to_json(&self) -> String {
        // Serialization of these plain structs cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardform_core::model::{TextInputModel, ToggleInputModel};

    fn text_model(id: &str, required: bool) -> Rc<InputModel> {
        Rc::new(InputModel::Text(TextInputModel {
            id: id.to_string(),
            required,
            regex: None,
        }))
    }

    #[test]
    fn rig_builds_matching_control() {
        let rig = Rig::bind_default(text_model("t", true)).unwrap();
        rig.type_text("hello");
        assert_eq!(rig.current_value(), "hello");
    }

    #[test]
    fn rig_report_captures_feedback_state() {
        let rig = Rig::bind_default(text_model("t", true)).unwrap();
        assert!(!rig.validate());

        let report = rig.report();
        assert!(!report.valid);
        assert!(report.border_shown);
        assert!(report.message_shown);
        assert!(report.eager);
    }

    #[test]
    fn card_rig_preserves_order() {
        let card = CardRig::bind_all(
            &RenderContext::new(),
            [
                text_model("first", true),
                Rc::new(InputModel::Toggle(ToggleInputModel::new("second", false))),
            ],
        )
        .unwrap();

        let report = card.report();
        let ids: Vec<_> = report.inputs.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn report_serializes_to_json() {
        let card = CardRig::bind_all(&RenderContext::new(), [text_model("t", false)]).unwrap();
        let json = card.report().to_json();
        assert!(json.contains("\"id\": \"t\""));
        assert!(json.contains("\"kind\": \"text\""));
    }
}
