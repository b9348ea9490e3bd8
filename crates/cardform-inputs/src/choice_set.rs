#![forbid(unsafe_code)]

//! Choice set input value.
//!
//! Two renderings share one value type: compact single-select backed by
//! a [`Selector`], and expanded (or any multi-select) backed by a
//! [`ChoicePanel`] of individually checkable choices. The i-th choice
//! control corresponds to the i-th declared choice.

use std::rc::Rc;

use cardform_controls::{ChoicePanel, Selector};
use cardform_core::context::RenderContext;
use cardform_core::model::{ChoiceSetInputModel, InputKind, InputModel};

use crate::common::{InputFeedback, ValueCommon};
use crate::{BindError, InputValue};

enum ChoiceControl {
    Selector(Rc<Selector>),
    Panel(Rc<ChoicePanel>),
}

/// Validation wrapper for a choice set.
pub struct ChoiceSetInputValue {
    common: ValueCommon,
    model: ChoiceSetInputModel,
    control: ChoiceControl,
}

impl std::fmt::Debug for ChoiceSetInputValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChoiceSetInputValue")
            .field("id", &self.common.model().id())
            .finish_non_exhaustive()
    }
}

impl ChoiceSetInputValue {
    /// Bind a compact single-select choice set to its selector.
    pub fn bind_compact(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        selector: Rc<Selector>,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        let choice_model = Self::choice_model(&model)?;
        if !choice_model.is_compact_single() {
            return Err(BindError::ControlMismatch {
                kind: InputKind::ChoiceSet,
                control: "selector",
            });
        }
        Self::finish(ctx, model, choice_model, ChoiceControl::Selector(selector), feedback)
    }

    /// Bind an expanded or multi-select choice set to its panel.
    pub fn bind_expanded(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        panel: Rc<ChoicePanel>,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        let choice_model = Self::choice_model(&model)?;
        if choice_model.is_compact_single() {
            return Err(BindError::ControlMismatch {
                kind: InputKind::ChoiceSet,
                control: "choice panel",
            });
        }
        Self::finish(ctx, model, choice_model, ChoiceControl::Panel(panel), feedback)
    }

    fn choice_model(model: &Rc<InputModel>) -> Result<ChoiceSetInputModel, BindError> {
        match &**model {
            InputModel::ChoiceSet(m) => Ok(m.clone()),
            other => Err(BindError::ModelMismatch {
                expected: InputKind::ChoiceSet,
                found: other.kind(),
            }),
        }
    }

    fn finish(
        ctx: &RenderContext,
        model: Rc<InputModel>,
        choice_model: ChoiceSetInputModel,
        control: ChoiceControl,
        feedback: InputFeedback,
    ) -> Result<Rc<Self>, BindError> {
        let value = Rc::new(Self {
            common: ValueCommon::new(model, feedback),
            model: choice_model,
            control,
        });
        if ctx.inline_validation() {
            Rc::clone(&value).enable_focus_lost_validation()?;
        }
        Ok(value)
    }

    /// Model value for a selected index; out-of-range indices mean the
    /// host wired mismatched choices and yield no value.
    fn choice_value(&self, index: usize) -> Option<&str> {
        let value = self.model.choice_value(index);
        #[cfg(feature = "tracing")]
        if value.is_none() {
            tracing::debug!(
                id = %self.model.id,
                index,
                choices = self.model.choices.len(),
                "choice index has no declared choice"
            );
        }
        value
    }
}

impl InputValue for ChoiceSetInputValue {
    fn model(&self) -> &Rc<InputModel> {
        self.common.model()
    }

    fn common(&self) -> &ValueCommon {
        &self.common
    }

    fn current_value(&self) -> String {
        match &self.control {
            ChoiceControl::Selector(selector) => selector
                .selected_index()
                .and_then(|i| self.choice_value(i))
                .unwrap_or_default()
                .to_string(),
            ChoiceControl::Panel(panel) => {
                if self.model.is_multi_select {
                    // All checked values, rendering order, comma joined.
                    panel
                        .checked_indices()
                        .into_iter()
                        .filter_map(|i| self.choice_value(i))
                        .collect::<Vec<_>>()
                        .join(",")
                } else {
                    // First checked choice wins.
                    panel
                        .checked_indices()
                        .first()
                        .and_then(|&i| self.choice_value(i))
                        .unwrap_or_default()
                        .to_string()
                }
            }
        }
    }

    fn is_value_valid(&self) -> bool {
        self.common.required_satisfied(&self.current_value())
    }

    fn enable_change_validation(self: Rc<Self>) {
        if !self.common.arm_eager() {
            return;
        }
        match &self.control {
            ChoiceControl::Selector(selector) => {
                let weak = Rc::downgrade(&self);
                let token = selector.on_selection_changed(move |_| {
                    if let Some(value) = weak.upgrade() {
                        value.validate();
                    }
                });
                self.common.hold_token(token);
            }
            ChoiceControl::Panel(panel) => {
                // Every choice control revalidates the whole set.
                let tokens: Vec<_> = panel
                    .children()
                    .iter()
                    .map(|child| {
                        let weak = Rc::downgrade(&self);
                        child.on_click(move |()| {
                            if let Some(value) = weak.upgrade() {
                                value.validate();
                            }
                        })
                    })
                    .collect();
                self.common.hold_tokens(tokens);
            }
        }
    }

    fn enable_focus_lost_validation(self: Rc<Self>) -> Result<(), BindError> {
        let token = match &self.control {
            ChoiceControl::Selector(selector) => {
                let weak = Rc::downgrade(&self);
                selector.on_focus_lost(move |()| {
                    if let Some(value) = weak.upgrade() {
                        value.validate();
                    }
                })
            }
            ChoiceControl::Panel(panel) => {
                // Focus leaves the set through its last choice.
                let last = panel.last_child().ok_or(BindError::EmptyChoicePanel)?;
                let weak = Rc::downgrade(&self);
                last.on_focus_lost(move |()| {
                    if let Some(value) = weak.upgrade() {
                        value.validate();
                    }
                })
            }
        };
        self.common.hold_token(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RevalidationMode;
    use cardform_core::model::{Choice, ChoiceSetStyle};

    fn model(
        required: bool,
        is_multi_select: bool,
        style: ChoiceSetStyle,
        values: &[&str],
    ) -> Rc<InputModel> {
        Rc::new(InputModel::ChoiceSet(ChoiceSetInputModel {
            id: "pick".to_string(),
            required,
            is_multi_select,
            style,
            choices: values
                .iter()
                .map(|v| Choice::new(v.to_uppercase(), *v))
                .collect(),
        }))
    }

    fn bind_compact(model: Rc<InputModel>, selector: Rc<Selector>) -> Rc<ChoiceSetInputValue> {
        ChoiceSetInputValue::bind_compact(
            &RenderContext::new(),
            model,
            selector,
            InputFeedback::none(),
        )
        .unwrap()
    }

    fn bind_expanded(model: Rc<InputModel>, panel: Rc<ChoicePanel>) -> Rc<ChoiceSetInputValue> {
        ChoiceSetInputValue::bind_expanded(
            &RenderContext::new(),
            model,
            panel,
            InputFeedback::none(),
        )
        .unwrap()
    }

    #[test]
    fn compact_unselected_is_empty() {
        let value = bind_compact(
            model(true, false, ChoiceSetStyle::Compact, &["a", "b"]),
            Selector::new(),
        );
        assert_eq!(value.current_value(), "");
        assert!(!value.is_value_valid());
    }

    #[test]
    fn compact_selection_maps_to_choice_value() {
        let selector = Selector::new();
        let value = bind_compact(
            model(true, false, ChoiceSetStyle::Compact, &["a", "b"]),
            Rc::clone(&selector),
        );

        selector.set_selected_index(Some(1));
        assert_eq!(value.current_value(), "b");
        assert!(value.is_value_valid());
    }

    #[test]
    fn compact_out_of_range_index_is_empty() {
        let selector = Selector::new();
        let value = bind_compact(
            model(true, false, ChoiceSetStyle::Compact, &["a", "b"]),
            Rc::clone(&selector),
        );

        selector.set_selected_index(Some(9));
        assert_eq!(value.current_value(), "");
        assert!(!value.is_value_valid());
    }

    #[test]
    fn expanded_single_takes_first_checked() {
        let panel = ChoicePanel::with_choice_count(3);
        let value = bind_expanded(
            model(true, false, ChoiceSetStyle::Expanded, &["a", "b", "c"]),
            Rc::clone(&panel),
        );

        assert_eq!(value.current_value(), "");
        panel.children()[1].set_checked(true);
        panel.children()[2].set_checked(true);
        assert_eq!(value.current_value(), "b");
    }

    #[test]
    fn multi_select_joins_checked_values_in_order() {
        let panel = ChoicePanel::with_choice_count(3);
        let value = bind_expanded(
            model(true, true, ChoiceSetStyle::Expanded, &["a", "b", "c"]),
            Rc::clone(&panel),
        );

        panel.children()[0].set_checked(true);
        panel.children()[2].set_checked(true);
        assert_eq!(value.current_value(), "a,c");
    }

    #[test]
    fn multi_select_with_nothing_checked_is_empty() {
        let panel = ChoicePanel::with_choice_count(3);
        let value = bind_expanded(
            model(true, true, ChoiceSetStyle::Expanded, &["a", "b", "c"]),
            Rc::clone(&panel),
        );
        assert_eq!(value.current_value(), "");
        assert!(!value.is_value_valid());
    }

    #[test]
    fn multi_select_single_checked_satisfies_required() {
        let panel = ChoicePanel::with_choice_count(3);
        let value = bind_expanded(
            model(true, true, ChoiceSetStyle::Expanded, &["a", "b", "c"]),
            Rc::clone(&panel),
        );
        panel.children()[1].set_checked(true);
        assert!(value.is_value_valid());
    }

    #[test]
    fn multi_select_is_expanded_even_when_declared_compact() {
        let panel = ChoicePanel::with_choice_count(2);
        let value = bind_expanded(
            model(false, true, ChoiceSetStyle::Compact, &["a", "b"]),
            Rc::clone(&panel),
        );
        panel.children()[0].set_checked(true);
        panel.children()[1].set_checked(true);
        assert_eq!(value.current_value(), "a,b");
    }

    #[test]
    fn compact_bind_rejects_expanded_model() {
        let err = ChoiceSetInputValue::bind_compact(
            &RenderContext::new(),
            model(false, false, ChoiceSetStyle::Expanded, &["a"]),
            Selector::new(),
            InputFeedback::none(),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::ControlMismatch { .. }));
    }

    #[test]
    fn expanded_bind_rejects_compact_single_model() {
        let err = ChoiceSetInputValue::bind_expanded(
            &RenderContext::new(),
            model(false, false, ChoiceSetStyle::Compact, &["a"]),
            ChoicePanel::with_choice_count(1),
            InputFeedback::none(),
        )
        .unwrap_err();
        assert!(matches!(err, BindError::ControlMismatch { .. }));
    }

    #[test]
    fn failure_arms_selection_listener_for_compact() {
        let selector = Selector::new();
        let value = bind_compact(
            model(true, false, ChoiceSetStyle::Compact, &["a", "b"]),
            Rc::clone(&selector),
        );

        assert!(!Rc::clone(&value).validate());
        assert_eq!(selector.selection_changed_listeners(), 1);

        assert!(!Rc::clone(&value).validate());
        assert_eq!(selector.selection_changed_listeners(), 1);
    }

    #[test]
    fn failure_arms_click_listeners_on_every_choice() {
        let panel = ChoicePanel::with_choice_count(3);
        let value = bind_expanded(
            model(true, true, ChoiceSetStyle::Expanded, &["a", "b", "c"]),
            Rc::clone(&panel),
        );

        assert!(!Rc::clone(&value).validate());
        for child in panel.children() {
            assert_eq!(child.click_listeners(), 1);
        }
        assert_eq!(value.common().held_token_count(), 3);

        // Further failures must not re-register.
        assert!(!Rc::clone(&value).validate());
        for child in panel.children() {
            assert_eq!(child.click_listeners(), 1);
        }
    }

    #[test]
    fn checking_a_choice_revalidates_through_click() {
        let panel = ChoicePanel::with_choice_count(2);
        let value = bind_expanded(
            model(true, true, ChoiceSetStyle::Expanded, &["a", "b"]),
            Rc::clone(&panel),
        );
        assert!(!Rc::clone(&value).validate());
        assert_eq!(value.common().revalidation_mode(), RevalidationMode::Eager);

        panel.children()[0].click();
        assert!(value.is_value_valid());
    }

    #[test]
    fn inline_validation_targets_last_choice() {
        let ctx = RenderContext::new().with_inline_validation(true);
        let panel = ChoicePanel::with_choice_count(3);
        let _value = ChoiceSetInputValue::bind_expanded(
            &ctx,
            model(true, true, ChoiceSetStyle::Expanded, &["a", "b", "c"]),
            Rc::clone(&panel),
            InputFeedback::none(),
        )
        .unwrap();

        assert_eq!(panel.children()[0].focus_lost_listeners(), 0);
        assert_eq!(panel.children()[1].focus_lost_listeners(), 0);
        assert_eq!(panel.children()[2].focus_lost_listeners(), 1);
    }

    #[test]
    fn inline_validation_on_empty_panel_fails_to_bind() {
        let ctx = RenderContext::new().with_inline_validation(true);
        let err = ChoiceSetInputValue::bind_expanded(
            &ctx,
            model(true, true, ChoiceSetStyle::Expanded, &[]),
            ChoicePanel::new(Vec::new()),
            InputFeedback::none(),
        )
        .unwrap_err();
        assert_eq!(err, BindError::EmptyChoicePanel);
    }

    #[test]
    fn empty_panel_binds_without_inline_validation() {
        let value = bind_expanded(
            model(false, true, ChoiceSetStyle::Expanded, &[]),
            ChoicePanel::new(Vec::new()),
        );
        assert!(Rc::clone(&value).validate());
    }
}
