//! Property checks for the one-way revalidation escalation.
//!
//! Once a required field has failed validation, no sequence of edits or
//! further validation calls may move it back to lazy revalidation or
//! register a second change listener.

use std::rc::Rc;

use cardform_core::context::RenderContext;
use cardform_core::model::{InputModel, TextInputModel};
use cardform_harness::Rig;
use cardform_inputs::RevalidationMode;
use proptest::prelude::*;

fn required_text() -> Rc<InputModel> {
    Rc::new(InputModel::Text(TextInputModel {
        id: "name".to_string(),
        required: true,
        regex: None,
    }))
}

/// One simulated user action against a rig.
#[derive(Debug, Clone)]
enum Action {
    Edit(String),
    Validate,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        ".{0,8}".prop_map(Action::Edit),
        Just(Action::Validate),
    ]
}

proptest! {
    #[test]
    fn escalation_never_reverts(actions in proptest::collection::vec(action(), 0..16)) {
        let rig = Rig::bind_default(required_text()).unwrap();

        // Empty required field: the first validation fails and escalates.
        prop_assert!(!rig.validate());
        prop_assert_eq!(rig.revalidation_mode(), RevalidationMode::Eager);

        for act in &actions {
            match act {
                Action::Edit(text) => rig.type_text(text),
                Action::Validate => {
                    rig.validate();
                }
            }
            prop_assert_eq!(rig.revalidation_mode(), RevalidationMode::Eager);
            prop_assert_eq!(rig.change_listeners(), 1);
            // Feedback always reflects the current value, however the
            // last revalidation was triggered.
            prop_assert_eq!(rig.border_shown(), rig.current_value().is_empty());
            prop_assert_eq!(rig.message_shown(), rig.current_value().is_empty());
        }
    }

    #[test]
    fn passing_fields_stay_lazy_across_validations(values in proptest::collection::vec(".{1,8}", 1..8)) {
        let rig = Rig::bind_default(required_text()).unwrap();

        for value in &values {
            rig.type_text(value);
            prop_assert!(rig.validate());
            prop_assert_eq!(rig.revalidation_mode(), RevalidationMode::Lazy);
            prop_assert_eq!(rig.change_listeners(), 0);
        }
    }
}
