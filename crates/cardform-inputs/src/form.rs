#![forbid(unsafe_code)]

//! Form-level aggregation of bound input values.
//!
//! A card's action layer collects every bound value into an
//! [`InputValueSet`] and asks it to validate before submitting. Every
//! value is validated even after a failure is found, so all feedback
//! regions refresh in one pass.

use std::rc::Rc;

use cardform_core::model::InputModel;

use crate::InputValue;

/// All input values of one rendered card, in rendering order.
#[derive(Default)]
pub struct InputValueSet {
    values: Vec<Rc<dyn InputValue>>,
}

impl InputValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bound value. Order is preserved; the first failure
    /// reported by [`validate_all`](Self::validate_all) is the first
    /// invalid input the user sees on the card.
    pub fn push(&mut self, value: Rc<dyn InputValue>) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn InputValue>> {
        self.values.iter()
    }

    /// Validate every value, refreshing all feedback regions, and
    /// collect the models that failed. No short-circuit: a card with
    /// three bad inputs shows three error borders, not one.
    pub fn validate_all(&self) -> FormValidation {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("validate_all", inputs = self.values.len()).entered();

        let mut failures = Vec::new();
        for value in &self.values {
            if !Rc::clone(value).validate() {
                failures.push(Rc::clone(value.model()));
            }
        }

        #[cfg(feature = "tracing")]
        if !failures.is_empty() {
            tracing::debug!(failed = failures.len(), "form validation failed");
        }

        FormValidation { failures }
    }
}

/// Outcome of one [`InputValueSet::validate_all`] pass.
#[derive(Debug, Clone)]
pub struct FormValidation {
    failures: Vec<Rc<InputModel>>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Models that failed, in rendering order.
    pub fn failures(&self) -> &[Rc<InputModel>] {
        &self.failures
    }

    /// The first failing model; the host typically moves focus here.
    pub fn first_failure(&self) -> Option<&Rc<InputModel>> {
        self.failures.first()
    }
}
