#![forbid(unsafe_code)]

//! Parsed input element models.
//!
//! One model per interactive card element, produced by the card parsing
//! layer (out of scope here) and held immutably for the lifetime of the
//! rendered view. The validation engine reads constraints from these and
//! never mutates them.
//!
//! [`InputModel`] is a closed enum: the engine selects its behavior by
//! this kind tag, so adding a kind means adding a variant here and a
//! value type in `cardform-inputs`.

use std::fmt;

/// Sentinel for "no minimum" on a number input.
///
/// The card schema declares number bounds as plain integers; absent
/// bounds arrive as the extreme values rather than as an option.
pub const NUMBER_NO_MIN: i32 = -i32::MAX;

/// Sentinel for "no maximum" on a number input.
pub const NUMBER_NO_MAX: i32 = i32::MAX;

/// Free-form text input, optionally constrained by a regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextInputModel {
    /// Card-assigned element id.
    pub id: String,
    /// Whether a value must be present.
    pub required: bool,
    /// Declared pattern; a match must cover the whole value.
    pub regex: Option<String>,
}

/// Numeric input with optional integer bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberInputModel {
    pub id: String,
    pub required: bool,
    /// Minimum, exclusive. [`NUMBER_NO_MIN`] means unbounded.
    pub min: i32,
    /// Maximum, exclusive. [`NUMBER_NO_MAX`] means unbounded.
    pub max: i32,
}

/// Date input. Carries no constraints beyond `required`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateInputModel {
    pub id: String,
    pub required: bool,
}

/// Time input with optional "HH:MM" bounds.
///
/// Bound strings that do not parse are treated as unset, not as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInputModel {
    pub id: String,
    pub required: bool,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Two-state toggle with declared serialized values for each state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleInputModel {
    pub id: String,
    pub required: bool,
    /// Serialized value when checked.
    pub value_on: String,
    /// Serialized value when unchecked.
    pub value_off: String,
}

impl ToggleInputModel {
    /// Toggle with the schema-default "true"/"false" values.
    pub fn new(id: impl Into<String>, required: bool) -> Self {
        Self {
            id: id.into(),
            required,
            value_on: "true".to_string(),
            value_off: "false".to_string(),
        }
    }
}

/// One option of a choice set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    /// Display text.
    pub title: String,
    /// Serialized value submitted when selected.
    pub value: String,
}

impl Choice {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// How a choice set is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChoiceSetStyle {
    /// A single dropdown-like selector.
    Compact,
    /// Individual checkable controls, one per choice.
    Expanded,
}

/// Multi-option input, compact or expanded, single- or multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceSetInputModel {
    pub id: String,
    pub required: bool,
    pub is_multi_select: bool,
    pub style: ChoiceSetStyle,
    /// Choices in rendering order.
    pub choices: Vec<Choice>,
}

impl ChoiceSetInputModel {
    /// Whether this set renders as one compact selector.
    ///
    /// Multi-select always renders expanded regardless of the declared
    /// style.
    pub fn is_compact_single(&self) -> bool {
        self.style == ChoiceSetStyle::Compact && !self.is_multi_select
    }

    /// Serialized value of the choice at `index`, if any.
    pub fn choice_value(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(|c| c.value.as_str())
    }
}

/// Kind tag for an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    Text,
    Number,
    Date,
    Time,
    Toggle,
    ChoiceSet,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Toggle => "toggle",
            Self::ChoiceSet => "choice set",
        };
        f.write_str(name)
    }
}

/// A parsed input element of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputModel {
    Text(TextInputModel),
    Number(NumberInputModel),
    Date(DateInputModel),
    Time(TimeInputModel),
    Toggle(ToggleInputModel),
    ChoiceSet(ChoiceSetInputModel),
}

impl InputModel {
    /// Card-assigned element id.
    pub fn id(&self) -> &str {
        match self {
            Self::Text(m) => &m.id,
            Self::Number(m) => &m.id,
            Self::Date(m) => &m.id,
            Self::Time(m) => &m.id,
            Self::Toggle(m) => &m.id,
            Self::ChoiceSet(m) => &m.id,
        }
    }

    /// Whether a value must be present for the element to validate.
    pub fn is_required(&self) -> bool {
        match self {
            Self::Text(m) => m.required,
            Self::Number(m) => m.required,
            Self::Date(m) => m.required,
            Self::Time(m) => m.required,
            Self::Toggle(m) => m.required,
            Self::ChoiceSet(m) => m.required,
        }
    }

    /// Kind tag used to select the matching value implementation.
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Text(_) => InputKind::Text,
            Self::Number(_) => InputKind::Number,
            Self::Date(_) => InputKind::Date,
            Self::Time(_) => InputKind::Time,
            Self::Toggle(_) => InputKind::Toggle,
            Self::ChoiceSet(_) => InputKind::ChoiceSet,
        }
    }
}
