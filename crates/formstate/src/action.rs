// File: formstate/src/action.rs
// Purpose: Actions accepted by the form state machine

use crate::value::Value;

/// An action applied to a [`FormState`](crate::FormState).
///
/// The action set is closed: a form only ever updates one field or re-derives
/// its aggregate validity.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Replace one field's value and re-validate that field.
    Update { name: String, value: Value },
    /// Recompute the aggregate validity flag; no field is touched.
    Validate,
}

impl FormAction {
    /// Shorthand for an [`Update`](FormAction::Update) action.
    pub fn update(name: impl Into<String>, value: impl Into<Value>) -> Self {
        FormAction::Update {
            name: name.into(),
            value: value.into(),
        }
    }
}
