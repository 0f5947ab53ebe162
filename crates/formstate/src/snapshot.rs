// File: formstate/src/snapshot.rs
// Purpose: Read-only form view handed to the rendering layer

use std::collections::HashMap;

use serde::Serialize;

use crate::state::FormState;
use crate::value::Value;

/// Read-only view of one field: current value and validity, nothing else.
///
/// The field's type tag and pattern are deliberately stripped so presentation
/// code cannot depend on validation internals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub value: Value,
    pub is_valid: bool,
}

/// Read-only view of the whole form, shaped as
/// `{ isValid, fields: { name: { value, isValid } } }` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub is_valid: bool,
    pub fields: HashMap<String, FieldView>,
}

impl From<&FormState> for FormSnapshot {
    fn from(state: &FormState) -> Self {
        let fields = state
            .fields()
            .iter()
            .map(|(name, field)| {
                (
                    name.clone(),
                    FieldView {
                        value: field.value().clone(),
                        is_valid: field.is_valid(),
                    },
                )
            })
            .collect();

        FormSnapshot {
            is_valid: state.is_valid(),
            fields,
        }
    }
}
