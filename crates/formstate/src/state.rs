// File: formstate/src/state.rs
// Purpose: Form state machine core (initialize / apply / derive_validity)

use std::collections::HashMap;

use formstate_patterns::{resolve_pattern, Pattern};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::FormAction;
use crate::error::FormError;
use crate::value::Value;

// =============================================================================
// Definitions
// =============================================================================

/// Declarative description of one form field, supplied once at
/// initialization.
///
/// The `kind` tag selects the default validation pattern; an explicit
/// `pattern` override always wins over the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field-type tag (e.g. "TEXT", "EMAIL", "NUMBER"). Case-insensitive.
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional override pattern, taking precedence over the kind's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
}

impl FieldDefinition {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            pattern: None,
        }
    }

    /// Attach an override pattern.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

// =============================================================================
// State
// =============================================================================

/// Live state of one field: its definition carried through, the current
/// value, and whether that value satisfies the effective pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    kind: String,
    pattern: Option<Pattern>,
    value: Value,
    is_valid: bool,
}

impl FieldState {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// One immutable snapshot of the whole form.
///
/// Transitions never mutate a `FormState` in place; [`apply`] returns a new
/// value, so holders of an earlier snapshot are unaffected. The field key set
/// is fixed at initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    is_valid: bool,
    fields: HashMap<String, FieldState>,
}

impl FormState {
    /// Aggregate validity: the AND of every field's validity.
    ///
    /// Conservatively `false` straight after [`initialize`] until the first
    /// `Validate` (or `Update`) action brings it in sync.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn fields(&self) -> &HashMap<String, FieldState> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Build the initial [`FormState`] from a field-definition map.
///
/// Every field starts with an empty textual value and a validity computed
/// against that empty value. The aggregate flag starts `false` regardless of
/// the per-field results; the embedding layer must apply one `Validate`
/// action after the state is first observable before trusting it.
pub fn initialize(definitions: HashMap<String, FieldDefinition>) -> FormState {
    let fields: HashMap<String, FieldState> = definitions
        .into_iter()
        .map(|(name, FieldDefinition { kind, pattern })| {
            let value = Value::from("");
            let is_valid = resolve_pattern(&kind, pattern.as_ref()).matches(&value.render());
            (
                name,
                FieldState {
                    kind,
                    pattern,
                    value,
                    is_valid,
                },
            )
        })
        .collect();

    debug!(fields = fields.len(), "form initialized");
    FormState {
        is_valid: false,
        fields,
    }
}

/// Apply one action to a form state, producing the next state.
///
/// `Update` trims textual values, re-validates the named field against its
/// effective pattern and re-derives the aggregate flag; no other field is
/// touched. `Validate` re-derives the aggregate flag only. Updating a field
/// that was never defined is a caller bug and fails with
/// [`FormError::UnknownField`].
pub fn apply(state: &FormState, action: FormAction) -> Result<FormState, FormError> {
    let mut next = state.clone();

    match action {
        FormAction::Update { name, value } => {
            let field_valid = {
                let field = next
                    .fields
                    .get_mut(&name)
                    .ok_or_else(|| FormError::UnknownField(name.clone()))?;
                let value = value.normalized();
                field.is_valid =
                    resolve_pattern(&field.kind, field.pattern.as_ref()).matches(&value.render());
                field.value = value;
                field.is_valid
            };
            next.is_valid = derive_validity(&next.fields);
            debug!(field = %name, valid = field_valid, form_valid = next.is_valid, "field updated");
        }
        FormAction::Validate => {
            next.is_valid = derive_validity(&next.fields);
            debug!(form_valid = next.is_valid, "form validated");
        }
    }

    Ok(next)
}

/// Whole-form validity: the AND of every field's validity flag.
///
/// Vacuously `true` for a form with no fields.
pub fn derive_validity(fields: &HashMap<String, FieldState>) -> bool {
    fields.values().all(|field| field.is_valid)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample_definitions() -> HashMap<String, FieldDefinition> {
        let mut definitions = HashMap::new();
        definitions.insert("email".to_string(), FieldDefinition::new("EMAIL"));
        definitions.insert("age".to_string(), FieldDefinition::new("NUMBER"));
        definitions
    }

    #[test]
    fn test_initialize_keeps_definition_key_set() {
        let state = initialize(sample_definitions());

        let mut names: Vec<&str> = state.fields().keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["age", "email"]);

        for field in state.fields().values() {
            assert_eq!(field.value(), &Value::from(""));
        }
    }

    #[test]
    fn test_initialize_field_validity_reflects_empty_value() {
        let mut definitions = HashMap::new();
        definitions.insert("note".to_string(), FieldDefinition::new("ANY"));
        definitions.insert("name".to_string(), FieldDefinition::new("TEXT"));
        let state = initialize(definitions);

        // ANY matches the empty string, TEXT requires one or more letters
        assert!(state.field("note").unwrap().is_valid());
        assert!(!state.field("name").unwrap().is_valid());
    }

    #[test]
    fn test_aggregate_starts_false_even_when_all_fields_valid() {
        let mut definitions = HashMap::new();
        definitions.insert("attachment".to_string(), FieldDefinition::new("FILE"));
        let state = initialize(definitions);

        assert!(state.field("attachment").unwrap().is_valid());
        assert!(!state.is_valid());

        // One Validate pass brings the aggregate in sync
        let state = apply(&state, FormAction::Validate).unwrap();
        assert!(state.is_valid());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let state = initialize(sample_definitions());
        let once = apply(&state, FormAction::Validate).unwrap();
        let twice = apply(&once, FormAction::Validate).unwrap();
        assert_eq!(once.is_valid(), twice.is_valid());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_touches_only_the_named_field() {
        let state = initialize(sample_definitions());
        let next = apply(&state, FormAction::update("email", "a@b.com")).unwrap();

        assert_eq!(next.field("age"), state.field("age"));
        assert_eq!(next.field("email").unwrap().value(), &Value::from("a@b.com"));
        assert!(next.field("email").unwrap().is_valid());
    }

    #[test]
    fn test_update_leaves_prior_snapshot_intact() {
        let state = initialize(sample_definitions());
        let _next = apply(&state, FormAction::update("age", "30")).unwrap();

        // The input snapshot is unchanged
        assert_eq!(state.field("age").unwrap().value(), &Value::from(""));
    }

    #[test]
    fn test_update_trims_textual_values() {
        let mut definitions = HashMap::new();
        definitions.insert("name".to_string(), FieldDefinition::new("TEXT"));
        let state = initialize(definitions);

        let next = apply(&state, FormAction::update("name", "  hello  ")).unwrap();
        let field = next.field("name").unwrap();
        assert_eq!(field.value(), &Value::from("hello"));
        assert!(field.is_valid());
    }

    #[test]
    fn test_update_passes_non_textual_values_through() {
        let mut definitions = HashMap::new();
        definitions.insert("attachment".to_string(), FieldDefinition::new("FILE"));
        let state = initialize(definitions);

        let next = apply(&state, FormAction::update("attachment", 3i64)).unwrap();
        let field = next.field("attachment").unwrap();
        assert_eq!(field.value(), &Value::Number(3.0));
        assert!(field.is_valid());
    }

    #[test]
    fn test_override_pattern_wins_over_kind_default() {
        let mut definitions = HashMap::new();
        definitions.insert(
            "answer".to_string(),
            FieldDefinition::new("NUMBER").with_pattern(Pattern::new("^42$").unwrap()),
        );
        let state = initialize(definitions);

        // "7" satisfies the NUMBER default but not the override
        let next = apply(&state, FormAction::update("answer", "7")).unwrap();
        assert!(!next.field("answer").unwrap().is_valid());

        let next = apply(&next, FormAction::update("answer", "42")).unwrap();
        assert!(next.field("answer").unwrap().is_valid());
    }

    #[rstest]
    #[case("NUMBER", "30", true)]
    #[case("NUMBER", "thirty", false)]
    #[case("TEXT", "hello world", true)]
    #[case("TEXT", "hello1", false)]
    #[case("PHONE", "12345678901", false)]      // 11 digits
    #[case("PHONE", "123456789012", true)]      // 12 digits
    #[case("PHONE", "12345678901234", true)]    // 14 digits
    #[case("PHONE", "123456789012345", false)]  // 15 digits
    fn test_update_validity_follows_kind_pattern(
        #[case] kind: &str,
        #[case] input: &str,
        #[case] expected: bool,
    ) {
        let mut definitions = HashMap::new();
        definitions.insert("field".to_string(), FieldDefinition::new(kind));
        let state = initialize(definitions);

        let next = apply(&state, FormAction::update("field", input)).unwrap();
        assert_eq!(next.field("field").unwrap().is_valid(), expected);
    }

    #[test]
    fn test_unknown_field_update_fails() {
        let state = initialize(sample_definitions());
        let result = apply(&state, FormAction::update("nonexistent", "x"));
        assert_eq!(
            result,
            Err(FormError::UnknownField("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_update_recomputes_aggregate() {
        let state = initialize(sample_definitions());

        let state = apply(&state, FormAction::update("email", "a@b.com")).unwrap();
        assert!(!state.is_valid()); // age still empty

        let state = apply(&state, FormAction::update("age", "30")).unwrap();
        assert!(state.is_valid());

        let state = apply(&state, FormAction::update("age", "not a number")).unwrap();
        assert!(!state.is_valid());
    }

    #[test]
    fn test_empty_form_aggregate_is_vacuously_true_after_validate() {
        let state = initialize(HashMap::new());
        assert!(!state.is_valid());

        let state = apply(&state, FormAction::Validate).unwrap();
        assert!(state.is_valid());
    }

    #[test]
    fn test_derive_validity_is_the_and_of_field_validities() {
        let state = initialize(sample_definitions());
        assert!(!derive_validity(state.fields()));

        let state = apply(&state, FormAction::update("email", "a@b.com")).unwrap();
        let state = apply(&state, FormAction::update("age", "30")).unwrap();
        assert!(derive_validity(state.fields()));
    }

    #[test]
    fn test_definition_deserializes_from_json() {
        let definition: FieldDefinition =
            serde_json::from_str(r#"{"type": "NUMBER", "pattern": "^42$"}"#).unwrap();
        assert_eq!(definition.kind, "NUMBER");
        assert!(definition.pattern.unwrap().matches("42"));

        let bare: FieldDefinition = serde_json::from_str(r#"{"type": "EMAIL"}"#).unwrap();
        assert_eq!(bare.kind, "EMAIL");
        assert!(bare.pattern.is_none());
    }
}
