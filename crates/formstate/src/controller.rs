// File: formstate/src/controller.rs
// Purpose: Setter-style owner of the current form state

use std::collections::HashMap;

use tracing::debug;

use crate::action::FormAction;
use crate::error::FormError;
use crate::snapshot::FormSnapshot;
use crate::state::{apply, initialize, FieldDefinition, FormState};
use crate::value::Value;

/// Owns the current [`FormState`] and exposes the narrow surface an embedding
/// UI layer needs: one setter per user edit plus a filtered snapshot.
///
/// # Lifecycle contract
///
/// The controller never validates on its own. The embedder must:
/// 1. construct the controller once per logical form instance,
/// 2. call [`validate`](FormController::validate) exactly once after the form
///    is first observable — before that pass the aggregate flag is
///    conservatively `false`,
/// 3. call [`set`](FormController::set) per user edit,
/// 4. treat each returned snapshot as immutable and discard previous ones.
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use formstate::{FieldDefinition, FormController};
///
/// let mut definitions = HashMap::new();
/// definitions.insert("email".to_string(), FieldDefinition::new("EMAIL"));
///
/// let mut form = FormController::new(definitions);
/// form.validate();
/// form.set("email", "user@example.com")?;
/// assert!(form.snapshot().is_valid);
/// ```
#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    /// Initialize a form from its field definitions.
    pub fn new(definitions: HashMap<String, FieldDefinition>) -> Self {
        Self {
            state: initialize(definitions),
        }
    }

    /// Bring the aggregate validity flag in sync with the per-field flags.
    ///
    /// Must run once after construction before the aggregate flag is
    /// trustworthy; running it again is a harmless no-op.
    pub fn validate(&mut self) {
        // Validate never names a field and cannot fail
        if let Ok(next) = apply(&self.state, FormAction::Validate) {
            self.state = next;
        }
    }

    /// Record a user edit: set `name` to `value` and re-validate.
    ///
    /// Fails with [`FormError::UnknownField`] when `name` was never defined —
    /// a bug in the embedder, not a user-input problem.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<(), FormError> {
        let name = name.into();
        let next = apply(&self.state, FormAction::update(name.clone(), value))?;
        self.state = next;
        debug!(field = %name, form_valid = self.state.is_valid(), "field set");
        Ok(())
    }

    /// The filtered read-only view for the rendering layer.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::from(&self.state)
    }

    /// The full current state, for embedders that need field metadata.
    pub fn state(&self) -> &FormState {
        &self.state
    }
}
