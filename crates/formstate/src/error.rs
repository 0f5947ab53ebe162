// File: formstate/src/error.rs
// Purpose: Form state machine errors

/// Errors produced by the form state machine.
///
/// Invalid user input is never an error; it is reported as data through the
/// per-field and aggregate validity flags. Only structural misuse of the API
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// An update named a field that was never defined. Always a caller bug
    /// (the field definitions and the update calls disagree), not something
    /// a retry can fix.
    #[error("unknown form field: {0}")]
    UnknownField(String),
}
