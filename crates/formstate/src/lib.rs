// File: formstate/src/lib.rs
// Purpose: Main entry point for the formstate library

//! # formstate
//!
//! A small form-state machine: declare fields once, feed it user edits, read
//! back an immutable snapshot with per-field and whole-form validity.
//!
//! Validation is pattern-based. Each field's type tag selects a default
//! pattern (see [`formstate-patterns`](formstate_patterns)); a definition may
//! carry an explicit override pattern that always wins.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use formstate::{FieldDefinition, FormController};
//!
//! let mut definitions = HashMap::new();
//! definitions.insert("email".to_string(), FieldDefinition::new("EMAIL"));
//! definitions.insert("age".to_string(), FieldDefinition::new("NUMBER"));
//!
//! let mut form = FormController::new(definitions);
//! form.validate(); // one explicit pass before trusting the aggregate flag
//!
//! form.set("email", "user@example.com")?;
//! form.set("age", "30")?;
//!
//! let snapshot = form.snapshot();
//! assert!(snapshot.is_valid);
//! ```
//!
//! The lower-level `initialize` / `apply` functions are exposed for embedders
//! that want to drive the state machine directly and keep their own history
//! of snapshots.

pub mod action;
pub mod controller;
pub mod error;
pub mod snapshot;
pub mod state;
pub mod value;

// Re-export main types
pub use action::FormAction;
pub use controller::FormController;
pub use error::FormError;
pub use snapshot::{FieldView, FormSnapshot};
pub use state::{apply, derive_validity, initialize, FieldDefinition, FieldState, FormState};
pub use value::Value;

// Re-export the pattern resolver for callers building override patterns
pub use formstate_patterns::{resolve_pattern, Pattern};
