// File: formstate-patterns/src/lib.rs
// Purpose: Compiled matchers and per-type pattern resolution

//! # formstate-patterns
//!
//! Default validation patterns for form fields, keyed by a field-type tag.
//!
//! Every field type maps to one compiled regular expression. A caller-supplied
//! override pattern always takes precedence over the type's default. Unknown
//! tags (and `FILE`, which carries no pattern of its own) fall back to the
//! match-anything `ANY` pattern, so resolution never fails.
//!
//! ```rust,ignore
//! use formstate_patterns::{resolve_pattern, Pattern};
//!
//! let email = resolve_pattern("EMAIL", None);
//! assert!(email.matches("user@example.com"));
//!
//! let exact = Pattern::new("^42$")?;
//! let overridden = resolve_pattern("NUMBER", Some(&exact));
//! assert!(!overridden.matches("7"));
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Pattern
// =============================================================================

/// A compiled validation pattern.
///
/// Thin wrapper around [`regex::Regex`] so the rest of the workspace deals in
/// one matcher type. Cloning is cheap (the compiled program is shared).
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from its source expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Test whether `input` satisfies this pattern.
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The source expression this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Default patterns per field type
// =============================================================================

// Any string, including empty
static ANY_PATTERN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"^.*$").unwrap());

// One or more letters and spaces
static TEXT_PATTERN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"^[a-zA-Z ]+$").unwrap());

// Letters, whitespace, or literal periods
static TEXTAREA_PATTERN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"^[a-zA-Z\s.]+$").unwrap());

// local@domain, both sides non-empty runs of digits/letters/periods
static EMAIL_PATTERN: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(r"^[.0-9A-Za-z]+@[.0-9A-Za-z]+$").unwrap());

// At least 8 characters of any kind
static PASSWORD_PATTERN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r".{8,}").unwrap());

// One or more digits
static NUMBER_PATTERN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"^[0-9]+$").unwrap());

// Exactly 12 to 14 digits
static PHONE_PATTERN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"^[0-9]{12,14}$").unwrap());

// =============================================================================
// Resolution
// =============================================================================

/// Resolve the effective validation pattern for a field.
///
/// An override pattern always wins, regardless of the type tag. Otherwise the
/// tag is matched case-insensitively against the built-in set; `FILE` and any
/// unrecognized tag delegate to `ANY` rather than erroring.
pub fn resolve_pattern(type_tag: &str, override_pattern: Option<&Pattern>) -> Pattern {
    if let Some(pattern) = override_pattern {
        return pattern.clone();
    }

    match type_tag.to_uppercase().as_str() {
        "ANY" => ANY_PATTERN.clone(),
        "TEXT" => TEXT_PATTERN.clone(),
        "TEXTAREA" => TEXTAREA_PATTERN.clone(),
        "EMAIL" => EMAIL_PATTERN.clone(),
        "PASSWORD" => PASSWORD_PATTERN.clone(),
        "NUMBER" => NUMBER_PATTERN.clone(),
        "PHONE" => PHONE_PATTERN.clone(),
        // File inputs carry no pattern of their own
        "FILE" => resolve_pattern("ANY", None),
        _ => resolve_pattern("ANY", None),
    }
}

// =============================================================================
// Tests
// =============================================================================
