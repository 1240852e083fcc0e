//! Identifier validation for the generator form.
//!
//! Class and package names are checked against a set of allowed characters.
//! The result is advisory: it only drives the error indicator of the control
//! group and never blocks a submission.

use serde::{Deserialize, Serialize};

/// Allowed character class for an identifier field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierRule {
    /// `[0-9a-zA-Z_$]`
    ClassName,
    /// `[0-9a-zA-Z_$.]`
    PackageName,
}

impl IdentifierRule {
    /// Returns true when `c` belongs to the allowed class.
    pub fn allows(&self, c: char) -> bool {
        let base = c.is_ascii_alphanumeric() || c == '_' || c == '$';
        match self {
            IdentifierRule::ClassName => base,
            IdentifierRule::PackageName => base || c == '.',
        }
    }

    /// First character of `value` outside the allowed class.
    pub fn first_forbidden(&self, value: &str) -> Option<char> {
        value.chars().find(|c| !self.allows(*c))
    }
}

/// Outcome of a validation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
}

impl Validation {
    pub fn is_error(&self) -> bool {
        !self.valid
    }
}

/// Empty values and values with a forbidden character are invalid.
pub fn validate(value: &str, rule: IdentifierRule) -> Validation {
    Validation {
        valid: !value.is_empty() && rule.first_forbidden(value).is_none(),
    }
}
