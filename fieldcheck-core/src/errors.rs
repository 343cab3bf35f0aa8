// Validation errors

use crate::rules::Bound;
use std::fmt;
use thiserror::Error;

/// Delimiter placed between failures when a [`ValidationErrors`] is rendered.
pub const DEFAULT_DELIMITER: &str = " >>= ";

/// Top-level error returned by [`validate`](crate::validate).
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The inspected value is not a plain aggregate of named fields.
    #[error("wrong argument given, should be a struct")]
    NotAStructure {
        /// Shape that was found instead
        found: &'static str,
    },

    /// One or more annotated fields failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// Per-field failures, if this is an aggregate error.
    pub fn failures(&self) -> Option<&ValidationErrors> {
        match self {
            Error::Invalid(errors) => Some(errors),
            Error::NotAStructure { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Cause of a single field failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    #[error("invalid validator syntax")]
    InvalidSyntax,

    #[error("validation for unexported field is not allowed")]
    UnexportedField,

    #[error("used unsupported type with validator")]
    UnsupportedType { type_name: String },

    #[error("used unsupported validator")]
    UnsupportedValidator,

    #[error("Integer {value} is {} than {bound}", .direction.relation())]
    IntegerOutOfBounds {
        value: i128,
        bound: i64,
        direction: Bound,
    },

    #[error("Length of string {value} is {} than {bound}", .direction.relation())]
    LengthOutOfBounds {
        value: String,
        length: usize,
        bound: i64,
        direction: Bound,
    },

    #[error("Length of string {value} is not equal to {expected}")]
    LengthMismatch {
        value: String,
        length: usize,
        expected: i64,
    },

    #[error("value is not found")]
    NotFound,
}

impl FailureKind {
    /// Stable machine-readable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::InvalidSyntax => "invalid_syntax",
            FailureKind::UnexportedField => "unexported_field",
            FailureKind::UnsupportedType { .. } => "unsupported_type",
            FailureKind::UnsupportedValidator => "unsupported_validator",
            FailureKind::IntegerOutOfBounds { .. } => "integer_out_of_bounds",
            FailureKind::LengthOutOfBounds { .. } => "length_out_of_bounds",
            FailureKind::LengthMismatch { .. } => "length_mismatch",
            FailureKind::NotFound => "not_found",
        }
    }

    /// Whether this failure is a rule violation rather than a usage problem.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            FailureKind::IntegerOutOfBounds { .. }
                | FailureKind::LengthOutOfBounds { .. }
                | FailureKind::LengthMismatch { .. }
                | FailureKind::NotFound
        )
    }
}

/// Validation failure for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Raw annotation attached to the field
    pub annotation: String,

    /// What went wrong
    pub kind: FailureKind,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, annotation: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            field: field.into(),
            annotation: annotation.into(),
            kind,
        }
    }

    /// Rule name portion of the annotation, if there is one.
    pub fn rule_name(&self) -> Option<&str> {
        self.annotation.split_once(':').map(|(name, _)| name)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ValidationError {}

/// Ordered collection of validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
    delimiter: String,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self {
            errors,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Set the delimiter used by `Display`
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over errors in field order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Failure kinds in field order
    pub fn kinds(&self) -> Vec<&FailureKind> {
        self.errors.iter().map(|e| &e.kind).collect()
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "annotation": e.annotation,
                    "code": e.kind.code(),
                    "message": e.kind.to_string(),
                })
            }).collect::<Vec<_>>()
        })
    }

    /// Consume the collection, returning the failures
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.delimiter)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidationErrors {
        ValidationErrors::new(vec![
            ValidationError::new("age", "max:10", FailureKind::IntegerOutOfBounds {
                value: 42,
                bound: 10,
                direction: Bound::Upper,
            }),
            ValidationError::new("role", "in:admin,user", FailureKind::NotFound),
        ])
    }

    #[test]
    fn test_display_joins_without_trailing_delimiter() {
        assert_eq!(
            sample().to_string(),
            "Integer 42 is greater than 10 >>= value is not found"
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let errors = sample().with_delimiter("; ");
        assert_eq!(
            errors.to_string(),
            "Integer 42 is greater than 10; value is not found"
        );
    }

    #[test]
    fn test_single_error_has_no_delimiter() {
        let errors = ValidationErrors::new(vec![ValidationError::new(
            "name",
            "max",
            FailureKind::InvalidSyntax,
        )]);
        assert_eq!(errors.to_string(), "invalid validator syntax");
    }

    #[test]
    fn test_kind_messages() {
        let bound = FailureKind::LengthOutOfBounds {
            value: "ab".to_string(),
            length: 2,
            bound: 5,
            direction: Bound::Lower,
        };
        assert_eq!(bound.to_string(), "Length of string ab is less than 5");

        let mismatch = FailureKind::LengthMismatch {
            value: "ab".to_string(),
            length: 2,
            expected: 3,
        };
        assert_eq!(mismatch.to_string(), "Length of string ab is not equal to 3");

        assert_eq!(
            FailureKind::UnexportedField.to_string(),
            "validation for unexported field is not allowed"
        );
        assert_eq!(
            FailureKind::UnsupportedType {
                type_name: "f64".to_string()
            }
            .to_string(),
            "used unsupported type with validator"
        );
    }

    #[test]
    fn test_field_lookup_and_json() {
        let errors = sample();
        assert_eq!(errors.get_field_errors("role").len(), 1);
        assert!(errors.get_field_errors("missing").is_empty());

        let json = errors.to_json();
        assert_eq!(json["errors"][0]["field"], "age");
        assert_eq!(json["errors"][0]["code"], "integer_out_of_bounds");
        assert_eq!(json["errors"][1]["message"], "value is not found");
    }

    #[test]
    fn test_rule_name() {
        let error = ValidationError::new("x", "len:3", FailureKind::InvalidSyntax);
        assert_eq!(error.rule_name(), Some("len"));
        let error = ValidationError::new("x", "len", FailureKind::InvalidSyntax);
        assert_eq!(error.rule_name(), None);
    }

    #[test]
    fn test_not_a_structure_message() {
        let error = Error::NotAStructure { found: "scalar" };
        assert_eq!(error.to_string(), "wrong argument given, should be a struct");
        assert!(error.failures().is_none());
    }
}
