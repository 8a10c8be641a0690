//! Error types for type definitions and validation.

use thiserror::Error;

use super::path::PathStep;

/// Errors raised by engine operations.
///
/// These signal a misconfigured definition or registry. A value that simply
/// does not match its definition is reported through [`ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypedefError {
    /// A reference kind was not found in the supplied registry.
    #[error("unresolved type: {0}")]
    UnresolvedType(String),

    /// A path step does not apply to the kind reached so far.
    #[error("path step '{step}' is not applicable to kind {kind}")]
    IncompatiblePathStep { kind: String, step: PathStep },

    /// No coercion is registered for the kind pair.
    #[error("cannot coerce {from} to {to}")]
    UncoercibleType { from: String, to: String },

    /// A source shape field has no counterpart in the destination shape.
    #[error("destination shape has no field '{field}'")]
    MissingTargetField { field: String },

    /// A composite definition lacks an attribute its kind requires.
    #[error("invalid {kind} definition: {message}")]
    InvalidDefinition { kind: String, message: String },

    /// Recursion went deeper than the configured limit, usually a cyclic registry.
    #[error("type definition nesting exceeds depth limit {limit}")]
    RecursionLimit { limit: usize },

    /// Duplicate registry entry.
    #[error("duplicate type definition: {0}")]
    Duplicate(String),

    /// Registry entry named after a built-in kind.
    #[error("type name is reserved for a built-in kind: {0}")]
    ReservedName(String),
}

/// A mismatch between a value and its type definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required shape field is missing.
    #[error("missing required field: {path}")]
    MissingRequired { path: String },

    /// Value has the wrong type.
    #[error("invalid type at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// `null` where the definition forbids it.
    #[error("null is not allowed at '{path}'")]
    NullNotAllowed { path: String },

    /// Value is not one of the declared options.
    #[error("value {value} at '{path}' is not one of the declared options")]
    NotAnOption { path: String, value: String },
}

/// Result of validating a value against a type definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Whether the value is valid.
    pub valid: bool,
    /// Validation errors (empty if valid).
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a successful validation result.
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: vec![],
        }
    }

    /// Create a failed validation result with a single error.
    pub fn single_error(error: ValidationError) -> Self {
        Self {
            valid: false,
            errors: vec![error],
        }
    }

    /// Add an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.valid = false;
    }

    /// Merge another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        if !other.valid {
            self.valid = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_failure() {
        let mut result = ValidationResult::success();
        result.merge(ValidationResult::success());
        assert!(result.valid);

        result.merge(ValidationResult::single_error(ValidationError::NullNotAllowed {
            path: "$".to_string(),
        }));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = TypedefError::UncoercibleType {
            from: "string".into(),
            to: "int".into(),
        };
        assert_eq!(err.to_string(), "cannot coerce string to int");

        let err = TypedefError::IncompatiblePathStep {
            kind: "array".into(),
            step: PathStep::Key("name".into()),
        };
        assert_eq!(err.to_string(), "path step '.name' is not applicable to kind array");
    }
}
