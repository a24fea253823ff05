//! Error types for the model layer.
//!
//! None of these describe bad input data. Malformed values are reported as
//! [`Reason`](crate::Reason)s; these errors mean the entity types or their
//! declarations disagree with each other.

use thiserror::Error;

/// Result type for field access.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised by an entity when a coerced value cannot be stored.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The entity has no field with this name.
    #[error("unknown field: {0}")]
    Unknown(String),

    /// The coerced value does not fit the field's Rust type.
    #[error("type mismatch: expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An enum value could not be decoded into the field's Rust type.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FieldError {
    /// Shorthand for a [`FieldError::Unknown`].
    pub fn unknown(name: &str) -> Self {
        Self::Unknown(name.to_string())
    }
}

/// Errors raised while building a [`Registry`](crate::Registry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The same field name was declared twice on one entity type.
    #[error("duplicate field '{field}' on {entity}")]
    DuplicateField { entity: &'static str, field: String },

    /// A field or alias was declared with an empty name.
    #[error("empty field name or alias on {entity}")]
    EmptyName { entity: &'static str },
}
