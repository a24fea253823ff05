//! Error types for hydration.

use hydrate_model::FieldError;
use thiserror::Error;

/// Result type for hydration operations.
pub type HydrateResult<T> = Result<T, HydrateError>;

/// An entity type rejected a value for one of its own declared fields.
///
/// This is a programming error in the entity or its declaration, never a
/// consequence of bad input, so hydration stops at the first one.
#[derive(Debug, Error)]
pub enum HydrateError {
    #[error("{entity}.{field}: {source}")]
    Field {
        entity: &'static str,
        field: String,
        #[source]
        source: FieldError,
    },
}

impl HydrateError {
    pub(crate) fn field(entity: &'static str, field: &str, source: FieldError) -> Self {
        Self::Field {
            entity,
            field: field.to_string(),
            source,
        }
    }
}
