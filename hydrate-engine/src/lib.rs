//! Hydration engine for hydrate.
//!
//! Turns loosely-typed JSON into populated [`Entity`](hydrate_model::Entity)
//! instances:
//! - [`validate`]: per-kind coercion of a single raw value into a [`FieldValue`](hydrate_model::FieldValue)
//! - [`Hydrator`]: walks an entity's registered fields, resolving aliases,
//!   keeping defaults and recursing into nested objects
//! - [`DiagnosticSink`]: receives one [`Diagnostic`](hydrate_model::Diagnostic) per coercion problem
//!
//! Malformed input never produces an error here. It degrades to null or an
//! empty sequence and a reason code. The only error, [`HydrateError`], means
//! an entity type disagrees with its own declared fields.

mod error;
mod hydrator;
mod options;
mod sink;
pub mod validate;

pub use error::{HydrateError, HydrateResult};
pub use hydrator::Hydrator;
pub use options::HydrateOptions;
pub use sink::{DiagnosticLog, DiagnosticSink, TracingSink};
pub use validate::Validation;
