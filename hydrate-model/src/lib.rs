//! Core model types for hydrate.
//!
//! Defines everything the hydration engine reads from or writes to:
//! - [`Entity`] / [`Model`]: the capabilities a hydratable type exposes
//! - [`FieldDescriptor`] / [`Kind`]: how one field is validated and where its value comes from
//! - [`Registry`]: the immutable, build-once store of descriptors per entity type
//! - [`FieldValue`]: a coerced value on its way into an entity field
//! - [`Diagnostic`] / [`Reason`]: the record of one coercion decision
//!
//! Nothing in this crate inspects raw input; that is `hydrate-engine`'s job.

mod descriptor;
mod diagnostic;
mod entity;
mod error;
mod registry;
mod value;

pub use descriptor::{EntityType, FieldDescriptor, Kind};
pub use diagnostic::{Diagnostic, Reason, UNDEFINED};
pub use entity::{AnyEntity, Entity, Model};
pub use error::{FieldError, FieldResult, RegistryError};
pub use registry::{FieldSet, Registry, RegistryBuilder};
pub use value::{FieldValue, is_truthy};
