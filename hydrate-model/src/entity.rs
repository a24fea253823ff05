use std::any::Any;
use std::fmt;

use crate::{FieldError, FieldSet, FieldValue};

/// A type whose declared fields can be populated from raw input.
///
/// The hydrator only ever touches fields that have a descriptor in the
/// registry. Everything else on the type is left to its constructor.
///
/// Implementors must also be `Clone + PartialEq`; the object-safe plumbing
/// for that lives in [`AnyEntity`] and is provided by a blanket impl.
pub trait Entity: AnyEntity + fmt::Debug + Send + Sync + 'static {
    /// Whether this instance is acceptable after hydration.
    ///
    /// Nested objects and collection members that fail this check are
    /// discarded. Most types never need to override it.
    fn is_valid(&self) -> bool {
        true
    }

    /// Current value of a declared field, or `None` if the name is unknown.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Writes a coerced value into a declared field.
    ///
    /// Return [`FieldError::Unknown`] for names the type does not have and
    /// [`FieldError::Mismatch`] when the value cannot be stored.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError>;
}

/// Object-safe helpers every [`Entity`] gets for free.
///
/// Lets `Box<dyn Entity>` be cloned, compared and downcast back to the
/// concrete type once a nested object has been validated.
pub trait AnyEntity {
    fn clone_boxed(&self) -> Box<dyn Entity>;
    fn eq_entity(&self, other: &dyn Entity) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Entity + Clone + PartialEq> AnyEntity for T {
    fn clone_boxed(&self) -> Box<dyn Entity> {
        Box::new(self.clone())
    }

    fn eq_entity(&self, other: &dyn Entity) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Clone for Box<dyn Entity> {
    fn clone(&self) -> Self {
        (**self).clone_boxed()
    }
}

impl PartialEq for dyn Entity {
    fn eq(&self, other: &Self) -> bool {
        self.eq_entity(other)
    }
}

/// An [`Entity`] that can be constructed with baseline defaults and that
/// declares its own fields.
pub trait Model: Entity + Default {
    /// Name used in diagnostics. Defaults to the unqualified type name.
    fn type_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Registers this type's fields, in traversal order.
    ///
    /// The default declares nothing, which makes hydration a no-op.
    fn declare(fields: &mut FieldSet) {
        let _ = fields;
    }
}
