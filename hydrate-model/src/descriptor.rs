use std::any::TypeId;
use std::fmt;

use serde_json::Value;

use crate::{Entity, Model};

/// Identity of an entity type, plus a way to build a default instance of it.
///
/// Used both as the owner of a [`FieldDescriptor`] and as the target of an
/// object-kind field.
#[derive(Clone, Copy)]
pub struct EntityType {
    id: TypeId,
    name: &'static str,
    make: fn() -> Box<dyn Entity>,
}

fn make_default<T: Model>() -> Box<dyn Entity> {
    Box::new(T::default())
}

impl EntityType {
    /// The entity type for `T`.
    pub fn of<T: Model>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::type_name(),
            make: make_default::<T>,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// A fresh instance carrying the type's declaration-time defaults.
    pub fn instantiate(&self) -> Box<dyn Entity> {
        (self.make)()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityType").field(&self.name).finish()
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityType {}

/// What a field is validated against.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Boolean,
    Number,
    String,
    Date,
    /// One of a fixed, ordered set of allowed values.
    Enum(Vec<Value>),
    /// A nested entity, hydrated recursively.
    Object(EntityType),
}

impl Kind {
    /// Short lowercase name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Date => "date",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
        }
    }
}

/// Metadata for one declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub owner: EntityType,
    /// Name of the field on the entity, and the default source key.
    pub name: String,
    pub kind: Kind,
    /// The field holds a sequence of `kind` rather than a single value.
    pub is_array: bool,
    /// Source key that takes precedence over `name` when present in the input.
    pub alias: Option<String>,
}

impl FieldDescriptor {
    pub fn new(owner: EntityType, name: impl Into<String>, kind: Kind) -> Self {
        Self {
            owner,
            name: name.into(),
            kind,
            is_array: false,
            alias: None,
        }
    }

    /// Marks the field as a sequence of its kind.
    pub fn array(&mut self) -> &mut Self {
        self.is_array = true;
        self
    }

    /// Reads the field from `alias` instead of its own name when that key exists.
    pub fn with_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }
}
