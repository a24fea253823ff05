//! The field registry: descriptors per entity type, in declaration order.
//!
//! Built once at startup through [`RegistryBuilder`] and read-only after
//! that. A built [`Registry`] is `Send + Sync` and is meant to be shared
//! behind an `Arc` by every hydration call in the process.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::{EntityType, FieldDescriptor, Kind, Model, RegistryError};

/// Immutable map from entity type to its ordered field descriptors.
#[derive(Debug, Default)]
pub struct Registry {
    entities: HashMap<TypeId, Vec<FieldDescriptor>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Descriptors registered for a type, or `None` for plain types.
    pub fn fields(&self, id: TypeId) -> Option<&[FieldDescriptor]> {
        self.entities.get(&id).map(Vec::as_slice)
    }

    pub fn fields_of<T: 'static>(&self) -> Option<&[FieldDescriptor]> {
        self.fields(TypeId::of::<T>())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.entities.contains_key(&TypeId::of::<T>())
    }

    /// Number of entity types with at least one registered field.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Collects field declarations before freezing them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entities: HashMap<TypeId, Vec<FieldDescriptor>>,
}

impl RegistryBuilder {
    /// Registers the fields `T` declares through [`Model::declare`].
    pub fn register<T: Model>(self) -> Self {
        self.entity::<T>(T::declare)
    }

    /// Registers fields for `T` through a closure.
    pub fn entity<T: Model>(mut self, declare: impl FnOnce(&mut FieldSet)) -> Self {
        let mut fields = FieldSet::new(EntityType::of::<T>());
        declare(&mut fields);
        for descriptor in fields.into_descriptors() {
            self = self.descriptor(descriptor);
        }
        self
    }

    /// Adds a single descriptor, for declaration mechanisms that build them directly.
    pub fn descriptor(mut self, descriptor: FieldDescriptor) -> Self {
        self.entities
            .entry(descriptor.owner.id())
            .or_default()
            .push(descriptor);
        self
    }

    /// Freezes the declarations.
    ///
    /// Fails on an empty field name or alias, or when one type declares the
    /// same field twice.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut entities = HashMap::with_capacity(self.entities.len());
        for (id, descriptors) in self.entities {
            {
                let mut seen = HashSet::with_capacity(descriptors.len());
                for descriptor in &descriptors {
                    let entity = descriptor.owner.name();
                    if descriptor.name.is_empty() || descriptor.alias.as_deref() == Some("") {
                        return Err(RegistryError::EmptyName { entity });
                    }
                    if !seen.insert(descriptor.name.as_str()) {
                        return Err(RegistryError::DuplicateField {
                            entity,
                            field: descriptor.name.clone(),
                        });
                    }
                }
            }
            entities.insert(id, descriptors);
        }
        Ok(Registry { entities })
    }
}

/// Declaration surface handed to [`Model::declare`].
///
/// Each method appends one descriptor and returns it so an alias or the
/// array flag can be chained on.
#[derive(Debug)]
pub struct FieldSet {
    owner: EntityType,
    descriptors: Vec<FieldDescriptor>,
}

impl FieldSet {
    pub fn new(owner: EntityType) -> Self {
        Self {
            owner,
            descriptors: Vec::new(),
        }
    }

    pub fn owner(&self) -> EntityType {
        self.owner
    }

    pub fn add(&mut self, name: impl Into<String>, kind: Kind) -> &mut FieldDescriptor {
        let index = self.descriptors.len();
        self.descriptors
            .push(FieldDescriptor::new(self.owner, name, kind));
        &mut self.descriptors[index]
    }

    pub fn boolean(&mut self, name: &str) -> &mut FieldDescriptor {
        self.add(name, Kind::Boolean)
    }

    pub fn number(&mut self, name: &str) -> &mut FieldDescriptor {
        self.add(name, Kind::Number)
    }

    pub fn string(&mut self, name: &str) -> &mut FieldDescriptor {
        self.add(name, Kind::String)
    }

    pub fn date(&mut self, name: &str) -> &mut FieldDescriptor {
        self.add(name, Kind::Date)
    }

    /// An enum field restricted to `options`, compared by JSON equality.
    pub fn enumeration<I>(&mut self, name: &str, options: I) -> &mut FieldDescriptor
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let options = options.into_iter().map(Into::into).collect();
        self.add(name, Kind::Enum(options))
    }

    /// A nested entity field hydrated as `T`.
    pub fn object<T: Model>(&mut self, name: &str) -> &mut FieldDescriptor {
        self.add(name, Kind::Object(EntityType::of::<T>()))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn into_descriptors(self) -> Vec<FieldDescriptor> {
        self.descriptors
    }
}
