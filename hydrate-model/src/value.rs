use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Entity, FieldError, FieldResult};

/// A coerced value, ready to be written into an entity field.
///
/// Produced by the validator, consumed by [`Entity::set_field`]. Array
/// fields always coerce to [`FieldValue::Array`], never to `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    /// A member of an enum field's allowed set, as it appeared in the input.
    Enum(Value),
    Object(Box<dyn Entity>),
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Wraps an optional nested entity.
    pub fn object<T: Entity>(entity: Option<T>) -> Self {
        entity.map_or(Self::Null, |entity| Self::Object(Box::new(entity)))
    }

    /// Wraps a list of nested entities.
    pub fn objects<T: Entity>(entities: Vec<T>) -> Self {
        Self::Array(
            entities
                .into_iter()
                .map(|entity| Self::Object(Box::new(entity)))
                .collect(),
        )
    }

    /// Encodes an optional enum-like value through serde.
    pub fn enumeration<T: Serialize>(value: Option<&T>) -> Self {
        value
            .and_then(|value| serde_json::to_value(value).ok())
            .map_or(Self::Null, Self::Enum)
    }

    /// Encodes a list of enum-like values through serde.
    pub fn enumerations<T: Serialize>(values: &[T]) -> Self {
        Self::Array(
            values
                .iter()
                .map(|value| Self::enumeration(Some(value)))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Truthiness as used for default-value precedence.
    ///
    /// Dates, objects and arrays are always truthy, including empty arrays.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Enum(value) => is_truthy(value),
            Self::Date(_) | Self::Object(_) | Self::Array(_) => true,
        }
    }

    /// Short lowercase name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Downcasts a nested object back into its concrete type.
    pub fn into_entity<T: Entity>(self) -> FieldResult<Option<T>> {
        match self {
            Self::Null => Ok(None),
            Self::Object(entity) => entity
                .into_any()
                .downcast::<T>()
                .map(|entity| Some(*entity))
                .map_err(|_| FieldError::Mismatch {
                    expected: std::any::type_name::<T>(),
                    found: "object",
                }),
            other => Err(mismatch("object", &other)),
        }
    }

    /// Downcasts every element of an object array, flattening nested arrays.
    pub fn into_entities<T: Entity>(self) -> FieldResult<Vec<T>> {
        match self {
            Self::Null => Ok(Vec::new()),
            Self::Array(items) => leaves(items)
                .into_iter()
                .filter_map(|item| item.into_entity::<T>().transpose())
                .collect(),
            other => Err(mismatch("array", &other)),
        }
    }

    /// Decodes an enum value into a Rust type through serde.
    pub fn decode<T: DeserializeOwned>(self) -> FieldResult<Option<T>> {
        match self {
            Self::Null => Ok(None),
            Self::Enum(value) => Ok(Some(serde_json::from_value(value)?)),
            other => Err(mismatch("enum", &other)),
        }
    }

    /// Decodes every element of an enum array, flattening nested arrays.
    pub fn decode_all<T: DeserializeOwned>(self) -> FieldResult<Vec<T>> {
        match self {
            Self::Null => Ok(Vec::new()),
            Self::Array(items) => leaves(items)
                .into_iter()
                .filter_map(|item| item.decode::<T>().transpose())
                .collect(),
            other => Err(mismatch("array", &other)),
        }
    }
}

/// Truthiness of a raw JSON value.
///
/// `null`, `false`, `0`, and `""` are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Non-null elements of a possibly nested array, depth-first.
fn leaves(items: Vec<FieldValue>) -> Vec<FieldValue> {
    fn walk(items: Vec<FieldValue>, out: &mut Vec<FieldValue>) {
        for item in items {
            match item {
                FieldValue::Null => {}
                FieldValue::Array(nested) => walk(nested, out),
                other => out.push(other),
            }
        }
    }

    let mut out = Vec::with_capacity(items.len());
    walk(items, &mut out);
    out
}

fn mismatch(expected: &'static str, found: &FieldValue) -> FieldError {
    FieldError::Mismatch {
        expected,
        found: found.kind_name(),
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

macro_rules! scalar_conversions {
    ($($ty:ty => $variant:ident, $name:literal;)*) => {$(
        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }

        impl From<Option<$ty>> for FieldValue {
            fn from(value: Option<$ty>) -> Self {
                value.map_or(Self::Null, Self::$variant)
            }
        }

        impl From<Vec<$ty>> for FieldValue {
            fn from(values: Vec<$ty>) -> Self {
                Self::Array(values.into_iter().map(Self::$variant).collect())
            }
        }

        impl TryFrom<FieldValue> for Option<$ty> {
            type Error = FieldError;

            fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
                match value {
                    FieldValue::Null => Ok(None),
                    FieldValue::$variant(inner) => Ok(Some(inner)),
                    other => Err(mismatch($name, &other)),
                }
            }
        }

        impl TryFrom<FieldValue> for Vec<$ty> {
            type Error = FieldError;

            fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
                match value {
                    FieldValue::Null => Ok(Vec::new()),
                    FieldValue::Array(items) => leaves(items)
                        .into_iter()
                        .map(|item| match item {
                            FieldValue::$variant(inner) => Ok(inner),
                            other => Err(mismatch($name, &other)),
                        })
                        .collect(),
                    other => Err(mismatch("array", &other)),
                }
            }
        }
    )*};
}

scalar_conversions! {
    bool => Bool, "boolean";
    f64 => Number, "number";
    String => String, "string";
    DateTime<Utc> => Date, "date";
}
