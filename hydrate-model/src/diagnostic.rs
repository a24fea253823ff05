use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendering of the raw value in a [`Diagnostic`] when the input had no value at all.
pub const UNDEFINED: &str = "undefined";

/// Why a raw value did not coerce cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// No value was present in the input.
    Empty,
    NotArray,
    NotBoolean,
    NotDate,
    NotEnum,
    NotNumber,
    NotString,
    /// The nested object was built but failed its validity check.
    NotValidObject,
}

impl Reason {
    /// Human-readable message for this reason.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "value is undefined",
            Self::NotArray => "value is not array",
            Self::NotBoolean => "value is not a boolean",
            Self::NotDate => "value cannot be parsed to Date",
            Self::NotEnum => "value is not option of the enum",
            Self::NotNumber => "value is not a number",
            Self::NotString => "value is not a string",
            Self::NotValidObject => "object created from input is not valid",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One reported coercion decision for a field.
///
/// Array fields produce a single record carrying the reasons of every
/// rejected element, in element order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Name of the entity type owning the field.
    pub class: String,
    pub field: String,
    /// The raw input value as compact JSON, or [`UNDEFINED`].
    pub value: String,
    pub reasons: Vec<Reason>,
}

impl Diagnostic {
    /// The reason messages joined with `,`.
    pub fn info(&self) -> String {
        self.reasons
            .iter()
            .map(|reason| reason.message())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// True when the only thing reported is a missing value.
    pub fn is_empty_only(&self) -> bool {
        self.reasons == [Reason::Empty]
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} = {}: {}", self.class, self.field, self.value, self.info())
    }
}
