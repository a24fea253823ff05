//! Per-kind coercion of raw values.
//!
//! Every function takes the raw value as `Option<&Value>`: `None` means the
//! key was absent from the input, `Some(Value::Null)` an explicit null.
//! Absent values report [`Reason::Empty`]; explicit nulls are silent.
//!
//! The object kind needs a registry to recurse and lives on
//! [`Hydrator::validate_object`](crate::Hydrator::validate_object).

use std::convert::Infallible;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use hydrate_model::{FieldValue, Reason, is_truthy};
use serde_json::Value;

/// Largest distance from the epoch a date may have, in milliseconds.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Local date-time layouts accepted after a four-digit year, read as UTC.
const LOCAL_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A coerced value and the reasons it is not a faithful copy of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub value: FieldValue,
    pub reasons: Vec<Reason>,
}

impl Validation {
    pub fn valid(value: FieldValue) -> Self {
        Self {
            value,
            reasons: Vec::new(),
        }
    }

    pub fn invalid(reason: Reason) -> Self {
        Self {
            value: FieldValue::Null,
            reasons: vec![reason],
        }
    }

    /// Result for an absent input.
    pub fn empty() -> Self {
        Self::invalid(Reason::Empty)
    }

    /// Result for an explicit null input.
    pub fn cleared() -> Self {
        Self::valid(FieldValue::Null)
    }

    /// The first reason, which for a scalar is the only one.
    pub fn reason(&self) -> Option<Reason> {
        self.reasons.first().copied()
    }

    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Splits off absent and explicit-null inputs, which every kind treats alike.
pub(crate) fn present(raw: Option<&Value>) -> Result<&Value, Validation> {
    match raw {
        None => Err(Validation::empty()),
        Some(Value::Null) => Err(Validation::cleared()),
        Some(value) => Ok(value),
    }
}

pub fn boolean(raw: Option<&Value>) -> Validation {
    match present(raw) {
        Ok(Value::Bool(b)) => Validation::valid(FieldValue::Bool(*b)),
        Ok(_) => Validation::invalid(Reason::NotBoolean),
        Err(shortcut) => shortcut,
    }
}

pub fn number(raw: Option<&Value>) -> Validation {
    match present(raw) {
        Ok(Value::Number(n)) => n.as_f64().map_or_else(
            || Validation::invalid(Reason::NotNumber),
            |n| Validation::valid(FieldValue::Number(n)),
        ),
        Ok(_) => Validation::invalid(Reason::NotNumber),
        Err(shortcut) => shortcut,
    }
}

pub fn string(raw: Option<&Value>) -> Validation {
    match present(raw) {
        Ok(Value::String(s)) => Validation::valid(FieldValue::String(s.clone())),
        Ok(_) => Validation::invalid(Reason::NotString),
        Err(shortcut) => shortcut,
    }
}

/// Accepts epoch milliseconds or a date string.
///
/// Strings may be RFC 3339, a plain `YYYY-MM-DD` date (midnight UTC), a
/// local `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` date-time (read as UTC) or RFC 2822.
pub fn date(raw: Option<&Value>) -> Validation {
    let parsed = match present(raw) {
        Ok(Value::Number(n)) => n.as_f64().and_then(from_epoch_millis),
        Ok(Value::String(s)) => parse_date(s),
        Ok(_) => None,
        Err(shortcut) => return shortcut,
    };
    parsed.map_or_else(
        || Validation::invalid(Reason::NotDate),
        |date| Validation::valid(FieldValue::Date(date)),
    )
}

/// Accepts a member of `options`.
///
/// Falsy members (`0`, `""`, `false`) are rejected even when listed.
pub fn enumeration(raw: Option<&Value>, options: &[Value]) -> Validation {
    match present(raw) {
        Ok(value) if is_truthy(value) && options.iter().any(|o| same_option(o, value)) => {
            Validation::valid(FieldValue::Enum(value.clone()))
        }
        Ok(_) => Validation::invalid(Reason::NotEnum),
        Err(shortcut) => shortcut,
    }
}

/// Validates every element of a sequence with `element`.
///
/// Elements that coerce to null are dropped. Nested sequences are validated
/// with the same element function and kept even when they end up empty.
pub fn array(raw: Option<&Value>, element: fn(Option<&Value>) -> Validation) -> Validation {
    let result = each_element::<Infallible>(raw, &mut |child| {
        Ok(if child.is_array() {
            array(Some(child), element)
        } else {
            element(Some(child))
        })
    });
    match result {
        Ok(validation) => validation,
        Err(never) => match never {},
    }
}

/// Shared sequence walk behind [`array`] and the hydrator's array fields.
///
/// An absent input yields one [`Reason::Empty`], a non-sequence one
/// [`Reason::NotArray`]; otherwise the reasons of all elements are
/// concatenated in order.
pub(crate) fn each_element<E>(
    raw: Option<&Value>,
    element: &mut dyn FnMut(&Value) -> Result<Validation, E>,
) -> Result<Validation, E> {
    let items = match raw {
        None => {
            return Ok(Validation {
                value: FieldValue::Array(Vec::new()),
                reasons: vec![Reason::Empty],
            });
        }
        Some(Value::Null) => return Ok(Validation::valid(FieldValue::Array(Vec::new()))),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Ok(Validation {
                value: FieldValue::Array(Vec::new()),
                reasons: vec![Reason::NotArray],
            });
        }
    };

    let mut values = Vec::with_capacity(items.len());
    let mut reasons = Vec::new();
    for child in items {
        let Validation { value, reasons: child_reasons } = element(child)?;
        if !value.is_null() {
            values.push(value);
        }
        reasons.extend(child_reasons);
    }
    Ok(Validation {
        value: FieldValue::Array(values),
        reasons,
    })
}

fn same_option(option: &Value, value: &Value) -> bool {
    match (option, value) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => option == value,
    }
}

fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if has_iso_year(text) {
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
        }
        for format in LOCAL_DATE_TIME_FORMATS {
            if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
                return Some(date.and_utc());
            }
        }
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

fn has_iso_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 10 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}
