//! Shared entity fixtures for engine tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use hydrate_engine::{DiagnosticLog, HydrateOptions, Hydrator};
use hydrate_model::{Entity, FieldError, FieldSet, FieldValue, Model, Registry};
use serde::{Deserialize, Serialize};

pub const COUNTRIES: [&str; 3] = ["Norway", "Sweden", "Denmark"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    Norway,
    Sweden,
    Denmark,
}

// ── Address ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: Option<String>,
    pub street_number: Option<f64>,
    pub is_primary_address: Option<bool>,
    pub last_modified: Option<DateTime<Utc>>,
    pub country: Option<Country>,
}

impl Entity for Address {
    fn is_valid(&self) -> bool {
        self.street.is_some()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "street" => self.street.clone().into(),
            "streetNumber" => self.street_number.into(),
            "isPrimaryAddress" => self.is_primary_address.into(),
            "lastModified" => self.last_modified.into(),
            "country" => FieldValue::enumeration(self.country.as_ref()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "street" => self.street = value.try_into()?,
            "streetNumber" => self.street_number = value.try_into()?,
            "isPrimaryAddress" => self.is_primary_address = value.try_into()?,
            "lastModified" => self.last_modified = value.try_into()?,
            "country" => self.country = value.decode()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Address {
    fn declare(fields: &mut FieldSet) {
        fields.string("street");
        fields.number("streetNumber");
        fields.boolean("isPrimaryAddress");
        fields.date("lastModified");
        fields.enumeration("country", COUNTRIES);
    }
}

// ── Order ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub address: Option<Address>,
    pub client_address: Option<Address>,
    pub project_address: Option<Address>,
}

impl Entity for Order {
    fn is_valid(&self) -> bool {
        self.address.is_some()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "address" => FieldValue::object(self.address.clone()),
            "clientAddress" => FieldValue::object(self.client_address.clone()),
            "projectAddress" => FieldValue::object(self.project_address.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "address" => self.address = value.into_entity()?,
            "clientAddress" => self.client_address = value.into_entity()?,
            "projectAddress" => self.project_address = value.into_entity()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Order {
    fn declare(fields: &mut FieldSet) {
        fields.object::<Address>("address");
        fields.object::<Address>("clientAddress");
        fields.object::<Address>("projectAddress");
    }
}

// ── OrderList ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

impl Entity for OrderList {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "orders" => Some(FieldValue::objects(self.orders.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "orders" => self.orders = value.into_entities()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for OrderList {
    fn declare(fields: &mut FieldSet) {
        fields.object::<Order>("orders").array();
    }
}

// ── Collections of every kind ────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub streets: Vec<String>,
    pub street_numbers: Vec<f64>,
    pub is_primary_address: Vec<bool>,
    pub last_modified: Vec<DateTime<Utc>>,
    pub countries: Vec<Country>,
}

impl Entity for Listing {
    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "streets" => self.streets.clone().into(),
            "streetNumbers" => self.street_numbers.clone().into(),
            "isPrimaryAddress" => self.is_primary_address.clone().into(),
            "lastModified" => self.last_modified.clone().into(),
            "countries" => FieldValue::enumerations(&self.countries),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "streets" => self.streets = value.try_into()?,
            "streetNumbers" => self.street_numbers = value.try_into()?,
            "isPrimaryAddress" => self.is_primary_address = value.try_into()?,
            "lastModified" => self.last_modified = value.try_into()?,
            "countries" => self.countries = value.decode_all()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Listing {
    fn declare(fields: &mut FieldSet) {
        fields.string("streets").array();
        fields.number("streetNumbers").array();
        fields.boolean("isPrimaryAddress").array();
        fields.date("lastModified").array();
        fields.enumeration("countries", COUNTRIES).array();
    }
}

// ── Aliased fields ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resident {
    pub name: Option<String>,
}

impl Entity for Resident {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.clone().into()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.try_into()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Resident {
    fn declare(fields: &mut FieldSet) {
        fields.string("name").with_alias("resident_name");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasedAddress {
    pub street: Option<String>,
    pub street_number: Option<f64>,
    pub is_primary_address: Option<bool>,
    pub last_modified: Option<DateTime<Utc>>,
    pub country: Option<Country>,
    pub resident: Option<Resident>,
    pub tags: Vec<String>,
}

impl Entity for AliasedAddress {
    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "street" => self.street.clone().into(),
            "streetNumber" => self.street_number.into(),
            "isPrimaryAddress" => self.is_primary_address.into(),
            "lastModified" => self.last_modified.into(),
            "country" => FieldValue::enumeration(self.country.as_ref()),
            "resident" => FieldValue::object(self.resident.clone()),
            "tags" => self.tags.clone().into(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "street" => self.street = value.try_into()?,
            "streetNumber" => self.street_number = value.try_into()?,
            "isPrimaryAddress" => self.is_primary_address = value.try_into()?,
            "lastModified" => self.last_modified = value.try_into()?,
            "country" => self.country = value.decode()?,
            "resident" => self.resident = value.into_entity()?,
            "tags" => self.tags = value.try_into()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for AliasedAddress {
    fn declare(fields: &mut FieldSet) {
        fields.string("street").with_alias("address_street_name");
        fields.number("streetNumber").with_alias("address_street_number");
        fields
            .boolean("isPrimaryAddress")
            .with_alias("address_is_primary_address");
        fields.date("lastModified").with_alias("address_last_modified");
        fields
            .enumeration("country", COUNTRIES)
            .with_alias("address_country");
        fields.object::<Resident>("resident").with_alias("address_resident");
        fields.string("tags").array().with_alias("address_tags");
    }
}

// ── Declared defaults ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Prices {
    pub label: Option<String>,
    pub sales_price: Option<f64>,
    pub discount: Option<f64>,
    pub currency: Option<String>,
}

impl Default for Prices {
    fn default() -> Self {
        Self {
            label: None,
            sales_price: Some(100.0),
            discount: Some(0.0),
            currency: Some("NOK".to_string()),
        }
    }
}

impl Entity for Prices {
    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "label" => self.label.clone().into(),
            "salesPrice" => self.sales_price.into(),
            "discount" => self.discount.into(),
            "currency" => self.currency.clone().into(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "label" => self.label = value.try_into()?,
            "salesPrice" => self.sales_price = value.try_into()?,
            "discount" => self.discount = value.try_into()?,
            "currency" => self.currency = value.try_into()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Prices {
    fn declare(fields: &mut FieldSet) {
        fields.string("label");
        fields.number("salesPrice");
        fields.number("discount");
        fields.string("currency").with_alias("currency_code");
    }
}

// ── Self-referential tree ────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNode {
    pub name: Option<String>,
    pub children: Vec<TreeNode>,
}

impl Entity for TreeNode {
    fn is_valid(&self) -> bool {
        self.name.is_some()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "name" => self.name.clone().into(),
            "children" => FieldValue::objects(self.children.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.try_into()?,
            "children" => self.children = value.into_entities()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for TreeNode {
    fn declare(fields: &mut FieldSet) {
        fields.string("name");
        fields.object::<TreeNode>("children").array();
    }
}

// ── Plain entity with no declared fields ─────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimensions {
    pub height: Option<f64>,
    pub width: Option<f64>,
}

impl Entity for Dimensions {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "height" => Some(self.height.into()),
            "width" => Some(self.width.into()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "height" => self.height = value.try_into()?,
            "width" => self.width = value.try_into()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Dimensions {}

// ── Helpers ──────────────────────────────────────────────────────

pub fn registry() -> Registry {
    Registry::builder()
        .register::<Address>()
        .register::<Order>()
        .register::<OrderList>()
        .register::<Listing>()
        .register::<Resident>()
        .register::<AliasedAddress>()
        .register::<Prices>()
        .register::<TreeNode>()
        .register::<Dimensions>()
        .build()
        .unwrap()
}

/// Hydrates a `T` and returns it with every diagnostic produced on the way.
pub fn hydrate_logged<T: Model>(
    registry: &Registry,
    raw: serde_json::Value,
    options: HydrateOptions,
) -> (T, Vec<hydrate_model::Diagnostic>) {
    let log = DiagnosticLog::new();
    let entity = Hydrator::new(registry)
        .with_sink(&log)
        .with_options(options)
        .create::<T>(&raw)
        .unwrap();
    (entity, log.take())
}
