#![allow(dead_code)]

use chrono::{DateTime, Utc};
use hydrate_model::{Entity, FieldError, FieldSet, FieldValue, Model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    High,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: Option<String>,
}

impl Entity for Person {
    fn is_valid(&self) -> bool {
        self.name.is_some()
    }

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

impl Model for Person {
    fn declare(fields: &mut FieldSet) {
        fields.string("name").with_alias("full_name");
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Note {
    pub title: Option<String>,
    pub pinned: Option<bool>,
    pub due: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub author: Option<Person>,
    pub watchers: Vec<Person>,
}

impl Entity for Note {
    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "title" => self.title.clone().into(),
            "pinned" => self.pinned.into(),
            "due" => self.due.into(),
            "priority" => FieldValue::enumeration(self.priority.as_ref()),
            "tags" => self.tags.clone().into(),
            "author" => FieldValue::object(self.author.clone()),
            "watchers" => FieldValue::objects(self.watchers.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "title" => self.title = value.try_into()?,
            "pinned" => self.pinned = value.try_into()?,
            "due" => self.due = value.try_into()?,
            "priority" => self.priority = value.decode()?,
            "tags" => self.tags = value.try_into()?,
            "author" => self.author = value.into_entity()?,
            "watchers" => self.watchers = value.into_entities()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Note {
    fn declare(fields: &mut FieldSet) {
        fields.string("title");
        fields.boolean("pinned");
        fields.date("due");
        fields.enumeration("priority", ["low", "high"]);
        fields.string("tags").array();
        fields.object::<Person>("author").with_alias("created_by");
        fields.object::<Person>("watchers").array();
    }
}

/// A type with no declared fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plain {
    pub size: Option<f64>,
}

impl Entity for Plain {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "size" => Some(self.size.into()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match name {
            "size" => self.size = value.try_into()?,
            _ => return Err(FieldError::unknown(name)),
        }
        Ok(())
    }
}

impl Model for Plain {}
