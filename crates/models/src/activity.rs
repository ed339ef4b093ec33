use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate::{one_of, text_len};

pub const ACTIVITY_TYPES: [&str; 5] = ["feed", "walk", "play", "vet", "train"];

/// A logged pet activity. `pet_id` is a soft reference: it is never checked
/// against the pet service's data. Activities are immutable once created.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub pet_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: DateTimeWithTimeZone,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_type(kind: &str) -> Result<(), ModelError> {
    one_of("type", kind, &ACTIVITY_TYPES)
}

pub fn validate_notes(notes: &str) -> Result<(), ModelError> {
    text_len("notes", notes, 0, 1000)
}

/// Payload for `POST /api/activities`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCreate {
    pub pet_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ActivityCreate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.pet_id.trim().is_empty() {
            return Err(ModelError::Validation("petId is required".into()));
        }
        validate_type(&self.kind)?;
        if let Some(notes) = &self.notes {
            validate_notes(notes)?;
        }
        Ok(())
    }
}
