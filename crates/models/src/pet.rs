use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::serde_util::double_option;
use crate::validate::{int_range, one_of, text_len};

pub const SPECIES: [&str; 4] = ["dog", "cat", "bird", "other"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub species: String,
    pub age_years: i32,
    pub health: i32,
    pub happiness: i32,
    pub energy: i32,
    pub avatar_url: Option<String>,
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

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    text_len("name", name, 1, 100)
}

pub fn validate_species(species: &str) -> Result<(), ModelError> {
    one_of("species", species, &SPECIES)
}

pub fn validate_notes(notes: &str) -> Result<(), ModelError> {
    text_len("notes", notes, 0, 1000)
}

/// Payload for `POST /api/pets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetCreate {
    pub name: String,
    pub species: String,
    pub age_years: i32,
    pub health: i32,
    pub happiness: i32,
    pub energy: i32,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PetCreate {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)?;
        validate_species(&self.species)?;
        int_range("ageYears", self.age_years, 0, 50)?;
        int_range("health", self.health, 0, 100)?;
        int_range("happiness", self.happiness, 0, 100)?;
        int_range("energy", self.energy, 0, 100)?;
        if let Some(notes) = &self.notes {
            validate_notes(notes)?;
        }
        Ok(())
    }
}

/// Payload for `PATCH /api/pets/{id}`. Every field is optional; for the
/// nullable fields an explicit null clears the stored value while an absent
/// field leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdate {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age_years: Option<i32>,
    pub health: Option<i32>,
    pub happiness: Option<i32>,
    pub energy: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl PetUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(species) = &self.species {
            validate_species(species)?;
        }
        if let Some(age) = self.age_years {
            int_range("ageYears", age, 0, 50)?;
        }
        if let Some(health) = self.health {
            int_range("health", health, 0, 100)?;
        }
        if let Some(happiness) = self.happiness {
            int_range("happiness", happiness, 0, 100)?;
        }
        if let Some(energy) = self.energy {
            int_range("energy", energy, 0, 100)?;
        }
        if let Some(Some(notes)) = &self.notes {
            validate_notes(notes)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.age_years.is_none()
            && self.health.is_none()
            && self.happiness.is_none()
            && self.energy.is_none()
            && self.avatar_url.is_none()
            && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> PetCreate {
        PetCreate {
            name: "Luna".into(),
            species: "dog".into(),
            age_years: 3,
            health: 85,
            happiness: 90,
            energy: 75,
            avatar_url: None,
            notes: None,
        }
    }

    #[test]
    fn create_accepts_valid_payload() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_rejects_bad_species_and_ranges() {
        let mut c = valid_create();
        c.species = "fish".into();
        assert!(c.validate().is_err());

        let mut c = valid_create();
        c.age_years = 51;
        assert!(c.validate().is_err());

        let mut c = valid_create();
        c.health = 101;
        assert!(c.validate().is_err());

        let mut c = valid_create();
        c.name = String::new();
        assert!(c.validate().is_err());
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let patch: PetUpdate = serde_json::from_str(r#"{"name":"Nova"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Nova"));
        assert!(patch.notes.is_none());

        let patch: PetUpdate = serde_json::from_str(r#"{"notes":null}"#).unwrap();
        assert_eq!(patch.notes, Some(None));
        assert!(!patch.is_empty());

        let patch: PetUpdate = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn update_validates_present_fields_only() {
        let patch = PetUpdate { age_years: Some(99), ..Default::default() };
        assert!(patch.validate().is_err());
        assert!(PetUpdate::default().validate().is_ok());
    }
}
