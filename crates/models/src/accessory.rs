use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::serde_util::double_option;
use crate::validate::{one_of, text_len};

pub const ACCESSORY_TYPES: [&str; 6] = ["toy", "food", "collar", "bedding", "grooming", "other"];
pub const SIZES: [&str; 4] = ["S", "M", "L", "XL"];

/// Stock threshold below which an accessory counts as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accessories")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub stock: i32,
    pub size: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
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
    text_len("name", name, 1, 200)
}

pub fn validate_type(kind: &str) -> Result<(), ModelError> {
    one_of("type", kind, &ACCESSORY_TYPES)
}

pub fn validate_size(size: &str) -> Result<(), ModelError> {
    one_of("size", size, &SIZES)
}

pub fn validate_price(price: f64) -> Result<(), ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ModelError::Validation(format!(
            "price must be a finite number >= 0, got {price}"
        )));
    }
    Ok(())
}

pub fn validate_stock(stock: i32) -> Result<(), ModelError> {
    if stock < 0 {
        return Err(ModelError::Validation(format!("stock must be >= 0, got {stock}")));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    text_len("description", description, 0, 2000)
}

/// Payload for `POST /api/accessories`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub stock: i32,
    pub size: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AccessoryCreate {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)?;
        validate_type(&self.kind)?;
        validate_price(self.price)?;
        validate_stock(self.stock)?;
        validate_size(&self.size)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

/// Payload for `PATCH /api/accessories/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub size: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl AccessoryUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(kind) = &self.kind {
            validate_type(kind)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        if let Some(size) = &self.size {
            validate_size(size)?;
        }
        if let Some(Some(description)) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.size.is_none()
            && self.image_url.is_none()
            && self.description.is_none()
    }
}
