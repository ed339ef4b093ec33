//! Deterministic sample rows inserted when a container is first provisioned.
//!
//! Ids are fixed so reseeding is conflict-tolerant: rows that already exist
//! are skipped, never duplicated.

use chrono::{TimeZone, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};

use models::{accessory, activity, pet};

use crate::errors::ServiceError;

pub async fn seed_pets(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
    let rows = [
        ("p1", "Luna", "dog", 3, 82, 91, 76, "Loves fetch"),
        ("p2", "Milo", "cat", 2, 88, 73, 65, "Window watcher"),
        ("p3", "Pico", "bird", 1, 75, 80, 90, "Chirpy"),
    ]
    .map(|(id, name, species, age_years, health, happiness, energy, notes)| pet::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        species: Set(species.to_string()),
        age_years: Set(age_years),
        health: Set(health),
        happiness: Set(happiness),
        energy: Set(energy),
        avatar_url: Set(Some(String::new())),
        notes: Set(Some(notes.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
    });

    match pet::Entity::insert_many(rows)
        .on_conflict(OnConflict::column(pet::Column::Id).do_nothing().to_owned())
        .exec_without_returning(db)
        .await
    {
        Ok(n) => Ok(n),
        Err(DbErr::RecordNotInserted) => Ok(0),
        Err(e) => Err(ServiceError::storage("pet", "seed", None, e)),
    }
}

pub async fn seed_activities(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
    let rows = [
        ("a1", "p1", "walk", fixed_ts(2025, 10, 5, 8, 30), "Park loop"),
        ("a2", "p2", "feed", fixed_ts(2025, 10, 5, 7, 0), "Tuna pouch"),
        ("a3", "p1", "play", fixed_ts(2025, 10, 4, 18, 0), "Frisbee"),
    ]
    .map(|(id, pet_id, kind, timestamp, notes)| activity::ActiveModel {
        id: Set(id.to_string()),
        pet_id: Set(pet_id.to_string()),
        kind: Set(kind.to_string()),
        timestamp: Set(timestamp),
        notes: Set(Some(notes.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
    });

    match activity::Entity::insert_many(rows)
        .on_conflict(OnConflict::column(activity::Column::Id).do_nothing().to_owned())
        .exec_without_returning(db)
        .await
    {
        Ok(n) => Ok(n),
        Err(DbErr::RecordNotInserted) => Ok(0),
        Err(e) => Err(ServiceError::storage("activity", "seed", None, e)),
    }
}

pub async fn seed_accessories(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
    // one normal-stock and one low-stock item
    let rows = [
        ("x1", "Chew Toy", "toy", 8.99, 12, "M", "Durable rope"),
        ("x2", "Salmon Treats", "food", 5.49, 3, "S", "Soft chews"),
    ]
    .map(|(id, name, kind, price, stock, size, description)| accessory::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        kind: Set(kind.to_string()),
        price: Set(price),
        stock: Set(stock),
        size: Set(size.to_string()),
        image_url: Set(Some(String::new())),
        description: Set(Some(description.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
    });

    match accessory::Entity::insert_many(rows)
        .on_conflict(OnConflict::column(accessory::Column::Id).do_nothing().to_owned())
        .exec_without_returning(db)
        .await
    {
        Ok(n) => Ok(n),
        Err(DbErr::RecordNotInserted) => Ok(0),
        Err(e) => Err(ServiceError::storage("accessory", "seed", None, e)),
    }
}

fn fixed_ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> sea_orm::prelude::DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_else(Utc::now)
        .into()
}
