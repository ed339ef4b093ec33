//! Schema migrators, one per service.
//!
//! Each service provisions only its own container, so each migrator carries
//! exactly the table (and indexes) that service owns.
pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_pets;
mod m20251001_000002_create_activities;
mod m20251001_000003_create_accessories;

pub struct PetMigrator;

#[async_trait::async_trait]
impl MigratorTrait for PetMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251001_000001_create_pets::Migration)]
    }
}

pub struct ActivityMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ActivityMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251001_000002_create_activities::Migration)]
    }
}

pub struct AccessoryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for AccessoryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251001_000003_create_accessories::Migration)]
    }
}
