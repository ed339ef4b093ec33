//! Create `pets` table.
//!
//! Ids are caller-visible strings (UUIDs for created rows, short fixed ids
//! for seed rows), so the key column is a string rather than a native uuid.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pets::Table)
                    .if_not_exists()
                    .col(string_len(Pets::Id, 64).primary_key())
                    .col(string_len(Pets::Name, 100).not_null())
                    .col(string_len(Pets::Species, 16).not_null())
                    .col(integer(Pets::AgeYears).not_null())
                    .col(integer(Pets::Health).not_null())
                    .col(integer(Pets::Happiness).not_null())
                    .col(integer(Pets::Energy).not_null())
                    // client-supplied URL, possibly a data: URL; no length cap
                    .col(ColumnDef::new(Pets::AvatarUrl).text().null())
                    .col(ColumnDef::new(Pets::Notes).string_len(1000).null())
                    .col(timestamp_with_time_zone(Pets::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Pets::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // Lists are always ordered by created_at.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pets_created_at")
                    .table(Pets::Table)
                    .col(Pets::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pets_species")
                    .table(Pets::Table)
                    .col(Pets::Species)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pets::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pets {
    Table,
    Id,
    Name,
    Species,
    AgeYears,
    Health,
    Happiness,
    Energy,
    AvatarUrl,
    Notes,
    CreatedAt,
    UpdatedAt,
}
