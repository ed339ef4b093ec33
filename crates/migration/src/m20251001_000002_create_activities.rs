//! Create `activities` table.
//!
//! `pet_id` is a soft reference into the pet service's data; no foreign key
//! is declared on purpose.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(string_len(Activities::Id, 64).primary_key())
                    // soft reference, any caller-supplied id shape; no length cap
                    .col(text(Activities::PetId).not_null())
                    .col(string_len(Activities::Kind, 16).not_null())
                    .col(timestamp_with_time_zone(Activities::Timestamp).not_null())
                    .col(ColumnDef::new(Activities::Notes).string_len(1000).null())
                    .col(timestamp_with_time_zone(Activities::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Activities::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // Dominant access pattern is "activities of one pet".
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_activities_pet_id")
                    .table(Activities::Table)
                    .col(Activities::PetId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_activities_timestamp")
                    .table(Activities::Table)
                    .col(Activities::Timestamp)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_activities_created_at")
                    .table(Activities::Table)
                    .col(Activities::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Activities::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Activities {
    Table,
    Id,
    PetId,
    Kind,
    Timestamp,
    Notes,
    CreatedAt,
    UpdatedAt,
}
