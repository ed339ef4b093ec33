//! Create `accessories` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accessories::Table)
                    .if_not_exists()
                    .col(string_len(Accessories::Id, 64).primary_key())
                    .col(string_len(Accessories::Name, 200).not_null())
                    .col(string_len(Accessories::Kind, 16).not_null())
                    .col(double(Accessories::Price).not_null())
                    .col(integer(Accessories::Stock).not_null())
                    .col(string_len(Accessories::Size, 4).not_null())
                    // client-supplied URL, possibly a data: URL; no length cap
                    .col(ColumnDef::new(Accessories::ImageUrl).text().null())
                    .col(ColumnDef::new(Accessories::Description).string_len(2000).null())
                    .col(timestamp_with_time_zone(Accessories::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Accessories::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_accessories_created_at")
                    .table(Accessories::Table)
                    .col(Accessories::CreatedAt)
                    .to_owned(),
            )
            .await?;
        // Serves both the type filter and the low-stock scan.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_accessories_kind_stock")
                    .table(Accessories::Table)
                    .col(Accessories::Kind)
                    .col(Accessories::Stock)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Accessories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Accessories {
    Table,
    Id,
    Name,
    Kind,
    Price,
    Stock,
    Size,
    ImageUrl,
    Description,
    CreatedAt,
    UpdatedAt,
}
