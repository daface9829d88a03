use sea_orm_migration::prelude::*;

use crate::m20250404_000001_create_categories_table::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HomeServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HomeServices::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HomeServices::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(HomeServices::Slug).string().not_null())
                    .col(ColumnDef::new(HomeServices::Name).string().not_null())
                    .col(ColumnDef::new(HomeServices::Thumbnail).string().not_null())
                    .col(ColumnDef::new(HomeServices::Description).text().not_null())
                    .col(
                        ColumnDef::new(HomeServices::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HomeServices::Price)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HomeServices::IsPopular)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(HomeServices::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HomeServices::UpdatedAt).timestamp().null())
                    .col(ColumnDef::new(HomeServices::DeletedAt).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_home_services_category")
                            .from(HomeServices::Table, HomeServices::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_home_services_slug")
                    .table(HomeServices::Table)
                    .col(HomeServices::Slug)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HomeServices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HomeServices {
    Table,
    Id,
    CategoryId,
    Slug,
    Name,
    Thumbnail,
    Description,
    DurationMinutes,
    Price,
    IsPopular,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
