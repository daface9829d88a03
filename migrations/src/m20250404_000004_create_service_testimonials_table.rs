use sea_orm_migration::prelude::*;

use crate::m20250404_000002_create_home_services_table::HomeServices;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceTestimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceTestimonials::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTestimonials::HomeServiceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTestimonials::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTestimonials::Photo)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTestimonials::Message)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTestimonials::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTestimonials::UpdatedAt)
                            .timestamp()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_testimonials_home_service")
                            .from(
                                ServiceTestimonials::Table,
                                ServiceTestimonials::HomeServiceId,
                            )
                            .to(HomeServices::Table, HomeServices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceTestimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceTestimonials {
    Table,
    Id,
    HomeServiceId,
    Name,
    Photo,
    Message,
    CreatedAt,
    UpdatedAt,
}
