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
                    .table(ServiceBenefits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceBenefits::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceBenefits::HomeServiceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceBenefits::Name).string().not_null())
                    .col(
                        ColumnDef::new(ServiceBenefits::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceBenefits::UpdatedAt).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_benefits_home_service")
                            .from(ServiceBenefits::Table, ServiceBenefits::HomeServiceId)
                            .to(HomeServices::Table, HomeServices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceBenefits::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceBenefits {
    Table,
    Id,
    HomeServiceId,
    Name,
    CreatedAt,
    UpdatedAt,
}
