use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookingTransactions::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::BookingTrxId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BookingTransactions::Name).string().not_null())
                    .col(
                        ColumnDef::new(BookingTransactions::PhoneNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::Email)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::StartedTime)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::ScheduleAt)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::Proof)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::PostCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BookingTransactions::City).string().not_null())
                    .col(
                        ColumnDef::new(BookingTransactions::Address)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::Subtotal)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::TotalTaxAmount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::TotalAmount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::IsPaid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::UpdatedAt)
                            .timestamp()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(BookingTransactions::DeletedAt)
                            .timestamp()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingTransactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingTransactions {
    Table,
    Id,
    BookingTrxId,
    Name,
    PhoneNumber,
    Email,
    StartedTime,
    ScheduleAt,
    Proof,
    PostCode,
    City,
    Address,
    Subtotal,
    TotalTaxAmount,
    TotalAmount,
    IsPaid,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
