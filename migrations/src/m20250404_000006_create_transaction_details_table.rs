use sea_orm_migration::prelude::*;

use crate::m20250404_000002_create_home_services_table::HomeServices;
use crate::m20250404_000005_create_booking_transactions_table::BookingTransactions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransactionDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TransactionDetails::Id)
                            .uuid()
                            .primary_key()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TransactionDetails::BookingTransactionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TransactionDetails::HomeServiceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TransactionDetails::Price)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TransactionDetails::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_details_booking_transaction")
                            .from(
                                TransactionDetails::Table,
                                TransactionDetails::BookingTransactionId,
                            )
                            .to(BookingTransactions::Table, BookingTransactions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_details_home_service")
                            .from(TransactionDetails::Table, TransactionDetails::HomeServiceId)
                            .to(HomeServices::Table, HomeServices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_details_booking_transaction_id")
                    .table(TransactionDetails::Table)
                    .col(TransactionDetails::BookingTransactionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransactionDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TransactionDetails {
    Table,
    Id,
    BookingTransactionId,
    HomeServiceId,
    Price,
    CreatedAt,
}
