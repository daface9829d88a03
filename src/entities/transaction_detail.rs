use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One selected service line within a booking.
///
/// `price` is the unit price snapshotted when the booking was persisted;
/// it is never re-derived from the live service price afterward.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transaction_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub booking_transaction_id: Uuid,
    pub home_service_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking_transaction::Entity",
        from = "Column::BookingTransactionId",
        to = "super::booking_transaction::Column::Id",
        on_delete = "Cascade"
    )]
    BookingTransaction,
    #[sea_orm(
        belongs_to = "super::home_service::Entity",
        from = "Column::HomeServiceId",
        to = "super::home_service::Column::Id",
        on_delete = "Cascade"
    )]
    HomeService,
}

impl Related<super::booking_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingTransaction.def()
    }
}

impl Related<super::home_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HomeService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
