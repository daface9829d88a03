use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A bookable home service.
///
/// `slug` is always the deterministic transform of `name` (see
/// `services::catalog::slugify`) and is recomputed whenever the name
/// changes. Rows are soft-deleted via `deleted_at` so historical
/// transaction details keep resolving.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "home_services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category_id: Uuid,
    pub slug: String,
    pub name: String,
    pub thumbnail: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub duration_minutes: i32,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::service_benefit::Entity")]
    Benefits,
    #[sea_orm(has_many = "super::service_testimonial::Entity")]
    Testimonials,
    #[sea_orm(has_many = "super::transaction_detail::Entity")]
    TransactionDetails,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::service_benefit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Benefits.def()
    }
}

impl Related<super::service_testimonial::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Testimonials.def()
    }
}

impl Related<super::transaction_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
