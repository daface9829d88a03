use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Selling point attached to a home service
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_benefits")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub home_service_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::home_service::Entity",
        from = "Column::HomeServiceId",
        to = "super::home_service::Column::Id",
        on_delete = "Cascade"
    )]
    HomeService,
}

impl Related<super::home_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HomeService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
