pub use sea_orm_migration::prelude::*;

mod m20250404_000001_create_categories_table;
mod m20250404_000002_create_home_services_table;
mod m20250404_000003_create_service_benefits_table;
mod m20250404_000004_create_service_testimonials_table;
mod m20250404_000005_create_booking_transactions_table;
mod m20250404_000006_create_transaction_details_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250404_000001_create_categories_table::Migration),
            Box::new(m20250404_000002_create_home_services_table::Migration),
            Box::new(m20250404_000003_create_service_benefits_table::Migration),
            Box::new(m20250404_000004_create_service_testimonials_table::Migration),
            Box::new(m20250404_000005_create_booking_transactions_table::Migration),
            Box::new(m20250404_000006_create_transaction_details_table::Migration),
        ]
    }
}
