pub mod bookings;
pub mod categories;
pub mod common;
pub mod health;
pub mod home_services;
pub mod notifications;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::events::EventSender;
use crate::services::{
    bookings::BookingService, catalog::CatalogService, notifications::NotificationService,
};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    pub bookings: Arc<BookingService>,
    pub notifications: NotificationService,
}

impl AppServices {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: EventSender,
        notifications: NotificationService,
        cfg: &AppConfig,
    ) -> Self {
        let catalog = Arc::new(CatalogService::new(db_pool.clone(), event_sender.clone()));
        let bookings = Arc::new(BookingService::new(
            db_pool,
            catalog.clone(),
            event_sender,
            cfg.booking_code_max_attempts,
        ));

        Self {
            catalog,
            bookings,
            notifications,
        }
    }
}
