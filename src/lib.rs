//! Shujia Booking API Library
//!
//! Back-office core for a home-service booking business: catalog
//! management (categories, services, benefits, testimonials), booking
//! intake with computed pricing, and the payment-approval workflow.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod openapi;
pub mod services;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// App state shared by every HTTP handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn catalog_service(&self) -> Arc<services::catalog::CatalogService> {
        self.services.catalog.clone()
    }

    pub fn booking_service(&self) -> Arc<services::bookings::BookingService> {
        self.services.bookings.clone()
    }
}

/// Full v1 API surface: catalog, bookings, operator notifications.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", handlers::categories::routes())
        .nest("/services", handlers::home_services::routes())
        .nest("/bookings", handlers::bookings::routes())
        .nest("/notifications", handlers::notifications::routes())
}
