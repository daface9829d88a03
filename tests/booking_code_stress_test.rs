//! Booking-code uniqueness under concurrent creation.
//!
//! The pre-check alone has a race window between check and insert; the
//! unique index plus the bounded generate-and-insert retry must keep
//! every stored code distinct regardless of interleaving.

mod common;

use common::TestApp;
use futures::future::join_all;
use rust_decimal_macros::dec;
use shujia_api::services::booking_code;
use shujia_api::services::bookings::CreateBookingInput;
use std::collections::HashSet;

fn booking_input(n: usize, service_id: uuid::Uuid) -> CreateBookingInput {
    CreateBookingInput {
        name: format!("Customer {}", n),
        phone_number: "081234567890".to_string(),
        email: format!("customer{}@example.com", n),
        schedule_at: chrono::NaiveDate::from_ymd_opt(2026, 4, 20).unwrap(),
        started_time: "10:00".to_string(),
        proof: "proofs/receipt.jpg".to_string(),
        post_code: "40115".to_string(),
        city: "Bandung".to_string(),
        address: "Jl. Merdeka No. 10".to_string(),
        service_ids: vec![service_id],
    }
}

#[tokio::test]
async fn concurrent_bookings_never_share_a_code() {
    let app = TestApp::new().await;
    let category = app.seed_category("Cleaning").await;
    let service = app
        .seed_service(category.id, "Deep Clean", dec!(150000))
        .await;

    let bookings = app.state.services.bookings.clone();

    let tasks: Vec<_> = (0..24)
        .map(|n| {
            let service_clone = bookings.clone();
            let service_id = service.id;
            tokio::spawn(async move { service_clone.create_booking(booking_input(n, service_id)).await })
        })
        .collect();

    let mut codes = HashSet::new();
    for joined in join_all(tasks).await {
        let created = joined
            .expect("task completes")
            .expect("booking creation succeeds");
        let code = created.booking.booking_trx_id;
        assert!(booking_code::is_well_formed(&code));
        assert!(codes.insert(code.clone()), "duplicate code issued: {code}");
    }
    assert_eq!(codes.len(), 24);
}

#[tokio::test]
async fn sequential_bookings_also_get_distinct_codes() {
    let app = TestApp::new().await;
    let category = app.seed_category("Cleaning").await;
    let service = app
        .seed_service(category.id, "Deep Clean", dec!(150000))
        .await;

    let bookings = app.state.services.bookings.clone();

    let mut codes = HashSet::new();
    for n in 0..40 {
        let created = bookings
            .create_booking(booking_input(n, service.id))
            .await
            .expect("booking creation succeeds");
        assert!(codes.insert(created.booking.booking_trx_id));
    }
    assert_eq!(codes.len(), 40);
}
