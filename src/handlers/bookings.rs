use crate::entities::{booking_transaction, transaction_detail};
use crate::handlers::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginatedResponse,
};
use crate::services::bookings::{BookingListQuery, BookingWithDetails, CreateBookingInput};
use crate::services::pricing::BookingTotals;
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Json, Path, Query, State},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Creates the router for booking endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking).get(list_bookings))
        .route("/quote", post(quote_booking))
        .route("/:id", get(get_booking).delete(delete_booking))
        .route("/by-code/:code", get(get_booking_by_code))
        .route("/:id/approve", post(approve_booking))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub phone_number: String,
    #[validate(email, length(max = 50))]
    pub email: String,
    /// Service date, ISO 8601 (e.g. 2026-04-04)
    pub schedule_at: NaiveDate,
    /// Start-of-service time as entered on the form (e.g. "09:30")
    #[validate(length(min = 1, max = 20))]
    pub started_time: String,
    /// Stored reference path of the uploaded payment proof
    #[validate(length(min = 1, max = 255))]
    pub proof: String,
    #[validate(length(min = 1, max = 50))]
    pub post_code: String,
    #[validate(length(min = 1, max = 50))]
    pub city: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    /// One entry per line item; repeat an id to book a service twice
    #[validate(length(min = 1))]
    pub service_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuoteRequest {
    #[validate(length(min = 1))]
    pub service_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionDetailResponse {
    pub id: Uuid,
    pub home_service_id: Uuid,
    /// Unit price snapshotted at booking time
    pub price: Decimal,
}

impl From<transaction_detail::Model> for TransactionDetailResponse {
    fn from(model: transaction_detail::Model) -> Self {
        Self {
            id: model.id,
            home_service_id: model.home_service_id,
            price: model.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: Uuid,
    pub booking_trx_id: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub schedule_at: NaiveDate,
    pub started_time: String,
    pub proof: String,
    pub post_code: String,
    pub city: String,
    pub address: String,
    pub subtotal: Decimal,
    pub total_tax_amount: Decimal,
    pub total_amount: Decimal,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    /// Line items; omitted on list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<TransactionDetailResponse>>,
}

impl From<booking_transaction::Model> for BookingResponse {
    fn from(model: booking_transaction::Model) -> Self {
        Self {
            id: model.id,
            booking_trx_id: model.booking_trx_id,
            name: model.name,
            phone_number: model.phone_number,
            email: model.email,
            schedule_at: model.schedule_at,
            started_time: model.started_time,
            proof: model.proof,
            post_code: model.post_code,
            city: model.city,
            address: model.address,
            subtotal: model.subtotal,
            total_tax_amount: model.total_tax_amount,
            total_amount: model.total_amount,
            is_paid: model.is_paid,
            created_at: model.created_at,
            details: None,
        }
    }
}

impl From<BookingWithDetails> for BookingResponse {
    fn from(value: BookingWithDetails) -> Self {
        let mut response = BookingResponse::from(value.booking);
        response.details = Some(value.details.into_iter().map(Into::into).collect());
        response
    }
}

/// Create a booking in the pending-payment state
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Selected service not found", body = crate::errors::ErrorResponse),
        (status = 503, description = "Booking code pool exhausted, retry", body = crate::errors::ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateBookingInput {
        name: payload.name,
        phone_number: payload.phone_number,
        email: payload.email,
        schedule_at: payload.schedule_at,
        started_time: payload.started_time,
        proof: payload.proof,
        post_code: payload.post_code,
        city: payload.city,
        address: payload.address,
        service_ids: payload.service_ids,
    };

    let booking = state
        .services
        .bookings
        .create_booking(input)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(BookingResponse::from(booking)))
}

/// Price a selection without persisting anything.
/// Booking forms call this on every line-item change.
#[utoipa::path(
    post,
    path = "/api/v1/bookings/quote",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Totals computed", body = BookingTotals),
        (status = 400, description = "Empty selection", body = crate::errors::ErrorResponse),
        (status = 404, description = "Selected service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn quote_booking(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let totals = state
        .services
        .bookings
        .quote(&payload.service_ids)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(totals))
}

/// List bookings, newest first
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Bookings retrieved")
    ),
    tag = "Bookings"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let page = query.page;
    let per_page = query.per_page;

    let (bookings, total) = state
        .services
        .bookings
        .list_bookings(query)
        .await
        .map_err(map_service_error)?;

    let data: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
    Ok(success_response(PaginatedResponse::new(
        data, page, per_page, total,
    )))
}

/// Get a booking with its line items
#[utoipa::path(
    get,
    path = "/api/v1/bookings/:id",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking retrieved", body = BookingResponse),
        (status = 404, description = "Booking not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let booking = state
        .services
        .bookings
        .get_booking(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(BookingResponse::from(booking)))
}

/// Get a booking by its transaction code
#[utoipa::path(
    get,
    path = "/api/v1/bookings/by-code/:code",
    params(
        ("code" = String, Path, description = "Booking transaction code, e.g. SHUJIA1234")
    ),
    responses(
        (status = 200, description = "Booking retrieved", body = BookingResponse),
        (status = 404, description = "Booking not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn get_booking_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let booking = state
        .services
        .bookings
        .get_booking_by_code(&code)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(BookingResponse::from(booking)))
}

/// Approve a pending booking (one-way transition to paid)
#[utoipa::path(
    post,
    path = "/api/v1/bookings/:id/approve",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking approved", body = BookingResponse),
        (status = 404, description = "Booking not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Booking already approved", body = crate::errors::ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn approve_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let booking = state
        .services
        .bookings
        .approve_booking(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(BookingResponse::from(booking)))
}

/// Soft-delete a booking
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/:id",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    state
        .services
        .bookings
        .delete_booking(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
