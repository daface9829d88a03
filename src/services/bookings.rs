use crate::{
    entities::{booking_transaction, transaction_detail, BookingTransaction, TransactionDetail},
    errors::ServiceError,
    events::{Event, EventSender},
    services::{
        booking_code,
        catalog::CatalogService,
        pricing::{self, BookingTotals, PricingError},
    },
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use utoipa::IntoParams;
use uuid::Uuid;

const MAX_LIMIT: u64 = 100;

/// Booking lifecycle service: intake, approval, queries, soft delete
#[derive(Clone)]
pub struct BookingService {
    db: Arc<DatabaseConnection>,
    catalog: Arc<CatalogService>,
    event_sender: EventSender,
    max_code_attempts: u32,
}

impl BookingService {
    pub fn new(
        db: Arc<DatabaseConnection>,
        catalog: Arc<CatalogService>,
        event_sender: EventSender,
        max_code_attempts: u32,
    ) -> Self {
        Self {
            db,
            catalog,
            event_sender,
            max_code_attempts,
        }
    }

    /// Compute totals for a selection without persisting anything.
    /// Booking forms call this on every line-item change.
    pub async fn quote(&self, service_ids: &[Uuid]) -> Result<BookingTotals, ServiceError> {
        if service_ids.is_empty() {
            return Err(PricingError::EmptySelection.into());
        }
        let prices = self.catalog.prices_for(service_ids).await?;
        Ok(pricing::compute_totals(service_ids, &prices)?)
    }

    /// Create a booking in the pending-payment state.
    ///
    /// Totals are recomputed server-side from live prices, then the
    /// transaction row and its detail rows (price snapshots) are inserted
    /// atomically. The booking code is allocated by generate-and-insert:
    /// a random candidate is pre-checked against every stored code
    /// (soft-deleted included), and a unique-index violation on insert —
    /// the pre-check race window under concurrent writers — retries the
    /// whole cycle with a fresh candidate, up to the configured bound.
    #[instrument(skip(self, input), fields(line_items = input.service_ids.len()))]
    pub async fn create_booking(
        &self,
        input: CreateBookingInput,
    ) -> Result<BookingWithDetails, ServiceError> {
        if input.service_ids.is_empty() {
            return Err(PricingError::EmptySelection.into());
        }

        let prices = self.catalog.prices_for(&input.service_ids).await?;
        let totals = pricing::compute_totals(&input.service_ids, &prices)?;

        for attempt in 1..=self.max_code_attempts {
            let candidate = booking_code::random_code(&mut rand::thread_rng());

            if self.code_exists(&candidate).await? {
                continue;
            }

            match self.insert_booking(&input, &prices, totals, &candidate).await {
                Ok(result) => {
                    self.event_sender
                        .send_or_log(Event::BookingCreated {
                            booking_id: result.booking.id,
                            booking_trx_id: result.booking.booking_trx_id.clone(),
                        })
                        .await;

                    info!(
                        "Created booking {} ({}) with {} line items",
                        result.booking.id,
                        result.booking.booking_trx_id,
                        result.details.len()
                    );
                    return Ok(result);
                }
                Err(ServiceError::DatabaseError(db_err))
                    if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    warn!(attempt, code = %candidate, "booking code collided on insert, retrying");
                    continue;
                }
                Err(other) => return Err(other),
            }
        }

        Err(ServiceError::CodeSpaceExhausted(self.max_code_attempts))
    }

    /// Mark a pending booking as paid. One-way: approving an
    /// already-paid booking is rejected without side effects.
    #[instrument(skip(self))]
    pub async fn approve_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<booking_transaction::Model, ServiceError> {
        let booking = self.get_booking_model(booking_id).await?;

        if booking.is_paid {
            return Err(ServiceError::AlreadyApproved(booking.booking_trx_id));
        }

        let code = booking.booking_trx_id.clone();
        let mut active: booking_transaction::ActiveModel = booking.into();
        active.is_paid = Set(true);
        active.updated_at = Set(Some(Utc::now()));
        let booking = active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::BookingApproved {
                booking_id,
                booking_trx_id: code,
            })
            .await;

        info!("Approved booking {}", booking_id);
        Ok(booking)
    }

    pub async fn get_booking(&self, booking_id: Uuid) -> Result<BookingWithDetails, ServiceError> {
        let booking = self.get_booking_model(booking_id).await?;
        self.with_details(booking).await
    }

    pub async fn get_booking_by_code(&self, code: &str) -> Result<BookingWithDetails, ServiceError> {
        let booking = BookingTransaction::find()
            .filter(booking_transaction::Column::BookingTrxId.eq(code))
            .filter(booking_transaction::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Booking {} not found", code)))?;
        self.with_details(booking).await
    }

    #[instrument(skip(self))]
    pub async fn list_bookings(
        &self,
        query: BookingListQuery,
    ) -> Result<(Vec<booking_transaction::Model>, u64), ServiceError> {
        let mut finder = BookingTransaction::find()
            .order_by_desc(booking_transaction::Column::CreatedAt);

        if !query.include_deleted {
            finder = finder.filter(booking_transaction::Column::DeletedAt.is_null());
        }
        if let Some(is_paid) = query.is_paid {
            finder = finder.filter(booking_transaction::Column::IsPaid.eq(is_paid));
        }

        let per_page = query.per_page.clamp(1, MAX_LIMIT);
        let paginator = finder.paginate(&*self.db, per_page);
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(query.page.saturating_sub(1))
            .await?;

        Ok((items, total))
    }

    /// Soft-delete a booking. Detail rows stay in place; the row is
    /// excluded from default listings but keeps its code reserved.
    #[instrument(skip(self))]
    pub async fn delete_booking(&self, booking_id: Uuid) -> Result<(), ServiceError> {
        let booking = self.get_booking_model(booking_id).await?;
        let mut active: booking_transaction::ActiveModel = booking.into();
        active.deleted_at = Set(Some(Utc::now()));
        active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::BookingDeleted(booking_id))
            .await;

        info!("Soft-deleted booking {}", booking_id);
        Ok(())
    }

    async fn get_booking_model(
        &self,
        booking_id: Uuid,
    ) -> Result<booking_transaction::Model, ServiceError> {
        BookingTransaction::find_by_id(booking_id)
            .filter(booking_transaction::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Booking {} not found", booking_id)))
    }

    async fn with_details(
        &self,
        booking: booking_transaction::Model,
    ) -> Result<BookingWithDetails, ServiceError> {
        let details = booking
            .find_related(TransactionDetail)
            .all(&*self.db)
            .await?;
        Ok(BookingWithDetails { booking, details })
    }

    /// Existence check over the full code set, soft-deleted rows included.
    async fn code_exists(&self, code: &str) -> Result<bool, ServiceError> {
        let count = BookingTransaction::find()
            .filter(booking_transaction::Column::BookingTrxId.eq(code))
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }

    /// Insert the transaction and its detail rows in one database
    /// transaction: a booking without its line items is an invalid state.
    async fn insert_booking(
        &self,
        input: &CreateBookingInput,
        prices: &HashMap<Uuid, Decimal>,
        totals: BookingTotals,
        code: &str,
    ) -> Result<BookingWithDetails, ServiceError> {
        let txn = self.db.begin().await?;
        let booking_id = Uuid::new_v4();
        let now = Utc::now();

        let booking = booking_transaction::ActiveModel {
            id: Set(booking_id),
            booking_trx_id: Set(code.to_string()),
            name: Set(input.name.clone()),
            phone_number: Set(input.phone_number.clone()),
            email: Set(input.email.clone()),
            started_time: Set(input.started_time.clone()),
            schedule_at: Set(input.schedule_at),
            proof: Set(input.proof.clone()),
            post_code: Set(input.post_code.clone()),
            city: Set(input.city.clone()),
            address: Set(input.address.clone()),
            subtotal: Set(totals.subtotal),
            total_tax_amount: Set(totals.total_tax_amount),
            total_amount: Set(totals.total_amount),
            is_paid: Set(false),
            created_at: Set(now),
            updated_at: Set(None),
            deleted_at: Set(None),
        };
        let booking = booking.insert(&txn).await?;

        let mut details = Vec::with_capacity(input.service_ids.len());
        for service_id in &input.service_ids {
            let price = prices
                .get(service_id)
                .copied()
                .ok_or(PricingError::ServiceNotFound(*service_id))?;

            let detail = transaction_detail::ActiveModel {
                id: Set(Uuid::new_v4()),
                booking_transaction_id: Set(booking_id),
                home_service_id: Set(*service_id),
                price: Set(price),
                created_at: Set(now),
            };
            details.push(detail.insert(&txn).await?);
        }

        txn.commit().await?;
        Ok(BookingWithDetails { booking, details })
    }
}

/// Booking creation input; one entry in `service_ids` per line item
#[derive(Debug, Clone)]
pub struct CreateBookingInput {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub schedule_at: NaiveDate,
    pub started_time: String,
    pub proof: String,
    pub post_code: String,
    pub city: String,
    pub address: String,
    pub service_ids: Vec<Uuid>,
}

/// A booking together with its line items
#[derive(Debug, Clone)]
pub struct BookingWithDetails {
    pub booking: booking_transaction::Model,
    pub details: Vec<transaction_detail::Model>,
}

/// Listing filters for bookings
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct BookingListQuery {
    pub is_paid: Option<bool>,
    #[serde(default)]
    pub include_deleted: bool,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

impl Default for BookingListQuery {
    fn default() -> Self {
        Self {
            is_paid: None,
            include_deleted: false,
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}
