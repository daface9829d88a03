use crate::{
    entities::{
        category, home_service, service_benefit, service_testimonial, Category, HomeService,
        ServiceBenefit, ServiceTestimonial,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

const MAX_LIMIT: u64 = 100;

/// Derive a URL-safe slug from a display name.
///
/// Lowercase, every maximal run of non-alphanumeric characters collapsed
/// into a single `-`, no leading or trailing separator.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Catalog service for categories, home services, and their child records
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
    event_sender: EventSender,
}

impl CatalogService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: EventSender) -> Self {
        Self { db, event_sender }
    }

    // ---- Categories ----

    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> Result<category::Model, ServiceError> {
        let model = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender
            .send_or_log(Event::CategoryCreated(created.id))
            .await;

        info!("Created category: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        category_id: Uuid,
        input: UpdateCategoryInput,
    ) -> Result<category::Model, ServiceError> {
        let existing = self.get_category(category_id).await?;
        let mut active: category::ActiveModel = existing.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(&*self.db).await?;
        self.event_sender
            .send_or_log(Event::CategoryUpdated(category_id))
            .await;
        Ok(updated)
    }

    pub async fn get_category(&self, category_id: Uuid) -> Result<category::Model, ServiceError> {
        Category::find_by_id(category_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category {} not found", category_id)))
    }

    pub async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        Ok(Category::find()
            .order_by_asc(category::Column::Name)
            .all(&*self.db)
            .await?)
    }

    /// Delete a category. The storage layer cascades the delete to the
    /// category's services and their child records.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, category_id: Uuid) -> Result<(), ServiceError> {
        let existing = self.get_category(category_id).await?;
        existing.delete(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::CategoryDeleted(category_id))
            .await;

        info!("Deleted category: {}", category_id);
        Ok(())
    }

    // ---- Home services ----

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_service(
        &self,
        input: CreateServiceInput,
    ) -> Result<home_service::Model, ServiceError> {
        // Reject unknown categories up front for a clean 404
        self.get_category(input.category_id).await?;

        let model = home_service::ActiveModel {
            id: Set(Uuid::new_v4()),
            category_id: Set(input.category_id),
            slug: Set(slugify(&input.name)),
            name: Set(input.name),
            thumbnail: Set(input.thumbnail),
            description: Set(input.description),
            duration_minutes: Set(input.duration_minutes),
            price: Set(input.price),
            is_popular: Set(input.is_popular),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
            deleted_at: Set(None),
        };

        let created = model.insert(&*self.db).await?;
        self.event_sender
            .send_or_log(Event::ServiceCreated(created.id))
            .await;

        info!("Created service: {} ({})", created.id, created.slug);
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update_service(
        &self,
        service_id: Uuid,
        input: UpdateServiceInput,
    ) -> Result<home_service::Model, ServiceError> {
        let existing = self.get_service(service_id).await?;
        let mut active: home_service::ActiveModel = existing.into();

        if let Some(category_id) = input.category_id {
            self.get_category(category_id).await?;
            active.category_id = Set(category_id);
        }
        if let Some(name) = input.name {
            // The slug always tracks the display name
            active.slug = Set(slugify(&name));
            active.name = Set(name);
        }
        if let Some(thumbnail) = input.thumbnail {
            active.thumbnail = Set(thumbnail);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(duration_minutes) = input.duration_minutes {
            active.duration_minutes = Set(duration_minutes);
        }
        if let Some(price) = input.price {
            active.price = Set(price);
        }
        if let Some(is_popular) = input.is_popular {
            active.is_popular = Set(is_popular);
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(&*self.db).await?;
        self.event_sender
            .send_or_log(Event::ServiceUpdated(service_id))
            .await;
        Ok(updated)
    }

    /// Fetch a live (non-deleted) service.
    pub async fn get_service(&self, service_id: Uuid) -> Result<home_service::Model, ServiceError> {
        HomeService::find_by_id(service_id)
            .filter(home_service::Column::DeletedAt.is_null())
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Service {} not found", service_id)))
    }

    /// Slug carries no uniqueness constraint; the most recently created
    /// live match wins.
    pub async fn get_service_by_slug(
        &self,
        slug: &str,
    ) -> Result<home_service::Model, ServiceError> {
        HomeService::find()
            .filter(home_service::Column::Slug.eq(slug))
            .filter(home_service::Column::DeletedAt.is_null())
            .order_by_desc(home_service::Column::CreatedAt)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Service with slug '{}' not found", slug)))
    }

    #[instrument(skip(self))]
    pub async fn list_services(
        &self,
        query: ServiceListQuery,
    ) -> Result<(Vec<home_service::Model>, u64), ServiceError> {
        let mut finder = HomeService::find()
            .filter(home_service::Column::DeletedAt.is_null())
            .order_by_asc(home_service::Column::Name);

        if let Some(category_id) = query.category_id {
            finder = finder.filter(home_service::Column::CategoryId.eq(category_id));
        }
        if let Some(popular) = query.popular {
            finder = finder.filter(home_service::Column::IsPopular.eq(popular));
        }

        let per_page = query.per_page.clamp(1, MAX_LIMIT);
        let paginator = finder.paginate(&*self.db, per_page);
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(query.page.saturating_sub(1))
            .await?;

        Ok((items, total))
    }

    /// Soft-delete a service: it disappears from listings and price
    /// resolution but stays referencable by historical bookings.
    #[instrument(skip(self))]
    pub async fn delete_service(&self, service_id: Uuid) -> Result<(), ServiceError> {
        let existing = self.get_service(service_id).await?;
        let mut active: home_service::ActiveModel = existing.into();
        active.deleted_at = Set(Some(Utc::now()));
        active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::ServiceDeleted(service_id))
            .await;

        info!("Soft-deleted service: {}", service_id);
        Ok(())
    }

    /// Current unit prices for the given live services, keyed by id.
    /// Soft-deleted and unknown ids are simply absent from the result;
    /// the pricing calculator turns absence into an error.
    pub async fn prices_for(
        &self,
        service_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Decimal>, ServiceError> {
        let rows = HomeService::find()
            .filter(home_service::Column::Id.is_in(service_ids.iter().copied()))
            .filter(home_service::Column::DeletedAt.is_null())
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(|row| (row.id, row.price)).collect())
    }

    // ---- Benefits ----

    #[instrument(skip(self))]
    pub async fn add_benefit(
        &self,
        service_id: Uuid,
        name: String,
    ) -> Result<service_benefit::Model, ServiceError> {
        self.get_service(service_id).await?;

        let model = service_benefit::ActiveModel {
            id: Set(Uuid::new_v4()),
            home_service_id: Set(service_id),
            name: Set(name),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };
        Ok(model.insert(&*self.db).await?)
    }

    pub async fn list_benefits(
        &self,
        service_id: Uuid,
    ) -> Result<Vec<service_benefit::Model>, ServiceError> {
        let service = self.get_service(service_id).await?;
        Ok(service
            .find_related(ServiceBenefit)
            .order_by_asc(service_benefit::Column::CreatedAt)
            .all(&*self.db)
            .await?)
    }

    pub async fn remove_benefit(
        &self,
        service_id: Uuid,
        benefit_id: Uuid,
    ) -> Result<(), ServiceError> {
        let benefit = ServiceBenefit::find_by_id(benefit_id)
            .filter(service_benefit::Column::HomeServiceId.eq(service_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Benefit {} not found", benefit_id)))?;

        benefit.delete(&*self.db).await?;
        Ok(())
    }

    // ---- Testimonials ----

    #[instrument(skip(self, input))]
    pub async fn add_testimonial(
        &self,
        service_id: Uuid,
        input: CreateTestimonialInput,
    ) -> Result<service_testimonial::Model, ServiceError> {
        self.get_service(service_id).await?;

        let model = service_testimonial::ActiveModel {
            id: Set(Uuid::new_v4()),
            home_service_id: Set(service_id),
            name: Set(input.name),
            photo: Set(input.photo),
            message: Set(input.message),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };
        Ok(model.insert(&*self.db).await?)
    }

    pub async fn list_testimonials(
        &self,
        service_id: Uuid,
    ) -> Result<Vec<service_testimonial::Model>, ServiceError> {
        let service = self.get_service(service_id).await?;
        Ok(service
            .find_related(ServiceTestimonial)
            .order_by_asc(service_testimonial::Column::CreatedAt)
            .all(&*self.db)
            .await?)
    }

    pub async fn remove_testimonial(
        &self,
        service_id: Uuid,
        testimonial_id: Uuid,
    ) -> Result<(), ServiceError> {
        let testimonial = ServiceTestimonial::find_by_id(testimonial_id)
            .filter(service_testimonial::Column::HomeServiceId.eq(service_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Testimonial {} not found", testimonial_id))
            })?;

        testimonial.delete(&*self.db).await?;
        Ok(())
    }
}

/// Category creation input
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
}

/// Category update input
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryInput {
    pub name: Option<String>,
}

/// Service creation input
#[derive(Debug, Clone)]
pub struct CreateServiceInput {
    pub category_id: Uuid,
    pub name: String,
    pub thumbnail: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price: Decimal,
    pub is_popular: bool,
}

/// Service update input; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateServiceInput {
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub price: Option<Decimal>,
    pub is_popular: Option<bool>,
}

/// Testimonial creation input
#[derive(Debug, Clone)]
pub struct CreateTestimonialInput {
    pub name: String,
    pub photo: String,
    pub message: String,
}

/// Listing filters for home services
#[derive(Debug, Clone)]
pub struct ServiceListQuery {
    pub category_id: Option<Uuid>,
    pub popular: Option<bool>,
    pub page: u64,
    pub per_page: u64,
}

impl Default for ServiceListQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            popular: None,
            page: 1,
            per_page: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Deep Clean & Shine"), "deep-clean-shine");
    }

    #[test]
    fn slugify_is_deterministic() {
        assert_eq!(slugify("Deep Clean & Shine"), slugify("Deep Clean & Shine"));
    }

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("AC Maintenance"), "ac-maintenance");
    }

    #[test]
    fn slugify_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  Spring Cleaning!  "), "spring-cleaning");
        assert_eq!(slugify("---Carpet---Wash---"), "carpet-wash");
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("24/7 Emergency Plumbing"), "24-7-emergency-plumbing");
    }

    #[test]
    fn slugify_strips_non_ascii() {
        assert_eq!(slugify("Café Déluxe"), "caf-d-luxe");
    }

    #[test]
    fn slugify_handles_degenerate_names() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
