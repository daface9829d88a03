use crate::entities::{home_service, service_benefit, service_testimonial};
use crate::handlers::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginatedResponse,
};
use crate::services::catalog::{
    CreateServiceInput, CreateTestimonialInput, ServiceListQuery, UpdateServiceInput,
};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Json, Path, Query, State},
    routing::{delete, get, post},
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Custom validator for Decimal minimum value
fn validate_decimal_min_zero(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("decimal_min_zero"));
    }
    Ok(())
}

/// Creates the router for home-service endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_service).get(list_services))
        .route(
            "/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/slug/:slug", get(get_service_by_slug))
        .route("/:id/benefits", post(add_benefit).get(list_benefits))
        .route("/:id/benefits/:benefit_id", delete(remove_benefit))
        .route(
            "/:id/testimonials",
            post(add_testimonial).get(list_testimonials),
        )
        .route(
            "/:id/testimonials/:testimonial_id",
            delete(remove_testimonial),
        )
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    pub category_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub thumbnail: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub duration_minutes: i32,
    #[validate(custom = "validate_decimal_min_zero")]
    pub price: Decimal,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceRequest {
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub thumbnail: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
    #[validate(custom = "validate_decimal_min_zero")]
    pub price: Option<Decimal>,
    pub is_popular: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddBenefitRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddTestimonialRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub photo: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListServicesParams {
    pub category_id: Option<Uuid>,
    pub popular: Option<bool>,
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

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: Uuid,
    pub category_id: Uuid,
    pub slug: String,
    pub name: String,
    pub thumbnail: String,
    pub description: String,
    pub duration_minutes: i32,
    pub price: Decimal,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<home_service::Model> for ServiceResponse {
    fn from(model: home_service::Model) -> Self {
        Self {
            id: model.id,
            category_id: model.category_id,
            slug: model.slug,
            name: model.name,
            thumbnail: model.thumbnail,
            description: model.description,
            duration_minutes: model.duration_minutes,
            price: model.price,
            is_popular: model.is_popular,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BenefitResponse {
    pub id: Uuid,
    pub home_service_id: Uuid,
    pub name: String,
}

impl From<service_benefit::Model> for BenefitResponse {
    fn from(model: service_benefit::Model) -> Self {
        Self {
            id: model.id,
            home_service_id: model.home_service_id,
            name: model.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TestimonialResponse {
    pub id: Uuid,
    pub home_service_id: Uuid,
    pub name: String,
    pub photo: String,
    pub message: String,
}

impl From<service_testimonial::Model> for TestimonialResponse {
    fn from(model: service_testimonial::Model) -> Self {
        Self {
            id: model.id,
            home_service_id: model.home_service_id,
            name: model.name,
            photo: model.photo,
            message: model.message,
        }
    }
}

/// Create a new home service; the slug is derived from the name
#[utoipa::path(
    post,
    path = "/api/v1/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::ValidationError(
            "Service name cannot be blank".to_string(),
        ));
    }

    let input = CreateServiceInput {
        category_id: payload.category_id,
        name,
        thumbnail: payload.thumbnail,
        description: payload.description,
        duration_minutes: payload.duration_minutes,
        price: payload.price,
        is_popular: payload.is_popular,
    };

    let service = state
        .services
        .catalog
        .create_service(input)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(ServiceResponse::from(service)))
}

/// List home services with optional category/popularity filters
#[utoipa::path(
    get,
    path = "/api/v1/services",
    params(ListServicesParams),
    responses(
        (status = 200, description = "Services retrieved")
    ),
    tag = "Services"
)]
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ListServicesParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let query = ServiceListQuery {
        category_id: params.category_id,
        popular: params.popular,
        page: params.page,
        per_page: params.per_page,
    };

    let (services, total) = state
        .services
        .catalog
        .list_services(query)
        .await
        .map_err(map_service_error)?;

    let data: Vec<ServiceResponse> = services.into_iter().map(Into::into).collect();
    Ok(success_response(PaginatedResponse::new(
        data,
        params.page,
        params.per_page,
        total,
    )))
}

/// Get a home service by ID
#[utoipa::path(
    get,
    path = "/api/v1/services/:id",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service retrieved", body = ServiceResponse),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let service = state
        .services
        .catalog
        .get_service(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ServiceResponse::from(service)))
}

/// Get a home service by slug
#[utoipa::path(
    get,
    path = "/api/v1/services/slug/:slug",
    params(
        ("slug" = String, Path, description = "URL-safe service slug")
    ),
    responses(
        (status = 200, description = "Service retrieved", body = ServiceResponse),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn get_service_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let service = state
        .services
        .catalog
        .get_service_by_slug(&slug)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ServiceResponse::from(service)))
}

/// Update a home service; renaming recomputes the slug
#[utoipa::path(
    put,
    path = "/api/v1/services/:id",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = UpdateServiceInput {
        category_id: payload.category_id,
        name: payload
            .name
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()),
        thumbnail: payload.thumbnail,
        description: payload.description,
        duration_minutes: payload.duration_minutes,
        price: payload.price,
        is_popular: payload.is_popular,
    };

    let service = state
        .services
        .catalog
        .update_service(id, input)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ServiceResponse::from(service)))
}

/// Soft-delete a home service
#[utoipa::path(
    delete,
    path = "/api/v1/services/:id",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    state
        .services
        .catalog
        .delete_service(id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

/// Attach a benefit to a service
#[utoipa::path(
    post,
    path = "/api/v1/services/:id/benefits",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = AddBenefitRequest,
    responses(
        (status = 201, description = "Benefit added", body = BenefitResponse),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn add_benefit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddBenefitRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let benefit = state
        .services
        .catalog
        .add_benefit(id, payload.name)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(BenefitResponse::from(benefit)))
}

/// List the benefits of a service
#[utoipa::path(
    get,
    path = "/api/v1/services/:id/benefits",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Benefits retrieved", body = [BenefitResponse]),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn list_benefits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let benefits = state
        .services
        .catalog
        .list_benefits(id)
        .await
        .map_err(map_service_error)?;

    let response: Vec<BenefitResponse> = benefits.into_iter().map(Into::into).collect();
    Ok(success_response(response))
}

/// Remove a benefit from a service
#[utoipa::path(
    delete,
    path = "/api/v1/services/:id/benefits/:benefit_id",
    params(
        ("id" = Uuid, Path, description = "Service ID"),
        ("benefit_id" = Uuid, Path, description = "Benefit ID")
    ),
    responses(
        (status = 204, description = "Benefit removed"),
        (status = 404, description = "Benefit not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn remove_benefit(
    State(state): State<AppState>,
    Path((id, benefit_id)): Path<(Uuid, Uuid)>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    state
        .services
        .catalog
        .remove_benefit(id, benefit_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

/// Attach a testimonial to a service
#[utoipa::path(
    post,
    path = "/api/v1/services/:id/testimonials",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = AddTestimonialRequest,
    responses(
        (status = 201, description = "Testimonial added", body = TestimonialResponse),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn add_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddTestimonialRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = CreateTestimonialInput {
        name: payload.name,
        photo: payload.photo,
        message: payload.message,
    };

    let testimonial = state
        .services
        .catalog
        .add_testimonial(id, input)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(TestimonialResponse::from(testimonial)))
}

/// List the testimonials of a service
#[utoipa::path(
    get,
    path = "/api/v1/services/:id/testimonials",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Testimonials retrieved", body = [TestimonialResponse]),
        (status = 404, description = "Service not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let testimonials = state
        .services
        .catalog
        .list_testimonials(id)
        .await
        .map_err(map_service_error)?;

    let response: Vec<TestimonialResponse> = testimonials.into_iter().map(Into::into).collect();
    Ok(success_response(response))
}

/// Remove a testimonial from a service
#[utoipa::path(
    delete,
    path = "/api/v1/services/:id/testimonials/:testimonial_id",
    params(
        ("id" = Uuid, Path, description = "Service ID"),
        ("testimonial_id" = Uuid, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 204, description = "Testimonial removed"),
        (status = 404, description = "Testimonial not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn remove_testimonial(
    State(state): State<AppState>,
    Path((id, testimonial_id)): Path<(Uuid, Uuid)>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    state
        .services
        .catalog
        .remove_testimonial(id, testimonial_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}
