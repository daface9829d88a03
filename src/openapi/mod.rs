use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shujia Booking API",
        version = "0.1.0",
        description = r#"
# Shujia Back-Office API

Administrative API for a home-service booking business.

## Features

- **Catalog Management**: Categories, home services, benefits, and testimonials
- **Booking Intake**: Multi-line-item bookings with computed pricing (subtotal, 11% tax, total)
- **Payment Approval**: One-way approval transition with operator notifications
- **Price Quotes**: Recompute totals on every line-item change before submitting

## Error Handling

The API uses consistent error response formats with appropriate HTTP status codes:

```json
{
  "error": "Not Found",
  "message": "Booking 550e8400-e29b-41d4-a716-446655440000 not found",
  "timestamp": "2026-04-04T00:00:00Z"
}
```

## Pagination

List endpoints support pagination with `page` and `per_page` query parameters
(default: page 1, 20 items, max 100).
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Categories", description = "Catalog category endpoints"),
        (name = "Services", description = "Home-service catalog endpoints"),
        (name = "Bookings", description = "Booking transaction endpoints"),
        (name = "Notifications", description = "Operator notification endpoints"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        handlers::categories::create_category,
        handlers::categories::list_categories,
        handlers::categories::get_category,
        handlers::categories::update_category,
        handlers::categories::delete_category,
        handlers::home_services::create_service,
        handlers::home_services::list_services,
        handlers::home_services::get_service,
        handlers::home_services::get_service_by_slug,
        handlers::home_services::update_service,
        handlers::home_services::delete_service,
        handlers::home_services::add_benefit,
        handlers::home_services::list_benefits,
        handlers::home_services::remove_benefit,
        handlers::home_services::add_testimonial,
        handlers::home_services::list_testimonials,
        handlers::home_services::remove_testimonial,
        handlers::bookings::create_booking,
        handlers::bookings::quote_booking,
        handlers::bookings::list_bookings,
        handlers::bookings::get_booking,
        handlers::bookings::get_booking_by_code,
        handlers::bookings::approve_booking,
        handlers::bookings::delete_booking,
        handlers::notifications::list_notifications,
        handlers::health::liveness_check,
        handlers::health::readiness_check,
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::services::pricing::BookingTotals,
        crate::services::notifications::Notification,
        crate::services::notifications::NotificationLevel,
        handlers::categories::CreateCategoryRequest,
        handlers::categories::UpdateCategoryRequest,
        handlers::categories::CategoryResponse,
        handlers::home_services::CreateServiceRequest,
        handlers::home_services::UpdateServiceRequest,
        handlers::home_services::AddBenefitRequest,
        handlers::home_services::AddTestimonialRequest,
        handlers::home_services::ServiceResponse,
        handlers::home_services::BenefitResponse,
        handlers::home_services::TestimonialResponse,
        handlers::bookings::CreateBookingRequest,
        handlers::bookings::QuoteRequest,
        handlers::bookings::BookingResponse,
        handlers::bookings::TransactionDetailResponse,
    ))
)]
pub struct ApiDoc;

/// Swagger UI mounted at `/docs`, serving the spec at `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).expect("spec serializes");
        assert!(json.contains("/api/v1/bookings"));
        assert!(json.contains("/api/v1/services"));
    }
}
