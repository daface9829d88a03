use crate::handlers::common::success_response;
use crate::services::notifications::Notification;
use crate::{errors::ApiError, AppState};
use axum::{extract::State, routing::get, Router};

/// Creates the router for operator notification endpoints
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_notifications))
}

/// Recent operator notifications, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Notifications retrieved", body = [Notification])
    ),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let recent: Vec<Notification> = state.services.notifications.recent();
    Ok(success_response(recent))
}
