use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use shujia_api::{
    config::AppConfig,
    db,
    entities::{category, home_service},
    events::{self, EventSender},
    handlers::AppServices,
    services::catalog::{CreateCategoryInput, CreateServiceInput},
    services::notifications::NotificationService,
    AppState,
};
use tokio::sync::mpsc;
use tower::ServiceExt;
use uuid::Uuid;

/// Helper harness for spinning up an application state backed by a
/// throwaway SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    db_path: PathBuf,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_path = std::env::temp_dir().join(format!("shujia_test_{}.db", Uuid::new_v4()));
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let mut cfg = AppConfig::new(
            database_url,
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let db_arc = Arc::new(pool);
        let (event_tx, event_rx) = mpsc::channel(256);
        let event_sender = EventSender::new(event_tx);
        let notifications = NotificationService::new(cfg.notification_backlog);
        let event_task = tokio::spawn(events::process_events(event_rx, notifications.clone()));

        let services = AppServices::new(db_arc.clone(), event_sender.clone(), notifications, &cfg);

        let state = AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
        };

        let router = Router::new()
            .merge(shujia_api::handlers::health::routes())
            .nest("/api/v1", shujia_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            db_path,
            _event_task: event_task,
        }
    }

    /// Send a request against the router with an optional JSON body.
    #[allow(dead_code)]
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Seed a category through the catalog service.
    #[allow(dead_code)]
    pub async fn seed_category(&self, name: &str) -> category::Model {
        self.state
            .services
            .catalog
            .create_category(CreateCategoryInput {
                name: name.to_string(),
            })
            .await
            .expect("seed category for tests")
    }

    /// Seed a home service through the catalog service.
    #[allow(dead_code)]
    pub async fn seed_service(
        &self,
        category_id: Uuid,
        name: &str,
        price: Decimal,
    ) -> home_service::Model {
        self.state
            .services
            .catalog
            .create_service(CreateServiceInput {
                category_id,
                name: name.to_string(),
                thumbnail: "thumbnails/seeded.png".to_string(),
                description: "Seeded for integration tests".to_string(),
                duration_minutes: 60,
                price,
                is_popular: false,
            })
            .await
            .expect("seed service for tests")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Decode a response body as JSON.
#[allow(dead_code)]
pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

/// Parse a JSON field that serializes a decimal (string or number).
#[allow(dead_code)]
pub fn decimal_field(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().expect("decimal string"),
        Value::Number(n) => n.to_string().parse().expect("decimal number"),
        other => panic!("expected decimal-compatible json value, got {other:?}"),
    }
}
