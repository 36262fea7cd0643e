#![allow(dead_code)]

use fitness_booking::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::models::{booking::DuplicateKey, fitness_class::{FitnessClass, NewFitnessClass}},
    domain::services::seed::seed_if_empty,
    infra::factory::run_sqlite_migrations,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_class_repo::SqliteClassRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use std::str::FromStr;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    Router,
};
use chrono::{DateTime, Utc};
use tower::ServiceExt;
use serde_json::Value;

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_duplicate_key(DuplicateKey::BookingId).await
    }

    pub async fn with_duplicate_key(duplicate_key: DuplicateKey) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let config = Config {
            database_url: db_url,
            port: 0,
            studio_timezone: chrono_tz::Asia::Kolkata,
            duplicate_key,
            seed_sample_classes: false,
        };

        let state = Arc::new(AppState::new(
            config,
            Arc::new(SqliteClassRepo::new(pool.clone())),
            Arc::new(SqliteBookingRepo::new(pool.clone())),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn seed_sample_classes(&self) -> usize {
        seed_if_empty(&self.state.catalog, self.state.config.studio_timezone)
            .await
            .expect("Failed to seed sample classes")
    }

    pub async fn add_class(&self, name: &str, scheduled_at: DateTime<Utc>, slots: i32) -> FitnessClass {
        self.state.catalog
            .create_class(&NewFitnessClass::new(name, scheduled_at, "Coach", slots))
            .await
            .expect("Failed to create class")
    }

    pub async fn slots_of(&self, class_id: i64) -> i32 {
        self.state.catalog.get_class(class_id).await.unwrap().available_slots
    }

    pub async fn bookings_for(&self, class_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE class_id = ?")
            .bind(class_id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap();
        read(response).await
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, Some("application/json"), payload.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, content_type: Option<&str>, body: String) -> (StatusCode, Value) {
        let mut request = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let response = self.router.clone().oneshot(request.body(Body::from(body)).unwrap()).await.unwrap();
        read(response).await
    }

    pub async fn book(&self, class_id: i64, name: &str, email: &str) -> (StatusCode, Value) {
        self.post_json("/book", &serde_json::json!({
            "class_id": class_id,
            "client_name": name,
            "client_email": email
        })).await
    }
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
