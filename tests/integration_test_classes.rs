mod common;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use common::TestApp;
use fitness_booking::{domain::models::fitness_class::NewFitnessClass, error::AppError};

#[tokio::test]
async fn test_empty_catalog_returns_empty_list() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/classes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_classes_sorted_by_schedule() {
    let app = TestApp::new().await;
    let base = Utc.with_ymd_and_hms(2025, 6, 10, 6, 0, 0).unwrap();

    // Inserted out of order on purpose
    app.add_class("Pilates", base + Duration::hours(5), 4).await;
    app.add_class("Spin", base, 6).await;
    app.add_class("Boxing", base + Duration::hours(2), 3).await;
    app.add_class("Stretch", base + Duration::hours(2), 3).await;

    let (status, body) = app.get("/classes").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = body.as_array().unwrap().iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Spin", "Boxing", "Stretch", "Pilates"]);

    let times: Vec<chrono::DateTime<chrono::FixedOffset>> = body.as_array().unwrap().iter()
        .map(|c| chrono::DateTime::parse_from_rfc3339(c["datetime"].as_str().unwrap()).unwrap())
        .collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_seeded_catalog_in_studio_timezone() {
    let app = TestApp::new().await;
    assert_eq!(app.seed_sample_classes().await, 3);
    // Second run is a no-op because the catalog is no longer empty
    assert_eq!(app.seed_sample_classes().await, 0);

    let (status, body) = app.get("/classes").await;
    assert_eq!(status, StatusCode::OK);

    let classes = body.as_array().unwrap();
    assert_eq!(classes.len(), 3);

    assert_eq!(classes[0]["name"], "Yoga");
    assert_eq!(classes[0]["instructor"], "Ram");
    assert_eq!(classes[0]["available_slots"], 5);
    assert_eq!(classes[0]["datetime"], "2025-06-10T07:00:00+05:30");

    assert_eq!(classes[1]["name"], "Zumba");
    assert_eq!(classes[1]["available_slots"], 10);
    assert_eq!(classes[2]["name"], "HIIT");
    assert_eq!(classes[2]["available_slots"], 8);

    for class in classes {
        for key in ["id", "name", "datetime", "instructor", "available_slots"] {
            assert!(class.get(key).is_some(), "missing {}", key);
        }
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_class_validates_input() {
    let app = TestApp::new().await;

    let blank = app.state.catalog
        .create_class(&NewFitnessClass::new("   ", Utc::now(), "Coach", 5))
        .await
        .unwrap_err();
    assert!(matches!(blank, AppError::Unprocessable(ref m) if m == "Class name must not be empty"));

    let negative = app.state.catalog
        .create_class(&NewFitnessClass::new("Boxing", Utc::now(), "Coach", -1))
        .await
        .unwrap_err();
    assert!(matches!(negative, AppError::Unprocessable(ref m) if m == "Available slots must not be negative"));

    assert_eq!(app.state.catalog.count().await.unwrap(), 0);

    let full = app.add_class("Boxing", Utc::now(), 0).await;
    assert_eq!(full.available_slots, 0);
    assert_eq!(app.state.catalog.count().await.unwrap(), 1);

    let missing = app.state.catalog.get_class(full.id + 1).await.unwrap_err();
    assert!(matches!(missing, AppError::NotFound(_)));
}
