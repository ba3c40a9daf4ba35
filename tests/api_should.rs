use std::sync::Arc;
use std::time::{Duration, Instant};

use api::database::StoreError;
use api::database::clock::MockClockRepository;
use api::server::services::Services;
use api::{AppConfig, ApplicationServer, Database};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{TimeZone, Utc};
use clap::Parser;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

// points the pool at a port nobody listens on, deadlines left at their defaults
fn unreachable_config() -> AppConfig {
    AppConfig::try_parse_from([
        "backend-api",
        "--cargo-env",
        "test",
        "--db-host",
        "127.0.0.1",
        "--db-port",
        "1",
    ])
    .expect("test config should parse")
}

fn router_without_store() -> Router {
    let config = unreachable_config();
    let db = Database::connect_lazy(&config);
    ApplicationServer::router(Services::new(db, Arc::new(config)))
}

fn router_with_clock(clock: MockClockRepository) -> Router {
    ApplicationServer::router(Services::with_clock(
        Arc::new(clock),
        Arc::new(unreachable_config()),
    ))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).expect("every response is json");

    (status, body)
}

#[tokio::test]
async fn answer_health_without_a_store() {
    let (status, body) = get(router_without_store(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "backend-api");
    assert_eq!(body["version"], "1.0.0");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert_eq!(body.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn report_metrics_as_whole_megabytes() {
    let (status, body) = get(router_without_store(), "/api/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert_eq!(body["environment"], "test");

    let memory = body["memory"].as_object().unwrap();
    for key in ["rss", "heapUsed", "heapTotal"] {
        assert!(memory[key].is_u64(), "{key} should be a non-negative integer");
    }
    assert!(memory["heapTotal"].as_u64() >= memory["heapUsed"].as_u64());
}

#[tokio::test]
async fn keep_health_and_metrics_shape_stable_across_calls() {
    let router = router_without_store();

    for uri in ["/api/health", "/api/metrics"] {
        let (_, first) = get(router.clone(), uri).await;
        let (_, second) = get(router.clone(), uri).await;

        let keys = |v: &Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys(&first), keys(&second));
    }
}

#[tokio::test]
async fn serve_degraded_data_when_store_is_unreachable() {
    let start = Instant::now();
    let (status, body) = get(router_without_store(), "/api/data").await;

    // a refused connection falls back straight away, no waiting out the 3s query deadline
    assert!(start.elapsed() < Duration::from_secs(1));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Sample Data 1", "note": "Database not connected"},
            {"id": 2, "name": "Sample Data 2", "note": "Database not connected"}
        ])
    );
}

#[tokio::test]
async fn serve_degraded_data_when_the_query_errors() {
    let mut clock = MockClockRepository::new();
    clock
        .expect_current_time()
        .times(1)
        .returning(|| Err(StoreError::Query("permission denied".to_string())));

    let (status, body) = get(router_with_clock(clock), "/api/data").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.get("timestamp").is_none()));
}

#[tokio::test]
async fn stamp_data_with_the_store_clock() {
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 8, 15, 0).unwrap();
    let mut clock = MockClockRepository::new();
    clock.expect_current_time().times(1).returning(move || Ok(now));

    let (status, body) = get(router_with_clock(clock), "/api/data").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    for (idx, record) in records.iter().enumerate() {
        assert_eq!(record["id"], idx + 1);
        assert_eq!(record["name"], format!("Sample Data {}", idx + 1));
        assert_eq!(record["timestamp"], "2026-10-18T08:15:00.000Z");
        assert!(record.get("note").is_none());
    }
}

#[tokio::test]
async fn return_json_404_for_unknown_routes() {
    let (status, body) = get(router_without_store(), "/api/users").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"]["message"][0], "/api/users doesn't exist.");
}

#[tokio::test]
async fn allow_any_origin() {
    let response = router_without_store()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "http://frontend.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
