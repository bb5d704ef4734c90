//! HTTP API integration tests — exercise the server endpoints over in-memory stores.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use careerpath_config::schema::ServerConfig;
use careerpath_core::{CareerError, SkillRecord, SkillStore};
use careerpath_server::{AppState, build_router};
use careerpath_store::MemorySkillStore;

fn seeded_store() -> MemorySkillStore {
    MemorySkillStore::with_records(vec![
        SkillRecord::named("Python")
            .with_scope("General purpose")
            .with_related_roles(["Data Scientist", "Backend Developer"])
            .with_growth_rate("High"),
        SkillRecord::named("Data Analysis").with_scope("Analytics"),
        SkillRecord::named("art"),
    ])
}

fn setup_with(store: Arc<dyn SkillStore>) -> axum::Router {
    let state = Arc::new(AppState::new(store));
    build_router(state, &ServerConfig::default())
}

fn setup() -> axum::Router {
    setup_with(Arc::new(seeded_store()))
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::post("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Helper to read the full body as JSON.
async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ── Analyze ────────────────────────────────────────────────────

#[tokio::test]
async fn test_analyze_returns_insights() {
    let app = setup();
    let resp = app
        .oneshot(analyze_request(
            r#"{"skills":"I have strong Python and data analysis skills"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(json["Python"]["scope"], "General purpose");
    assert_eq!(json["Python"]["related_roles"][1], "Backend Developer");
    assert_eq!(json["Python"]["growth_rate"], "High");
    assert_eq!(
        json["Data Analysis"]["growth_rate"],
        "No growth rate data available"
    );
    assert_eq!(
        json["Data Analysis"]["related_roles"],
        serde_json::json!(["No roles data available"])
    );
}

#[tokio::test]
async fn test_analyze_missing_skills_field_is_empty() {
    let app = setup();
    let resp = app.oneshot(analyze_request("{}")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_analyze_no_matches_is_empty_object() {
    let app = setup();
    let resp = app
        .oneshot(analyze_request(r#"{"skills":"welding and plumbing"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({}));
}

#[tokio::test]
async fn test_analyze_substring_false_positive() {
    let app = setup();
    let resp = app
        .oneshot(analyze_request(r#"{"skills":"I like smart contracts"}"#))
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert!(json.get("art").is_some());
    assert_eq!(json["art"]["scope"], "No scope data available");
}

#[tokio::test]
async fn test_analyze_empty_vocabulary() {
    let app = setup_with(Arc::new(MemorySkillStore::new()));
    let resp = app
        .oneshot(analyze_request(r#"{"skills":"anything"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({}));
}

/// Vocabulary lists a skill the lookup can no longer find.
struct DriftingStore;

#[async_trait]
impl SkillStore for DriftingStore {
    async fn skill_names(&self) -> careerpath_core::Result<Vec<String>> {
        Ok(vec!["Kotlin".into()])
    }

    async fn find_skill(&self, _name: &str) -> careerpath_core::Result<Option<SkillRecord>> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_analyze_lookup_miss_returns_marker_string() {
    let app = setup_with(Arc::new(DriftingStore));
    let resp = app
        .oneshot(analyze_request(r#"{"skills":"Kotlin on Android"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"Kotlin": "No data available"})
    );
}

struct DownStore;

#[async_trait]
impl SkillStore for DownStore {
    async fn skill_names(&self) -> careerpath_core::Result<Vec<String>> {
        Err(CareerError::Store("connection refused".into()))
    }

    async fn find_skill(&self, _name: &str) -> careerpath_core::Result<Option<SkillRecord>> {
        Err(CareerError::Store("connection refused".into()))
    }
}

#[tokio::test]
async fn test_analyze_store_failure_is_server_error() {
    let state = Arc::new(AppState::new(Arc::new(DownStore)));
    let app = build_router(state.clone(), &ServerConfig::default());
    let resp = app
        .oneshot(analyze_request(r#"{"skills":"python"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        state
            .metrics
            .render_prometheus()
            .contains("careerpath_store_errors_total 1")
    );
}

#[tokio::test]
async fn test_analyze_rejects_non_json() {
    let app = setup();
    let req = Request::post("/analyze")
        .body(Body::from("skills=python"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_analyze_rejects_non_string_skills() {
    let app = setup();
    let resp = app
        .oneshot(analyze_request(r#"{"skills":42}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── CORS ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = setup();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/analyze")
        .header("origin", "https://example.org")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let allow = resp
        .headers()
        .get("access-control-allow-origin")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(allow, "*");
}

#[tokio::test]
async fn test_cors_disabled() {
    let config = ServerConfig {
        cors: false,
        ..Default::default()
    };
    let app = build_router(Arc::new(AppState::new(Arc::new(seeded_store()))), &config);
    let req = Request::post("/analyze")
        .header("content-type", "application/json")
        .header("origin", "https://example.org")
        .body(Body::from("{}"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

// ── Health & Metrics ───────────────────────────────────────────

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup();
    let req = Request::get("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();
    let req = Request::get("/metrics").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(ct.contains("text/plain"));
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("careerpath_analyze_requests_total"));
}
