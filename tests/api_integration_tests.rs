//! HTTP-level tests driving the full router with in-process requests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use rwh_assessment::api::{self, AppState};
use rwh_assessment::config::{Config, DefaultsConfig, ServerConfig};

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            enable_cors: false,
            request_timeout_secs: 5,
        },
        defaults: DefaultsConfig { annual_rainfall_mm: 1200.0 },
    }
}

fn app() -> Router {
    let cfg = test_config();
    api::router(AppState { cfg: cfg.clone() }, &cfg)
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("failed to parse JSON")
}

async fn post_assessment(payload: Value) -> axum::response::Response {
    app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessment")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_healthz_returns_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_engine_healthy() {
    let response = app()
        .oneshot(Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["engine"]["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_materials_lists_all_five() {
    let response = app()
        .oneshot(Request::builder().uri("/api/v1/materials").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["metadata"]["total_count"], 5);

    let materials = body["data"]["materials"].as_array().unwrap();
    assert_eq!(materials.len(), 5);
    for material in materials {
        let coefficient = material["runoff_coefficient"].as_f64().unwrap();
        assert!(coefficient > 0.0 && coefficient <= 1.0);
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = app()
        .oneshot(Request::builder().uri("/api/v1/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assessment_reference_site() {
    let response = post_assessment(json!({
        "roof_area_sqft": 1000.0,
        "roof_material": "concrete",
        "dwellers": 4,
        "open_space_sqft": 300.0,
        "monthly_rainfall_mm": [100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
                                100.0, 100.0, 100.0, 100.0, 100.0, 100.0]
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["success"], true);
    assert!(body["metadata"]["duration_ms"].is_number());

    let data = &body["data"];
    assert_eq!(data["rainfall_summary"]["annual_total_mm"], 1200.0);
    assert_eq!(data["feasibility_report"]["rating"], "Good");
    let score = data["feasibility_report"]["overall_score"].as_f64().unwrap();
    assert!((55.0..=75.0).contains(&score), "score {} outside expected band", score);

    let bundle = &data["recommendation_bundle"];
    assert_eq!(bundle["strategy"], "hybrid");
    assert_eq!(bundle["total_estimated_cost_inr"], 172_031.0);

    let primary: Vec<&str> = bundle["primary_structures"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(primary, vec!["Basic Storage Tank", "Recharge Pit", "First-Flush Diverter"]);
}

#[tokio::test]
async fn test_assessment_plan_partitions_bundle() {
    let response = post_assessment(json!({
        "roof_area_sqft": 1500.0,
        "roof_material": "metal",
        "dwellers": 5,
        "open_space_sqft": 400.0,
        "soil_signal": {
            "texture_class": "sandy",
            "suitability_score": 8,
            "infiltration_rate": 25.0
        }
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let data = &body["data"];

    let mut bundle_names: Vec<String> = data["recommendation_bundle"]["primary_structures"]
        .as_array()
        .unwrap()
        .iter()
        .chain(data["recommendation_bundle"]["secondary_structures"].as_array().unwrap())
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();

    let phases = data["implementation_plan"]["phases"].as_array().unwrap();
    let mut plan_names: Vec<String> = phases
        .iter()
        .flat_map(|p| p["structures"].as_array().unwrap())
        .map(|s| s.as_str().unwrap().to_string())
        .collect();

    bundle_names.sort();
    plan_names.sort();
    assert_eq!(bundle_names, plan_names);

    let phase_sum: f64 = phases.iter().map(|p| p["phase_cost_inr"].as_f64().unwrap()).sum();
    let total = data["recommendation_bundle"]["total_estimated_cost_inr"].as_f64().unwrap();
    assert_eq!(phase_sum, total);
}

#[tokio::test]
async fn test_assessment_minimal_body_uses_regional_default() {
    // Only the required fields; rainfall comes from configuration.
    let response = post_assessment(json!({
        "roof_area_sqft": 800.0,
        "dwellers": 3
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["rainfall_summary"]["annual_total_mm"], 1200.0);
    // No material supplied: the conservative fallback row applies.
    assert_eq!(body["data"]["runoff_profile"]["runoff_coefficient"], 0.70);
}

#[tokio::test]
async fn test_assessment_with_measured_monsoon_series() {
    let response = post_assessment(json!({
        "roof_area_sqft": 1200.0,
        "roof_material": "tile",
        "dwellers": 4,
        "monthly_rainfall_mm": [5.0, 3.0, 2.0, 10.0, 40.0, 600.0,
                                800.0, 500.0, 250.0, 80.0, 20.0, 5.0]
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let summary = &body["data"]["rainfall_summary"];
    assert_eq!(summary["annual_total_mm"], 2315.0);
    assert_eq!(summary["wettest_month"]["month"], "July");
    assert_eq!(summary["wettest_month"]["rainfall_mm"], 800.0);
}

#[tokio::test]
async fn test_assessment_rejects_out_of_range_dwellers() {
    let response = post_assessment(json!({
        "roof_area_sqft": 1000.0,
        "roof_material": "concrete",
        "dwellers": -2
    }))
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"], "ValidationError");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_assessment_tolerates_malformed_optional_sections() {
    // Wrong shapes everywhere a shape can be wrong: the request still
    // succeeds on documented defaults.
    let response = post_assessment(json!({
        "roof_area_sqft": 1000.0,
        "roof_material": "concrete",
        "dwellers": 4,
        "open_space_sqft": "three hundred",
        "monthly_water_bill": ["450"],
        "monthly_rainfall_mm": [100.0, 100.0],
        "soil_signal": "sandy loam please",
        "groundwater_signal": [1.0, 2.0, 3.0]
    }))
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["success"], true);

    let data = &body["data"];
    // Two-month series rejected, regional default substituted.
    assert_eq!(data["rainfall_summary"]["annual_total_mm"], 1200.0);
    // Unparseable open space means no room for recharge works.
    assert_eq!(data["recommendation_bundle"]["strategy"], "storage_focused");
    let score = data["feasibility_report"]["overall_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[tokio::test]
async fn test_assessment_identical_requests_agree() {
    let payload = json!({
        "roof_area_sqft": 950.0,
        "roof_material": "metal",
        "dwellers": 4,
        "open_space_sqft": 120.0
    });

    let first = json_response(post_assessment(payload.clone()).await).await;
    let second = json_response(post_assessment(payload).await).await;
    // Envelope timestamps differ; the assessment payload must not.
    assert_eq!(first["data"], second["data"]);
}
