#![allow(dead_code)]
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::time::Instant;

use crate::domain::{RainfallSeries, RoofMaterial, SiteInput};
use crate::pipeline::{run_assessment, SiteAssessment};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    engine: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy(latency_ms: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            latency_ms: None,
            error: Some(error),
        }
    }
}

/// GET /health - Health check endpoint
///
/// Runs a fixed reference site through the assessment engine and verifies its
/// arithmetic invariants still hold.
pub async fn health_check() -> impl IntoResponse {
    let engine_health = engine_self_test();
    let all_healthy = engine_health.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: chrono::Utc::now(),
        checks: HealthChecks { engine: engine_health },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

/// Assess a known site and check the output is internally consistent.
fn engine_self_test() -> ComponentHealth {
    let start = Instant::now();

    let input = SiteAssessment {
        site: SiteInput {
            roof_area_sqft: 800.0,
            roof_material: RoofMaterial::Concrete,
            dwellers: 4,
            open_space_sqft: 150.0,
            monthly_water_bill_inr: None,
        },
        rainfall: RainfallSeries::uniform(1000.0),
        soil: None,
        groundwater: None,
    };
    let outcome = run_assessment(&input);

    let score_in_range = (0.0..=100.0).contains(&outcome.feasibility_report.overall_score);
    let net_within_gross =
        outcome.runoff_profile.annual_net_liters <= outcome.runoff_profile.annual_gross_liters;
    let bundle_total: f64 = outcome
        .recommendation_bundle
        .all_structures()
        .map(|s| s.estimated_cost_inr)
        .sum();
    let totals_agree = bundle_total == outcome.recommendation_bundle.total_estimated_cost_inr;

    if score_in_range && net_within_gross && totals_agree {
        ComponentHealth::healthy(start.elapsed().as_millis() as u64)
    } else {
        ComponentHealth::unhealthy("engine invariants violated".to_string())
    }
}
