//! POST /assessment - the translation shim over the pure assessment engine.
//!
//! Deserializes the loose request shape, normalizes it at the boundary,
//! substitutes configured defaults for anything missing and hands one typed
//! input to the pipeline. No scoring or sizing logic lives here.

use axum::{extract::State, Json};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};
use validator::Validate;

use crate::api::{error::ApiError, response::ApiResponse, AppState};
use crate::domain::{normalize, RainfallSeries};
use crate::pipeline::{run_assessment, AssessmentOutcome, SiteAssessment};

/// Raw assessment request. Only roof geometry and household size are
/// required. Optional sections arrive as raw JSON so a malformed shape (a
/// string where a record was expected, a non-numeric score) degrades to the
/// documented default instead of failing the whole request.
#[derive(Debug, Deserialize, Validate)]
pub struct AssessmentRequest {
    pub roof_area_sqft: f64,
    pub roof_material: Option<String>,
    #[validate(range(min = 0, max = 500, message = "dwellers must be between 0 and 500"))]
    pub dwellers: i64,
    pub open_space_sqft: Option<Value>,
    pub monthly_water_bill: Option<Value>,
    /// Twelve entries, January first. Anything else is ignored with a warning.
    pub monthly_rainfall_mm: Option<Value>,
    pub soil_signal: Option<Value>,
    pub groundwater_signal: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SoilSignalDto {
    pub texture_class: Option<String>,
    pub suitability_score: Option<f64>,
    pub infiltration_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct GroundwaterSignalDto {
    pub distance_km: Option<f64>,
    pub avg_depth_m: Option<f64>,
    pub min_depth_m: Option<f64>,
    pub max_depth_m: Option<f64>,
}

/// Parse one optional request section, treating a malformed shape as absent.
fn lenient<T: DeserializeOwned>(field: &'static str, raw: Option<&Value>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_value(raw.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(field, %err, "malformed optional field, substituting defaults");
            None
        }
    }
}

/// POST /assessment - run a full feasibility assessment for one site.
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<ApiResponse<AssessmentOutcome>>, ApiError> {
    request.validate()?;
    let start = Instant::now();

    let open_space = lenient::<f64>("open_space_sqft", request.open_space_sqft.as_ref());
    let water_bill = lenient::<f64>("monthly_water_bill", request.monthly_water_bill.as_ref());
    let site = normalize::normalize_site(
        request.roof_area_sqft,
        request.roof_material.as_deref(),
        request.dwellers as u32,
        open_space,
        water_bill,
    );

    let monthly = lenient::<Vec<f64>>("monthly_rainfall_mm", request.monthly_rainfall_mm.as_ref());
    let rainfall = normalize::normalize_rainfall(monthly.as_deref())
        .unwrap_or_else(|| RainfallSeries::uniform(state.cfg.defaults.annual_rainfall_mm));

    let soil = lenient::<SoilSignalDto>("soil_signal", request.soil_signal.as_ref())
        .and_then(|s| {
            normalize::normalize_soil(
                s.texture_class.as_deref(),
                s.suitability_score,
                s.infiltration_rate,
            )
        });
    let groundwater =
        lenient::<GroundwaterSignalDto>("groundwater_signal", request.groundwater_signal.as_ref())
            .and_then(|g| {
                normalize::normalize_groundwater(
                    g.distance_km,
                    g.avg_depth_m,
                    g.min_depth_m,
                    g.max_depth_m,
                )
            });

    let outcome = run_assessment(&SiteAssessment { site, rainfall, soil, groundwater });

    info!(
        roof_area_sqft = request.roof_area_sqft,
        score = outcome.feasibility_report.overall_score,
        rating = %outcome.feasibility_report.rating,
        strategy = %outcome.recommendation_bundle.strategy,
        "assessment served"
    );

    let duration_ms = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(outcome).with_duration(duration_ms)))
}
