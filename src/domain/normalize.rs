//! Boundary normalization.
//!
//! Every loosely-shaped upstream value is converted into the typed records of
//! the sibling modules exactly once, here. Missing or malformed optional
//! signals degrade to documented defaults with a log line; they never fail a
//! request. The engine stages downstream can therefore assume shape without
//! re-checking it.

use std::str::FromStr;

use tracing::{debug, warn};

use super::signals::{GroundwaterSignal, RainfallSeries, SoilSignal, TextureClass};
use super::site::{RoofMaterial, SiteInput};

/// Build the immutable site record. Invalid geometry is clamped so a bad
/// roof area flows through as a zero profile rather than an error.
pub fn normalize_site(
    roof_area_sqft: f64,
    roof_material: Option<&str>,
    dwellers: u32,
    open_space_sqft: Option<f64>,
    monthly_water_bill_inr: Option<f64>,
) -> SiteInput {
    let roof_area_sqft = if roof_area_sqft.is_finite() && roof_area_sqft > 0.0 {
        roof_area_sqft
    } else {
        warn!(roof_area_sqft, "invalid roof area, treating as zero catchment");
        0.0
    };

    let roof_material = match roof_material {
        None => {
            debug!("no roof material supplied, assuming 'other'");
            RoofMaterial::Other
        }
        Some(raw) => RoofMaterial::from_str(raw.trim()).unwrap_or_else(|_| {
            warn!(material = raw, "unrecognised roof material, falling back to 'other'");
            RoofMaterial::Other
        }),
    };

    let open_space_sqft = match open_space_sqft {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            warn!(open_space_sqft = v, "invalid open space, treating as none");
            0.0
        }
        None => 0.0,
    };

    let monthly_water_bill_inr = match monthly_water_bill_inr {
        Some(v) if v.is_finite() && v > 0.0 => Some(v),
        Some(v) => {
            warn!(monthly_water_bill_inr = v, "ignoring non-positive water bill");
            None
        }
        None => None,
    };

    SiteInput { roof_area_sqft, roof_material, dwellers, open_space_sqft, monthly_water_bill_inr }
}

/// Accept a measured rainfall series only when it has exactly twelve finite,
/// non-negative entries. The caller substitutes the configured regional
/// default otherwise.
pub fn normalize_rainfall(monthly_mm: Option<&[f64]>) -> Option<RainfallSeries> {
    let values = monthly_mm?;
    if values.len() != 12 {
        warn!(len = values.len(), "rainfall series must cover 12 months, ignoring");
        return None;
    }
    let mut months = [0.0; 12];
    months.copy_from_slice(values);
    let series = RainfallSeries(months);
    if !series.is_well_formed() {
        warn!("rainfall series contains negative or non-finite entries, ignoring");
        return None;
    }
    Some(series)
}

/// Normalize a soil observation. Returns `None` when the signal is entirely
/// absent, in which case the scorer applies its documented neutral default.
/// Partially-present signals are filled from the texture class.
pub fn normalize_soil(
    texture_class: Option<&str>,
    suitability_score: Option<f64>,
    infiltration_rate_mm_hr: Option<f64>,
) -> Option<SoilSignal> {
    if texture_class.is_none() && suitability_score.is_none() && infiltration_rate_mm_hr.is_none()
    {
        return None;
    }

    let texture = match texture_class {
        None => TextureClass::Unknown,
        Some(raw) => TextureClass::from_str(raw.trim()).unwrap_or_else(|_| {
            warn!(texture = raw, "unrecognised soil texture class");
            TextureClass::Unknown
        }),
    };

    let suitability_score = match suitability_score {
        Some(v) if v.is_finite() => v.clamp(0.0, 10.0).round() as u8,
        Some(v) => {
            warn!(suitability_score = v, "non-finite soil suitability, using texture default");
            texture.typical_suitability()
        }
        None => texture.typical_suitability(),
    };

    let infiltration_rate_mm_hr = match infiltration_rate_mm_hr {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            warn!(infiltration_rate_mm_hr = v, "invalid infiltration rate, using texture default");
            texture.typical_infiltration_mm_hr()
        }
        None => texture.typical_infiltration_mm_hr(),
    };

    Some(SoilSignal { texture, suitability_score, infiltration_rate_mm_hr })
}

/// Normalize a groundwater observation. All four numbers must be present and
/// consistent; anything less degrades to `None` and the scorer's default.
pub fn normalize_groundwater(
    station_distance_km: Option<f64>,
    avg_depth_m: Option<f64>,
    min_depth_m: Option<f64>,
    max_depth_m: Option<f64>,
) -> Option<GroundwaterSignal> {
    match (station_distance_km, avg_depth_m, min_depth_m, max_depth_m) {
        (Some(distance), Some(avg), Some(min), Some(max))
            if [distance, avg, min, max].iter().all(|v| v.is_finite() && *v >= 0.0)
                && min <= max =>
        {
            Some(GroundwaterSignal {
                station_distance_km: distance,
                avg_depth_m: avg,
                min_depth_m: min,
                max_depth_m: max,
            })
        }
        (None, None, None, None) => None,
        _ => {
            warn!("incomplete or inconsistent groundwater signal, falling back to defaults");
            None
        }
    }
}
