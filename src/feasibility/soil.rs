//! Soil suitability factor: a direct rescale of the survey's 0-10 score.

use crate::domain::{SoilDetail, SoilSignal, TextureClass};

/// Neutral midpoint used when no soil survey is available.
pub(crate) const DEFAULT_SCORE: f64 = 50.0;

pub(crate) fn score(soil: Option<&SoilSignal>) -> (f64, SoilDetail) {
    match soil {
        Some(signal) => {
            let score = f64::from(signal.suitability_score) * 10.0;
            let detail = SoilDetail {
                texture: signal.texture,
                recharge_potential: potential_label(score),
            };
            (score, detail)
        }
        None => {
            let detail = SoilDetail {
                texture: TextureClass::Medium,
                recharge_potential: "moderate (assumed medium texture, no survey)",
            };
            (DEFAULT_SCORE, detail)
        }
    }
}

fn potential_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "high"
    } else if score >= 50.0 {
        "moderate"
    } else {
        "low"
    }
}
