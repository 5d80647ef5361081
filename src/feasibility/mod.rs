//! Feasibility scoring.
//!
//! Fuses five independently-computed factors into a weighted 0-100 score
//! with a rating band, the list of limiting factors and a confidence level.
//! One file per factor; this module owns the weights and the fusion.

mod economic;
mod groundwater;
mod rainfall;
mod soil;
mod technical;

use tracing::debug;

use crate::domain::{
    Confidence, DetailedAnalysis, Factor, FactorScore, FeasibilityReport, GroundwaterSignal,
    RainfallSeries, Rating, RunoffProfile, SiteInput, SoilSignal,
};

// Factor weights in percent; they sum to 100.
pub const RAINFALL_WEIGHT: f64 = 25.0;
pub const SOIL_WEIGHT: f64 = 20.0;
pub const GROUNDWATER_WEIGHT: f64 = 20.0;
pub const TECHNICAL_WEIGHT: f64 = 20.0;
pub const ECONOMIC_WEIGHT: f64 = 15.0;

/// Sub-scores below this mark their factor as limiting.
const LIMITING_THRESHOLD: f64 = 50.0;

/// Score one site. Optional signals stay optional: the factor that owns each
/// signal applies its own documented default when it is absent.
pub fn score_feasibility(
    profile: &RunoffProfile,
    rainfall: &RainfallSeries,
    soil: Option<&SoilSignal>,
    groundwater: Option<&GroundwaterSignal>,
    site: &SiteInput,
) -> FeasibilityReport {
    let (rainfall_score, rainfall_detail) = rainfall::score(rainfall);
    let (soil_score, soil_detail) = soil::score(soil);
    let (groundwater_score, groundwater_detail) = groundwater::score(groundwater);
    let (technical_score, technical_detail) = technical::score(profile, site);
    let (economic_score, economic_detail) = economic::score(profile, rainfall, site);

    let factor_scores: Vec<FactorScore> = [
        (Factor::RainfallAdequacy, rainfall_score, RAINFALL_WEIGHT),
        (Factor::SoilSuitability, soil_score, SOIL_WEIGHT),
        (Factor::GroundwaterConditions, groundwater_score, GROUNDWATER_WEIGHT),
        (Factor::TechnicalViability, technical_score, TECHNICAL_WEIGHT),
        (Factor::EconomicViability, economic_score, ECONOMIC_WEIGHT),
    ]
    .into_iter()
    .map(|(factor, score, weight)| FactorScore {
        factor,
        score,
        weight,
        weighted_score: score * weight / 100.0,
    })
    .collect();

    let overall_score: f64 = factor_scores.iter().map(|f| f.weighted_score).sum();
    let rating = Rating::from_score(overall_score);

    let limiting_factors: Vec<Factor> = factor_scores
        .iter()
        .filter(|f| f.score < LIMITING_THRESHOLD)
        .map(|f| f.factor)
        .collect();
    let confidence = Confidence::from_limiting_count(limiting_factors.len());
    let improvement_hints: Vec<&'static str> =
        limiting_factors.iter().map(|f| improvement_hint(*f)).collect();

    debug!(
        overall = overall_score,
        rating = %rating,
        limiting = limiting_factors.len(),
        confidence = %confidence,
        "feasibility scored"
    );

    FeasibilityReport {
        overall_score,
        rating,
        recommendation: rating.recommendation(),
        priority: rating.priority(),
        factor_scores,
        limiting_factors,
        confidence,
        improvement_hints,
        detailed_analysis: DetailedAnalysis {
            rainfall: rainfall_detail,
            soil: soil_detail,
            groundwater: groundwater_detail,
            technical: technical_detail,
            economic: economic_detail,
        },
    }
}

fn improvement_hint(factor: Factor) -> &'static str {
    match factor {
        Factor::RainfallAdequacy => {
            "Local rainfall is low; size storage for the few wet months and treat harvesting as supplementary supply."
        }
        Factor::SoilSuitability => {
            "Soil drains poorly; favour storage over recharge, or excavate recharge pits down to a permeable layer."
        }
        Factor::GroundwaterConditions => {
            "Groundwater data is unfavourable or uncertain; get a local hydrogeological opinion before building recharge structures."
        }
        Factor::TechnicalViability => {
            "The catchment is small for the household; improve gutters and first-flush handling to raise collection efficiency."
        }
        Factor::EconomicViability => {
            "Payback is slow at current water prices; start with low-cost components and expand if tariffs rise."
        }
    }
}
