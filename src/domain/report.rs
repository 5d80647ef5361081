//! Feasibility report types: factor scores, rating bands, confidence and the
//! per-factor detail blocks.

use serde::Serialize;
use strum_macros::Display;

use super::signals::TextureClass;
use super::structures::Strategy;

/// The five scored dimensions of a feasibility assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Factor {
    RainfallAdequacy,
    SoilSuitability,
    GroundwaterConditions,
    TechnicalViability,
    EconomicViability,
}

/// One factor's contribution to the overall score.
#[derive(Debug, Clone, Serialize)]
pub struct FactorScore {
    pub factor: Factor,
    /// Raw sub-score on the 0-100 scale.
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub score: f64,
    /// Weight in percent; the five weights sum to 100.
    pub weight: f64,
    #[serde(serialize_with = "crate::domain::ser_2dp")]
    pub weighted_score: f64,
}

/// Discrete rating band over the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Rating {
    Excellent,
    Good,
    Moderate,
    Poor,
    Unfeasible,
}

impl Rating {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Rating::Excellent
        } else if score >= 70.0 {
            Rating::Good
        } else if score >= 55.0 {
            Rating::Moderate
        } else if score >= 40.0 {
            Rating::Poor
        } else {
            Rating::Unfeasible
        }
    }

    /// One-line verdict shown to the household.
    pub fn recommendation(self) -> &'static str {
        match self {
            Rating::Excellent => {
                "Highly recommended. Install a full harvesting system with storage and recharge."
            }
            Rating::Good => {
                "Recommended. A standard system will cover a large share of household demand."
            }
            Rating::Moderate => {
                "Feasible with adjustments. Start with essential components and expand later."
            }
            Rating::Poor => {
                "Marginal. Consider a minimal first-flush and storage setup only after addressing the limiting factors."
            }
            Rating::Unfeasible => {
                "Not recommended at present. Site conditions do not justify the investment."
            }
        }
    }

    pub fn priority(self) -> &'static str {
        match self {
            Rating::Excellent => "Very High",
            Rating::Good => "High",
            Rating::Moderate => "Medium",
            Rating::Poor => "Low",
            Rating::Unfeasible => "Very Low",
        }
    }
}

/// How much the reported score can be trusted, driven by how many factors
/// fell below the limiting threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_limiting_count(count: usize) -> Self {
        match count {
            0 | 1 => Confidence::High,
            2 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

// ============================================================================
// Per-factor detail blocks
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RainfallDetail {
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub annual_rainfall_mm: f64,
    pub adequacy: &'static str,
    pub seasonal_distribution: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SoilDetail {
    pub texture: TextureClass,
    pub recharge_potential: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroundwaterDetail {
    #[serde(serialize_with = "crate::domain::ser_opt_1dp")]
    pub avg_depth_m: Option<f64>,
    pub condition: &'static str,
    #[serde(serialize_with = "crate::domain::ser_opt_1dp")]
    pub station_distance_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnicalDetail {
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub potential_annual_collection_liters: f64,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub annual_demand_liters: f64,
    /// May exceed 100 when collection outstrips demand.
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub demand_fulfillment_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EconomicDetail {
    /// Whole rupees.
    pub estimated_system_cost_inr: f64,
    /// Whole rupees.
    pub annual_savings_inr: f64,
    /// Absent when the site collects nothing and payback never arrives.
    #[serde(serialize_with = "crate::domain::ser_opt_1dp")]
    pub payback_period_years: Option<f64>,
    /// Whole rupees; absent when no water bill was supplied.
    pub monthly_bill_savings_inr: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedAnalysis {
    pub rainfall: RainfallDetail,
    pub soil: SoilDetail,
    pub groundwater: GroundwaterDetail,
    pub technical: TechnicalDetail,
    pub economic: EconomicDetail,
}

/// Full feasibility verdict for one site.
#[derive(Debug, Clone, Serialize)]
pub struct FeasibilityReport {
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub overall_score: f64,
    pub rating: Rating,
    pub recommendation: &'static str,
    pub priority: &'static str,
    pub factor_scores: Vec<FactorScore>,
    /// Factors scoring below the limiting threshold, in weight order.
    pub limiting_factors: Vec<Factor>,
    pub confidence: Confidence,
    /// One actionable hint per limiting factor.
    pub improvement_hints: Vec<&'static str>,
    pub detailed_analysis: DetailedAnalysis,
}

/// Narrative summary of how to execute on a recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct ImplementationStrategy {
    pub primary_focus: &'static str,
    pub system_complexity: &'static str,
    pub monitoring_requirements: &'static str,
}

impl ImplementationStrategy {
    pub fn derive(strategy: Strategy, structure_count: usize, confidence: Confidence) -> Self {
        let primary_focus = match strategy {
            Strategy::StorageFocused => "Maximise on-site storage and direct reuse",
            Strategy::RechargeFocused => "Prioritise groundwater recharge over storage",
            Strategy::Hybrid => "Balance storage for reuse with groundwater recharge",
        };
        let system_complexity = if structure_count <= 2 {
            "simple"
        } else if structure_count <= 4 {
            "moderate"
        } else {
            "advanced"
        };
        let monitoring_requirements = match confidence {
            Confidence::High => "Routine seasonal checks of filters and tank levels",
            Confidence::Medium => "Quarterly inspection plus a post-monsoon drawdown check",
            Confidence::Low => "Commission a professional site survey before committing funds",
        };
        Self { primary_focus, system_complexity, monitoring_requirements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_band_edges() {
        assert_eq!(Rating::from_score(100.0), Rating::Excellent);
        assert_eq!(Rating::from_score(85.0), Rating::Excellent);
        assert_eq!(Rating::from_score(84.9), Rating::Good);
        assert_eq!(Rating::from_score(70.0), Rating::Good);
        assert_eq!(Rating::from_score(55.0), Rating::Moderate);
        assert_eq!(Rating::from_score(40.0), Rating::Poor);
        assert_eq!(Rating::from_score(39.9), Rating::Unfeasible);
        assert_eq!(Rating::from_score(0.0), Rating::Unfeasible);
    }

    #[test]
    fn test_confidence_from_limiting_count() {
        assert_eq!(Confidence::from_limiting_count(0), Confidence::High);
        assert_eq!(Confidence::from_limiting_count(1), Confidence::High);
        assert_eq!(Confidence::from_limiting_count(2), Confidence::Medium);
        assert_eq!(Confidence::from_limiting_count(3), Confidence::Low);
        assert_eq!(Confidence::from_limiting_count(5), Confidence::Low);
    }

    #[test]
    fn test_strategy_summary_complexity_scales_with_count() {
        let simple =
            ImplementationStrategy::derive(Strategy::StorageFocused, 2, Confidence::High);
        assert_eq!(simple.system_complexity, "simple");
        let advanced = ImplementationStrategy::derive(Strategy::Hybrid, 7, Confidence::Low);
        assert_eq!(advanced.system_complexity, "advanced");
    }
}
