//! Assessment pipeline.
//!
//! Strings the engine stages together behind one call: runoff, feasibility,
//! recommendation, phasing. Pure and synchronous; no clock, no randomness, no
//! I/O. Identical input produces identical output, byte for byte once
//! serialized.

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    FeasibilityReport, GroundwaterSignal, ImplementationPlan, ImplementationStrategy,
    RainfallSeries, RainfallSummary, RecommendationBundle, RunoffProfile, SiteInput, SoilSignal,
};
use crate::{feasibility, phases, recommend, runoff};

/// Everything the engine needs for one site, already normalized. Optional
/// signals stay optional; the stages that own them apply their documented
/// defaults.
#[derive(Debug, Clone)]
pub struct SiteAssessment {
    pub site: SiteInput,
    pub rainfall: RainfallSeries,
    pub soil: Option<SoilSignal>,
    pub groundwater: Option<GroundwaterSignal>,
}

/// Full structured result of one assessment run.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub rainfall_summary: RainfallSummary,
    pub runoff_profile: RunoffProfile,
    pub feasibility_report: FeasibilityReport,
    pub recommendation_bundle: RecommendationBundle,
    pub implementation_plan: ImplementationPlan,
    pub implementation_strategy: ImplementationStrategy,
}

pub fn run_assessment(input: &SiteAssessment) -> AssessmentOutcome {
    let profile =
        runoff::compute_runoff(input.site.roof_area_sqft, input.site.roof_material, &input.rainfall);
    let report = feasibility::score_feasibility(
        &profile,
        &input.rainfall,
        input.soil.as_ref(),
        input.groundwater.as_ref(),
        &input.site,
    );

    // The recommender needs concrete soil numbers; scoring already recorded
    // whether they were measured or assumed.
    let effective_soil = input.soil.clone().unwrap_or_default();
    let bundle = recommend::recommend(&profile, &effective_soil, &input.site);
    let plan = phases::plan_phases(&bundle);
    let strategy_summary = ImplementationStrategy::derive(
        bundle.strategy,
        bundle.structure_count(),
        report.confidence,
    );

    debug!(
        score = report.overall_score,
        rating = %report.rating,
        strategy = %bundle.strategy,
        structures = bundle.structure_count(),
        "assessment complete"
    );

    AssessmentOutcome {
        rainfall_summary: RainfallSummary::from_series(&input.rainfall),
        runoff_profile: profile,
        feasibility_report: report,
        recommendation_bundle: bundle,
        implementation_plan: plan,
        implementation_strategy: strategy_summary,
    }
}
