//! Structure recommendation.
//!
//! Picks an investment strategy from open space and soil permeability,
//! generates costed options per structure family and assembles them into a
//! primary/secondary bundle.

pub mod cost;
mod filtration;
mod recharge;
mod storage;

use tracing::debug;

use crate::domain::{
    RecommendationBundle, RunoffProfile, SiteInput, SoilSignal, Strategy, StructureOption,
};

/// Open space needed before recharge structures lead the plan.
const RECHARGE_STRATEGY_MIN_OPEN_M2: f64 = 20.0;

/// Soil must drain faster than this for a recharge-led strategy.
const RECHARGE_STRATEGY_MIN_INFILTRATION_MM_HR: f64 = 10.0;

/// Below this open space there is no room for meaningful recharge works.
const HYBRID_MIN_OPEN_M2: f64 = 10.0;

/// Build the recommendation bundle for a site. A site with nothing to
/// collect gets an empty bundle; structures are never recommended for water
/// that does not exist.
pub fn recommend(
    profile: &RunoffProfile,
    soil: &SoilSignal,
    site: &SiteInput,
) -> RecommendationBundle {
    if profile.is_zero() {
        debug!("no collectible runoff, returning empty recommendation");
        return RecommendationBundle::empty();
    }

    let open_space_m2 = site.open_space_m2();
    let strategy = select_strategy(open_space_m2, soil.infiltration_rate_mm_hr);

    let storage = storage::options(profile, site);
    let recharge = recharge::options(profile, soil, open_space_m2);
    let filtration = filtration::options(profile);

    let (primary, secondary) = assemble(strategy, storage, recharge, filtration);
    let bundle = RecommendationBundle::new(strategy, primary, secondary);
    debug!(
        strategy = %bundle.strategy,
        structures = bundle.structure_count(),
        total_inr = bundle.total_estimated_cost_inr,
        "recommendation assembled"
    );
    bundle
}

fn select_strategy(open_space_m2: f64, infiltration_mm_hr: f64) -> Strategy {
    if open_space_m2 > RECHARGE_STRATEGY_MIN_OPEN_M2
        && infiltration_mm_hr > RECHARGE_STRATEGY_MIN_INFILTRATION_MM_HR
    {
        Strategy::RechargeFocused
    } else if open_space_m2 > HYBRID_MIN_OPEN_M2 {
        Strategy::Hybrid
    } else {
        Strategy::StorageFocused
    }
}

/// Split the generated options into what the household should build first
/// and what can wait. Option vectors arrive cheapest-first within their
/// family, so "top" picks are always the affordable ones.
fn assemble(
    strategy: Strategy,
    mut storage: Vec<StructureOption>,
    mut recharge: Vec<StructureOption>,
    mut filtration: Vec<StructureOption>,
) -> (Vec<StructureOption>, Vec<StructureOption>) {
    match strategy {
        Strategy::StorageFocused => {
            // Two tank tiers up front; the premium tier is overkill here.
            let keep = storage.len().min(2);
            let primary: Vec<StructureOption> = storage.drain(..keep).collect();
            let mut secondary = filtration;
            secondary.extend(recharge.into_iter().take(1));
            (primary, secondary)
        }
        Strategy::RechargeFocused => {
            let keep = recharge.len().min(2);
            let mut primary: Vec<StructureOption> = recharge.drain(..keep).collect();
            primary.extend(storage.drain(..storage.len().min(1)));
            let mut secondary = filtration;
            secondary.append(&mut recharge);
            secondary.append(&mut storage);
            (primary, secondary)
        }
        Strategy::Hybrid => {
            let mut primary = Vec::new();
            if !storage.is_empty() {
                primary.push(storage.remove(0));
            }
            if !recharge.is_empty() {
                primary.push(recharge.remove(0));
            }
            if !filtration.is_empty() {
                primary.push(filtration.remove(0));
            }
            let mut secondary = storage;
            secondary.append(&mut recharge);
            secondary.append(&mut filtration);
            (primary, secondary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RainfallSeries, RoofMaterial, StructureCategory, TextureClass};
    use crate::runoff::compute_runoff;
    use rstest::rstest;

    fn site(open_space_sqft: f64) -> SiteInput {
        SiteInput {
            roof_area_sqft: 1000.0,
            roof_material: RoofMaterial::Concrete,
            dwellers: 4,
            open_space_sqft,
            monthly_water_bill_inr: None,
        }
    }

    fn profile() -> RunoffProfile {
        compute_runoff(1000.0, RoofMaterial::Concrete, &RainfallSeries::uniform(1200.0))
    }

    fn sandy() -> SoilSignal {
        SoilSignal {
            texture: TextureClass::Sandy,
            suitability_score: 8,
            infiltration_rate_mm_hr: 25.0,
        }
    }

    #[rstest]
    #[case(0.0, 10.0, Strategy::StorageFocused)]
    #[case(10.0, 25.0, Strategy::StorageFocused)] // boundary is exclusive
    #[case(15.0, 25.0, Strategy::Hybrid)]
    #[case(25.0, 10.0, Strategy::Hybrid)] // fast-draining gate is exclusive too
    #[case(25.0, 10.1, Strategy::RechargeFocused)]
    #[case(100.0, 25.0, Strategy::RechargeFocused)]
    fn test_strategy_selection(
        #[case] open_m2: f64,
        #[case] infiltration: f64,
        #[case] expected: Strategy,
    ) {
        assert_eq!(select_strategy(open_m2, infiltration), expected);
    }

    #[test]
    fn test_zero_profile_yields_empty_bundle() {
        let profile = compute_runoff(0.0, RoofMaterial::Concrete, &RainfallSeries::uniform(1200.0));
        let bundle = recommend(&profile, &SoilSignal::default(), &site(300.0));
        assert!(bundle.is_empty());
        assert_eq!(bundle.strategy, Strategy::StorageFocused);
        assert_eq!(bundle.total_estimated_cost_inr, 0.0);
    }

    #[test]
    fn test_storage_focused_assembly() {
        // No open space: two tanks lead, filtration follows, no recharge.
        let bundle = recommend(&profile(), &SoilSignal::default(), &site(0.0));
        assert_eq!(bundle.strategy, Strategy::StorageFocused);

        let primary: Vec<_> = bundle.primary_structures.iter().map(|s| s.name).collect();
        assert_eq!(primary, vec!["Basic Storage Tank", "Standard Storage Tank"]);
        let secondary: Vec<_> = bundle.secondary_structures.iter().map(|s| s.name).collect();
        assert_eq!(secondary, vec!["First-Flush Diverter", "Multi-Stage Filtration Unit"]);
    }

    #[test]
    fn test_hybrid_assembly_for_reference_site() {
        // 300 sqft open space is ~27.9 m^2, but default soil drains too
        // slowly for recharge-focused.
        let bundle = recommend(&profile(), &SoilSignal::default(), &site(300.0));
        assert_eq!(bundle.strategy, Strategy::Hybrid);

        let primary: Vec<_> = bundle.primary_structures.iter().map(|s| s.name).collect();
        assert_eq!(primary, vec!["Basic Storage Tank", "Recharge Pit", "First-Flush Diverter"]);

        let secondary: Vec<_> = bundle.secondary_structures.iter().map(|s| s.name).collect();
        assert_eq!(
            secondary,
            vec![
                "Standard Storage Tank",
                "Premium Storage Tank",
                "Recharge Trench",
                "Multi-Stage Filtration Unit"
            ]
        );

        // 19800 + 10700 + 1872 + 27844 + 96390 + 7925 + 7500
        assert_eq!(bundle.total_estimated_cost_inr, 172_031.0);
    }

    #[test]
    fn test_recharge_focused_assembly() {
        let bundle = recommend(&profile(), &sandy(), &site(300.0));
        assert_eq!(bundle.strategy, Strategy::RechargeFocused);

        let primary: Vec<_> = bundle.primary_structures.iter().map(|s| s.name).collect();
        assert_eq!(primary, vec!["Recharge Pit", "Recharge Well", "Basic Storage Tank"]);

        // Everything else lands in secondary, nothing is dropped.
        assert_eq!(bundle.structure_count(), 8);
        let recharge_count = bundle
            .all_structures()
            .filter(|s| s.category == StructureCategory::RechargeStructure)
            .count();
        assert_eq!(recharge_count, 3);
    }

    #[test]
    fn test_every_structure_cost_is_whole_rupees() {
        let bundle = recommend(&profile(), &sandy(), &site(300.0));
        for s in bundle.all_structures() {
            assert_eq!(s.estimated_cost_inr.fract(), 0.0, "{} not whole", s.name);
        }
        assert_eq!(bundle.total_estimated_cost_inr.fract(), 0.0);
    }
}
