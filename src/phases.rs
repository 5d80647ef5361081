//! Implementation phasing.
//!
//! Groups a recommendation bundle into an ordered roadmap: get clean water
//! flowing first, grow storage second, build recharge works last. Phases with
//! no member structures are dropped and the survivors renumbered, so the plan
//! never shows an empty step.

use tracing::debug;

use crate::domain::{
    ImplementationPlan, Phase, RecommendationBundle, StructureCategory, StructureOption,
};

pub fn plan_phases(bundle: &RecommendationBundle) -> ImplementationPlan {
    if bundle.is_empty() {
        return ImplementationPlan { phases: Vec::new() };
    }

    let mut essential: Vec<&StructureOption> = Vec::new();
    let mut storage_growth: Vec<&StructureOption> = Vec::new();
    let mut recharge: Vec<&StructureOption> = Vec::new();
    for structure in bundle.all_structures() {
        match structure.category {
            StructureCategory::FiltrationSystem => essential.push(structure),
            StructureCategory::StorageTank if structure.name.contains("Basic") => {
                essential.push(structure)
            }
            StructureCategory::StorageTank => storage_growth.push(structure),
            StructureCategory::RechargeStructure => recharge.push(structure),
        }
    }

    let mut phases = Vec::new();
    push_phase(&mut phases, "Essential Setup", "2-4 weeks", "High", essential);
    push_phase(&mut phases, "Storage Enhancement", "4-8 weeks", "Medium", storage_growth);
    push_phase(&mut phases, "Groundwater Recharge", "6-12 weeks", "Long-term", recharge);

    debug!(phases = phases.len(), "implementation plan built");
    ImplementationPlan { phases }
}

fn push_phase(
    phases: &mut Vec<Phase>,
    title: &'static str,
    timeline: &'static str,
    priority: &'static str,
    members: Vec<&StructureOption>,
) {
    if members.is_empty() {
        return;
    }
    phases.push(Phase {
        index: phases.len() + 1,
        title,
        structures: members.iter().map(|s| s.name).collect(),
        phase_cost_inr: members.iter().map(|s| s.estimated_cost_inr).sum(),
        timeline,
        priority,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RainfallSeries, RoofMaterial, SiteInput, SoilSignal};
    use crate::recommend::recommend;
    use crate::runoff::compute_runoff;

    fn bundle_for(open_space_sqft: f64) -> RecommendationBundle {
        let site = SiteInput {
            roof_area_sqft: 1000.0,
            roof_material: RoofMaterial::Concrete,
            dwellers: 4,
            open_space_sqft,
            monthly_water_bill_inr: None,
        };
        let profile =
            compute_runoff(site.roof_area_sqft, site.roof_material, &RainfallSeries::uniform(1200.0));
        recommend(&profile, &SoilSignal::default(), &site)
    }

    #[test]
    fn test_reference_site_three_phases() {
        let bundle = bundle_for(300.0);
        let plan = plan_phases(&bundle);

        assert_eq!(plan.phases.len(), 3);
        assert_eq!(plan.phases[0].title, "Essential Setup");
        assert_eq!(plan.phases[1].title, "Storage Enhancement");
        assert_eq!(plan.phases[2].title, "Groundwater Recharge");
        assert_eq!(
            plan.phases.iter().map(|p| p.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        // Filtration and the basic tank open the plan.
        assert!(plan.phases[0].structures.contains(&"First-Flush Diverter"));
        assert!(plan.phases[0].structures.contains(&"Basic Storage Tank"));
        assert_eq!(plan.phases[0].phase_cost_inr, 19_800.0 + 1_872.0 + 7_500.0);
    }

    #[test]
    fn test_phase_costs_partition_bundle_total() {
        for open in [0.0, 120.0, 300.0, 1500.0] {
            let bundle = bundle_for(open);
            let plan = plan_phases(&bundle);
            let phase_total: f64 = plan.phases.iter().map(|p| p.phase_cost_inr).sum();
            assert_eq!(phase_total, bundle.total_estimated_cost_inr, "open={open}");

            let structure_total: usize = plan.phases.iter().map(|p| p.structures.len()).sum();
            assert_eq!(structure_total, bundle.structure_count(), "open={open}");
        }
    }

    #[test]
    fn test_no_recharge_means_two_phases_renumbered() {
        // No open space: recharge phase must disappear, not show up empty.
        let plan = plan_phases(&bundle_for(0.0));
        assert_eq!(plan.phases.len(), 2);
        assert_eq!(plan.phases[0].title, "Essential Setup");
        assert_eq!(plan.phases[1].title, "Storage Enhancement");
        assert_eq!(plan.phases[1].index, 2);
    }

    #[test]
    fn test_empty_bundle_empty_plan() {
        let plan = plan_phases(&RecommendationBundle::empty());
        assert!(plan.phases.is_empty());
    }
}
