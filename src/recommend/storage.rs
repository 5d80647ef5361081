//! Storage tank templates, sized from the peak collection month and capped by
//! how many days of household demand are worth holding.

use crate::domain::{RunoffProfile, SiteInput, StructureCategory, StructureOption, StructureSpec};

use super::cost::{self, TankMaterial};

struct TankTemplate {
    name: &'static str,
    /// Multiple of the peak month's net collection to aim for.
    peak_multiple: f64,
    /// Cap: days of household demand beyond which more storage idles.
    demand_cap_days: f64,
    min_liters: f64,
    max_liters: f64,
    material: TankMaterial,
    pros: &'static [&'static str],
    cons: &'static [&'static str],
}

const TEMPLATES: [TankTemplate; 3] = [
    TankTemplate {
        name: "Basic Storage Tank",
        peak_multiple: 0.5,
        demand_cap_days: 15.0,
        min_liters: 1_000.0,
        max_liters: 5_000.0,
        material: TankMaterial::Hdpe,
        pros: &[
            "Lowest upfront cost",
            "Light, arrives ready to install",
            "No corrosion or lining upkeep",
        ],
        cons: &["Degrades under direct sun", "Smallest buffer across dry spells"],
    },
    TankTemplate {
        name: "Standard Storage Tank",
        peak_multiple: 1.0,
        demand_cap_days: 30.0,
        min_liters: 2_000.0,
        max_liters: 10_000.0,
        material: TankMaterial::Ferrocement,
        pros: &[
            "Best cost per liter at household scale",
            "Durable with basic upkeep",
            "Local masons can build and repair it",
        ],
        cons: &["Needs skilled plastering work", "Heavier footprint than HDPE"],
    },
    TankTemplate {
        name: "Premium Storage Tank",
        peak_multiple: 1.5,
        demand_cap_days: 60.0,
        min_liters: 5_000.0,
        max_liters: 20_000.0,
        material: TankMaterial::Rcc,
        pros: &[
            "Longest service life",
            "Can be buried to save yard space",
            "Rides out multi-month dry seasons",
        ],
        cons: &["Highest upfront cost", "Weeks of on-site construction"],
    },
];

/// Round a capacity to the nearest marketable 500 L step.
fn round_to_500(liters: f64) -> f64 {
    (liters / 500.0).round() * 500.0
}

pub(crate) fn options(profile: &RunoffProfile, site: &SiteInput) -> Vec<StructureOption> {
    let peak_net = profile.peak_month_net_liters();
    let daily_demand = site.daily_demand_liters();

    TEMPLATES
        .iter()
        .map(|template| {
            let target = (template.peak_multiple * peak_net)
                .min(template.demand_cap_days * daily_demand);
            let capacity =
                round_to_500(target).clamp(template.min_liters, template.max_liters);
            let cost = cost::tank_cost(capacity, template.material);
            let days_covered = capacity / daily_demand.max(1.0);
            StructureOption {
                category: StructureCategory::StorageTank,
                name: template.name,
                spec: StructureSpec::Capacity { liters: capacity },
                material: template.material.label(),
                estimated_cost_inr: cost,
                cost_breakdown: cost::breakdown_for(StructureCategory::StorageTank, cost),
                pros: template.pros.to_vec(),
                cons: template.cons.to_vec(),
                suitability: format!(
                    "Covers about {days_covered:.0} days of household demand at {daily_demand:.0} L/day"
                ),
            }
        })
        .collect()
}
