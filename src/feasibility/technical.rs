//! Technical viability factor: catchment size, collection efficiency and how
//! much of the household's demand the roof can actually cover.

use crate::domain::{RunoffProfile, SiteInput, TechnicalDetail};

const AREA_WEIGHT: f64 = 0.4;
const EFFICIENCY_WEIGHT: f64 = 0.3;
const DEMAND_WEIGHT: f64 = 0.3;

pub(crate) fn score(profile: &RunoffProfile, site: &SiteInput) -> (f64, TechnicalDetail) {
    let area_score = area_band(site.roof_area_sqft);
    let efficiency_score = profile.collection_efficiency * 100.0;

    let annual_demand = site.annual_demand_liters();
    let ratio = if annual_demand > 0.0 { profile.annual_net_liters / annual_demand } else { 0.0 };
    let demand_score = demand_band(ratio);

    let score =
        AREA_WEIGHT * area_score + EFFICIENCY_WEIGHT * efficiency_score + DEMAND_WEIGHT * demand_score;

    let detail = TechnicalDetail {
        potential_annual_collection_liters: profile.annual_net_liters,
        annual_demand_liters: annual_demand,
        demand_fulfillment_percent: ratio * 100.0,
    };
    (score, detail)
}

fn area_band(roof_area_sqft: f64) -> f64 {
    if roof_area_sqft >= 2000.0 {
        100.0
    } else if roof_area_sqft >= 1000.0 {
        90.0
    } else if roof_area_sqft >= 500.0 {
        75.0
    } else if roof_area_sqft >= 200.0 {
        55.0
    } else {
        30.0
    }
}

fn demand_band(ratio: f64) -> f64 {
    if ratio >= 1.0 {
        100.0
    } else if ratio >= 0.75 {
        85.0
    } else if ratio >= 0.5 {
        70.0
    } else if ratio >= 0.25 {
        50.0
    } else if ratio >= 0.1 {
        30.0
    } else {
        10.0
    }
}
