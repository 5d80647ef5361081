//! Runoff calculation.
//!
//! Converts roof geometry, material properties and a monthly rainfall series
//! into the site's water-collection profile. Pure arithmetic over its inputs;
//! a site that cannot collect anything produces an all-zero profile rather
//! than an error.

use crate::domain::{
    MonthlyRunoff, RainfallSeries, RoofMaterial, RunoffProfile, MONTH_NAMES, SQFT_TO_M2,
};

/// Assumed number of distinct rain events per month, each consuming one
/// first-flush volume.
const RAIN_EVENTS_PER_MONTH: f64 = 5.0;

/// Cap on monthly first-flush loss as a fraction of that month's gross runoff.
const FIRST_FLUSH_LOSS_CAP: f64 = 0.10;

/// Storage headroom over the peak collection month.
const TANK_PEAK_FACTOR: f64 = 1.5;

/// Compute the collection profile for one roof and one rainfall year.
pub fn compute_runoff(
    roof_area_sqft: f64,
    material: RoofMaterial,
    rainfall: &RainfallSeries,
) -> RunoffProfile {
    let props = material.properties();
    let area_m2 = if roof_area_sqft > 0.0 { roof_area_sqft * SQFT_TO_M2 } else { 0.0 };

    // One first-flush volume: what the diverter must swallow per rain event.
    let first_flush_capacity = props.first_flush_l_per_m2 * area_m2;

    // 1 mm of rain on 1 m^2 is 1 liter, scaled by what the roof sheds and the
    // gutters catch.
    let liters_per_mm = area_m2 * props.runoff_coefficient * props.collection_efficiency;

    let mut monthly = Vec::with_capacity(12);
    let mut annual_net = 0.0;
    for (i, &mm) in rainfall.0.iter().enumerate() {
        let gross = liters_per_mm * mm;
        let first_flush =
            (first_flush_capacity * RAIN_EVENTS_PER_MONTH).min(FIRST_FLUSH_LOSS_CAP * gross);
        let net = gross - first_flush;
        annual_net += net;
        monthly.push(MonthlyRunoff {
            month: MONTH_NAMES[i],
            rainfall_mm: mm,
            gross_liters: gross,
            first_flush_liters: first_flush,
            net_liters: net,
        });
    }

    let mut profile = RunoffProfile {
        roof_area_m2: area_m2,
        runoff_coefficient: props.runoff_coefficient,
        collection_efficiency: props.collection_efficiency,
        roof_quality: props.quality,
        annual_gross_liters: liters_per_mm * rainfall.annual_total_mm(),
        annual_net_liters: annual_net,
        monthly,
        first_flush_capacity_liters: first_flush_capacity,
        recommended_tank_liters: 0.0,
    };
    profile.recommended_tank_liters = TANK_PEAK_FACTOR * profile.peak_month_net_liters();
    profile
}
