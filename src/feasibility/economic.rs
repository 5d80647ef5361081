//! Economic viability factor: a site-scale base score blended with how fast
//! the system pays for itself.

use crate::domain::{EconomicDetail, RainfallSeries, RunoffProfile, SiteInput};

/// Installed system cost per liter of daily collection capacity.
const COST_PER_DAILY_LITER_INR: f64 = 250.0;

/// Value of municipal water displaced, per liter collected.
const SAVINGS_PER_LITER_INR: f64 = 0.15;

/// Share of an existing water bill that harvesting can realistically offset.
const BILL_OFFSET_CAP: f64 = 0.30;

const BASE_BLEND: f64 = 0.6;
const PAYBACK_BLEND: f64 = 0.4;

pub(crate) fn score(
    profile: &RunoffProfile,
    rainfall: &RainfallSeries,
    site: &SiteInput,
) -> (f64, EconomicDetail) {
    // Bigger roofs and wetter regions amortise fixed costs better.
    let annual_mm = rainfall.annual_total_mm();
    let base = (50.0
        + (site.roof_area_sqft / 1000.0).min(2.0) * 15.0
        + (annual_mm / 1000.0).min(2.0) * 20.0)
        .min(100.0);

    let system_cost = (profile.annual_net_liters / 365.0) * COST_PER_DAILY_LITER_INR;
    let annual_savings = profile.annual_net_liters * SAVINGS_PER_LITER_INR;

    let (payback_years, payback_score) = if annual_savings > 0.0 {
        let years = system_cost / annual_savings;
        (Some(years), payback_band(years))
    } else {
        // Nothing collected: no savings, payback never arrives.
        (None, 10.0)
    };

    let score = BASE_BLEND * base + PAYBACK_BLEND * payback_score;

    let monthly_bill_savings = site
        .monthly_water_bill_inr
        .map(|bill| (bill * BILL_OFFSET_CAP).min(annual_savings / 12.0));

    let detail = EconomicDetail {
        estimated_system_cost_inr: system_cost.round(),
        annual_savings_inr: annual_savings.round(),
        payback_period_years: payback_years,
        monthly_bill_savings_inr: monthly_bill_savings.map(f64::round),
    };
    (score, detail)
}

fn payback_band(years: f64) -> f64 {
    if years <= 2.0 {
        100.0
    } else if years <= 4.0 {
        85.0
    } else if years <= 6.0 {
        70.0
    } else if years <= 8.0 {
        55.0
    } else if years <= 10.0 {
        40.0
    } else {
        25.0
    }
}
