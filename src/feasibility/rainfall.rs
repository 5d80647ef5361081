//! Rainfall adequacy factor: banded annual volume plus a distribution bonus.

use crate::domain::{RainfallDetail, RainfallSeries};

pub(crate) fn score(rainfall: &RainfallSeries) -> (f64, RainfallDetail) {
    let annual_mm = rainfall.annual_total_mm();
    let base: f64 = if annual_mm >= 1500.0 {
        100.0
    } else if annual_mm >= 1000.0 {
        80.0
    } else if annual_mm >= 600.0 {
        60.0
    } else if annual_mm >= 400.0 {
        30.0
    } else {
        10.0
    };

    // Evenly spread rain is worth more than the same volume in one burst:
    // smaller tanks cover more of the year.
    let cv = rainfall.coefficient_of_variation();
    let distribution_bonus = if cv <= 0.5 {
        15.0
    } else if cv <= 0.8 {
        10.0
    } else if cv <= 1.2 {
        5.0
    } else {
        0.0
    };

    let score = (base + distribution_bonus).min(100.0);
    let detail = RainfallDetail {
        annual_rainfall_mm: annual_mm,
        adequacy: adequacy_label(annual_mm),
        seasonal_distribution: distribution_label(cv),
    };
    (score, detail)
}

fn adequacy_label(annual_mm: f64) -> &'static str {
    if annual_mm >= 1500.0 {
        "excellent"
    } else if annual_mm >= 1000.0 {
        "good"
    } else if annual_mm >= 600.0 {
        "adequate"
    } else if annual_mm >= 400.0 {
        "marginal"
    } else {
        "insufficient"
    }
}

fn distribution_label(cv: f64) -> &'static str {
    if cv <= 0.5 {
        "well distributed"
    } else if cv <= 0.8 {
        "moderately seasonal"
    } else if cv <= 1.2 {
        "highly seasonal"
    } else {
        "extremely concentrated"
    }
}
