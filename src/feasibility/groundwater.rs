//! Groundwater conditions factor.
//!
//! Scores how much the local aquifer would benefit from (and accommodate)
//! recharge, discounted by how far away the supporting observation was made.

use crate::domain::{GroundwaterDetail, GroundwaterSignal};

/// Applied when no monitoring station covers the site.
pub(crate) const DEFAULT_SCORE: f64 = 60.0;

pub(crate) fn score(groundwater: Option<&GroundwaterSignal>) -> (f64, GroundwaterDetail) {
    let signal = match groundwater {
        Some(signal) => signal,
        None => {
            let detail = GroundwaterDetail {
                avg_depth_m: None,
                condition: "no monitoring station data, assuming moderate conditions",
                station_distance_km: None,
            };
            return (DEFAULT_SCORE, detail);
        }
    };

    let base = depth_band(signal.avg_depth_m);

    // A stable water table takes recharge more predictably.
    let variation = signal.seasonal_variation_m();
    let stability_bonus = if variation <= 2.0 {
        10.0
    } else if variation <= 5.0 {
        5.0
    } else {
        0.0
    };

    // The further the station, the less the reading says about this site.
    let score = (base + stability_bonus).min(100.0) * distance_confidence(signal.station_distance_km);

    let detail = GroundwaterDetail {
        avg_depth_m: Some(signal.avg_depth_m),
        condition: condition_label(signal.avg_depth_m),
        station_distance_km: Some(signal.station_distance_km),
    };
    (score, detail)
}

fn depth_band(avg_depth_m: f64) -> f64 {
    if avg_depth_m <= 5.0 {
        // Water is right there, but the table fills fast.
        90.0
    } else if avg_depth_m <= 15.0 {
        80.0
    } else if avg_depth_m <= 30.0 {
        // Deep enough to need recharge, shallow enough to respond to it.
        100.0
    } else {
        70.0
    }
}

fn distance_confidence(station_distance_km: f64) -> f64 {
    if station_distance_km <= 5.0 {
        1.0
    } else if station_distance_km <= 15.0 {
        0.9
    } else if station_distance_km <= 30.0 {
        0.8
    } else {
        0.7
    }
}

fn condition_label(avg_depth_m: f64) -> &'static str {
    if avg_depth_m <= 5.0 {
        "shallow water table, limited recharge headroom"
    } else if avg_depth_m <= 15.0 {
        "moderate depth, responsive to recharge"
    } else if avg_depth_m <= 30.0 {
        "deep water table, recharge strongly beneficial"
    } else {
        "very deep water table"
    }
}
