//! Water-collection profile produced by the runoff calculator.

use ordered_float::OrderedFloat;
use serde::Serialize;

/// One month of the collection profile. Volumes are raw liters; display
/// rounding happens at serialization.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRunoff {
    pub month: &'static str,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub rainfall_mm: f64,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub gross_liters: f64,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub first_flush_liters: f64,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub net_liters: f64,
}

/// Derived collection profile for one site and one rainfall year.
///
/// Invariants: `annual_net_liters <= annual_gross_liters`, every monthly net
/// is non-negative, and a non-positive roof area yields an all-zero profile.
#[derive(Debug, Clone, Serialize)]
pub struct RunoffProfile {
    #[serde(serialize_with = "crate::domain::ser_2dp")]
    pub roof_area_m2: f64,
    pub runoff_coefficient: f64,
    pub collection_efficiency: f64,
    pub roof_quality: &'static str,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub annual_gross_liters: f64,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub annual_net_liters: f64,
    pub monthly: Vec<MonthlyRunoff>,
    /// Volume the first-flush diverter must hold for this roof.
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub first_flush_capacity_liters: f64,
    /// Headline storage size: 1.5x the peak collection month.
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub recommended_tank_liters: f64,
}

impl RunoffProfile {
    /// Month with the highest net collection, if the profile is non-empty.
    pub fn peak_month(&self) -> Option<&MonthlyRunoff> {
        self.monthly.iter().max_by_key(|m| OrderedFloat(m.net_liters))
    }

    pub fn peak_month_net_liters(&self) -> f64 {
        self.peak_month().map(|m| m.net_liters).unwrap_or(0.0)
    }

    /// True when the site collects nothing (zero area or zero rainfall).
    pub fn is_zero(&self) -> bool {
        self.annual_net_liters <= 0.0
    }
}
