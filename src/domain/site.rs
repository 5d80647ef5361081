//! Site geometry, household facts and the fixed roof material table.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Conversion factor from square feet to square metres.
pub const SQFT_TO_M2: f64 = 0.092903;

/// Per-capita household consumption (Indian urban planning norm).
pub const LITERS_PER_PERSON_PER_DAY: f64 = 135.0;

/// Annual demand assumed when household size is unknown.
pub const DEFAULT_ANNUAL_DEMAND_LITERS: f64 = 100_000.0;

/// Roof construction material.
///
/// Unrecognised strings fall back to [`RoofMaterial::Other`] at the
/// normalization boundary instead of failing the request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoofMaterial {
    Concrete,
    Tile,
    Metal,
    Asbestos,
    Other,
}

/// Fixed hydraulic properties of one roof material.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaterialProperties {
    pub material: RoofMaterial,
    /// Fraction of incident rainfall that leaves the roof as collectible flow.
    pub runoff_coefficient: f64,
    /// Fraction of roof runoff actually captured by gutters and piping.
    pub collection_efficiency: f64,
    /// First-flush diversion requirement per square metre of roof.
    pub first_flush_l_per_m2: f64,
    /// Qualitative note on the collected water.
    pub quality: &'static str,
}

impl RoofMaterial {
    /// Property row for this material. `Other` carries the conservative
    /// fallback values used for unverified roofs.
    pub fn properties(self) -> MaterialProperties {
        match self {
            RoofMaterial::Concrete => MaterialProperties {
                material: self,
                runoff_coefficient: 0.85,
                collection_efficiency: 0.80,
                first_flush_l_per_m2: 2.0,
                quality: "good",
            },
            RoofMaterial::Tile => MaterialProperties {
                material: self,
                runoff_coefficient: 0.75,
                collection_efficiency: 0.75,
                first_flush_l_per_m2: 2.5,
                quality: "good",
            },
            RoofMaterial::Metal => MaterialProperties {
                material: self,
                runoff_coefficient: 0.90,
                collection_efficiency: 0.85,
                first_flush_l_per_m2: 1.5,
                quality: "excellent",
            },
            RoofMaterial::Asbestos => MaterialProperties {
                material: self,
                runoff_coefficient: 0.80,
                collection_efficiency: 0.70,
                first_flush_l_per_m2: 3.0,
                quality: "poor, not potable without treatment",
            },
            RoofMaterial::Other => MaterialProperties {
                material: self,
                runoff_coefficient: 0.70,
                collection_efficiency: 0.65,
                first_flush_l_per_m2: 2.5,
                quality: "unverified",
            },
        }
    }
}

/// Immutable site record for one assessment. Built by
/// [`normalize::normalize_site`](super::normalize::normalize_site) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInput {
    pub roof_area_sqft: f64,
    pub roof_material: RoofMaterial,
    /// Number of household members; 0 means unknown.
    pub dwellers: u32,
    /// Unpaved ground available for recharge structures; 0 means none known.
    pub open_space_sqft: f64,
    /// Current municipal water bill, when the household shared it.
    pub monthly_water_bill_inr: Option<f64>,
}

impl SiteInput {
    pub fn roof_area_m2(&self) -> f64 {
        self.roof_area_sqft * SQFT_TO_M2
    }

    pub fn open_space_m2(&self) -> f64 {
        self.open_space_sqft * SQFT_TO_M2
    }

    /// Annual household water demand in liters. Falls back to a fixed figure
    /// when the household size is unknown.
    pub fn annual_demand_liters(&self) -> f64 {
        if self.dwellers == 0 {
            DEFAULT_ANNUAL_DEMAND_LITERS
        } else {
            f64::from(self.dwellers) * LITERS_PER_PERSON_PER_DAY * 365.0
        }
    }

    pub fn daily_demand_liters(&self) -> f64 {
        self.annual_demand_liters() / 365.0
    }
}
