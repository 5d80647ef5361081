//! Pricing tables and formulas for every structure template.
//!
//! All prices are 2024-ish Indian market figures in rupees and round to whole
//! rupees at the point a structure is costed, so bundle and phase totals sum
//! exactly.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::{CostShare, StructureCategory};

/// Tank shell material with its pricing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TankMaterial {
    Hdpe,
    Ferrocement,
    Rcc,
}

impl TankMaterial {
    pub fn label(self) -> &'static str {
        match self {
            TankMaterial::Hdpe => "HDPE",
            TankMaterial::Ferrocement => "Ferrocement",
            TankMaterial::Rcc => "RCC",
        }
    }

    pub fn rate_inr_per_liter(self) -> f64 {
        match self {
            TankMaterial::Hdpe => 6.0,
            TankMaterial::Ferrocement => 4.5,
            TankMaterial::Rcc => 9.0,
        }
    }

    /// Labour and fittings on top of the shell price.
    pub fn installation_multiplier(self) -> f64 {
        match self {
            TankMaterial::Hdpe => 1.10,
            TankMaterial::Ferrocement => 1.25,
            TankMaterial::Rcc => 1.40,
        }
    }
}

/// Volume discount tiers for storage tanks.
pub fn volume_discount(capacity_liters: f64) -> f64 {
    if capacity_liters > 10_000.0 {
        0.85
    } else if capacity_liters > 5_000.0 {
        0.90
    } else {
        1.0
    }
}

/// Whole-rupee installed price of a storage tank.
pub fn tank_cost(capacity_liters: f64, material: TankMaterial) -> f64 {
    (capacity_liters
        * material.rate_inr_per_liter()
        * volume_discount(capacity_liters)
        * material.installation_multiplier())
    .round()
}

const PIT_BASE_INR: f64 = 8_000.0;
const PIT_RATE_INR_PER_M3: f64 = 450.0;
const TRENCH_BASE_INR: f64 = 6_000.0;
const TRENCH_RATE_INR_PER_M3: f64 = 350.0;
const WELL_BASE_INR: f64 = 25_000.0;
const WELL_RATE_INR_PER_M_DEPTH: f64 = 1_200.0;

pub fn pit_cost(volume_m3: f64) -> f64 {
    (PIT_BASE_INR + PIT_RATE_INR_PER_M3 * volume_m3).round()
}

pub fn trench_cost(volume_m3: f64) -> f64 {
    (TRENCH_BASE_INR + TRENCH_RATE_INR_PER_M3 * volume_m3).round()
}

/// Priced per metre drilled, not per excavated volume.
pub fn well_cost(depth_m: f64) -> f64 {
    (WELL_BASE_INR + WELL_RATE_INR_PER_M_DEPTH * depth_m).round()
}

const DIVERTER_BASE_INR: f64 = 1_500.0;
const DIVERTER_RATE_INR_PER_LITER: f64 = 2.0;
const MULTI_STAGE_FLAT_INR: f64 = 7_500.0;

pub fn diverter_cost(capacity_liters: f64) -> f64 {
    (DIVERTER_BASE_INR + DIVERTER_RATE_INR_PER_LITER * capacity_liters).round()
}

pub fn multi_stage_cost() -> f64 {
    MULTI_STAGE_FLAT_INR
}

/// Cost-breakdown fractions per structure family. Kept as data so the split
/// can be retuned without touching pricing code; each row sums to 1.0.
pub static COST_BREAKDOWNS: Lazy<HashMap<StructureCategory, [(&'static str, f64); 3]>> =
    Lazy::new(|| {
        HashMap::from([
            (
                StructureCategory::StorageTank,
                [("tank", 0.70), ("installation", 0.20), ("accessories", 0.10)],
            ),
            (
                StructureCategory::RechargeStructure,
                [("excavation", 0.50), ("materials", 0.30), ("labour", 0.20)],
            ),
            (
                StructureCategory::FiltrationSystem,
                [("unit", 0.60), ("installation", 0.25), ("plumbing", 0.15)],
            ),
        ])
    });

/// Expand a structure's cost into its component shares.
pub fn breakdown_for(category: StructureCategory, cost_inr: f64) -> Vec<CostShare> {
    COST_BREAKDOWNS[&category]
        .iter()
        .map(|&(component, fraction)| CostShare {
            component,
            fraction,
            amount_inr: cost_inr * fraction,
        })
        .collect()
}
