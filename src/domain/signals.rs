//! Environmental signals: the monthly rainfall series plus the optional soil
//! and groundwater observations delivered by upstream survey services.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Twelve monthly rainfall totals (mm) for one reference year, January first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainfallSeries(pub [f64; 12]);

impl RainfallSeries {
    /// Flat series splitting `annual_mm` evenly across the year. This is the
    /// substitution the API layer applies when no measured series is
    /// available; the engine itself never fabricates climate data.
    pub fn uniform(annual_mm: f64) -> Self {
        Self([annual_mm / 12.0; 12])
    }

    pub fn annual_total_mm(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn mean_monthly_mm(&self) -> f64 {
        self.annual_total_mm() / 12.0
    }

    /// Coefficient of variation of the monthly values. A zero-mean series is
    /// degenerate and reports 0 rather than dividing by zero.
    pub fn coefficient_of_variation(&self) -> f64 {
        let mean = self.mean_monthly_mm();
        if mean <= 0.0 {
            return 0.0;
        }
        let variance = self.0.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 12.0;
        variance.sqrt() / mean
    }

    /// Index and value of the wettest month.
    pub fn wettest_month(&self) -> (usize, f64) {
        self.0
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|&(_, v)| OrderedFloat(v))
            .unwrap_or((0, 0.0))
    }

    /// Index and value of the driest month.
    pub fn driest_month(&self) -> (usize, f64) {
        self.0
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, v)| OrderedFloat(v))
            .unwrap_or((0, 0.0))
    }

    /// All entries finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.0.iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Aggregate view of a rainfall series, reported alongside assessment output.
#[derive(Debug, Clone, Serialize)]
pub struct RainfallSummary {
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub annual_total_mm: f64,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub mean_monthly_mm: f64,
    pub wettest_month: MonthExtreme,
    pub driest_month: MonthExtreme,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthExtreme {
    pub month: &'static str,
    #[serde(serialize_with = "crate::domain::ser_1dp")]
    pub rainfall_mm: f64,
}

impl RainfallSummary {
    pub fn from_series(series: &RainfallSeries) -> Self {
        let (wet_idx, wet_mm) = series.wettest_month();
        let (dry_idx, dry_mm) = series.driest_month();
        Self {
            annual_total_mm: series.annual_total_mm(),
            mean_monthly_mm: series.mean_monthly_mm(),
            wettest_month: MonthExtreme { month: MONTH_NAMES[wet_idx], rainfall_mm: wet_mm },
            driest_month: MonthExtreme { month: MONTH_NAMES[dry_idx], rainfall_mm: dry_mm },
        }
    }
}

/// Broad soil texture class as reported by a soil survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TextureClass {
    Sandy,
    Loamy,
    Medium,
    Clayey,
    Unknown,
}

impl TextureClass {
    /// Typical infiltration rate (mm/hr) when the survey does not report one.
    pub fn typical_infiltration_mm_hr(self) -> f64 {
        match self {
            TextureClass::Sandy => 25.0,
            TextureClass::Loamy => 13.0,
            TextureClass::Medium => 10.0,
            TextureClass::Clayey => 4.0,
            TextureClass::Unknown => 10.0,
        }
    }

    /// Typical recharge suitability (0-10) when the survey does not score it.
    pub fn typical_suitability(self) -> u8 {
        match self {
            TextureClass::Sandy => 8,
            TextureClass::Loamy => 7,
            TextureClass::Medium => 5,
            TextureClass::Clayey => 3,
            TextureClass::Unknown => 5,
        }
    }
}

/// Soil observation for the site. Absence of the whole signal forces the
/// documented medium-texture defaults downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSignal {
    pub texture: TextureClass,
    /// Recharge suitability on a 0-10 scale, higher draining better.
    pub suitability_score: u8,
    pub infiltration_rate_mm_hr: f64,
}

impl Default for SoilSignal {
    fn default() -> Self {
        Self {
            texture: TextureClass::Medium,
            suitability_score: 5,
            infiltration_rate_mm_hr: 10.0,
        }
    }
}

/// Depth-to-water observations from the nearest groundwater monitoring
/// station. Depths are metres below ground level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundwaterSignal {
    pub station_distance_km: f64,
    pub avg_depth_m: f64,
    pub min_depth_m: f64,
    pub max_depth_m: f64,
}

impl GroundwaterSignal {
    /// Spread between the seasonal high and low water table.
    pub fn seasonal_variation_m(&self) -> f64 {
        self.max_depth_m - self.min_depth_m
    }
}
