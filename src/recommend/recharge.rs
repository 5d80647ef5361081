//! Recharge structure templates, gated by available open space and soil
//! permeability and sized against the peak collection month.

use crate::domain::{
    RunoffProfile, SoilSignal, StructureCategory, StructureOption, StructureSpec,
};

use super::cost;

// Standard footprints from groundwater-board dimensioning practice.
const PIT_FOOTPRINT_M: (f64, f64) = (2.0, 2.0);
const TRENCH_FOOTPRINT_M: (f64, f64) = (5.0, 1.0);
const WELL_FOOTPRINT_M: (f64, f64) = (1.0, 1.0);

const PIT_MIN_OPEN_M2: f64 = 5.0;
const WELL_MIN_OPEN_M2: f64 = 10.0;
const TRENCH_MIN_OPEN_M2: f64 = 20.0;

/// Shaft wells clog quickly in soils draining slower than this.
const WELL_MIN_INFILTRATION_MM_HR: f64 = 15.0;

const PIT_DEPTH_RANGE_M: (f64, f64) = (1.5, 3.0);
const TRENCH_DEPTH_RANGE_M: (f64, f64) = (1.0, 2.5);
const WELL_DEPTH_M: f64 = 12.0;

/// Depth that makes the footprint hold one peak month, clamped to the
/// buildable range and rounded to a buildable 0.1 m.
fn sized_depth(volume_m3: f64, footprint: (f64, f64), range: (f64, f64)) -> f64 {
    let raw = volume_m3 / (footprint.0 * footprint.1);
    let clamped = raw.clamp(range.0, range.1);
    (clamped * 10.0).round() / 10.0
}

pub(crate) fn options(
    profile: &RunoffProfile,
    soil: &SoilSignal,
    open_space_m2: f64,
) -> Vec<StructureOption> {
    let peak_volume_m3 = profile.peak_month_net_liters() / 1000.0;
    let mut options = Vec::new();

    if open_space_m2 >= PIT_MIN_OPEN_M2 {
        options.push(pit(peak_volume_m3, soil));
    }
    if open_space_m2 >= WELL_MIN_OPEN_M2
        && soil.infiltration_rate_mm_hr >= WELL_MIN_INFILTRATION_MM_HR
    {
        options.push(well(soil));
    }
    if open_space_m2 >= TRENCH_MIN_OPEN_M2 {
        options.push(trench(peak_volume_m3, soil));
    }

    options
}

fn pit(peak_volume_m3: f64, soil: &SoilSignal) -> StructureOption {
    let (length_m, width_m) = PIT_FOOTPRINT_M;
    let depth_m = sized_depth(peak_volume_m3, PIT_FOOTPRINT_M, PIT_DEPTH_RANGE_M);
    let cost_inr = cost::pit_cost(length_m * width_m * depth_m);
    StructureOption {
        category: StructureCategory::RechargeStructure,
        name: "Recharge Pit",
        spec: StructureSpec::Dimensions { length_m, width_m, depth_m },
        material: "Brick lining with gravel and sand fill",
        estimated_cost_inr: cost_inr,
        cost_breakdown: cost::breakdown_for(StructureCategory::RechargeStructure, cost_inr),
        pros: vec![
            "Cheapest way to return water to the aquifer",
            "Small footprint fits most compounds",
            "Little visible above ground once covered",
        ],
        cons: vec!["Needs periodic desilting", "Capacity limited by footprint"],
        suitability: soil_note(soil),
    }
}

fn well(soil: &SoilSignal) -> StructureOption {
    let (length_m, width_m) = WELL_FOOTPRINT_M;
    let cost_inr = cost::well_cost(WELL_DEPTH_M);
    StructureOption {
        category: StructureCategory::RechargeStructure,
        name: "Recharge Well",
        spec: StructureSpec::Dimensions { length_m, width_m, depth_m: WELL_DEPTH_M },
        material: "Precast concrete rings with filter media",
        estimated_cost_inr: cost_inr,
        cost_breakdown: cost::breakdown_for(StructureCategory::RechargeStructure, cost_inr),
        pros: vec![
            "Delivers water below the clay horizon",
            "Works where shallow soil drains poorly",
            "Highest recharge rate per square metre",
        ],
        cons: vec!["Most expensive recharge option", "Requires drilling access for the rig"],
        suitability: soil_note(soil),
    }
}

fn trench(peak_volume_m3: f64, soil: &SoilSignal) -> StructureOption {
    let (length_m, width_m) = TRENCH_FOOTPRINT_M;
    let depth_m = sized_depth(peak_volume_m3, TRENCH_FOOTPRINT_M, TRENCH_DEPTH_RANGE_M);
    let cost_inr = cost::trench_cost(length_m * width_m * depth_m);
    StructureOption {
        category: StructureCategory::RechargeStructure,
        name: "Recharge Trench",
        spec: StructureSpec::Dimensions { length_m, width_m, depth_m },
        material: "Boulder, gravel and coarse sand layers",
        estimated_cost_inr: cost_inr,
        cost_breakdown: cost::breakdown_for(StructureCategory::RechargeStructure, cost_inr),
        pros: vec![
            "Spreads infiltration along its length",
            "Doubles as a drainage line for the plot",
            "Cheap per cubic metre excavated",
        ],
        cons: vec!["Takes a long strip of open ground", "Silts up without a settling chamber"],
        suitability: soil_note(soil),
    }
}

fn soil_note(soil: &SoilSignal) -> String {
    format!(
        "Sized for {} soil draining at {:.0} mm/hr",
        soil.texture, soil.infiltration_rate_mm_hr
    )
}
