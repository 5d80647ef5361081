//! Recommended physical structures and the phased implementation plan.

use serde::Serialize;
use strum_macros::Display;

/// Families of physical works a recommendation can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StructureCategory {
    StorageTank,
    RechargeStructure,
    FiltrationSystem,
}

/// Sizing of a structure: a holding capacity for tanks and filters, an
/// excavated footprint for recharge works. Dimension and capacity values are
/// finished figures, already rounded to buildable precision.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructureSpec {
    Capacity { liters: f64 },
    Dimensions { length_m: f64, width_m: f64, depth_m: f64 },
}

/// One component's share of a structure's cost. Fractions across a structure
/// sum to 1.0; amounts are derived and informational.
#[derive(Debug, Clone, Serialize)]
pub struct CostShare {
    pub component: &'static str,
    pub fraction: f64,
    #[serde(serialize_with = "crate::domain::ser_2dp")]
    pub amount_inr: f64,
}

/// One candidate structure with its costed bill of work.
#[derive(Debug, Clone, Serialize)]
pub struct StructureOption {
    pub category: StructureCategory,
    pub name: &'static str,
    pub spec: StructureSpec,
    pub material: &'static str,
    /// Whole rupees.
    pub estimated_cost_inr: f64,
    pub cost_breakdown: Vec<CostShare>,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
    /// Site-specific note on why this option fits (or how well).
    pub suitability: String,
}

/// Overall investment direction, chosen from open space and soil permeability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    StorageFocused,
    RechargeFocused,
    Hybrid,
}

/// The costed set of structures recommended for a site.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationBundle {
    pub strategy: Strategy,
    pub primary_structures: Vec<StructureOption>,
    pub secondary_structures: Vec<StructureOption>,
    /// Exact sum of every listed structure's cost, whole rupees.
    pub total_estimated_cost_inr: f64,
}

impl RecommendationBundle {
    /// Assemble a bundle, deriving the total from the member structures.
    pub fn new(
        strategy: Strategy,
        primary_structures: Vec<StructureOption>,
        secondary_structures: Vec<StructureOption>,
    ) -> Self {
        let total_estimated_cost_inr = primary_structures
            .iter()
            .chain(secondary_structures.iter())
            .map(|s| s.estimated_cost_inr)
            .sum();
        Self { strategy, primary_structures, secondary_structures, total_estimated_cost_inr }
    }

    /// Bundle for a site with nothing to collect.
    pub fn empty() -> Self {
        Self::new(Strategy::StorageFocused, Vec::new(), Vec::new())
    }

    pub fn all_structures(&self) -> impl Iterator<Item = &StructureOption> + '_ {
        self.primary_structures.iter().chain(self.secondary_structures.iter())
    }

    pub fn structure_count(&self) -> usize {
        self.primary_structures.len() + self.secondary_structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structure_count() == 0
    }
}

/// One step of the implementation roadmap.
#[derive(Debug, Clone, Serialize)]
pub struct Phase {
    /// 1-based position in the plan.
    pub index: usize,
    pub title: &'static str,
    /// Names of the structures built in this phase.
    pub structures: Vec<&'static str>,
    /// Exact sum of the member structures' costs, whole rupees.
    pub phase_cost_inr: f64,
    pub timeline: &'static str,
    pub priority: &'static str,
}

/// Ordered, budgeted roadmap over a recommendation bundle. Empty when the
/// bundle recommends nothing.
#[derive(Debug, Clone, Serialize)]
pub struct ImplementationPlan {
    pub phases: Vec<Phase>,
}
