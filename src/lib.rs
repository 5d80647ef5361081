//! Rooftop rainwater harvesting assessment engine.
//!
//! The core is a deterministic, side-effect-free pipeline
//! ([`pipeline::run_assessment`]) that turns roof geometry, a monthly
//! rainfall series and optional soil and groundwater signals into a runoff
//! profile, a weighted feasibility score, a costed set of structure
//! recommendations and a phased implementation plan. The [`api`] module is a
//! thin axum shim over that single call.

pub mod api;
pub mod config;
pub mod domain;
pub mod feasibility;
pub mod phases;
pub mod pipeline;
pub mod recommend;
pub mod runoff;
pub mod telemetry;
