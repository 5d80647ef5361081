//! Core domain types for rainwater harvesting assessment.
//!
//! Everything here is a plain value type: built once at the normalization
//! boundary, read by the engine stages, serialized at the API edge. Volumes
//! are liters and areas square metres unless a field name says otherwise.

pub mod normalize;
pub mod report;
pub mod runoff;
pub mod signals;
pub mod site;
pub mod structures;

pub use report::*;
pub use runoff::*;
pub use signals::*;
pub use site::*;
pub use structures::*;

use serde::Serializer;

// ============================================================================
// Display rounding
// ============================================================================
//
// Structs keep raw f64 values so arithmetic invariants (net <= gross, phase
// costs partitioning the bundle total) hold exactly; rounding happens only
// when a value leaves the process as JSON.

/// Round to one decimal place.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Serialize an `f64` rounded to one decimal place.
pub fn ser_1dp<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(round1(*v))
}

/// Serialize an `f64` rounded to two decimal places.
pub fn ser_2dp<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(round2(*v))
}

/// Serialize an optional `f64` rounded to one decimal place, `null` when absent.
pub fn ser_opt_1dp<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(x) => s.serialize_some(&round1(*x)),
        None => s.serialize_none(),
    }
}
