//! A route leg — the portion between two consecutive waypoints.

use serde::{Deserialize, Serialize};

use crate::{LegAnnotation, Step};

/// One waypoint-to-waypoint portion of a [`Route`][crate::Route].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Maneuver-bounded steps in driving order.
    pub steps: Vec<Step>,

    /// Human-readable summary of the leg (typically its major road names,
    /// e.g. `"Main St, 5th Ave"`).
    pub summary: String,

    /// Per-geometry-segment metric arrays.  May be empty when the route was
    /// requested without annotations.
    #[serde(default)]
    pub annotation: LegAnnotation,

    /// Leg distance in metres.
    pub distance_m: f64,

    /// Leg duration in seconds.
    pub duration_secs: f64,
}
