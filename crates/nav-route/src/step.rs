//! Route steps, maneuvers, and intersections.

use nav_core::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::{BannerInstruction, VoiceInstruction};

/// Which side of the road traffic drives on for a step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrivingSide {
    #[default]
    Right,
    Left,
}

/// The maneuver that begins a step.
///
/// `kind` and `modifier` are the routing service's free-form vocabulary
/// (`"turn"` / `"right"`, `"depart"`, `"roundabout"`, …) and are carried
/// through as strings rather than an enum so unknown vocabulary survives a
/// round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Maneuver type, e.g. `"turn"`, `"merge"`, `"arrive"`.
    pub kind: String,

    /// Direction modifier, e.g. `"left"`, `"slight right"`.
    #[serde(default)]
    pub modifier: Option<String>,

    /// Exit angle for roundabout maneuvers, degrees.
    #[serde(default)]
    pub roundabout_angle_deg: Option<f64>,

    /// Where the maneuver happens.
    pub location: GeoPoint,

    /// Heading after completing the maneuver, degrees `[0, 360)`.  Used to
    /// gate step advancement against the fix bearing; `None` disables the
    /// bearing check for this maneuver.
    #[serde(default)]
    pub bearing_after_deg: Option<f64>,
}

/// A road intersection crossed by a step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub location: GeoPoint,

    /// Bearings of all roads meeting at the intersection, degrees.
    #[serde(default)]
    pub bearings_deg: Vec<f64>,
}

/// A maneuver-bounded sub-segment of a leg with its own geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step polyline, at least one point for a valid route.
    pub geometry: Vec<GeoPoint>,

    /// The maneuver that begins this step.
    pub maneuver: Maneuver,

    /// Intersections along the step, in driving order.
    #[serde(default)]
    pub intersections: Vec<Intersection>,

    /// Step distance in metres.
    pub distance_m: f64,

    /// Step duration in seconds.
    pub duration_secs: f64,

    #[serde(default)]
    pub driving_side: DrivingSide,

    /// Banner payloads, each anchored at a trigger distance before the step
    /// end.
    #[serde(default)]
    pub banner_instructions: Vec<BannerInstruction>,

    /// Voice payloads, each anchored at a trigger distance before the step
    /// end.
    #[serde(default)]
    pub voice_instructions: Vec<VoiceInstruction>,
}

impl Step {
    /// The intersection nearest to `point` and its distance in metres, or
    /// `None` if the step has no intersections.
    pub fn nearest_intersection(&self, point: GeoPoint) -> Option<(&Intersection, f64)> {
        self.intersections
            .iter()
            .map(|i| (i, i.location.distance_m(point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
