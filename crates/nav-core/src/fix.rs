//! Raw position fixes from a location source.

use crate::GeoPoint;

/// A raw position fix as delivered by the external location source.
///
/// Timestamps are Unix milliseconds and must be strictly increasing within a
/// session — the fix validator in `nav-engine` drops anything older than or
/// equal to the last accepted fix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    /// Reported position.
    pub point: GeoPoint,

    /// Course over ground in degrees `[0, 360)`, if the source reports one.
    /// Stationary receivers typically report `None`.
    pub bearing_deg: Option<f64>,

    /// Speed over ground in metres per second, if reported.
    pub speed_mps: Option<f64>,

    /// Estimated horizontal accuracy radius in metres, if reported.
    pub accuracy_m: Option<f64>,

    /// Unix timestamp of the fix, milliseconds.
    pub timestamp_ms: i64,
}

impl Fix {
    /// A fix with position and timestamp only; all optional fields unset.
    pub fn new(point: GeoPoint, timestamp_ms: i64) -> Self {
        Self {
            point,
            bearing_deg: None,
            speed_mps:   None,
            accuracy_m:  None,
            timestamp_ms,
        }
    }

    /// The same fix with a course-over-ground bearing.
    pub fn with_bearing(mut self, bearing_deg: f64) -> Self {
        self.bearing_deg = Some(bearing_deg);
        self
    }
}
