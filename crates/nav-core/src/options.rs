//! Per-session navigation configuration.

/// Configuration for one navigation session.
///
/// Immutable for the lifetime of the session — install a new session to
/// change options.  Construct with `NavigationOptions::default()` and adjust
/// individual fields; every default is documented on its field.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationOptions {
    /// Radius around an upcoming maneuver location inside which the maneuver
    /// is considered imminent.  Off-route tolerance is halved inside this
    /// zone.  Default: 40 m.
    pub maneuver_zone_radius_m: f64,

    /// Base perpendicular distance from the route before an off-route
    /// departure is considered at all.  Default: 50 m.
    pub minimum_distance_before_rerouting_m: f64,

    /// Distance the agent must travel away from the point where it first
    /// exceeded tolerance before off-route is declared.  Default: 50 m.
    pub off_route_minimum_distance_before_wrong_direction_m: f64,

    /// Deviation at or below which an off-route agent is considered back on
    /// the route.  Smaller than the departure guard so the flag cannot
    /// flicker at the tolerance boundary.  Default: 20 m.
    pub off_route_minimum_distance_before_right_direction_m: f64,

    /// How long a departure must persist before off-route is declared,
    /// measured on fix timestamps.  Default: 3 s.
    pub seconds_before_reroute: u32,

    /// Snap fixes onto the current step geometry for all downstream
    /// distance/duration math.  Default: `true`.
    pub snap_to_route: bool,

    /// Run the off-route detector at all.  Default: `true`.
    pub enable_off_route_detection: bool,

    /// Evaluate background alternative routes for a faster continuation.
    /// Default: `false`.
    pub enable_faster_route_detection: bool,

    /// Maximum difference between the fix bearing and the upcoming
    /// maneuver's heading for a step advance to be accepted.
    /// Default: 30°.
    pub maneuver_bearing_tolerance_deg: f64,

    /// An alternative must beat the remaining duration by at least this many
    /// seconds before a faster-route event fires.  Default: 120 s.
    pub faster_route_margin_secs: f64,

    /// Minimum spacing between two faster-route evaluations.
    /// Default: 120 s.
    pub faster_route_check_interval_secs: u32,

    /// How long an issued reroute request blocks duplicates before it is
    /// presumed lost.  Default: 10 s.
    pub route_call_timeout_secs: u32,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            maneuver_zone_radius_m:                               40.0,
            minimum_distance_before_rerouting_m:                  50.0,
            off_route_minimum_distance_before_wrong_direction_m:  50.0,
            off_route_minimum_distance_before_right_direction_m:  20.0,
            seconds_before_reroute:                               3,
            snap_to_route:                                        true,
            enable_off_route_detection:                           true,
            enable_faster_route_detection:                        false,
            maneuver_bearing_tolerance_deg:                       30.0,
            faster_route_margin_secs:                             120.0,
            faster_route_check_interval_secs:                     120,
            route_call_timeout_secs:                              10,
        }
    }
}
