//! Off-route detection.
//!
//! # Decision logic
//!
//! The base tolerance is `minimum_distance_before_rerouting_m`, halved when
//! the agent is inside the maneuver zone of the nearest intersection —
//! drivers are expected to track the route more tightly around turns.
//!
//! Exceeding the tolerance alone never raises the flag.  The departure must
//! persist for `seconds_before_reroute` *and* the agent must travel
//! `off_route_minimum_distance_before_wrong_direction_m` away from the point
//! where the tolerance was first exceeded, so a GPS excursion while waiting
//! at a light cannot trigger a reroute.  Recovery uses the separate, tighter
//! `off_route_minimum_distance_before_right_direction_m` guard, which keeps
//! the flag from flickering at the tolerance boundary.

use nav_core::{Fix, GeoPoint, NavigationOptions};
use nav_route::Step;

use crate::snap::SnappedPosition;

#[derive(Debug)]
struct Departure {
    since_ms: i64,
    origin: GeoPoint,
}

/// Hysteresis state for one driving session.
#[derive(Debug, Default)]
pub struct OffRouteDetector {
    off_route: bool,
    departure: Option<Departure>,
}

impl OffRouteDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all state (route replaced or session restarted).
    pub fn reset(&mut self) {
        self.off_route = false;
        self.departure = None;
    }

    /// `true` while the agent is considered departed from the route.
    pub fn is_off_route(
        &mut self,
        fix: &Fix,
        snapped: &SnappedPosition,
        step: &Step,
        options: &NavigationOptions,
    ) -> bool {
        if !options.enable_off_route_detection {
            return false;
        }

        let mut tolerance = options.minimum_distance_before_rerouting_m;
        if let Some((_, intersection_distance)) = step.nearest_intersection(snapped.point) {
            if intersection_distance <= options.maneuver_zone_radius_m {
                tolerance *= 0.5;
            }
        }

        if self.off_route {
            if snapped.deviation_m <= options.off_route_minimum_distance_before_right_direction_m {
                log::info!("back on route (deviation {:.1} m)", snapped.deviation_m);
                self.reset();
            }
            return self.off_route;
        }

        if snapped.deviation_m <= tolerance {
            self.departure = None;
            return false;
        }

        match &self.departure {
            None => {
                self.departure = Some(Departure {
                    since_ms: fix.timestamp_ms,
                    origin: fix.point,
                });
            }
            Some(departure) => {
                let held_ms = fix.timestamp_ms - departure.since_ms;
                let moved_m = departure.origin.distance_m(fix.point);
                if held_ms >= options.seconds_before_reroute as i64 * 1000
                    && moved_m >= options.off_route_minimum_distance_before_wrong_direction_m
                {
                    log::info!(
                        "off route: deviation {:.1} m > tolerance {:.1} m, held {held_ms} ms, moved {moved_m:.1} m",
                        snapped.deviation_m,
                        tolerance,
                    );
                    self.off_route = true;
                }
            }
        }
        self.off_route
    }
}
