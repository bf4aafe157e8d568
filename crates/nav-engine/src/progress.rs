//! The progress snapshot and the index-advance state machine.

use std::sync::Arc;

use nav_core::{geo::bearing_diff_deg, polyline, Fix, GeoPoint, NavigationOptions};
use nav_route::{Leg, Route, Step};

use crate::snap::{snap_to_step, SnappedPosition};

/// Distance remaining at or below which a step counts as completed, metres.
/// Projection clamps to the step end, so a fix at or past the maneuver point
/// produces a remaining distance of exactly zero up to float rounding.
const STEP_COMPLETION_EPSILON_M: f64 = 1e-6;

// ── RouteProgress ─────────────────────────────────────────────────────────────

/// One cycle's progress snapshot.
///
/// Produced atomically by [`ProgressTracker::update`] and never mutated
/// afterwards; consumers hold it (or clone it) freely.  Only the previous
/// snapshot is retained anywhere, for milestone edge detection.
#[derive(Clone, Debug)]
pub struct RouteProgress {
    /// The route being driven.
    pub route: Arc<Route>,

    /// Index of the current leg.  Always `< route.legs.len()`.
    pub leg_index: usize,

    /// Index of the current step within the current leg.
    pub step_index: usize,

    /// Metres left on the current step, measured on its geometry.
    pub step_distance_remaining_m: f64,

    /// Seconds left on the current step, scaled from the distance fraction.
    pub step_duration_remaining_secs: f64,

    /// Metres left on the current leg.
    pub leg_distance_remaining_m: f64,

    /// Seconds left on the current leg.
    pub leg_duration_remaining_secs: f64,

    /// Metres left on the whole route.
    pub distance_remaining_m: f64,

    /// Seconds left on the whole route.
    pub duration_remaining_secs: f64,

    /// Index into the current leg's annotation arrays for the segment under
    /// the agent.
    pub annotation_index: usize,

    /// The agent's position followed by the unvisited vertices of the
    /// current step.
    pub current_step_points: Vec<GeoPoint>,

    /// Geometry of the next step, empty at the final step of the route.
    pub upcoming_step_points: Vec<GeoPoint>,
}

impl RouteProgress {
    pub fn current_leg(&self) -> &Leg {
        &self.route.legs[self.leg_index]
    }

    pub fn current_step(&self) -> &Step {
        &self.current_leg().steps[self.step_index]
    }

    /// The step after the current one, crossing a leg boundary if needed.
    pub fn upcoming_step(&self) -> Option<&Step> {
        upcoming_step(&self.route, self.leg_index, self.step_index)
    }

    /// `true` when the current indices are the last step of the last leg.
    pub fn is_final_step(&self) -> bool {
        self.upcoming_step().is_none()
    }

    /// Metres driven so far, derived from the declared route distance.
    pub fn distance_traveled_m(&self) -> f64 {
        (self.route.distance_m - self.distance_remaining_m).max(0.0)
    }

    /// Completed fraction of the route in `[0, 1]`.
    pub fn fraction_traveled(&self) -> f64 {
        if self.route.distance_m <= 0.0 {
            return 1.0;
        }
        (self.distance_traveled_m() / self.route.distance_m).clamp(0.0, 1.0)
    }
}

fn upcoming_step(route: &Route, leg_index: usize, step_index: usize) -> Option<&Step> {
    let leg = &route.legs[leg_index];
    match leg.steps.get(step_index + 1) {
        Some(step) => Some(step),
        None => route.legs.get(leg_index + 1).and_then(|l| l.steps.first()),
    }
}

// ── ProgressTracker ───────────────────────────────────────────────────────────

/// Owns the `(leg_index, step_index)` state machine for one driving session.
///
/// Indices only ever move forward; replacing the route resets both to zero
/// (and with them the annotation cursor), even when the new geometry
/// coincides spatially with the old one.  All index arithmetic clamps at the
/// route end — reaching the final step is the expected terminal state, and
/// arrival itself is reported by a milestone, not by this type.
pub struct ProgressTracker {
    route: Arc<Route>,
    leg_index: usize,
    step_index: usize,
}

impl ProgressTracker {
    /// Start tracking `route` from its first step.
    ///
    /// The route must already be validated ([`Route::validate`]).
    pub fn new(route: Arc<Route>) -> Self {
        Self { route, leg_index: 0, step_index: 0 }
    }

    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    /// Current `(leg_index, step_index)`.
    pub fn indices(&self) -> (usize, usize) {
        (self.leg_index, self.step_index)
    }

    /// Install a replacement route and restart from its first step.
    pub fn replace_route(&mut self, route: Arc<Route>) {
        log::info!(
            "route replaced: {} legs, {:.0} m",
            route.legs.len(),
            route.distance_m
        );
        self.route = route;
        self.leg_index = 0;
        self.step_index = 0;
    }

    /// Process one accepted fix: snap it, advance indices where earned, and
    /// build the cycle's snapshot.
    pub fn update(
        &mut self,
        fix: &Fix,
        options: &NavigationOptions,
    ) -> (RouteProgress, SnappedPosition) {
        let mut snapped = snap_to_step(fix, self.current_step(), options.snap_to_route);
        let mut remaining = self.step_remaining_m(&snapped);

        // A fix can complete several steps at once when short steps chain
        // (e.g. a zero-length arrival step after a turn), so advance until
        // distance remains or the bearing gate holds us back.
        while remaining <= STEP_COMPLETION_EPSILON_M {
            if !self.bearing_allows_advance(fix, options) {
                break;
            }
            if !self.advance_index() {
                break; // terminal state: clamped at the final step
            }
            log::debug!(
                "advanced to leg {} step {}",
                self.leg_index,
                self.step_index
            );
            snapped = snap_to_step(fix, self.current_step(), options.snap_to_route);
            remaining = self.step_remaining_m(&snapped);
        }

        (self.build_progress(&snapped, remaining), snapped)
    }

    // ── Index advancement ─────────────────────────────────────────────────

    fn current_step(&self) -> &Step {
        &self.route.legs[self.leg_index].steps[self.step_index]
    }

    fn step_remaining_m(&self, snapped: &SnappedPosition) -> f64 {
        let length = polyline::length_m(&self.current_step().geometry);
        (length - snapped.distance_along_step_m).max(0.0)
    }

    /// Whether the fix bearing permits completing the current step.
    ///
    /// A fix without a usable bearing always advances (forced advance), as
    /// does an upcoming maneuver without a recorded heading.
    fn bearing_allows_advance(&self, fix: &Fix, options: &NavigationOptions) -> bool {
        let Some(next) = upcoming_step(&self.route, self.leg_index, self.step_index) else {
            return true; // no further step; advance_index clamps anyway
        };
        match (fix.bearing_deg, next.maneuver.bearing_after_deg) {
            (Some(fix_bearing), Some(maneuver_bearing)) => {
                bearing_diff_deg(fix_bearing, maneuver_bearing)
                    <= options.maneuver_bearing_tolerance_deg
            }
            _ => true,
        }
    }

    /// Move to the next step, rolling into the next leg when the current one
    /// is exhausted.  Returns `false` (and changes nothing) at the final step.
    fn advance_index(&mut self) -> bool {
        if self.step_index + 1 < self.route.legs[self.leg_index].steps.len() {
            self.step_index += 1;
            true
        } else if self.leg_index + 1 < self.route.legs.len() {
            self.leg_index += 1;
            self.step_index = 0;
            true
        } else {
            false
        }
    }

    // ── Snapshot assembly ─────────────────────────────────────────────────

    fn build_progress(&self, snapped: &SnappedPosition, remaining: f64) -> RouteProgress {
        let leg = &self.route.legs[self.leg_index];
        let step = &leg.steps[self.step_index];

        let geometry_length = polyline::length_m(&step.geometry);
        let step_duration_remaining_secs = if geometry_length > 0.0 {
            step.duration_secs * (remaining / geometry_length)
        } else {
            0.0
        };

        let later_steps = &leg.steps[self.step_index + 1..];
        let leg_distance_remaining_m =
            remaining + later_steps.iter().map(|s| s.distance_m).sum::<f64>();
        let leg_duration_remaining_secs = step_duration_remaining_secs
            + later_steps.iter().map(|s| s.duration_secs).sum::<f64>();

        let later_legs = &self.route.legs[self.leg_index + 1..];
        let distance_remaining_m =
            leg_distance_remaining_m + later_legs.iter().map(|l| l.distance_m).sum::<f64>();
        let duration_remaining_secs = leg_duration_remaining_secs
            + later_legs.iter().map(|l| l.duration_secs).sum::<f64>();

        // Annotation cursor: cumulative distance into the leg geometry,
        // mapped onto the leg's per-segment arrays.
        let distance_into_leg_m = leg.steps[..self.step_index]
            .iter()
            .map(|s| polyline::length_m(&s.geometry))
            .sum::<f64>()
            + snapped.distance_along_step_m;
        let annotation_index = leg.annotation.index_at_distance(distance_into_leg_m);

        let mut current_step_points = Vec::with_capacity(
            1 + step.geometry.len().saturating_sub(snapped.segment + 1),
        );
        current_step_points.push(snapped.point);
        current_step_points
            .extend_from_slice(step.geometry.get(snapped.segment + 1..).unwrap_or(&[]));

        let upcoming_step_points = upcoming_step(&self.route, self.leg_index, self.step_index)
            .map(|s| s.geometry.clone())
            .unwrap_or_default();

        RouteProgress {
            route: Arc::clone(&self.route),
            leg_index: self.leg_index,
            step_index: self.step_index,
            step_distance_remaining_m: remaining,
            step_duration_remaining_secs,
            leg_distance_remaining_m,
            leg_duration_remaining_secs,
            distance_remaining_m,
            duration_remaining_secs,
            annotation_index,
            current_step_points,
            upcoming_step_points,
        }
    }
}
