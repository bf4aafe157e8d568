//! Snapping a fix onto the current step's geometry.

use nav_core::{polyline, Fix, GeoPoint};
use nav_route::Step;

/// Where a fix sits relative to the current step.
///
/// The projection is always computed when the geometry allows it — the
/// progress builder needs `distance_along_step_m` and the off-route detector
/// needs `deviation_m` whether or not snapping is enabled.  `snap_to_route`
/// only controls which point downstream *position* math uses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnappedPosition {
    /// The position handed to downstream consumers: the on-line projection
    /// when snapping applied, the raw fix otherwise.
    pub point: GeoPoint,

    /// Index of the step geometry segment containing the projection.
    pub segment: usize,

    /// Distance from the step start to the projection, along the geometry,
    /// metres.
    pub distance_along_step_m: f64,

    /// Perpendicular distance from the raw fix to the step geometry, metres.
    pub deviation_m: f64,

    /// `true` when `point` is the on-line projection.
    pub snapped: bool,
}

/// Project `fix` onto `step`'s geometry.
///
/// Falls back to the raw fix (zero progress along the step) when the
/// geometry is empty — a state [`Route::validate`][nav_route::Route::validate]
/// rejects, kept non-panicking anyway.
pub fn snap_to_step(fix: &Fix, step: &Step, snap_enabled: bool) -> SnappedPosition {
    match polyline::project(&step.geometry, fix.point) {
        Some(p) => SnappedPosition {
            point: if snap_enabled { p.point } else { fix.point },
            segment: p.segment,
            distance_along_step_m: p.distance_along_m,
            deviation_m: p.deviation_m,
            snapped: snap_enabled,
        },
        None => SnappedPosition {
            point: fix.point,
            segment: 0,
            distance_along_step_m: 0.0,
            deviation_m: 0.0,
            snapped: false,
        },
    }
}
