//! Projection of a point onto a polyline.
//!
//! # Method
//!
//! Each polyline segment is projected into a local equirectangular plane
//! centred on the segment start (metres east/north), the point is projected
//! onto the segment with the parameter clamped to `[0, 1]`, and the candidate
//! with the smallest deviation wins.  For segments of at most a few hundred
//! metres the planar error is negligible against the tolerances this system
//! works with.
//!
//! Distances *along* the polyline are accumulated with haversine so they stay
//! consistent with [`GeoPoint::distance_m`] everywhere else.

use crate::GeoPoint;

/// Metres per radian of latitude (mean Earth radius).
const M_PER_RAD: f64 = 6_371_000.0;

/// The result of projecting a point onto a polyline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Nearest point on the polyline.
    pub point: GeoPoint,
    /// Index of the segment containing `point` (segment `i` joins vertex `i`
    /// and vertex `i + 1`).
    pub segment: usize,
    /// Distance from the polyline start to `point`, along the line, metres.
    pub distance_along_m: f64,
    /// Great-circle distance from the query point to `point`, metres.
    pub deviation_m: f64,
}

/// Total length of `line` in metres.  Zero for lines with fewer than 2 points.
pub fn length_m(line: &[GeoPoint]) -> f64 {
    line.windows(2).map(|w| w[0].distance_m(w[1])).sum()
}

/// Project `point` onto `line`, returning the nearest on-line position.
///
/// Returns `None` when `line` is empty.  A single-point line projects onto
/// that point.
pub fn project(line: &[GeoPoint], point: GeoPoint) -> Option<Projection> {
    match line {
        [] => None,
        [only] => Some(Projection {
            point: *only,
            segment: 0,
            distance_along_m: 0.0,
            deviation_m: only.distance_m(point),
        }),
        _ => Some(project_multi(line, point)),
    }
}

fn project_multi(line: &[GeoPoint], point: GeoPoint) -> Projection {
    let mut best = Projection {
        point: line[0],
        segment: 0,
        distance_along_m: 0.0,
        deviation_m: f64::MAX,
    };
    // Distance along the line to the start of the current segment.
    let mut cum_m = 0.0;

    for (i, w) in line.windows(2).enumerate() {
        let (a, b) = (w[0], w[1]);
        let seg_m = a.distance_m(b);

        let (candidate, t) = project_onto_segment(a, b, point);
        let deviation = candidate.distance_m(point);

        if deviation < best.deviation_m {
            best = Projection {
                point: candidate,
                segment: i,
                distance_along_m: cum_m + t * seg_m,
                deviation_m: deviation,
            };
        }
        cum_m += seg_m;
    }
    best
}

/// Project `p` onto the segment `a → b` in a local planar frame.
///
/// Returns the clamped on-segment point and the clamped parameter `t`.
fn project_onto_segment(a: GeoPoint, b: GeoPoint, p: GeoPoint) -> (GeoPoint, f64) {
    let cos_lat = a.lat.to_radians().cos();

    // Local east/north offsets from `a`, in metres.
    let bx = (b.lon - a.lon).to_radians() * cos_lat * M_PER_RAD;
    let by = (b.lat - a.lat).to_radians() * M_PER_RAD;
    let px = (p.lon - a.lon).to_radians() * cos_lat * M_PER_RAD;
    let py = (p.lat - a.lat).to_radians() * M_PER_RAD;

    let len2 = bx * bx + by * by;
    if len2 == 0.0 {
        // Degenerate zero-length segment.
        return (a, 0.0);
    }

    let t = ((px * bx + py * by) / len2).clamp(0.0, 1.0);
    let candidate = GeoPoint {
        lat: a.lat + (b.lat - a.lat) * t,
        lon: a.lon + (b.lon - a.lon) * t,
    };
    (candidate, t)
}
