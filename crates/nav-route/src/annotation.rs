//! Per-segment leg annotations.

use serde::{Deserialize, Serialize};

/// Congestion class of one leg geometry segment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Congestion {
    #[default]
    Unknown,
    Low,
    Moderate,
    Heavy,
    Severe,
}

/// Parallel per-segment metric arrays for one leg.
///
/// All three arrays are indexed by leg geometry segment.  Segment `i` joins
/// leg geometry vertex `i` and vertex `i + 1`; the arrays are therefore one
/// shorter than the leg's concatenated geometry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegAnnotation {
    /// Segment lengths in metres.
    #[serde(default)]
    pub distance_m: Vec<f64>,

    /// Segment travel durations in seconds.
    #[serde(default)]
    pub duration_secs: Vec<f64>,

    /// Segment congestion classes.
    #[serde(default)]
    pub congestion: Vec<Congestion>,
}

impl LegAnnotation {
    /// An annotation with no segments (route requested without annotations).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.distance_m.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.distance_m.len()
    }

    /// Index of the segment containing the position `distance_along_m`
    /// metres from the leg start, clamped to the last segment.
    ///
    /// Returns 0 for empty annotations and for positions at or before the
    /// leg start.
    pub fn index_at_distance(&self, distance_along_m: f64) -> usize {
        if self.distance_m.is_empty() {
            return 0;
        }
        let mut cum = 0.0;
        for (i, d) in self.distance_m.iter().enumerate() {
            cum += d;
            if distance_along_m < cum {
                return i;
            }
        }
        self.distance_m.len() - 1
    }
}
