//! Banner and voice instruction payloads.
//!
//! Both kinds are anchored to a trigger distance measured *backwards from the
//! step end*: an instruction becomes active once the distance remaining on
//! its step drops to `distance_along_geometry_m` or below.

use serde::{Deserialize, Serialize};

/// A visual instruction to display while its anchor condition holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerInstruction {
    /// Primary display text, e.g. the upcoming road name.
    pub primary_text: String,

    /// Optional secondary line.
    #[serde(default)]
    pub secondary_text: Option<String>,

    /// Distance remaining on the step at which this banner becomes active,
    /// metres.
    pub distance_along_geometry_m: f64,
}

/// A spoken instruction to announce once when its anchor distance is crossed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceInstruction {
    /// Plain-text announcement.
    pub announcement: String,

    /// SSML variant for speech synthesizers that accept it.
    #[serde(default)]
    pub ssml_announcement: Option<String>,

    /// Distance remaining on the step at which to announce, metres.
    pub distance_along_geometry_m: f64,
}
