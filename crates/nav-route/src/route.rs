//! The `Route` — an installed multi-leg driving plan.

use nav_core::{NavError, NavResult};
use serde::{Deserialize, Serialize};

use crate::Leg;

/// Free-form routing options echoed back by the routing service.
///
/// The core carries these through unchanged so that a reroute request can be
/// issued with the same language, units, and profile the trip started with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub voice_units: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
}

/// A complete route as returned by the routing service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Legs in driving order, one per waypoint pair.
    pub legs: Vec<Leg>,

    /// Total route distance in metres.
    pub distance_m: f64,

    /// Total route duration in seconds.
    pub duration_secs: f64,

    /// Options the route was requested with, carried through unchanged.
    #[serde(default)]
    pub options: RouteOptions,
}

impl Route {
    /// Check the structural invariants the engine relies on: at least one
    /// leg, at least one step per leg, and a non-empty geometry per step.
    pub fn validate(&self) -> NavResult<()> {
        if self.legs.is_empty() {
            return Err(NavError::EmptyRoute);
        }
        for (l, leg) in self.legs.iter().enumerate() {
            if leg.steps.is_empty() {
                return Err(NavError::EmptyLeg(l));
            }
            for (s, step) in leg.steps.iter().enumerate() {
                if step.geometry.is_empty() {
                    return Err(NavError::EmptyStepGeometry { leg: l, step: s });
                }
            }
        }
        Ok(())
    }

    /// Concatenated per-leg summaries, the comparator's matching key.
    ///
    /// Summaries are stable human-readable road-name descriptions, which
    /// makes them a cheap proxy for "the same road plan".
    pub fn leg_summary(&self) -> String {
        self.legs
            .iter()
            .map(|leg| leg.summary.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}
