//! Faster-route detection over background alternatives.
//!
//! The detector never switches routes itself — it only decides whether a
//! delivered alternative is worth surfacing.  Switching is a caller decision.

use nav_core::NavigationOptions;
use nav_route::Route;

use crate::progress::RouteProgress;

/// Cadence gate plus duration comparison for alternative routes.
#[derive(Debug, Default)]
pub struct FasterRouteDetector {
    last_check_ms: Option<i64>,
}

impl FasterRouteDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.last_check_ms = None;
    }

    /// `true` when an alternative arriving at `now_ms` should be evaluated.
    ///
    /// Returns `false` when faster-route detection is disabled or a check
    /// ran less than `faster_route_check_interval_secs` ago.  A `true`
    /// result records the check time.
    pub fn should_check(&mut self, now_ms: i64, options: &NavigationOptions) -> bool {
        if !options.enable_faster_route_detection {
            return false;
        }
        let interval_ms = options.faster_route_check_interval_secs as i64 * 1000;
        match self.last_check_ms {
            Some(last) if now_ms - last < interval_ms => false,
            _ => {
                self.last_check_ms = Some(now_ms);
                true
            }
        }
    }

    /// `true` when `candidate` beats the remaining duration of the driven
    /// route by more than the configured margin.
    pub fn is_faster(
        &self,
        candidate: &Route,
        progress: &RouteProgress,
        options: &NavigationOptions,
    ) -> bool {
        progress.duration_remaining_secs - candidate.duration_secs
            > options.faster_route_margin_secs
    }
}
