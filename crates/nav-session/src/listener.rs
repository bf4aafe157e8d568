//! The listener interface — the boundary to UI, voice, and telemetry.

use nav_core::Fix;
use nav_engine::RouteProgress;
use nav_milestone::MilestoneEvent;
use nav_route::Route;

/// Callbacks invoked synchronously by the session worker, once per processed
/// command, in listener registration order.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A listener that panics is isolated and
/// logged; it never prevents delivery to the remaining listeners.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl NavigationListener for ProgressPrinter {
///     fn on_progress(&mut self, p: &RouteProgress, _: &[MilestoneEvent], off: bool) {
///         println!("leg {} step {}: {:.0} m left (off route: {off})",
///                  p.leg_index, p.step_index, p.distance_remaining_m);
///     }
/// }
/// ```
pub trait NavigationListener {
    /// One pipeline cycle completed: the snapshot, the milestones fired this
    /// cycle (possibly none), and the off-route flag.
    fn on_progress(
        &mut self,
        _progress: &RouteProgress,
        _milestones: &[MilestoneEvent],
        _off_route: bool,
    ) {
    }

    /// The agent departed the route and no reroute request is outstanding —
    /// the host should fetch a replacement route now and hand the result to
    /// [`NavigationSession::deliver_reroute_response`][crate::NavigationSession::deliver_reroute_response].
    ///
    /// Fired at most once per call-status window (duplicates are suppressed
    /// while a request is outstanding).
    fn on_off_route(&mut self, _fix: &Fix) {}

    /// A replacement route was installed — either explicitly or as the
    /// chosen continuation of a reroute response.
    fn on_route_updated(&mut self, _route: &Route) {}

    /// A background alternative beats the current route's remaining
    /// duration by more than the configured margin.  Switching to it is the
    /// host's decision.
    fn on_faster_route(&mut self, _route: &Route) {}

    /// A reroute response could not be used (no routes, invalid candidate).
    /// Non-fatal: the currently driven route is retained.
    fn on_routing_error(&mut self, _message: &str) {}
}

/// A [`NavigationListener`] that ignores everything.  Useful as a
/// placeholder in tests.
pub struct NoopListener;

impl NavigationListener for NoopListener {}
