//! The `NavigationSession` handle, its builder, and the worker loop.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use nav_core::{Fix, NavigationOptions};
use nav_engine::{
    best_continuation, FasterRouteDetector, FixValidator, OffRouteDetector, ProgressTracker,
    RouteProgress,
};
use nav_milestone::{default_milestones, Milestone, MilestoneEngine};
use nav_route::{DirectionsResponse, Route};

use crate::call_status::RouteCallStatus;
use crate::listener::NavigationListener;
use crate::{SessionError, SessionResult};

/// Listeners cross onto the worker thread, so they must be `Send`.
pub type BoxedListener = Box<dyn NavigationListener + Send>;

// ── Commands ──────────────────────────────────────────────────────────────────

/// Work items on the session FIFO.  Every externally visible state change
/// travels through here, which is what gives the ordering guarantee.
enum Command {
    Fix(Fix),
    ReplaceRoute(Route),
    RerouteResponse(DirectionsResponse),
    Stop,
}

// ── SessionBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for [`NavigationSession`].
///
/// # Required inputs
///
/// - the initial [`Route`] (validated on `start`)
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                         |
/// |------------------|-------------------------------------------------|
/// | `.options(o)`    | `NavigationOptions::default()`                  |
/// | `.listener(l)`   | none (progress is computed but goes nowhere)    |
/// | `.milestones(v)` | the built-in voice/banner/maneuver/arrival set  |
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionBuilder::new(route)
///     .options(options)
///     .listener(MyUiBridge::new())
///     .start()?;
/// session.update_location(fix)?;
/// ```
pub struct SessionBuilder {
    route: Route,
    options: NavigationOptions,
    listeners: Vec<BoxedListener>,
    milestones: Option<Vec<Milestone>>,
}

impl SessionBuilder {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            options: NavigationOptions::default(),
            listeners: Vec::new(),
            milestones: None,
        }
    }

    pub fn options(mut self, options: NavigationOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a listener.  Listeners are invoked in registration order.
    pub fn listener(mut self, listener: impl NavigationListener + Send + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Replace the default milestone set.
    pub fn milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = Some(milestones);
        self
    }

    /// Validate the route and spawn the worker thread.
    pub fn start(self) -> SessionResult<NavigationSession> {
        self.route.validate()?;

        let milestones = self
            .milestones
            .unwrap_or_else(|| default_milestones(self.options.maneuver_zone_radius_m));

        let (tx, rx) = mpsc::channel();
        let worker = Worker::new(self.route, self.options, self.listeners, milestones);
        let handle = thread::Builder::new()
            .name("nav-session".into())
            .spawn(move || worker.run(rx))?;

        Ok(NavigationSession { tx, worker: Some(handle) })
    }
}

// ── NavigationSession ─────────────────────────────────────────────────────────

/// Handle to a running navigation session.
///
/// All methods enqueue onto the worker FIFO and return immediately; they are
/// safe to call from any producer context.  Dropping the handle stops the
/// worker after it finishes the item in flight.
pub struct NavigationSession {
    tx: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl NavigationSession {
    /// Enqueue a raw position fix.  Invalid or stale fixes are dropped
    /// silently by the worker-side validator.
    pub fn update_location(&self, fix: Fix) -> SessionResult<()> {
        self.send(Command::Fix(fix))
    }

    /// Enqueue an explicit route replacement.  Guaranteed to apply before
    /// any location update enqueued after it.
    pub fn replace_route(&self, route: Route) -> SessionResult<()> {
        route.validate()?;
        self.send(Command::ReplaceRoute(route))
    }

    /// Enqueue a routing response from the external fetcher.
    ///
    /// While a reroute request is outstanding the response is resolved into
    /// a continuation route; otherwise it is treated as a background
    /// alternative and only feeds the faster-route detector.
    pub fn deliver_reroute_response(&self, response: DirectionsResponse) -> SessionResult<()> {
        self.send(Command::RerouteResponse(response))
    }

    /// Stop accepting new items, let the item in flight finish, and join the
    /// worker.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn send(&self, command: Command) -> SessionResult<()> {
        self.tx.send(command).map_err(|_| SessionError::Stopped)
    }

    fn shutdown(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = self.tx.send(Command::Stop);
            let _ = handle.join();
        }
    }
}

impl Drop for NavigationSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ── Worker ────────────────────────────────────────────────────────────────────

/// Owns every piece of mutable session state.  Lives entirely on the worker
/// thread; nothing here is ever touched from outside.
struct Worker {
    options: NavigationOptions,
    tracker: ProgressTracker,
    validator: FixValidator,
    off_route: OffRouteDetector,
    faster: FasterRouteDetector,
    milestones: MilestoneEngine,
    call_status: RouteCallStatus,
    listeners: Vec<BoxedListener>,
    /// Last delivered snapshot, kept for milestone edge detection.
    previous: Option<RouteProgress>,
    /// Timestamp of the last accepted fix; clocks the faster-route cadence.
    last_fix_ms: Option<i64>,
}

impl Worker {
    fn new(
        route: Route,
        options: NavigationOptions,
        listeners: Vec<BoxedListener>,
        milestones: Vec<Milestone>,
    ) -> Self {
        Self {
            tracker: ProgressTracker::new(Arc::new(route)),
            validator: FixValidator::new(),
            off_route: OffRouteDetector::new(),
            faster: FasterRouteDetector::new(),
            milestones: MilestoneEngine::with_milestones(milestones),
            call_status: RouteCallStatus::new(Duration::from_secs(
                options.route_call_timeout_secs as u64,
            )),
            listeners,
            previous: None,
            last_fix_ms: None,
            options,
        }
    }

    fn run(mut self, rx: Receiver<Command>) {
        while let Ok(command) = rx.recv() {
            match command {
                Command::Fix(fix) => self.process_fix(fix),
                Command::ReplaceRoute(route) => self.install_route(route),
                Command::RerouteResponse(response) => self.process_response(response),
                Command::Stop => break,
            }
        }
        log::debug!("navigation worker stopped");
    }

    // ── One pipeline cycle ────────────────────────────────────────────────

    fn process_fix(&mut self, fix: Fix) {
        if !self.validator.accept(&fix) {
            return;
        }
        self.last_fix_ms = Some(fix.timestamp_ms);

        let (progress, snapped) = self.tracker.update(&fix, &self.options);

        let off_route = self.off_route.is_off_route(
            &fix,
            &snapped,
            progress.current_step(),
            &self.options,
        );

        let events = self.milestones.check(self.previous.as_ref(), &progress);

        self.notify(|l| l.on_progress(&progress, &events, off_route));

        if off_route {
            let now = Instant::now();
            if self.call_status.is_routing(now) {
                log::debug!("reroute already in flight; suppressing duplicate request");
            } else {
                self.call_status.record_request(now);
                self.notify(|l| l.on_off_route(&fix));
            }
        }

        self.previous = Some(progress);
    }

    // ── Route replacement and responses ───────────────────────────────────

    fn install_route(&mut self, route: Route) {
        let route = Arc::new(route);
        self.tracker.replace_route(Arc::clone(&route));
        self.off_route.reset();
        self.faster.reset();
        self.milestones.reset();
        self.previous = None;
        self.notify(|l| l.on_route_updated(&route));
    }

    fn process_response(&mut self, response: DirectionsResponse) {
        let routing = self.call_status.is_routing(Instant::now());

        let routes = match response.into_routes() {
            Ok(routes) => routes,
            Err(e) => {
                if routing {
                    self.call_status.record_response();
                }
                let message = e.to_string();
                log::warn!("routing error: {message}");
                self.notify(|l| l.on_routing_error(&message));
                return;
            }
        };

        if routing {
            // The answer to our reroute request: pick the candidate that
            // best continues the trip already in progress.
            self.call_status.record_response();
            if let Some(index) = best_continuation(self.tracker.route(), &routes) {
                if let Some(route) = routes.into_iter().nth(index) {
                    self.install_route(route);
                }
            }
        } else {
            self.consider_alternative(routes);
        }
    }

    /// A response that nobody asked for: a background alternative.  It never
    /// replaces the route; at most it raises a faster-route event.
    fn consider_alternative(&mut self, routes: Vec<Route>) {
        let Some(now_ms) = self.last_fix_ms else {
            return; // no fix processed yet, remaining duration unknown
        };
        if !self.faster.should_check(now_ms, &self.options) {
            return;
        }
        let Some(progress) = self.previous.as_ref() else {
            return;
        };
        let candidate = routes
            .iter()
            .min_by(|a, b| a.duration_secs.total_cmp(&b.duration_secs));
        if let Some(candidate) = candidate {
            if self.faster.is_faster(candidate, progress, &self.options) {
                log::info!(
                    "faster route available: saves {:.0} s",
                    progress.duration_remaining_secs - candidate.duration_secs
                );
                self.notify(|l| l.on_faster_route(candidate));
            }
        }
    }

    // ── Listener fan-out ──────────────────────────────────────────────────

    /// Invoke `f` on every listener in registration order, isolating panics
    /// so one failing listener cannot starve the rest.
    fn notify(&mut self, f: impl Fn(&mut dyn NavigationListener)) {
        for listener in &mut self.listeners {
            let call = AssertUnwindSafe(|| f(listener.as_mut()));
            if catch_unwind(call).is_err() {
                log::error!("navigation listener panicked; continuing with remaining listeners");
            }
        }
    }
}
