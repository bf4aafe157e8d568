//! Tracking of outstanding reroute requests.

use std::time::{Duration, Instant};

/// Debounce guard for reroute requests.
///
/// `is_routing` is `true` from the moment a request is recorded until either
/// a response is recorded or the timeout elapses (the request is then
/// presumed lost and a new one may be issued).  All methods take an explicit
/// `now` so the guard is testable without sleeping.
#[derive(Debug)]
pub struct RouteCallStatus {
    issued_at: Option<Instant>,
    timeout: Duration,
}

impl RouteCallStatus {
    pub fn new(timeout: Duration) -> Self {
        Self { issued_at: None, timeout }
    }

    /// Record that a reroute request was issued at `now`.
    pub fn record_request(&mut self, now: Instant) {
        self.issued_at = Some(now);
    }

    /// Record that a response (success or error) arrived for the
    /// outstanding request.
    pub fn record_response(&mut self) {
        self.issued_at = None;
    }

    /// `true` while a request issued less than `timeout` ago has no
    /// recorded response.
    pub fn is_routing(&self, now: Instant) -> bool {
        match self.issued_at {
            Some(issued) => now.duration_since(issued) < self.timeout,
            None => false,
        }
    }
}
