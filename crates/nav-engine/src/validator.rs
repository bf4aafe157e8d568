//! Fix validation — the pipeline's entry gate.

use nav_core::Fix;

/// Rejects fixes that must not enter the pipeline: non-finite coordinates
/// and timestamps that are not strictly newer than the last accepted fix.
///
/// Rejected fixes are dropped silently (logged at debug level, never
/// surfaced as errors).
#[derive(Debug, Default)]
pub struct FixValidator {
    last_timestamp_ms: Option<i64>,
}

impl FixValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `fix` may be processed.  Accepting a fix records its
    /// timestamp as the new staleness floor.
    pub fn accept(&mut self, fix: &Fix) -> bool {
        if !fix.point.is_finite() {
            log::debug!("dropping fix with non-finite coordinates");
            return false;
        }
        if let Some(last) = self.last_timestamp_ms {
            if fix.timestamp_ms <= last {
                log::debug!(
                    "dropping stale fix ({} ms <= {} ms)",
                    fix.timestamp_ms,
                    last
                );
                return false;
            }
        }
        self.last_timestamp_ms = Some(fix.timestamp_ms);
        true
    }

    /// Forget the staleness floor (new session).
    pub fn reset(&mut self) {
        self.last_timestamp_ms = None;
    }
}
