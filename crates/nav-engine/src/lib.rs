//! `nav-engine` — per-fix navigation math.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`validator`]  | `FixValidator` — drops stale/invalid fixes                    |
//! | [`snap`]       | `SnappedPosition`, `snap_to_step` — fix → step geometry       |
//! | [`progress`]   | `RouteProgress` snapshot + `ProgressTracker` state machine    |
//! | [`offroute`]   | `OffRouteDetector` — tolerance + hysteresis departure logic   |
//! | [`faster`]     | `FasterRouteDetector` — cadence-gated alternative comparison  |
//! | [`comparator`] | `best_continuation` — fuzzy match of reroute candidates       |
//!
//! # Processing model
//!
//! Everything in this crate is synchronous, allocation-light geometry math
//! over one fix at a time.  All mutable state (`ProgressTracker`,
//! `FixValidator`, `OffRouteDetector`, `FasterRouteDetector`) is owned by a
//! single caller — `nav-session`'s worker thread — so no type here needs
//! interior mutability or locking.

pub mod comparator;
pub mod faster;
pub mod offroute;
pub mod progress;
pub mod snap;
pub mod validator;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use comparator::best_continuation;
pub use faster::FasterRouteDetector;
pub use offroute::OffRouteDetector;
pub use progress::{ProgressTracker, RouteProgress};
pub use snap::{snap_to_step, SnappedPosition};
pub use validator::FixValidator;
