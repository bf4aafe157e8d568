//! `nav-route` — the immutable route value model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`route`]       | `Route`, `RouteOptions` — the installed driving plan      |
//! | [`leg`]         | `Leg` — waypoint-to-waypoint portion with a summary       |
//! | [`step`]        | `Step`, `Maneuver`, `Intersection`, `DrivingSide`         |
//! | [`annotation`]  | `LegAnnotation`, `Congestion` — per-segment metric arrays |
//! | [`instruction`] | `BannerInstruction`, `VoiceInstruction`                   |
//! | [`response`]    | `DirectionsResponse` + JSON decoding                      |
//! | [`error`]       | `RouteError`, `RouteResult<T>`                            |
//!
//! All types are plain immutable value structs with `serde` derives; nothing
//! here is ever mutated after construction.  The engine and session crates
//! share routes behind `Arc<Route>`.

pub mod annotation;
pub mod error;
pub mod instruction;
pub mod leg;
pub mod response;
pub mod route;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use annotation::{Congestion, LegAnnotation};
pub use error::{RouteError, RouteResult};
pub use instruction::{BannerInstruction, VoiceInstruction};
pub use leg::Leg;
pub use response::DirectionsResponse;
pub use route::{Route, RouteOptions};
pub use step::{DrivingSide, Intersection, Maneuver, Step};
