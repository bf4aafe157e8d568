//! `nav-core` — foundational types for the `rust_nav` navigation core.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance, bearings              |
//! | [`polyline`] | Projection of a point onto a polyline                 |
//! | [`fix`]      | `Fix` — a raw position fix from a location source     |
//! | [`options`]  | `NavigationOptions` — per-session configuration       |
//! | [`error`]    | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `nav-route`.                                   |

pub mod error;
pub mod fix;
pub mod geo;
pub mod options;
pub mod polyline;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use fix::Fix;
pub use geo::GeoPoint;
pub use options::NavigationOptions;
pub use polyline::Projection;
