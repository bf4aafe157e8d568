//! `nav-session` — the serialized navigation pipeline.
//!
//! # Processing model
//!
//! ```text
//! location source ──┐
//! UI / host app ────┼─▶ mpsc FIFO ─▶ worker thread, one command at a time:
//! route fetcher ────┘                 ① validate fix
//!                                     ② snap onto current step
//!                                     ③ advance progress indices
//!                                     ④ off-route decision
//!                                     ⑤ milestone check
//!                                     ⑥ listener fan-out
//! ```
//!
//! A single dedicated worker owns every piece of mutable session state —
//! current route, indices, detectors, call status.  Callers only ever
//! enqueue commands, so results reach listeners in exactly the order updates
//! were enqueued and a route replacement enqueued between two location
//! updates applies before the later update is processed.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`session`]     | `NavigationSession`, `SessionBuilder`, worker loop   |
//! | [`listener`]    | `NavigationListener` trait + `NoopListener`          |
//! | [`call_status`] | `RouteCallStatus` — in-flight reroute guard          |
//! | [`error`]       | `SessionError`, `SessionResult<T>`                   |

pub mod call_status;
pub mod error;
pub mod listener;
pub mod session;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call_status::RouteCallStatus;
pub use error::{SessionError, SessionResult};
pub use listener::{NavigationListener, NoopListener};
pub use session::{BoxedListener, NavigationSession, SessionBuilder};
