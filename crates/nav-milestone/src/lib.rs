//! `nav-milestone` — triggerable conditions over route progress.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`milestone`] | `Milestone`, `MilestoneId`, `TriggerPolicy`, built-ins   |
//! | [`engine`]    | `MilestoneEngine` — edge tracking and isolated dispatch  |
//!
//! # Firing model
//!
//! A milestone is a predicate over `(previous snapshot, new snapshot)` plus a
//! firing policy.  `Once` milestones are edge-triggered: after firing they
//! stay quiet until the predicate has been false for at least one cycle.
//! `Continuous` milestones fire on every satisfying cycle.  All milestones
//! fired in one cycle are delivered together, in registration order.

pub mod engine;
pub mod milestone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::MilestoneEngine;
pub use milestone::{
    default_milestones, Milestone, MilestoneContext, MilestoneEvent, MilestoneId, TriggerPolicy,
    ARRIVAL_MILESTONE_ID, BANNER_INSTRUCTION_MILESTONE_ID, MANEUVER_ZONE_MILESTONE_ID,
    USER_MILESTONE_ID_BASE, VOICE_INSTRUCTION_MILESTONE_ID,
};
