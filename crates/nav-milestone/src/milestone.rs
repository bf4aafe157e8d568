//! Milestone identity, policy, triggers, and the built-in set.

use std::fmt;

use nav_engine::RouteProgress;

// ── Identity ──────────────────────────────────────────────────────────────────

/// Identity of a registered milestone.
///
/// The inner integer is `pub` for direct use; the built-in constructors use
/// the `*_MILESTONE_ID` constants below, applications register their own IDs
/// above `USER_MILESTONE_ID_BASE`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct MilestoneId(pub u32);

pub const VOICE_INSTRUCTION_MILESTONE_ID: MilestoneId = MilestoneId(1);
pub const BANNER_INSTRUCTION_MILESTONE_ID: MilestoneId = MilestoneId(2);
pub const MANEUVER_ZONE_MILESTONE_ID: MilestoneId = MilestoneId(3);
pub const ARRIVAL_MILESTONE_ID: MilestoneId = MilestoneId(4);

/// First ID value reserved for application-defined milestones.
pub const USER_MILESTONE_ID_BASE: u32 = 1_000;

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MilestoneId({})", self.0)
    }
}

// ── Policy and context ────────────────────────────────────────────────────────

/// How often a milestone may fire while its predicate holds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TriggerPolicy {
    /// Fire on the false→true transition only; re-arm after the predicate
    /// has been false again (voice-style milestones).
    Once,
    /// Fire on every cycle the predicate holds (banner-style milestones
    /// that need fresh payloads while the condition remains true).
    Continuous,
}

/// The pair of snapshots a trigger predicate sees.
///
/// `previous` is `None` on the first cycle of a session and immediately
/// after a route replacement.
pub struct MilestoneContext<'a> {
    pub previous: Option<&'a RouteProgress>,
    pub current: &'a RouteProgress,
}

/// What a fired milestone delivers to listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct MilestoneEvent {
    pub id: MilestoneId,
    /// Payload text (announcement or banner), when the milestone carries one.
    pub instruction: Option<String>,
}

// ── Milestone ─────────────────────────────────────────────────────────────────

type TriggerFn = Box<dyn Fn(&MilestoneContext<'_>) -> bool + Send>;
type InstructionFn = Box<dyn Fn(&RouteProgress) -> Option<String> + Send>;

/// A named, triggerable condition over route progress.
pub struct Milestone {
    pub id: MilestoneId,
    pub policy: TriggerPolicy,
    trigger: TriggerFn,
    instruction: Option<InstructionFn>,
}

impl Milestone {
    /// A milestone from a bare predicate, no payload.
    pub fn new(
        id: MilestoneId,
        policy: TriggerPolicy,
        trigger: impl Fn(&MilestoneContext<'_>) -> bool + Send + 'static,
    ) -> Self {
        Self { id, policy, trigger: Box::new(trigger), instruction: None }
    }

    /// Attach a payload function evaluated when the milestone fires.
    pub fn with_instruction(
        mut self,
        instruction: impl Fn(&RouteProgress) -> Option<String> + Send + 'static,
    ) -> Self {
        self.instruction = Some(Box::new(instruction));
        self
    }

    /// Evaluate the trigger predicate.
    pub(crate) fn is_satisfied(&self, ctx: &MilestoneContext<'_>) -> bool {
        (self.trigger)(ctx)
    }

    /// Evaluate the payload function against the firing snapshot.
    pub(crate) fn build_event(&self, current: &RouteProgress) -> MilestoneEvent {
        MilestoneEvent {
            id: self.id,
            instruction: self.instruction.as_ref().and_then(|f| f(current)),
        }
    }

    // ── Built-ins ─────────────────────────────────────────────────────────

    /// Fires once when the agent enters the maneuver zone of the current
    /// step's end ("announce maneuver now").
    pub fn maneuver_zone(id: MilestoneId, radius_m: f64) -> Self {
        Self::new(id, TriggerPolicy::Once, move |ctx| {
            !ctx.current.is_final_step()
                && ctx.current.step_distance_remaining_m <= radius_m
        })
    }

    /// Fires once when the final step's remaining distance drops inside
    /// `radius_m` — the session's "arrived" signal.
    pub fn arrival(id: MilestoneId, radius_m: f64) -> Self {
        Self::new(id, TriggerPolicy::Once, move |ctx| {
            ctx.current.is_final_step()
                && ctx.current.step_distance_remaining_m <= radius_m
        })
    }

    /// Fires once per voice-instruction anchor crossed on the current step,
    /// delivering the most recently crossed announcement.
    pub fn voice_instruction(id: MilestoneId) -> Self {
        Self::new(id, TriggerPolicy::Once, |ctx| {
            active_voice(ctx.current).is_some()
        })
        .with_instruction(|progress| {
            active_voice(progress).map(|v| v.announcement.clone())
        })
    }

    /// Fires continuously while a banner anchor is active, delivering the
    /// banner's primary text each cycle.
    pub fn banner_instruction(id: MilestoneId) -> Self {
        Self::new(id, TriggerPolicy::Continuous, |ctx| {
            active_banner(ctx.current).is_some()
        })
        .with_instruction(|progress| {
            active_banner(progress).map(|b| b.primary_text.clone())
        })
    }
}

impl fmt::Debug for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Milestone")
            .field("id", &self.id)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// The default milestone set a session starts with.
pub fn default_milestones(maneuver_zone_radius_m: f64) -> Vec<Milestone> {
    vec![
        Milestone::voice_instruction(VOICE_INSTRUCTION_MILESTONE_ID),
        Milestone::banner_instruction(BANNER_INSTRUCTION_MILESTONE_ID),
        Milestone::maneuver_zone(MANEUVER_ZONE_MILESTONE_ID, maneuver_zone_radius_m),
        Milestone::arrival(ARRIVAL_MILESTONE_ID, maneuver_zone_radius_m),
    ]
}

// ── Instruction anchors ───────────────────────────────────────────────────────

/// The most recently crossed voice instruction on the current step: the one
/// with the smallest anchor distance at or above the remaining distance.
fn active_voice(progress: &RouteProgress) -> Option<&nav_route::VoiceInstruction> {
    let remaining = progress.step_distance_remaining_m;
    progress
        .current_step()
        .voice_instructions
        .iter()
        .filter(|v| v.distance_along_geometry_m >= remaining)
        .min_by(|a, b| a.distance_along_geometry_m.total_cmp(&b.distance_along_geometry_m))
}

/// The banner whose anchor currently covers the agent, by the same rule.
fn active_banner(progress: &RouteProgress) -> Option<&nav_route::BannerInstruction> {
    let remaining = progress.step_distance_remaining_m;
    progress
        .current_step()
        .banner_instructions
        .iter()
        .filter(|b| b.distance_along_geometry_m >= remaining)
        .min_by(|a, b| a.distance_along_geometry_m.total_cmp(&b.distance_along_geometry_m))
}
