//! The milestone engine — evaluation, edge tracking, and isolation.

use std::panic::{catch_unwind, AssertUnwindSafe};

use nav_engine::RouteProgress;

use crate::milestone::{Milestone, MilestoneContext, MilestoneEvent, TriggerPolicy};

struct Registered {
    milestone: Milestone,
    /// Whether the predicate held last cycle — drives `Once` edge detection.
    was_satisfied: bool,
}

/// Evaluates every registered milestone once per pipeline cycle.
///
/// Milestones fire in registration order.  A predicate that panics is
/// treated as unsatisfied for the cycle and logged; it never prevents the
/// snapshot or the other milestones from being delivered.
#[derive(Default)]
pub struct MilestoneEngine {
    registered: Vec<Registered>,
}

impl MilestoneEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from an initial milestone list, preserving order.
    pub fn with_milestones(milestones: Vec<Milestone>) -> Self {
        let mut engine = Self::new();
        for m in milestones {
            engine.register(m);
        }
        engine
    }

    pub fn register(&mut self, milestone: Milestone) {
        self.registered.push(Registered { milestone, was_satisfied: false });
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Forget all edge state (route replaced — every milestone may fire
    /// again on the new route).
    pub fn reset(&mut self) {
        for r in &mut self.registered {
            r.was_satisfied = false;
        }
    }

    /// Evaluate all milestones against the cycle's snapshot pair and return
    /// the fired events in registration order.
    pub fn check(
        &mut self,
        previous: Option<&RouteProgress>,
        current: &RouteProgress,
    ) -> Vec<MilestoneEvent> {
        let ctx = MilestoneContext { previous, current };
        let mut fired = Vec::new();

        for r in &mut self.registered {
            let satisfied = catch_unwind(AssertUnwindSafe(|| r.milestone.is_satisfied(&ctx)))
                .unwrap_or_else(|_| {
                    log::warn!("milestone {} trigger panicked; skipping", r.milestone.id);
                    false
                });

            let fires = match r.milestone.policy {
                TriggerPolicy::Once => satisfied && !r.was_satisfied,
                TriggerPolicy::Continuous => satisfied,
            };
            r.was_satisfied = satisfied;

            if fires {
                match catch_unwind(AssertUnwindSafe(|| r.milestone.build_event(current))) {
                    Ok(event) => fired.push(event),
                    Err(_) => {
                        log::warn!("milestone {} payload panicked; skipping", r.milestone.id);
                    }
                }
            }
        }
        fired
    }
}
