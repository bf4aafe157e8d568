//! Unit tests for milestones and the milestone engine.

use std::sync::Arc;

use nav_core::{Fix, GeoPoint, NavigationOptions};
use nav_engine::{ProgressTracker, RouteProgress};
use nav_route::{
    BannerInstruction, DrivingSide, Leg, LegAnnotation, Maneuver, Route, RouteOptions, Step,
    VoiceInstruction,
};

use crate::{
    Milestone, MilestoneEngine, MilestoneId, TriggerPolicy, ARRIVAL_MILESTONE_ID,
    BANNER_INSTRUCTION_MILESTONE_ID, VOICE_INSTRUCTION_MILESTONE_ID,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn step(from_lon: f64, to_lon: f64, kind: &str) -> Step {
    let geometry = vec![GeoPoint::new(0.0, from_lon), GeoPoint::new(0.0, to_lon)];
    let distance_m = nav_core::polyline::length_m(&geometry);
    Step {
        maneuver: Maneuver {
            kind: kind.into(),
            modifier: None,
            roundabout_angle_deg: None,
            location: GeoPoint::new(0.0, from_lon),
            bearing_after_deg: None,
        },
        geometry,
        intersections: vec![],
        distance_m,
        duration_secs: distance_m / 10.0,
        driving_side: DrivingSide::Right,
        banner_instructions: vec![],
        voice_instructions: vec![],
    }
}

/// One leg of two ~1.1 km steps; the first step announces at 300 m and 80 m
/// before its end and carries a full-length banner.
fn instrumented_route() -> Arc<Route> {
    let mut s1 = step(0.00, 0.01, "depart");
    s1.voice_instructions = vec![
        VoiceInstruction {
            announcement: "In 300 meters, turn right".into(),
            ssml_announcement: None,
            distance_along_geometry_m: 300.0,
        },
        VoiceInstruction {
            announcement: "Turn right".into(),
            ssml_announcement: None,
            distance_along_geometry_m: 80.0,
        },
    ];
    s1.banner_instructions = vec![BannerInstruction {
        primary_text: "Turn right onto 5th Ave".into(),
        secondary_text: None,
        distance_along_geometry_m: f64::MAX,
    }];
    let s2 = step(0.01, 0.02, "arrive");

    let distance_m = s1.distance_m + s2.distance_m;
    let duration_secs = s1.duration_secs + s2.duration_secs;
    Arc::new(Route {
        legs: vec![Leg {
            steps: vec![s1, s2],
            summary: "Main St".into(),
            annotation: LegAnnotation::empty(),
            distance_m,
            duration_secs,
        }],
        distance_m,
        duration_secs,
        options: RouteOptions::default(),
    })
}

fn progress_at(tracker: &mut ProgressTracker, lon: f64, t_ms: i64) -> RouteProgress {
    let options = NavigationOptions::default();
    let (progress, _) = tracker.update(&Fix::new(GeoPoint::new(0.0, lon), t_ms), &options);
    progress
}

// ── Firing policies ───────────────────────────────────────────────────────────

#[cfg(test)]
mod policies {
    use super::*;

    #[test]
    fn once_is_edge_triggered() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        // Fires while remaining < 500 m on step 0.
        engine.register(Milestone::new(MilestoneId(10), TriggerPolicy::Once, |ctx| {
            ctx.current.step_index == 0 && ctx.current.step_distance_remaining_m < 500.0
        }));

        let p1 = progress_at(&mut tracker, 0.002, 1); // remaining ~890 m
        assert!(engine.check(None, &p1).is_empty());

        let p2 = progress_at(&mut tracker, 0.007, 2); // remaining ~334 m
        let fired = engine.check(Some(&p1), &p2);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, MilestoneId(10));

        // Still satisfied: must not fire again.
        let p3 = progress_at(&mut tracker, 0.008, 3);
        assert!(engine.check(Some(&p2), &p3).is_empty());
    }

    #[test]
    fn once_rearms_after_predicate_clears() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        // Satisfied near the end of whichever step is current.
        engine.register(Milestone::new(MilestoneId(11), TriggerPolicy::Once, |ctx| {
            ctx.current.step_distance_remaining_m < 500.0
        }));

        let p1 = progress_at(&mut tracker, 0.007, 1); // step 0, remaining ~334
        assert_eq!(engine.check(None, &p1).len(), 1);

        let p2 = progress_at(&mut tracker, 0.011, 2); // step 1, remaining ~1000
        assert!(engine.check(Some(&p1), &p2).is_empty()); // cleared

        let p3 = progress_at(&mut tracker, 0.017, 3); // step 1, remaining ~334
        assert_eq!(engine.check(Some(&p2), &p3).len(), 1); // re-armed edge
    }

    #[test]
    fn continuous_fires_every_satisfying_cycle() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        engine.register(Milestone::new(
            MilestoneId(12),
            TriggerPolicy::Continuous,
            |ctx| ctx.current.step_index == 0,
        ));

        let p1 = progress_at(&mut tracker, 0.001, 1);
        let p2 = progress_at(&mut tracker, 0.002, 2);
        assert_eq!(engine.check(None, &p1).len(), 1);
        assert_eq!(engine.check(Some(&p1), &p2).len(), 1);
    }

    #[test]
    fn fired_events_keep_registration_order() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        engine.register(Milestone::new(MilestoneId(20), TriggerPolicy::Continuous, |_| true));
        engine.register(Milestone::new(MilestoneId(21), TriggerPolicy::Continuous, |_| true));
        engine.register(Milestone::new(MilestoneId(22), TriggerPolicy::Continuous, |_| true));

        let p = progress_at(&mut tracker, 0.001, 1);
        let ids: Vec<_> = engine.check(None, &p).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![MilestoneId(20), MilestoneId(21), MilestoneId(22)]);
    }

    #[test]
    fn panicking_trigger_is_isolated() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        engine.register(Milestone::new(MilestoneId(30), TriggerPolicy::Continuous, |_| {
            panic!("bad predicate")
        }));
        engine.register(Milestone::new(MilestoneId(31), TriggerPolicy::Continuous, |_| true));

        let p = progress_at(&mut tracker, 0.001, 1);
        let fired = engine.check(None, &p);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, MilestoneId(31));
    }

    #[test]
    fn reset_rearms_once_milestones() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        engine.register(Milestone::new(MilestoneId(40), TriggerPolicy::Once, |_| true));

        let p1 = progress_at(&mut tracker, 0.001, 1);
        assert_eq!(engine.check(None, &p1).len(), 1);

        // Route replaced: edge state cleared, the milestone may fire again.
        engine.reset();
        let p2 = progress_at(&mut tracker, 0.002, 2);
        assert_eq!(engine.check(None, &p2).len(), 1);
    }
}

// ── Built-in milestones ───────────────────────────────────────────────────────

#[cfg(test)]
mod builtins {
    use super::*;

    #[test]
    fn voice_fires_per_anchor_with_announcement() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        engine.register(Milestone::voice_instruction(VOICE_INSTRUCTION_MILESTONE_ID));

        // Before the 300 m anchor: quiet.
        let p1 = progress_at(&mut tracker, 0.005, 1); // remaining ~556
        assert!(engine.check(None, &p1).is_empty());

        // Crossing the 300 m anchor: the far announcement.
        let p2 = progress_at(&mut tracker, 0.008, 2); // remaining ~222
        let fired = engine.check(Some(&p1), &p2);
        assert_eq!(fired.len(), 1);
        assert_eq!(
            fired[0].instruction.as_deref(),
            Some("In 300 meters, turn right")
        );

        // Deeper in, the 80 m anchor becomes the active one — but the
        // predicate never cleared, so the Once policy holds it.
        let p3 = progress_at(&mut tracker, 0.0095, 3); // remaining ~56
        assert!(engine.check(Some(&p2), &p3).is_empty());
    }

    #[test]
    fn banner_fires_continuously_with_text() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        engine.register(Milestone::banner_instruction(BANNER_INSTRUCTION_MILESTONE_ID));

        for (i, lon) in [0.002, 0.004, 0.006].iter().enumerate() {
            let p = progress_at(&mut tracker, *lon, i as i64 + 1);
            let fired = engine.check(None, &p);
            assert_eq!(fired.len(), 1, "cycle {i}");
            assert_eq!(
                fired[0].instruction.as_deref(),
                Some("Turn right onto 5th Ave")
            );
        }
    }

    #[test]
    fn arrival_fires_once_inside_radius_on_final_step() {
        let route = instrumented_route();
        let mut tracker = ProgressTracker::new(route);
        let mut engine = MilestoneEngine::new();
        engine.register(Milestone::arrival(ARRIVAL_MILESTONE_ID, 40.0));

        // Final step but still 500+ m out: quiet.
        let p1 = progress_at(&mut tracker, 0.015, 1);
        assert!(engine.check(None, &p1).is_empty());

        // Inside 40 m of the destination.
        let p2 = progress_at(&mut tracker, 0.0197, 2);
        let fired = engine.check(Some(&p1), &p2);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, ARRIVAL_MILESTONE_ID);

        // Sitting at the destination: no repeat.
        let p3 = progress_at(&mut tracker, 0.0199, 3);
        assert!(engine.check(Some(&p2), &p3).is_empty());
    }
}
