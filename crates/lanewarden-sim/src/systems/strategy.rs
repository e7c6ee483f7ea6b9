//! Strategy system. Advances the mode controller each tick.
//!
//! Builds an `Observation` from the ECS world, ticks the `ModeController`
//! from lanewarden-strategy, and records any transition as a match event.

use hecs::World;

use lanewarden_core::components::{Allegiance, Health, Tower};
use lanewarden_core::enums::{Mode, Side};
use lanewarden_core::events::{MatchEvent, Transition};
use lanewarden_core::types::{Position, Timestamp};
use lanewarden_core::units::{Observation, OpposingUnit, OwnUnit, ReferencePoint, UnitKind};

use lanewarden_strategy::ModeController;

use crate::score::ScoreState;

/// Snapshot the world the way the controller sees it.
pub fn build_observation(world: &World, now: Timestamp, resource_level: f64) -> Observation {
    let mut obs = Observation::at(now, resource_level);

    obs.reference_points = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (_, pos))| ReferencePoint { position: *pos })
        .collect();

    for (_entity, (kind, allegiance, pos, health)) in world
        .query::<(&UnitKind, &Allegiance, &Position, &Health)>()
        .iter()
    {
        match allegiance.side {
            Side::Hostile => obs.opposing_units.push(OpposingUnit {
                kind: kind.clone(),
                position: *pos,
                hit_points: health.hit_points,
                side: allegiance.side,
            }),
            Side::Friendly => obs.own_units.push(OwnUnit {
                kind: kind.clone(),
                side: allegiance.side,
                alive: health.hit_points > 0.0,
            }),
        }
    }

    obs
}

/// Run the controller for this tick and record the outcome.
pub fn run(
    world: &World,
    controller: &mut ModeController,
    now: Timestamp,
    resource_level: f64,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
) -> Option<Transition> {
    let obs = build_observation(world, now, resource_level);
    let transition = controller.tick_with_transition(&obs)?;

    match transition.to {
        Mode::Push => score.pushes_launched += 1,
        Mode::Defend => score.defenses_triggered += 1,
        Mode::Cycle | Mode::Counter => {}
    }
    events.push(MatchEvent::ModeChanged { transition });

    Some(transition)
}
