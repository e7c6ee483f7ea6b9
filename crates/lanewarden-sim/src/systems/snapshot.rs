//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use lanewarden_core::components::*;
use lanewarden_core::events::MatchEvent;
use lanewarden_core::state::*;
use lanewarden_core::types::{Position, SimTime};
use lanewarden_core::units::UnitKind;

use lanewarden_strategy::ModeController;

use crate::score::ScoreState;

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    controller: &ModeController,
    elixir: f64,
    events: Vec<MatchEvent>,
    score: &ScoreState,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        controller: ControllerView {
            mode: controller.mode(),
            elixir_investment: controller.elixir_investment(),
            last_mode_change_time: controller.last_mode_change_time(),
            last_push_start_time: controller.last_push_start_time(),
            max_threat: controller.last_max_threat(),
        },
        elixir,
        units: build_units(world),
        towers: build_towers(world),
        events,
        score: ScoreView {
            hostiles_destroyed: score.hostiles_destroyed,
            friendlies_lost: score.friendlies_lost,
            elixir_spent: score.elixir_spent,
            pushes_launched: score.pushes_launched,
            defenses_triggered: score.defenses_triggered,
        },
    }
}

fn build_units(world: &World) -> Vec<UnitView> {
    world
        .query::<(&UnitKind, &Allegiance, &Position, &Health)>()
        .iter()
        .map(|(_, (kind, allegiance, pos, health))| UnitView {
            kind: kind.clone(),
            side: allegiance.side,
            position: *pos,
            hit_points: health.hit_points,
        })
        .collect()
}

fn build_towers(world: &World) -> Vec<Position> {
    world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect()
}
