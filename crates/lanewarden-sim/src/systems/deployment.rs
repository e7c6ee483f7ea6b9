//! Friendly deployment system.
//!
//! Each mode has a fixed deployment plan. Entering a mode replaces the
//! pending queue with that mode's plan; queued units are placed in order as
//! soon as elixir allows. Elixir spent during Push counts toward the
//! controller's investment counter.

use std::collections::{HashMap, VecDeque};

use hecs::World;
use rand_chacha::ChaCha8Rng;

use lanewarden_core::enums::Mode;
use lanewarden_core::events::MatchEvent;
use lanewarden_core::types::Timestamp;
use lanewarden_core::units::UnitKind;

use lanewarden_strategy::ModeController;

use crate::elixir::ElixirPool;
use crate::score::ScoreState;
use crate::world_setup::{spawn_friendly, unit_stats};

/// Units to deploy upon entering each mode.
#[derive(Debug, Clone, Default)]
pub struct DeployPlan {
    pub by_mode: HashMap<Mode, Vec<UnitKind>>,
}

impl DeployPlan {
    pub fn default_match() -> Self {
        let plan = |kinds: &[&str]| kinds.iter().map(|&k| UnitKind::from(k)).collect();
        Self {
            by_mode: HashMap::from([
                (Mode::Push, plan(&["heavy-tank", "archer"])),
                (Mode::Defend, plan(&["knight"])),
                (Mode::Counter, plan(&["skirmisher"])),
                (Mode::Cycle, Vec::new()),
            ]),
        }
    }

    pub fn for_mode(&self, mode: Mode) -> &[UnitKind] {
        self.by_mode.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Replace the pending queue with the plan for `mode`.
/// Units still waiting from the previous mode are dropped.
pub fn on_mode_change(
    plan: &DeployPlan,
    pending: &mut VecDeque<UnitKind>,
    mode: Mode,
    now: Timestamp,
    events: &mut Vec<MatchEvent>,
) {
    for kind in pending.drain(..) {
        tracing::debug!(kind = %kind, mode = %mode, "pending deployment dropped");
        events.push(MatchEvent::DeployDropped { kind, mode, at: now });
    }
    pending.extend(plan.for_mode(mode).iter().cloned());
}

/// Deploy queued units, front first, while elixir allows.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    pending: &mut VecDeque<UnitKind>,
    elixir: &mut ElixirPool,
    controller: &mut ModeController,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
    now: Timestamp,
) {
    while let Some(cost) = pending.front().map(|kind| unit_stats(kind).cost) {
        if cost > elixir.amount() {
            break;
        }
        let Some(kind) = pending.pop_front() else {
            break;
        };
        deploy(world, rng, &kind, elixir, controller, score, events, now);
    }
}

/// Place one friendly unit if affordable. Returns whether it was placed.
#[allow(clippy::too_many_arguments)]
pub fn deploy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: &UnitKind,
    elixir: &mut ElixirPool,
    controller: &mut ModeController,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
    now: Timestamp,
) -> bool {
    let cost = unit_stats(kind).cost;
    if !elixir.try_spend(cost) {
        tracing::warn!(kind = %kind, cost, available = elixir.amount(), "not enough elixir to deploy");
        events.push(MatchEvent::DeploySkipped {
            kind: kind.clone(),
            cost,
            available: elixir.amount(),
            at: now,
        });
        return false;
    }

    spawn_friendly(world, rng, kind);
    controller.record_investment(cost);
    score.elixir_spent += cost;
    tracing::debug!(kind = %kind, cost, mode = %controller.mode(), "unit deployed");
    events.push(MatchEvent::UnitDeployed {
        kind: kind.clone(),
        cost,
        at: now,
    });
    true
}
