//! Match engine: a headless lane match driving the mode controller.
//!
//! `MatchEngine` owns the hecs ECS world, runs all systems once per tick,
//! and produces `MatchSnapshot`s. Fully deterministic for a given seed.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lanewarden_core::config::ControllerConfig;
use lanewarden_core::constants::ELIXIR_START;
use lanewarden_core::enums::Side;
use lanewarden_core::events::MatchEvent;
use lanewarden_core::state::MatchSnapshot;
use lanewarden_core::types::{Position, SimTime};
use lanewarden_core::units::UnitKind;

use lanewarden_strategy::ModeController;

use crate::elixir::ElixirPool;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::deployment::DeployPlan;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    pub controller: ControllerConfig,
    pub starting_elixir: f64,
    pub schedule: WaveSchedule,
    pub plan: DeployPlan,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            controller: ControllerConfig::default(),
            starting_elixir: ELIXIR_START,
            schedule: WaveSchedule::default_match(),
            plan: DeployPlan::default_match(),
        }
    }
}

/// The match engine. Owns the ECS world, the elixir pool and the controller.
pub struct MatchEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    elixir: ElixirPool,
    controller: ModeController,
    schedule: WaveSchedule,
    plan: DeployPlan,
    pending_deploys: VecDeque<UnitKind>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<MatchEvent>,
    score: ScoreState,
}

impl MatchEngine {
    /// Create a new match with the arena already set up.
    pub fn new(config: MatchConfig) -> Self {
        let mut world = World::new();
        world_setup::setup_arena(&mut world);

        tracing::info!(
            seed = config.seed,
            waves = config.schedule.waves.len(),
            hostiles = config.schedule.total_units(),
            "match created"
        );

        Self {
            world,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            elixir: ElixirPool::new(config.starting_elixir),
            controller: ModeController::new(config.controller, 0.0),
            schedule: config.schedule,
            plan: config.plan,
            pending_deploys: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Advance the match by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.controller,
            self.elixir.amount(),
            events,
            &self.score,
        )
    }

    /// Deploy a friendly unit outside the mode plan.
    /// Returns false (and records a skip) if elixir is short.
    pub fn deploy(&mut self, kind: &UnitKind) -> bool {
        systems::deployment::deploy(
            &mut self.world,
            &mut self.rng,
            kind,
            &mut self.elixir,
            &mut self.controller,
            &mut self.score,
            &mut self.events,
            self.time.elapsed_secs,
        )
    }

    /// Drop a hostile unit at an exact arena position.
    pub fn spawn_hostile_at(&mut self, kind: &UnitKind, position: Position) -> hecs::Entity {
        world_setup::spawn_unit(&mut self.world, kind, Side::Hostile, position)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn elixir(&self) -> f64 {
        self.elixir.amount()
    }

    /// Read-only view of the controller for telemetry.
    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn pending_deploys(&self) -> impl Iterator<Item = &UnitKind> {
        self.pending_deploys.iter()
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;
        let dt = self.time.dt();

        // 1. Hostile waves
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.schedule,
            now,
            &mut self.events,
        );
        // 2. Movement
        systems::movement::steer(&mut self.world);
        systems::movement::run(&mut self.world);
        // 3. Damage
        systems::combat::tower_fire(&mut self.world);
        systems::combat::siege_attrition(&mut self.world);
        // 4. Remove the dead before the controller looks
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.events,
            now,
        );
        // 5. Elixir
        self.elixir.regenerate(dt);
        // 6. Strategy
        let transition = systems::strategy::run(
            &self.world,
            &mut self.controller,
            now,
            self.elixir.amount(),
            &mut self.score,
            &mut self.events,
        );
        if let Some(transition) = transition {
            systems::deployment::on_mode_change(
                &self.plan,
                &mut self.pending_deploys,
                transition.to,
                now,
                &mut self.events,
            );
        }
        // 7. Deployments
        systems::deployment::run(
            &mut self.world,
            &mut self.rng,
            &mut self.pending_deploys,
            &mut self.elixir,
            &mut self.controller,
            &mut self.score,
            &mut self.events,
            now,
        );
    }
}
