//! Stateful wrapper around the mode FSM.
//!
//! One `ModeController` per match. It is the sole writer of its
//! [`ControllerState`]; callers advance it once per simulation tick and read
//! the telemetry accessors in between.

use lanewarden_core::config::ControllerConfig;
use lanewarden_core::enums::Mode;
use lanewarden_core::events::Transition;
use lanewarden_core::types::Timestamp;
use lanewarden_core::units::Observation;

use crate::fsm::{evaluate, ControllerState};

#[derive(Debug, Clone)]
pub struct ModeController {
    state: ControllerState,
    config: ControllerConfig,
    last_max_threat: f64,
}

impl ModeController {
    /// Controller for a match starting at `start`, in Cycle.
    pub fn new(config: ControllerConfig, start: Timestamp) -> Self {
        Self::from_state(config, ControllerState::new(start))
    }

    /// Resume from a previously captured state.
    pub fn from_state(config: ControllerConfig, state: ControllerState) -> Self {
        Self {
            state,
            config,
            last_max_threat: 0.0,
        }
    }

    /// Advance by exactly one evaluation and return the active mode.
    pub fn tick(&mut self, obs: &Observation) -> Mode {
        self.tick_with_transition(obs);
        self.state.mode
    }

    /// Like [`tick`](Self::tick), but report the transition that fired.
    pub fn tick_with_transition(&mut self, obs: &Observation) -> Option<Transition> {
        let update = evaluate(&self.state, obs, &self.config);
        self.state = update.state;
        self.last_max_threat = update.max_threat;

        tracing::debug!(
            now = obs.now,
            mode = %self.state.mode,
            max_threat = update.max_threat,
            hostiles = obs.opposing_units.len(),
            resources = obs.resource_level,
            "strategy tick"
        );

        if let Some(transition) = update.transition {
            tracing::info!(
                from = %transition.from,
                to = %transition.to,
                reason = %transition.reason,
                at = transition.at,
                max_threat = transition.max_threat,
                "mode change"
            );
        }

        update.transition
    }

    /// Count resources spent while pushing toward the investment counter.
    ///
    /// Ignored outside Push and for amounts that are not finite and positive.
    pub fn record_investment(&mut self, amount: f64) {
        if self.state.mode != Mode::Push {
            return;
        }
        if !amount.is_finite() || amount <= 0.0 {
            tracing::warn!(amount, "ignoring invalid push investment");
            return;
        }
        self.state.elixir_investment += amount;
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn elixir_investment(&self) -> f64 {
        self.state.elixir_investment
    }

    pub fn last_mode_change_time(&self) -> Timestamp {
        self.state.last_mode_change_time
    }

    pub fn last_push_start_time(&self) -> Timestamp {
        self.state.last_push_start_time
    }

    /// Max threat seen on the most recent tick.
    pub fn last_max_threat(&self) -> f64 {
        self.last_max_threat
    }

    /// Copy of the full state, e.g. for persistence.
    pub fn state(&self) -> ControllerState {
        self.state
    }
}
