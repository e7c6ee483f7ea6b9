//! Strategic mode finite state machine.
//!
//! Pure functions that compute the next controller state from the current one
//! and a battlefield observation. No ECS dependency; operates on plain data.
//!
//! Rules are tried in fixed priority order and the first one that applies
//! fires; a tick performs at most one transition:
//!
//! 1. defense override (any mode but Defend)
//! 2. Defend exit
//! 3. Counter timeout
//! 4. Push initiation (from Cycle or Counter)
//! 5. Push exit

use serde::{Deserialize, Serialize};

use lanewarden_core::config::ControllerConfig;
use lanewarden_core::enums::{Mode, Side, TransitionReason};
use lanewarden_core::events::Transition;
use lanewarden_core::types::Timestamp;
use lanewarden_core::units::Observation;

use crate::threat::{has_nearby_threats, max_threat};

/// Everything the controller remembers between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerState {
    pub mode: Mode,
    /// Time of the most recent mode entry.
    pub last_mode_change_time: Timestamp,
    /// Time of the most recent Push entry. Only used for the cooldown.
    pub last_push_start_time: Timestamp,
    /// Resources committed during the current or most recent push.
    pub elixir_investment: f64,
}

impl ControllerState {
    /// Fresh state for a match starting at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            mode: Mode::Cycle,
            last_mode_change_time: start,
            last_push_start_time: start,
            elixir_investment: 0.0,
        }
    }

    /// Seconds since the current mode was entered.
    pub fn time_in_mode(&self, now: Timestamp) -> f64 {
        now - self.last_mode_change_time
    }

    /// Seconds since the last push was launched.
    pub fn time_since_push(&self, now: Timestamp) -> f64 {
        now - self.last_push_start_time
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Output of one FSM evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeUpdate {
    pub state: ControllerState,
    /// The rule that fired, if any.
    pub transition: Option<Transition>,
    /// Max threat computed for this observation.
    pub max_threat: f64,
}

/// Evaluate the FSM for one tick. Returns the updated state.
pub fn evaluate(
    state: &ControllerState,
    obs: &Observation,
    config: &ControllerConfig,
) -> ModeUpdate {
    let threat = max_threat(&obs.opposing_units, &obs.reference_points, &config.threat);

    let fired = evaluate_defense_override(state, threat, config)
        .or_else(|| evaluate_defend_exit(state, obs, config))
        .or_else(|| evaluate_counter_timeout(state, obs, config))
        .or_else(|| evaluate_push_entry(state, obs, config))
        .or_else(|| evaluate_push_exit(state, obs, config));

    match fired {
        Some((to, reason)) => ModeUpdate {
            state: apply(state, to, reason, obs.now),
            transition: Some(Transition {
                from: state.mode,
                to,
                reason,
                at: obs.now,
                max_threat: threat,
            }),
            max_threat: threat,
        },
        None => ModeUpdate {
            state: *state,
            transition: None,
            max_threat: threat,
        },
    }
}

fn evaluate_defense_override(
    state: &ControllerState,
    threat: f64,
    config: &ControllerConfig,
) -> Option<(Mode, TransitionReason)> {
    // Already defending: re-entry would reset the dwell clock
    if state.mode == Mode::Defend {
        return None;
    }
    if threat >= config.defend_threshold {
        return Some((Mode::Defend, TransitionReason::ThreatDetected));
    }
    None
}

fn evaluate_defend_exit(
    state: &ControllerState,
    obs: &Observation,
    config: &ControllerConfig,
) -> Option<(Mode, TransitionReason)> {
    let dwell_elapsed = state.time_in_mode(obs.now) > config.defend_min_dwell_secs;
    if state.mode != Mode::Defend || !dwell_elapsed {
        return None;
    }
    if has_nearby_threats(&obs.opposing_units, &obs.reference_points, config.nearby_radius) {
        return None;
    }
    let next = if obs.resource_level >= config.counter_resource_threshold {
        Mode::Counter
    } else {
        Mode::Cycle
    };
    Some((next, TransitionReason::ThreatsCleared))
}

fn evaluate_counter_timeout(
    state: &ControllerState,
    obs: &Observation,
    config: &ControllerConfig,
) -> Option<(Mode, TransitionReason)> {
    if state.mode == Mode::Counter
        && state.time_in_mode(obs.now) > config.counter_timeout_secs
    {
        return Some((Mode::Cycle, TransitionReason::CounterExpired));
    }
    None
}

fn evaluate_push_entry(
    state: &ControllerState,
    obs: &Observation,
    config: &ControllerConfig,
) -> Option<(Mode, TransitionReason)> {
    if !matches!(state.mode, Mode::Cycle | Mode::Counter) {
        return None;
    }
    let cooled_down = state.time_since_push(obs.now) >= config.push_cooldown_secs;
    if cooled_down && obs.resource_level >= config.push_resource_threshold {
        return Some((Mode::Push, TransitionReason::PushLaunched));
    }
    None
}

fn evaluate_push_exit(
    state: &ControllerState,
    obs: &Observation,
    config: &ControllerConfig,
) -> Option<(Mode, TransitionReason)> {
    let committed = state.time_since_push(obs.now) > config.push_min_duration_secs;
    if state.mode != Mode::Push || !committed {
        return None;
    }
    let push_force_alive = obs.own_units.iter().any(|unit| {
        unit.alive && unit.side == Side::Friendly && config.is_push_archetype(&unit.kind)
    });
    if push_force_alive {
        return None;
    }
    Some((Mode::Cycle, TransitionReason::PushSpent))
}

/// Apply the entry side effects of a transition.
fn apply(
    state: &ControllerState,
    to: Mode,
    reason: TransitionReason,
    now: Timestamp,
) -> ControllerState {
    // Never move a timestamp backwards, even if the caller's clock does
    let stamp = |previous: Timestamp| now.max(previous);

    let mut next = ControllerState {
        mode: to,
        last_mode_change_time: stamp(state.last_mode_change_time),
        ..*state
    };

    match reason {
        TransitionReason::PushLaunched => {
            next.last_push_start_time = stamp(state.last_push_start_time);
            next.elixir_investment = 0.0;
        }
        TransitionReason::PushSpent => {
            next.elixir_investment = 0.0;
        }
        TransitionReason::ThreatDetected
        | TransitionReason::ThreatsCleared
        | TransitionReason::CounterExpired => {}
    }

    next
}
