//! Enumeration types used throughout the controller and harness.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strategic posture of the automated opponent. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Idle rotation: spend cheaply, bank resources.
    #[default]
    Cycle,
    /// Hold the line against a dangerous incursion.
    Defend,
    /// Punish the opponent right after a successful defense.
    Counter,
    /// Committed offensive with heavy units.
    Push,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Cycle, Mode::Defend, Mode::Counter, Mode::Push];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cycle => "cycle",
            Mode::Defend => "defend",
            Mode::Counter => "counter",
            Mode::Push => "push",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allegiance of a unit relative to the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Owned by the controller.
    Friendly,
    /// Owned by the opponent.
    #[default]
    Hostile,
}

/// Why the controller changed mode on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionReason {
    /// Max threat reached the defense threshold.
    ThreatDetected,
    /// Defend dwell elapsed and no hostile remains near a tower.
    ThreatsCleared,
    /// Counter window ran out.
    CounterExpired,
    /// Cooldown elapsed with enough resources banked.
    PushLaunched,
    /// Push commitment elapsed and every push unit is gone.
    PushSpent,
}

impl fmt::Display for TransitionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransitionReason::ThreatDetected => "threat detected",
            TransitionReason::ThreatsCleared => "threats cleared",
            TransitionReason::CounterExpired => "counter expired",
            TransitionReason::PushLaunched => "push launched",
            TransitionReason::PushSpent => "push spent",
        };
        f.write_str(s)
    }
}
