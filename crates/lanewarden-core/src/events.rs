//! Events emitted by the controller and the match harness.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Timestamp;
use crate::units::UnitKind;

/// A single mode transition, as recorded by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
    pub reason: TransitionReason,
    pub at: Timestamp,
    /// Max threat observed on the tick that fired.
    pub max_threat: f64,
}

/// Events for telemetry consumers (replays, logs, UI feeds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// Controller changed posture.
    ModeChanged { transition: Transition },
    /// Scripted hostile wave entered the lane.
    WaveSpawned { kind: UnitKind, count: u32, at: Timestamp },
    /// Friendly unit placed; elixir spent.
    UnitDeployed { kind: UnitKind, cost: f64, at: Timestamp },
    /// Deployment attempted without enough elixir.
    DeploySkipped {
        kind: UnitKind,
        cost: f64,
        available: f64,
        at: Timestamp,
    },
    /// Queued deployment discarded because the controller entered `mode`.
    DeployDropped { kind: UnitKind, mode: Mode, at: Timestamp },
    /// Unit reached zero hit points.
    UnitDestroyed { kind: UnitKind, side: Side, at: Timestamp },
}
