//! Match snapshot: the visible state produced by the harness after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::MatchEvent;
use crate::types::{Position, SimTime, Timestamp};
use crate::units::UnitKind;

/// Complete match state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub controller: ControllerView,
    pub elixir: f64,
    pub units: Vec<UnitView>,
    pub towers: Vec<Position>,
    pub events: Vec<MatchEvent>,
    pub score: ScoreView,
}

/// Controller telemetry exposed to other subsystems.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ControllerView {
    pub mode: Mode,
    pub elixir_investment: f64,
    pub last_mode_change_time: Timestamp,
    pub last_push_start_time: Timestamp,
    /// Max threat computed on this tick.
    pub max_threat: f64,
}

/// A unit on the arena floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub kind: UnitKind,
    pub side: Side,
    pub position: Position,
    pub hit_points: f64,
}

/// Running tallies for the match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub hostiles_destroyed: u32,
    pub friendlies_lost: u32,
    pub elixir_spent: f64,
    pub pushes_launched: u32,
    pub defenses_triggered: u32,
}
