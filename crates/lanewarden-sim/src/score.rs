//! Running match tallies.
//!
//! Stored in `MatchEngine`, NOT as ECS entities.

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub hostiles_destroyed: u32,
    pub friendlies_lost: u32,
    pub elixir_spent: f64,
    pub pushes_launched: u32,
    pub defenses_triggered: u32,
}
