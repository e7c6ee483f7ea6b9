//! Headless match harness for LANEWARDEN.
//!
//! Owns a hecs ECS world for one lane match, runs systems at a fixed tick
//! rate, feeds the mode controller, and produces MatchSnapshots.

pub mod elixir;
pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{MatchConfig, MatchEngine};
pub use lanewarden_core as core;

#[cfg(test)]
mod tests;
