//! ECS systems that operate on the arena world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the engine.

pub mod cleanup;
pub mod combat;
pub mod deployment;
pub mod movement;
pub mod snapshot;
pub mod strategy;
pub mod wave_spawner;
