//! ECS components for hecs entities in the match harness.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// Remaining hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hit_points: f64,
    pub max_hit_points: f64,
}

/// Which side a unit fights for. Towers carry no allegiance component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Allegiance {
    pub side: Side,
}

/// Movement speed along the lane (arena units per second).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Speed {
    pub units_per_sec: f64,
}

/// Marks a controller-side tower (reference point for threat scoring).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower;

// UnitKind, Position and Velocity are also attached as components
// (defined in units.rs and types.rs).
