//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Simulation time in seconds since match start.
pub type Timestamp = f64;

/// 2D position on the arena floor (arena units).
/// x = across the lane, y = along the lane, toward the opposing side.
pub type Position = DVec2;

/// 2D velocity (arena units per second).
///
/// A distinct type from [`Position`] so both can be attached to one entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: Timestamp,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}

impl Velocity {
    pub const ZERO: Velocity = Velocity(DVec2::ZERO);

    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Speed magnitude (arena units per second).
    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

/// Straight-line distance between two arena points.
pub fn distance(a: Position, b: Position) -> f64 {
    a.distance(b)
}
