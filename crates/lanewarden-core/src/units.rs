//! Unit kinds and the per-tick observation handed to the controller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Side;
use crate::types::{Position, Timestamp};

/// Unit type name as used by the surrounding game (e.g. `"heavy-tank"`).
///
/// Kept as an open string so weight tables and archetype sets can be
/// configured without recompiling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitKind(String);

impl UnitKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UnitKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An enemy unit visible on the battlefield this tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpposingUnit {
    pub kind: UnitKind,
    pub position: Position,
    pub hit_points: f64,
    pub side: Side,
}

/// One of the controller's own units, used for push liveness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnUnit {
    pub kind: UnitKind,
    pub side: Side,
    pub alive: bool,
}

/// A controller-side tower used as a proximity anchor for threat scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub position: Position,
}

impl ReferencePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Position::new(x, y),
        }
    }
}

/// Read-only battlefield snapshot supplied by the caller once per tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub now: Timestamp,
    pub resource_level: f64,
    pub opposing_units: Vec<OpposingUnit>,
    pub own_units: Vec<OwnUnit>,
    pub reference_points: Vec<ReferencePoint>,
}

impl Observation {
    /// Empty battlefield at `now` with the given resources.
    pub fn at(now: Timestamp, resource_level: f64) -> Self {
        Self {
            now,
            resource_level,
            ..Default::default()
        }
    }

    pub fn with_reference_points(mut self, points: impl IntoIterator<Item = ReferencePoint>) -> Self {
        self.reference_points.extend(points);
        self
    }

    pub fn with_opposing(mut self, unit: OpposingUnit) -> Self {
        self.opposing_units.push(unit);
        self
    }

    pub fn with_own(mut self, unit: OwnUnit) -> Self {
        self.own_units.push(unit);
        self
    }
}
