//! Threat assessment.
//!
//! Pure functions that collapse the hostile unit list into a single danger
//! scalar, plus the proximity predicate used to release Defend. Scoring policy
//! comes from [`ThreatScoring`] so it can be tuned without touching the FSM.

use lanewarden_core::config::ThreatScoring;
use lanewarden_core::enums::Side;
use lanewarden_core::types::{distance, Position};
use lanewarden_core::units::{OpposingUnit, ReferencePoint};

/// Threat contributed by a single unit.
///
/// Base weight + hp bonus + proximity bonus summed over every tower.
pub fn unit_threat(
    unit: &OpposingUnit,
    reference_points: &[ReferencePoint],
    scoring: &ThreatScoring,
) -> f64 {
    let base = scoring.weight(&unit.kind);
    let hp = hit_point_bonus(unit.hit_points, scoring);
    let proximity: f64 = reference_points
        .iter()
        .map(|point| proximity_bonus(unit.position, point.position, scoring))
        .sum();
    base + hp + proximity
}

fn hit_point_bonus(hit_points: f64, scoring: &ThreatScoring) -> f64 {
    if hit_points > scoring.hp_high_threshold {
        scoring.hp_high_bonus
    } else if hit_points > scoring.hp_low_threshold {
        scoring.hp_low_bonus
    } else {
        0.0
    }
}

fn proximity_bonus(unit: Position, tower: Position, scoring: &ThreatScoring) -> f64 {
    let range = distance(unit, tower);
    if range < scoring.proximity_close_range {
        scoring.proximity_close_bonus
    } else if range < scoring.proximity_far_range {
        scoring.proximity_far_bonus
    } else {
        0.0
    }
}

fn hostiles(units: &[OpposingUnit]) -> impl Iterator<Item = &OpposingUnit> {
    units.iter().filter(|unit| unit.side == Side::Hostile)
}

/// Highest unit threat on the field; 0 when no hostile is present.
pub fn max_threat(
    units: &[OpposingUnit],
    reference_points: &[ReferencePoint],
    scoring: &ThreatScoring,
) -> f64 {
    hostiles(units)
        .map(|unit| unit_threat(unit, reference_points, scoring))
        .fold(0.0, f64::max)
}

/// True iff any hostile stands strictly within `radius` of any tower.
pub fn has_nearby_threats(
    units: &[OpposingUnit],
    reference_points: &[ReferencePoint],
    radius: f64,
) -> bool {
    hostiles(units).any(|unit| {
        reference_points
            .iter()
            .any(|point| distance(unit.position, point.position) < radius)
    })
}
