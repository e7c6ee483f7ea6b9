//! Entity spawn factories for setting up the arena.
//!
//! Creates towers and unit entities with the appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lanewarden_core::components::*;
use lanewarden_core::constants::*;
use lanewarden_core::enums::Side;
use lanewarden_core::types::{Position, Velocity};
use lanewarden_core::units::UnitKind;

/// Per-kind unit stats used by the harness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStats {
    pub hit_points: f64,
    pub speed: f64,
    pub cost: f64,
}

/// Friendly units enter the lane at this depth.
const FRIENDLY_SPAWN_Y: f64 = 60.0;

/// Lateral spread of spawn positions.
const SPAWN_JITTER_X: f64 = 100.0;

/// Set up the arena: the controller's towers.
pub fn setup_arena(world: &mut World) {
    for (x, y) in TOWER_POSITIONS {
        world.spawn((Tower, Position::new(x, y)));
    }
}

/// Spawn a hostile unit at the far end of the lane.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: &UnitKind,
) -> hecs::Entity {
    let x: f64 = rng.gen_range(-SPAWN_JITTER_X..SPAWN_JITTER_X);
    spawn_unit(world, kind, Side::Hostile, Position::new(x, LANE_LENGTH))
}

/// Spawn a friendly unit just in front of the king tower.
pub fn spawn_friendly(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: &UnitKind,
) -> hecs::Entity {
    let x: f64 = rng.gen_range(-SPAWN_JITTER_X..SPAWN_JITTER_X);
    spawn_unit(world, kind, Side::Friendly, Position::new(x, FRIENDLY_SPAWN_Y))
}

/// Spawn a unit of `kind` at an exact position.
pub fn spawn_unit(
    world: &mut World,
    kind: &UnitKind,
    side: Side,
    position: Position,
) -> hecs::Entity {
    let stats = unit_stats(kind);
    world.spawn((
        kind.clone(),
        Allegiance { side },
        position,
        Velocity::ZERO,
        Speed {
            units_per_sec: stats.speed,
        },
        Health {
            hit_points: stats.hit_points,
            max_hit_points: stats.hit_points,
        },
    ))
}

/// Stats for a unit kind. Unlisted kinds get a middling generic profile.
pub fn unit_stats(kind: &UnitKind) -> UnitStats {
    let (hit_points, speed, cost) = match kind.as_str() {
        "heavy-tank" => (1200.0, 40.0, 6.0),
        "siege-engine" => (800.0, 35.0, 5.0),
        "bruiser" => (700.0, 55.0, 4.0),
        "spellcaster" => (300.0, 60.0, 4.0),
        "knight" => (600.0, 60.0, 3.0),
        "flyer" => (350.0, 100.0, 3.0),
        "archer" => (250.0, 60.0, 3.0),
        "skirmisher" => (300.0, 80.0, 2.0),
        "swarm" => (80.0, 90.0, 2.0),
        _ => (300.0, 60.0, 3.0),
    };
    UnitStats {
        hit_points,
        speed,
        cost,
    }
}
