//! Lane movement.
//!
//! Hostiles walk straight at the nearest tower and halt in melee range.
//! Friendlies walk up the lane and halt at the siege line.
//! Position is then integrated from Velocity: position += velocity * dt.

use hecs::World;

use lanewarden_core::components::{Allegiance, Speed, Tower};
use lanewarden_core::constants::{DT, MELEE_RANGE, SIEGE_LINE};
use lanewarden_core::enums::Side;
use lanewarden_core::types::{Position, Velocity};

/// Point every unit's velocity at its current objective.
pub fn steer(world: &mut World) {
    let towers: Vec<Position> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect();

    for (_entity, (pos, vel, speed, allegiance)) in
        world.query_mut::<(&Position, &mut Velocity, &Speed, &Allegiance)>()
    {
        *vel = match allegiance.side {
            Side::Hostile => toward_nearest(*pos, &towers, speed.units_per_sec),
            Side::Friendly if pos.y < SIEGE_LINE => Velocity::new(0.0, speed.units_per_sec),
            Side::Friendly => Velocity::ZERO,
        };
    }
}

fn toward_nearest(pos: Position, towers: &[Position], speed: f64) -> Velocity {
    let nearest = towers
        .iter()
        .min_by(|a, b| pos.distance(**a).total_cmp(&pos.distance(**b)));
    match nearest {
        Some(tower) if pos.distance(*tower) > MELEE_RANGE => {
            Velocity((*tower - pos).normalize_or_zero() * speed)
        }
        _ => Velocity::ZERO,
    }
}

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        *pos += vel.0 * DT;
    }
}
