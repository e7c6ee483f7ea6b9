//! Damage systems: tower fire on hostiles and siege attrition on friendlies.

use hecs::{Entity, World};

use lanewarden_core::components::{Allegiance, Health, Tower};
use lanewarden_core::constants::{DT, SIEGE_ATTRITION_DPS, SIEGE_LINE, TOWER_DPS, TOWER_RANGE};
use lanewarden_core::enums::Side;
use lanewarden_core::types::Position;

/// Each tower shoots the nearest hostile in range.
pub fn tower_fire(world: &mut World) {
    let towers: Vec<Position> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect();

    let hostiles: Vec<(Entity, Position)> = world
        .query::<(&Allegiance, &Position, &Health)>()
        .iter()
        .filter(|(_, (allegiance, _, health))| {
            allegiance.side == Side::Hostile && health.hit_points > 0.0
        })
        .map(|(entity, (_, pos, _))| (entity, *pos))
        .collect();

    for tower in towers {
        let target = hostiles
            .iter()
            .map(|(entity, pos)| (*entity, tower.distance(*pos)))
            .filter(|(_, range)| *range <= TOWER_RANGE)
            .min_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((entity, _)) = target {
            if let Ok(mut health) = world.get::<&mut Health>(entity) {
                health.hit_points -= TOWER_DPS * DT;
            }
        }
    }
}

/// Friendlies past the siege line take attrition from the opposing defenses.
pub fn siege_attrition(world: &mut World) {
    for (_entity, (allegiance, pos, health)) in
        world.query_mut::<(&Allegiance, &Position, &mut Health)>()
    {
        if allegiance.side == Side::Friendly && pos.y >= SIEGE_LINE {
            health.hit_points -= SIEGE_ATTRITION_DPS * DT;
        }
    }
}
