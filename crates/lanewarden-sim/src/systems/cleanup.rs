//! Cleanup system: removes units that have run out of hit points.

use hecs::{Entity, World};

use lanewarden_core::components::{Allegiance, Health};
use lanewarden_core::enums::Side;
use lanewarden_core::events::MatchEvent;
use lanewarden_core::types::Timestamp;
use lanewarden_core::units::UnitKind;

use crate::score::ScoreState;

/// Remove dead units and record their deaths.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
    now: Timestamp,
) {
    despawn_buffer.clear();

    for (entity, (kind, allegiance, health)) in
        world.query_mut::<(&UnitKind, &Allegiance, &Health)>()
    {
        if health.hit_points <= 0.0 {
            match allegiance.side {
                Side::Hostile => score.hostiles_destroyed += 1,
                Side::Friendly => score.friendlies_lost += 1,
            }
            tracing::debug!(kind = %kind, side = ?allegiance.side, at = now, "unit destroyed");
            events.push(MatchEvent::UnitDestroyed {
                kind: kind.clone(),
                side: allegiance.side,
                at: now,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
