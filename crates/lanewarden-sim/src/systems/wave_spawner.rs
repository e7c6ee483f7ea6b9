//! Wave spawning system. Sends hostile waves down the lane at scheduled times.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use lanewarden_core::events::MatchEvent;
use lanewarden_core::types::Timestamp;
use lanewarden_core::units::UnitKind;

/// A single wave definition.
#[derive(Debug, Clone)]
pub struct WaveEntry {
    /// Match time at which this wave spawns.
    pub spawn_at_secs: Timestamp,
    pub kind: UnitKind,
    pub count: u32,
    /// Whether this wave has already been spawned.
    pub spawned: bool,
}

impl WaveEntry {
    pub fn new(spawn_at_secs: Timestamp, kind: &str, count: u32) -> Self {
        Self {
            spawn_at_secs,
            kind: UnitKind::from(kind),
            count,
            spawned: false,
        }
    }
}

/// The complete hostile wave schedule for a match.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Default match: a probe, a tank rush, a ranged wave, then a combined push.
    pub fn default_match() -> Self {
        Self {
            waves: vec![
                WaveEntry::new(4.0, "swarm", 3),
                WaveEntry::new(20.0, "heavy-tank", 1),
                WaveEntry::new(38.0, "archer", 2),
                WaveEntry::new(55.0, "heavy-tank", 1),
                WaveEntry::new(56.0, "knight", 2),
            ],
        }
    }

    /// Total number of hostile units across all waves.
    pub fn total_units(&self) -> u32 {
        self.waves.iter().map(|w| w.count).sum()
    }
}

/// Check schedule and spawn any due waves.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    now: Timestamp,
    events: &mut Vec<MatchEvent>,
) {
    for wave in &mut schedule.waves {
        if !wave.spawned && now >= wave.spawn_at_secs {
            for _ in 0..wave.count {
                crate::world_setup::spawn_hostile(world, rng, &wave.kind);
            }
            wave.spawned = true;
            tracing::debug!(kind = %wave.kind, count = wave.count, at = now, "wave spawned");
            events.push(MatchEvent::WaveSpawned {
                kind: wave.kind.clone(),
                count: wave.count,
                at: now,
            });
        }
    }
}
