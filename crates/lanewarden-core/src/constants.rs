//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Mode controller ---

/// Max threat at or above which the controller drops everything and defends.
pub const DEFEND_THREAT_THRESHOLD: f64 = 10.0;

/// Minimum time in Defend before the exit rule may fire (seconds, strict).
pub const DEFEND_MIN_DWELL_SECS: f64 = 2.0;

/// Resources needed on Defend exit to go Counter instead of Cycle.
pub const COUNTER_RESOURCE_THRESHOLD: f64 = 5.0;

/// Counter window length (seconds, strict).
pub const COUNTER_TIMEOUT_SECS: f64 = 5.0;

/// Minimum time between two Push entries (seconds, inclusive).
pub const PUSH_COOLDOWN_SECS: f64 = 6.0;

/// Resources needed to launch a push.
pub const PUSH_RESOURCE_THRESHOLD: f64 = 7.0;

/// Minimum commitment before a push may be abandoned (seconds, strict).
pub const PUSH_MIN_DURATION_SECS: f64 = 8.0;

/// Radius around a tower in which a hostile keeps Defend alive.
pub const NEARBY_THREAT_RADIUS: f64 = 200.0;

// --- Threat scoring ---

/// Hit points above which a unit scores the high hp bonus.
pub const HP_HIGH_THRESHOLD: f64 = 400.0;
pub const HP_HIGH_BONUS: f64 = 2.0;

/// Hit points above which a unit scores the low hp bonus.
pub const HP_LOW_THRESHOLD: f64 = 200.0;
pub const HP_LOW_BONUS: f64 = 1.0;

/// Distance to a tower under which the close proximity bonus applies.
pub const PROXIMITY_CLOSE_RANGE: f64 = 150.0;
pub const PROXIMITY_CLOSE_BONUS: f64 = 3.0;

/// Distance to a tower under which the far proximity bonus applies.
pub const PROXIMITY_FAR_RANGE: f64 = 250.0;
pub const PROXIMITY_FAR_BONUS: f64 = 1.0;

/// Default base threat weight per unit kind.
pub const DEFAULT_THREAT_WEIGHTS: &[(&str, f64)] = &[
    ("heavy-tank", 6.0),
    ("siege-engine", 5.0),
    ("bruiser", 4.0),
    ("spellcaster", 3.0),
    ("knight", 3.0),
    ("flyer", 3.0),
    ("archer", 2.0),
    ("skirmisher", 2.0),
    ("swarm", 1.0),
];

/// Unit kinds whose survival keeps a push alive.
pub const DEFAULT_PUSH_ARCHETYPES: &[&str] = &["heavy-tank", "siege-engine", "bruiser"];

// --- Arena ---

/// Lane length from the controller's king tower (y = 0) to the opposing end.
pub const LANE_LENGTH: f64 = 1000.0;

/// Controller tower positions (x, y).
pub const TOWER_POSITIONS: [(f64, f64); 3] = [(-120.0, 120.0), (120.0, 120.0), (0.0, 0.0)];

/// Range at which a tower fires on hostiles.
pub const TOWER_RANGE: f64 = 220.0;

/// Tower damage per second.
pub const TOWER_DPS: f64 = 90.0;

/// Distance at which a hostile stops to attack a tower.
pub const MELEE_RANGE: f64 = 30.0;

/// y coordinate past which friendly units are sieging the opposing side.
pub const SIEGE_LINE: f64 = 900.0;

/// Damage per second taken by a friendly unit while sieging.
pub const SIEGE_ATTRITION_DPS: f64 = 60.0;

// --- Elixir ---

pub const ELIXIR_MAX: f64 = 10.0;

/// Elixir regenerated per second.
pub const ELIXIR_REGEN_PER_SEC: f64 = 0.35;

/// Elixir at match start.
pub const ELIXIR_START: f64 = 5.0;
