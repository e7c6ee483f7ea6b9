//! Controller tuning, loadable from TOML or JSON.
//!
//! Every field falls back to the defaults in [`crate::constants`], so a config
//! file only needs to name what it overrides.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::units::UnitKind;

/// Threat scoring policy: base weights plus hp and proximity bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatScoring {
    /// Base threat per unit kind.
    pub weights: BTreeMap<UnitKind, f64>,
    /// Base threat for kinds missing from `weights`.
    pub unknown_weight: f64,
    pub hp_high_threshold: f64,
    pub hp_high_bonus: f64,
    pub hp_low_threshold: f64,
    pub hp_low_bonus: f64,
    pub proximity_close_range: f64,
    pub proximity_close_bonus: f64,
    pub proximity_far_range: f64,
    pub proximity_far_bonus: f64,
}

impl Default for ThreatScoring {
    fn default() -> Self {
        Self {
            weights: DEFAULT_THREAT_WEIGHTS
                .iter()
                .map(|&(name, weight)| (UnitKind::from(name), weight))
                .collect(),
            unknown_weight: 0.0,
            hp_high_threshold: HP_HIGH_THRESHOLD,
            hp_high_bonus: HP_HIGH_BONUS,
            hp_low_threshold: HP_LOW_THRESHOLD,
            hp_low_bonus: HP_LOW_BONUS,
            proximity_close_range: PROXIMITY_CLOSE_RANGE,
            proximity_close_bonus: PROXIMITY_CLOSE_BONUS,
            proximity_far_range: PROXIMITY_FAR_RANGE,
            proximity_far_bonus: PROXIMITY_FAR_BONUS,
        }
    }
}

impl ThreatScoring {
    /// Base weight for a unit kind.
    pub fn weight(&self, kind: &UnitKind) -> f64 {
        self.weights.get(kind).copied().unwrap_or(self.unknown_weight)
    }
}

/// Timing, thresholds and archetype sets for the mode controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub defend_threshold: f64,
    pub defend_min_dwell_secs: f64,
    pub counter_resource_threshold: f64,
    pub counter_timeout_secs: f64,
    pub push_cooldown_secs: f64,
    pub push_resource_threshold: f64,
    pub push_min_duration_secs: f64,
    pub nearby_radius: f64,
    pub threat: ThreatScoring,
    /// Kinds that keep a push alive while any of them stands.
    pub push_archetypes: BTreeSet<UnitKind>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            defend_threshold: DEFEND_THREAT_THRESHOLD,
            defend_min_dwell_secs: DEFEND_MIN_DWELL_SECS,
            counter_resource_threshold: COUNTER_RESOURCE_THRESHOLD,
            counter_timeout_secs: COUNTER_TIMEOUT_SECS,
            push_cooldown_secs: PUSH_COOLDOWN_SECS,
            push_resource_threshold: PUSH_RESOURCE_THRESHOLD,
            push_min_duration_secs: PUSH_MIN_DURATION_SECS,
            nearby_radius: NEARBY_THREAT_RADIUS,
            threat: ThreatScoring::default(),
            push_archetypes: DEFAULT_PUSH_ARCHETYPES
                .iter()
                .map(|&name| UnitKind::from(name))
                .collect(),
        }
    }
}

impl ControllerConfig {
    pub fn is_push_archetype(&self, kind: &UnitKind) -> bool {
        self.push_archetypes.contains(kind)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }

    /// Reject values that would make the state machine meaningless.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("defend_min_dwell_secs", self.defend_min_dwell_secs),
            ("counter_timeout_secs", self.counter_timeout_secs),
            ("push_cooldown_secs", self.push_cooldown_secs),
            ("push_min_duration_secs", self.push_min_duration_secs),
            ("nearby_radius", self.nearby_radius),
            ("counter_resource_threshold", self.counter_resource_threshold),
            ("push_resource_threshold", self.push_resource_threshold),
            ("threat.proximity_close_range", self.threat.proximity_close_range),
            ("threat.proximity_far_range", self.threat.proximity_far_range),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if !self.defend_threshold.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "defend_threshold must be finite, got {}",
                self.defend_threshold
            )));
        }

        if self.threat.proximity_close_range > self.threat.proximity_far_range {
            return Err(ConfigError::Invalid(format!(
                "threat.proximity_close_range ({}) exceeds threat.proximity_far_range ({})",
                self.threat.proximity_close_range, self.threat.proximity_far_range
            )));
        }

        if self.threat.hp_low_threshold > self.threat.hp_high_threshold {
            return Err(ConfigError::Invalid(format!(
                "threat.hp_low_threshold ({}) exceeds threat.hp_high_threshold ({})",
                self.threat.hp_low_threshold, self.threat.hp_high_threshold
            )));
        }

        if let Some((kind, weight)) = self
            .threat
            .weights
            .iter()
            .find(|(_, weight)| !weight.is_finite())
        {
            return Err(ConfigError::Invalid(format!(
                "threat weight for {kind} must be finite, got {weight}"
            )));
        }

        Ok(())
    }
}
