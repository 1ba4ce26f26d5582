//! Tunable survival policy, loaded from JSON.

use std::path::Path;

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DrainTable, Durability, HitCounter, ImpactClassifier, OxygenReserve, Vitality};

/// Errors from loading configuration or item data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmetConfig {
    pub max_durability: u32,
    /// Number of crack overlay sprites, pristine included.
    pub crack_stages: u32,
    pub drain_rates: DrainTable,
}

impl Default for HelmetConfig {
    fn default() -> Self {
        Self {
            max_durability: 3,
            crack_stages: 4,
            drain_rates: DrainTable::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OxygenConfig {
    pub max_oxygen: f32,
    /// Units per second gained inside a safe room.
    pub regen_rate: f32,
}

impl Default for OxygenConfig {
    fn default() -> Self {
        Self {
            max_oxygen: 100.0,
            regen_rate: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalsConfig {
    pub max_health: f32,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self { max_health: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    pub min_impact_velocity: f32,
    /// Seconds.
    pub damage_cooldown: f64,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            min_impact_velocity: 5.0,
            damage_cooldown: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub hits_before_visor_damage: u32,
    pub knockback_force: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            hits_before_visor_damage: 3,
            knockback_force: 5.0,
        }
    }
}

/// Survival tuning. Installed as a resource by `build_survival_app`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    /// Seconds per `SurvivalTick` until the host overrides the clock delta.
    pub tick_seconds: f32,
    pub helmet: HelmetConfig,
    pub oxygen: OxygenConfig,
    pub vitals: VitalsConfig,
    pub impact: ImpactConfig,
    pub weapon: WeaponConfig,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 0.02,
            helmet: HelmetConfig::default(),
            oxygen: OxygenConfig::default(),
            vitals: VitalsConfig::default(),
            impact: ImpactConfig::default(),
            weapon: WeaponConfig::default(),
        }
    }
}

impl SurvivalConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content).inspect_err(|err| {
            tracing::warn!("rejected survival config {}: {}", path.display(), err);
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }
        fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )))
            }
        }

        positive("tick_seconds", self.tick_seconds.into())?;
        positive("helmet.max_durability", self.helmet.max_durability.into())?;
        positive("helmet.crack_stages", self.helmet.crack_stages.into())?;
        for (durability, rate) in &self.helmet.drain_rates.0 {
            non_negative(&format!("helmet.drain_rates[{durability}]"), (*rate).into())?;
        }
        positive("oxygen.max_oxygen", self.oxygen.max_oxygen.into())?;
        non_negative("oxygen.regen_rate", self.oxygen.regen_rate.into())?;
        positive("vitals.max_health", self.vitals.max_health.into())?;
        non_negative(
            "impact.min_impact_velocity",
            self.impact.min_impact_velocity.into(),
        )?;
        non_negative("impact.damage_cooldown", self.impact.damage_cooldown)?;
        positive(
            "weapon.hits_before_visor_damage",
            self.weapon.hits_before_visor_damage.into(),
        )?;
        non_negative("weapon.knockback_force", self.weapon.knockback_force.into())?;
        Ok(())
    }

    pub fn new_durability(&self) -> Durability {
        Durability::new(self.helmet.max_durability, self.helmet.crack_stages)
    }

    pub fn new_oxygen(&self) -> OxygenReserve {
        OxygenReserve::new(self.oxygen.max_oxygen, self.oxygen.regen_rate)
    }

    pub fn new_vitality(&self) -> Vitality {
        Vitality::new(self.vitals.max_health)
    }

    pub fn new_impact_classifier(&self) -> ImpactClassifier {
        ImpactClassifier::new(self.impact.min_impact_velocity, self.impact.damage_cooldown)
    }

    pub fn new_hit_counter(&self) -> HitCounter {
        HitCounter::new(self.weapon.hits_before_visor_damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SurvivalConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SurvivalConfig::default());
    }

    #[test]
    fn defaults_are_valid() {
        let config = SurvivalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_seconds, 0.02);
        assert_eq!(config.helmet.max_durability, 3);
        assert_eq!(config.oxygen.max_oxygen, 100.0);
        assert_eq!(config.weapon.hits_before_visor_damage, 3);
    }

    #[test]
    fn partial_json_overrides() {
        let json = r#"{
            "tick_seconds": 1.0,
            "oxygen": {"max_oxygen": 60.0},
            "helmet": {"drain_rates": {"3": 1.0, "0": 40.0}}
        }"#;
        let config = SurvivalConfig::from_json_str(json).unwrap();
        assert_eq!(config.oxygen.max_oxygen, 60.0);
        assert_eq!(config.oxygen.regen_rate, 20.0);
        assert_eq!(config.helmet.max_durability, 3);
        assert_eq!(config.helmet.drain_rates.rate_for(0), 40.0);
        assert_eq!(config.helmet.drain_rates.rate_for(2), 0.0);
    }

    #[test]
    fn rejects_zero_hit_threshold() {
        let json = r#"{"weapon": {"hits_before_visor_damage": 0}}"#;
        let err = SurvivalConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("hits_before_visor_damage"));
    }

    #[test]
    fn rejects_negative_drain_rate() {
        let json = r#"{"helmet": {"drain_rates": {"1": -3.0}}}"#;
        assert!(SurvivalConfig::from_json_str(json).is_err());
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(
            SurvivalConfig::from_json_str("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn builds_trackers_from_policy() {
        let mut config = SurvivalConfig::default();
        config.helmet.max_durability = 5;
        config.vitals.max_health = 40.0;
        assert_eq!(config.new_durability().current(), 5);
        assert_eq!(config.new_vitality().health(), 40.0);
        assert_eq!(config.new_oxygen().level(), 100.0);
    }
}
