//! Tunable scoring constants

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable scoring constants
///
/// Every field has a serde default, so a partial TOML file only overrides
/// what it names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConstants {
    #[serde(default)]
    pub baseline: BaselineWeights,
    #[serde(default)]
    pub multipliers: UptimeMultipliers,
    #[serde(default)]
    pub penalties: PenaltyFactors,
}

impl ScoringConstants {
    /// Reject negative or non-finite values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("baseline.stamina", self.baseline.stamina),
            ("baseline.armor", self.baseline.armor),
            ("multipliers.on_equip", self.multipliers.on_equip),
            ("multipliers.triggered", self.multipliers.triggered),
            ("penalties.wrong_armor", self.penalties.wrong_armor),
            ("penalties.two_hand", self.penalties.two_hand),
            ("penalties.two_hand_disfavored", self.penalties.two_hand_disfavored),
            ("penalties.two_hand_favored", self.penalties.two_hand_favored),
            ("penalties.titan_grip", self.penalties.titan_grip),
            ("penalties.hunter_thrown", self.penalties.hunter_thrown),
            ("penalties.off_spec_weapon", self.penalties.off_spec_weapon),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Weights every combatant receives regardless of specialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineWeights {
    #[serde(default = "default_stamina")]
    pub stamina: f64,
    #[serde(default = "default_armor")]
    pub armor: f64,
}

impl Default for BaselineWeights {
    fn default() -> Self {
        BaselineWeights {
            stamina: 0.01,
            armor: 0.001,
        }
    }
}

fn default_stamina() -> f64 {
    0.01
}
fn default_armor() -> f64 {
    0.001
}

/// Uptime multipliers for embedded ability effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeMultipliers {
    /// Passive effects active while the item is worn
    #[serde(default = "default_on_equip")]
    pub on_equip: f64,
    /// Use and proc effects, and abilities they trigger
    #[serde(default = "default_triggered")]
    pub triggered: f64,
}

impl Default for UptimeMultipliers {
    fn default() -> Self {
        UptimeMultipliers {
            on_equip: 1.0,
            triggered: 0.2,
        }
    }
}

fn default_on_equip() -> f64 {
    1.0
}
fn default_triggered() -> f64 {
    0.2
}

/// Multiplicative factors of the penalty cascade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyFactors {
    /// Armor of a lower type than the best one the combatant can wear
    #[serde(default = "default_wrong_armor")]
    pub wrong_armor: f64,
    /// Any two-handed weapon
    #[serde(default = "default_two_hand")]
    pub two_hand: f64,
    /// Two-handed weapon for a spec that fights with one-handers
    #[serde(default = "default_tenth")]
    pub two_hand_disfavored: f64,
    /// Two-handed weapon for a spec that fights with two-handers
    #[serde(default = "default_tenfold")]
    pub two_hand_favored: f64,
    /// Non-polearm two-hander for a titan-grip fury warrior
    #[serde(default = "default_tenfold")]
    pub titan_grip: f64,
    /// Thrown weapon for a hunter
    #[serde(default = "default_tenth")]
    pub hunter_thrown: f64,
    /// Non-dagger weapon for an assassination rogue
    #[serde(default = "default_tenth")]
    pub off_spec_weapon: f64,
}

impl Default for PenaltyFactors {
    fn default() -> Self {
        PenaltyFactors {
            wrong_armor: 0.8,
            two_hand: 0.5,
            two_hand_disfavored: 0.1,
            two_hand_favored: 10.0,
            titan_grip: 10.0,
            hunter_thrown: 0.1,
            off_spec_weapon: 0.1,
        }
    }
}

fn default_wrong_armor() -> f64 {
    0.8
}
fn default_two_hand() -> f64 {
    0.5
}
fn default_tenth() -> f64 {
    0.1
}
fn default_tenfold() -> f64 {
    10.0
}

/// Get the bundled scoring constants
pub fn default_constants() -> ScoringConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_constants(toml).unwrap_or_default()
}

/// Load and validate scoring constants from a TOML file
pub fn load_constants(path: &Path) -> Result<ScoringConstants, ConfigError> {
    let constants: ScoringConstants = super::load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Load and validate scoring constants from a TOML string
pub fn parse_constants(content: &str) -> Result<ScoringConstants, ConfigError> {
    let constants: ScoringConstants = super::parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = ScoringConstants::default();
        assert!((constants.baseline.stamina - 0.01).abs() < f64::EPSILON);
        assert!((constants.multipliers.triggered - 0.2).abs() < f64::EPSILON);
        assert!((constants.penalties.two_hand - 0.5).abs() < f64::EPSILON);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_bundled_matches_default() {
        assert_eq!(default_constants(), ScoringConstants::default());
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[multipliers]
triggered = 0.35

[penalties]
wrong_armor = 0.5
"#;

        let constants: ScoringConstants = toml::from_str(toml).unwrap();
        assert!((constants.multipliers.triggered - 0.35).abs() < f64::EPSILON);
        assert!((constants.multipliers.on_equip - 1.0).abs() < f64::EPSILON);
        assert!((constants.penalties.wrong_armor - 0.5).abs() < f64::EPSILON);
        assert!((constants.penalties.titan_grip - 10.0).abs() < f64::EPSILON);
        assert!((constants.baseline.armor - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_constants_rejects_invalid() {
        let err = parse_constants("[penalties]\ntwo_hand = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("penalties.two_hand"));

        let err = parse_constants("[multipliers]\ntriggered = nan\n").unwrap_err();
        assert!(err.to_string().contains("multipliers.triggered"));

        let err = parse_constants("[baseline]\narmor = inf\n").unwrap_err();
        assert!(err.to_string().contains("baseline.armor"));
    }

    #[test]
    fn test_parse_constants_partial() {
        let constants = parse_constants("[penalties]\nwrong_armor = 0.5\n").unwrap();
        assert!((constants.penalties.wrong_armor - 0.5).abs() < f64::EPSILON);
        assert!((constants.penalties.two_hand - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_constants_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/constants.toml");
        assert_eq!(load_constants(&path).unwrap(), ScoringConstants::default());
        assert!(matches!(
            load_constants(Path::new("does/not/exist.toml")),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut constants = ScoringConstants::default();
        constants.penalties.two_hand = -1.0;
        let err = constants.validate().unwrap_err();
        assert!(err.to_string().contains("penalties.two_hand"));
    }
}
