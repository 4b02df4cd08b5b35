//! Configuration loading from TOML and JSON files

mod constants;
mod database;

pub use constants::{
    default_constants, load_constants, parse_constants, BaselineWeights, PenaltyFactors,
    ScoringConstants, UptimeMultipliers,
};
pub use database::{load_database, parse_database, parse_database_json, DatabaseFile};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::CombatantProfile;
    use crate::types::Spec;

    #[test]
    fn test_parse_profile_toml() {
        let toml = r#"
spec = "hunter_marksmanship"
role = "ranged"
armor_proficiencies = ["cloth", "leather", "mail"]
active_auras = [34484]
"#;
        let profile: CombatantProfile = parse_toml(toml).unwrap();
        assert_eq!(profile.spec, Spec::HunterMarksmanship);
        assert!(profile.has_aura(34484));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result: Result<CombatantProfile, _> = parse_toml("spec = 12");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));

        let result: Result<CombatantProfile, _> = parse_json("{");
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result: Result<CombatantProfile, _> = load_toml(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
