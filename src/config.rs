use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub scenarios: ScenarioConfig,
}

/// Where the demo binary reads transfer scenarios from
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub path: String,
    /// Abort the run at the first outcome that differs from its expectation
    pub stop_on_mismatch: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            path: crate::scenario::TRANSFERS_CSV.to_string(),
            stop_on_mismatch: false,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
log_level: debug
log_dir: ./logs
log_file: transfer.log
use_json: true
rotation: daily
scenarios:
  path: fixtures/other.csv
  stop_on_mismatch: true
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.use_json);
        assert_eq!(config.scenarios.path, "fixtures/other.csv");
        assert!(config.scenarios.stop_on_mismatch);
    }

    #[test]
    fn test_scenarios_section_defaults() {
        let yaml = r#"
log_level: info
log_dir: ./logs
log_file: transfer.log
use_json: false
rotation: never
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.scenarios.path, "fixtures/transfers.csv");
        assert!(!config.scenarios.stop_on_mismatch);
    }

    #[test]
    fn test_missing_required_field_is_error() {
        assert!(AppConfig::from_yaml("log_level: info").is_err());
    }

    #[test]
    fn test_load_missing_env_names_path() {
        let err = AppConfig::load("no_such_env").unwrap_err();
        assert!(format!("{:#}", err).contains("config/no_such_env.yaml"));
    }
}
