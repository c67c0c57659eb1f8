use crate::error::{PromptError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DATA_FILENAME: &str = "prompts.csv";

/// Configuration, stored as config.json in the platform config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Overrides the default location of the prompt file.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl PromptConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PromptError::Io)?;
        let config: PromptConfig =
            serde_json::from_str(&content).map_err(PromptError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PromptError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PromptError::Serialization)?;
        fs::write(config_path, content).map_err(PromptError::Io)?;
        Ok(())
    }
}

/// Platform directories for promptpad.
pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "promptpad", "promptpad")
        .ok_or_else(|| PromptError::Store("could not determine a home directory".to_string()))
}

/// Where the prompt file lives: an explicit override wins, then the
/// configured path, then the platform data directory default.
pub fn resolve_data_file(
    cli_override: Option<PathBuf>,
    config: &PromptConfig,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        return Ok(path);
    }
    if let Some(path) = &config.data_file {
        return Ok(path.clone());
    }
    Ok(project_dirs()?.data_dir().join(DATA_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PromptConfig::load(dir.path()).unwrap();
        assert_eq!(config, PromptConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = PromptConfig {
            data_file: Some(PathBuf::from("/tmp/custom/prompts.csv")),
        };
        config.save(dir.path().join("nested")).unwrap();
        let loaded = PromptConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn serialization_round_trip() {
        let config = PromptConfig {
            data_file: Some(PathBuf::from("p.csv")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PromptConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn cli_override_outranks_configured_path() {
        let config = PromptConfig {
            data_file: Some(PathBuf::from("configured.csv")),
        };
        let resolved =
            resolve_data_file(Some(PathBuf::from("explicit.csv")), &config).unwrap();
        assert_eq!(resolved, PathBuf::from("explicit.csv"));

        let resolved = resolve_data_file(None, &config).unwrap();
        assert_eq!(resolved, PathBuf::from("configured.csv"));
    }
}
