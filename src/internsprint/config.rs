use crate::error::{Result, SprintError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INTERNSHIPS_FILE: &str = "internships.json";
const DEFAULT_PROFILE_FILE: &str = "profile.json";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "INTERNSPRINT_HOME";

/// Configuration for internsprint, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SprintConfig {
    /// File holding the internship records
    #[serde(default = "default_internships_file")]
    pub internships_file: String,

    /// File holding the user profile
    #[serde(default = "default_profile_file")]
    pub profile_file: String,
}

fn default_internships_file() -> String {
    DEFAULT_INTERNSHIPS_FILE.to_string()
}

fn default_profile_file() -> String {
    DEFAULT_PROFILE_FILE.to_string()
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            internships_file: default_internships_file(),
            profile_file: default_profile_file(),
        }
    }
}

impl SprintConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SprintError::Io)?;
        let config: SprintConfig =
            serde_json::from_str(&content).map_err(SprintError::Serialization)?;
        Ok(config)
    }
}

/// Picks the data directory: explicit path, then `INTERNSPRINT_HOME`, then the platform
/// data directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "internsprint", "internsprint")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SprintError::Store("Could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SprintConfig::default();
        assert_eq!(config.internships_file, "internships.json");
        assert_eq!(config.profile_file, "profile.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = SprintConfig::load(dir.path().join("nothing-here")).unwrap();
        assert_eq!(config, SprintConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"internships_file": "apps.json", "profile_file": "me.json"}"#,
        )
        .unwrap();

        let loaded = SprintConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            SprintConfig {
                internships_file: "apps.json".to_string(),
                profile_file: "me.json".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"profile_file": "me.json"}"#,
        )
        .unwrap();

        let loaded = SprintConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.profile_file, "me.json");
        assert_eq!(loaded.internships_file, "internships.json");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = PathBuf::from("/tmp/somewhere");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
