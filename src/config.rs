use crate::error::{FieldbookError, Result};
use crate::planning::{DEFAULT_GROWING_PERIOD, GrowingPeriods};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".fieldbook.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldbookConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub planning: PlanningSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Directory holding seed JSON files. Relative paths resolve against the
    /// directory containing the config file. Unset means the embedded data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    #[serde(default)]
    pub latency: LatencySettings,
}

/// Simulated per-call latency in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySettings {
    #[serde(default)]
    pub read_ms: u64,

    #[serde(default)]
    pub list_ms: u64,

    #[serde(default)]
    pub write_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSettings {
    #[serde(default = "default_growing_period")]
    pub default_growing_period: u32,

    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    #[serde(default = "default_harvest_window_days")]
    pub harvest_window_days: u32,

    /// Extra or replacement growing periods keyed by crop type.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub crop_types: BTreeMap<String, u32>,
}

fn default_growing_period() -> u32 {
    DEFAULT_GROWING_PERIOD
}

fn default_upcoming_days() -> u32 {
    7
}

fn default_harvest_window_days() -> u32 {
    30
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            default_growing_period: default_growing_period(),
            upcoming_days: default_upcoming_days(),
            harvest_window_days: default_harvest_window_days(),
            crop_types: BTreeMap::new(),
        }
    }
}

impl PlanningSettings {
    pub fn growing_periods(&self) -> GrowingPeriods {
        GrowingPeriods::new(self.default_growing_period).with_overrides(&self.crop_types)
    }
}

impl FieldbookConfig {
    /// Loads the nearest config file above `start_path`, or defaults when
    /// there is none. Returns the directory the config was found in.
    pub fn discover(start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                let (config, root) = Self::from_file(&path)?;
                Ok((config, Some(root)))
            }
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                Ok((Self::default(), None))
            }
        }
    }

    pub fn from_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: FieldbookConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| FieldbookError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        for name in self.planning.crop_types.keys() {
            if name.trim().is_empty() {
                return Err(FieldbookError::Config(
                    "planning.crop_types contains an empty crop type".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Resolved seed directory, if one is configured.
    pub fn data_dir(&self, project_root: Option<&Path>) -> Option<PathBuf> {
        let dir = PathBuf::from(self.store.data_dir.as_ref()?);
        match project_root {
            Some(root) if dir.is_relative() => Some(root.join(dir)),
            _ => Some(dir),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: FieldbookConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, FieldbookConfig::default());
        assert_eq!(config.planning.default_growing_period, 90);
        assert_eq!(config.planning.upcoming_days, 7);
        assert_eq!(config.planning.harvest_window_days, 30);
    }

    #[test]
    fn test_partial_planning_section() {
        let yaml = "planning:\n  upcoming_days: 14\n  crop_types:\n    Sorghum: 115\n";
        let config: FieldbookConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.planning.upcoming_days, 14);
        assert_eq!(config.planning.default_growing_period, 90);
        assert_eq!(config.planning.growing_periods().lookup("Sorghum"), Some(115));
    }

    #[test]
    fn test_discover_walks_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = FieldbookConfig::default();
        config.planning.harvest_window_days = 45;
        config.save(&temp_dir.path().join(CONFIG_FILE)).unwrap();

        let (loaded, root) = FieldbookConfig::discover(&nested).unwrap();
        assert_eq!(loaded.planning.harvest_window_days, 45);
        assert_eq!(root.as_deref(), Some(temp_dir.path()));
    }

    #[test]
    fn test_discover_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = FieldbookConfig::discover(temp_dir.path()).unwrap();
        // a stray config further up the tree would be picked up instead
        if root.is_none() {
            assert_eq!(config, FieldbookConfig::default());
        }
    }

    #[test]
    fn test_relative_data_dir_resolves_against_root() {
        let mut config = FieldbookConfig::default();
        config.store.data_dir = Some("seed".to_string());
        assert_eq!(
            config.data_dir(Some(Path::new("/srv/farm"))),
            Some(PathBuf::from("/srv/farm/seed"))
        );
        assert_eq!(config.data_dir(None), Some(PathBuf::from("seed")));
    }

    #[test]
    fn test_rejects_blank_crop_type() {
        let yaml = "planning:\n  crop_types:\n    \" \": 10\n";
        let config: FieldbookConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
    }
}
