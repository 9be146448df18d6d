use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::json_store::default_data_dir;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_data_dir_string")]
    pub data_dir: String,
    /// Custom vocabulary JSON. The bundled list is used when unset.
    #[serde(default)]
    pub vocabulary_file: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_data_dir_string() -> String {
    default_data_dir().to_string_lossy().to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            data_dir: default_data_dir_string(),
            vocabulary_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("verbdrill")
            .join("config.toml")
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Reset values that no longer point at anything usable.
    pub fn normalize(&mut self, valid_themes: &[String]) {
        if !valid_themes.iter().any(|t| *t == self.theme) {
            self.theme = default_theme();
        }
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir_string();
        }
        if self
            .vocabulary_file
            .as_deref()
            .is_some_and(|p| p.trim().is_empty())
        {
            self.vocabulary_file = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn themes() -> Vec<String> {
        vec!["catppuccin-mocha".to_string(), "gruvbox-dark".to_string()]
    }

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.log_level, "info");
        assert!(config.vocabulary_file.is_none());
        assert!(config.data_dir.contains("verbdrill"));
    }

    #[test]
    fn test_config_serde_partial_file() {
        let toml_str = r#"
theme = "gruvbox-dark"
vocabulary_file = "/tmp/verbs.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "gruvbox-dark");
        assert_eq!(config.vocabulary_file.as_deref(), Some("/tmp/verbs.json"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.vocabulary_file = Some("verbs.json".to_string());
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.data_dir, deserialized.data_dir);
        assert_eq!(config.vocabulary_file, deserialized.vocabulary_file);
        assert_eq!(config.log_level, deserialized.log_level);
    }

    #[test]
    fn test_normalize_unknown_theme_resets() {
        let mut config = Config::default();
        config.theme = "solarized".to_string();
        config.normalize(&themes());
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_normalize_keeps_valid_values() {
        let mut config = Config::default();
        config.theme = "gruvbox-dark".to_string();
        config.data_dir = "/var/lib/verbdrill".to_string();
        config.normalize(&themes());
        assert_eq!(config.theme, "gruvbox-dark");
        assert_eq!(config.data_dir, "/var/lib/verbdrill");
    }

    #[test]
    fn test_normalize_blank_paths() {
        let mut config = Config::default();
        config.data_dir = "  ".to_string();
        config.vocabulary_file = Some(String::new());
        config.normalize(&themes());
        assert!(config.data_dir.contains("verbdrill"));
        assert!(config.vocabulary_file.is_none());
    }
}
