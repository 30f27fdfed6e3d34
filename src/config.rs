//! classplan configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::CourseCatalog;

/// Main classplan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Planner service endpoint configuration
    pub api: ApiConfig,

    /// Course catalog for this deployment
    pub catalog: CatalogConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `.classplan.yml` in the working directory, then
    /// `~/.config/classplan/classplan.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".classplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("classplan").join("classplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Build the validated course catalog from the configured codes
    pub fn catalog(&self) -> Result<CourseCatalog> {
        CourseCatalog::from_raw(&self.catalog.courses).map_err(|e| eyre::eyre!("Invalid catalog entry: {}", e))
    }
}

/// Planner service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the planner backend
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Course catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Course codes available in this deployment
    pub courses: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        // Demo catalog shipped with the reference deployment
        Self {
            courses: [
                "CAI1001C", "CAI2100C", "CAI3821C", "CAI3822C", "COP1000", "COP2210", "COP3530", "ENC1101", "ENC1102",
                "MAC1105", "STA2023",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CourseCode;
    use std::io::Write;

    #[test]
    fn test_default_catalog_is_valid() {
        let config = Config::default();
        let catalog = config.catalog().unwrap();
        assert!(catalog.contains(&CourseCode::parse("ENC1101").unwrap()));
        assert!(catalog.contains(&CourseCode::parse("STA2023").unwrap()));
        assert_eq!(catalog.iter().count(), 11);
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api:\n  base-url: http://planner.example.edu\n  timeout-ms: 5000\ncatalog:\n  courses: [ENC1101]"
        )
        .unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.api.base_url, "http://planner.example.edu");
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.catalog.courses, vec!["ENC1101"]);
    }

    #[test]
    fn test_load_explicit_path_missing_file_errors() {
        let result = Config::load(Some(&PathBuf::from("/nonexistent/classplan.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_rejects_malformed_configured_code() {
        let config = Config {
            catalog: CatalogConfig {
                courses: vec!["not a code".to_string()],
            },
            ..Default::default()
        };
        assert!(config.catalog().is_err());
    }
}
