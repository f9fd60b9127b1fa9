use crate::core::ConfigProvider;
use crate::utils::error::{DataError, Result};
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration, e.g.:
///
/// ```toml
/// [data]
/// data_dir = "./data"
/// counselor_file = "counselor.json"
/// newsletter_file = "newsletter.json"
///
/// [logging]
/// verbose = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub data: DataConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub data_dir: String,
    #[serde(default = "default_counselor_file")]
    pub counselor_file: String,
    #[serde(default = "default_newsletter_file")]
    pub newsletter_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
}

fn default_counselor_file() -> String {
    "counselor.json".to_string()
}

fn default_newsletter_file() -> String {
    "newsletter.json".to_string()
}

impl TomlConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| DataError::Config {
            message: format!("Cannot read config file {}: {}", path.display(), e),
        })?;

        let config: TomlConfig = toml::from_str(&contents).map_err(|e| DataError::Config {
            message: format!("Invalid TOML in {}: {}", path.display(), e),
        })?;

        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.data.data_dir
    }

    fn counselor_file(&self) -> &str {
        &self.data.counselor_file
    }

    fn newsletter_file(&self) -> &str {
        &self.data.newsletter_file
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data.data_dir", &self.data.data_dir)?;
        validate_file_extensions(
            "data files",
            &[
                self.data.counselor_file.clone(),
                self.data.newsletter_file.clone(),
            ],
            &["json"],
        )?;
        Ok(())
    }
}
