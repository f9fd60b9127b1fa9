use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "practice-data")]
#[command(about = "Data access CLI for the counseling practice site")]
pub struct CliConfig {
    /// Directory holding the JSON data files
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, default_value = "counselor.json")]
    pub counselor_file: String,

    #[arg(long, default_value = "newsletter.json")]
    pub newsletter_file: String,

    /// Optional TOML config file; its values override the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all counselors
    Counselors,
    /// Look up a counselor by first name (case-insensitive)
    Counselor { firstname: String },
    /// List all newsletters
    Newsletters,
    /// Look up a newsletter by id
    Newsletter { id: String },
}

impl CliConfig {
    /// Fold values from an optional TOML config file into this config.
    pub fn apply_file_overrides(&mut self) -> Result<()> {
        let Some(path) = self.config.clone() else {
            return Ok(());
        };

        let file = crate::config::TomlConfig::load_from_file(&path)?;
        self.data_dir = file.data.data_dir;
        self.counselor_file = file.data.counselor_file;
        self.newsletter_file = file.data.newsletter_file;
        if let Some(logging) = file.logging {
            self.verbose = self.verbose || logging.verbose;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn counselor_file(&self) -> &str {
        &self.counselor_file
    }

    fn newsletter_file(&self) -> &str {
        &self.newsletter_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_file_extensions(
            "data_files",
            &[self.counselor_file.clone(), self.newsletter_file.clone()],
            &["json"],
        )?;
        Ok(())
    }
}
