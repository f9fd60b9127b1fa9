pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::LocalFileSource;
pub use config::TomlConfig;
pub use core::{counselor::JsonCounselorRepository, newsletter::JsonNewsletterRepository};
pub use domain::model::{Counselor, Newsletter};
pub use domain::ports::{ConfigProvider, CounselorRepository, FileSource, NewsletterRepository};
pub use utils::error::{DataError, Result};
