// Adapters layer: concrete implementations for external systems (filesystem today).

use crate::domain::ports::FileSource;
use crate::utils::error::{DataError, Result};
use std::path::{Path, PathBuf};

/// Reads data files from a base directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    base_path: PathBuf,
}

impl LocalFileSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl FileSource for LocalFileSource {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        match tokio::fs::read_to_string(&full_path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DataError::NotFound {
                path: full_path.display().to_string(),
            }),
            Err(e) => Err(DataError::Io {
                path: full_path.display().to_string(),
                source: e,
            }),
        }
    }
}
