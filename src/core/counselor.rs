use crate::core::loader::load_document;
use crate::domain::model::{Counselor, CounselorData};
use crate::domain::ports::{CounselorRepository, FileSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Counselor repository backed by a JSON file.
///
/// The collection is read, validated, and cached on first access; later
/// calls serve the cache. A failed load leaves the cache empty, so the
/// next call retries the read instead of pinning the failure for the
/// process lifetime. Concurrent first loads collapse into one read.
pub struct JsonCounselorRepository<S: FileSource> {
    source: S,
    path: String,
    cache: OnceCell<Arc<[Counselor]>>,
}

impl<S: FileSource> JsonCounselorRepository<S> {
    pub fn new(source: S, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    async fn load(&self) -> Result<Arc<[Counselor]>> {
        let data: CounselorData = load_document(&self.source, &self.path).await?;

        for (index, counselor) in data.counselor_list.iter().enumerate() {
            counselor
                .validate()
                .map_err(|e| e.at_field(&format!("counselorList[{index}]")))?;
        }

        tracing::debug!(
            count = data.counselor_list.len(),
            path = %self.path,
            "loaded counselor collection"
        );

        Ok(data.counselor_list.into())
    }
}

#[async_trait]
impl<S: FileSource> CounselorRepository for JsonCounselorRepository<S> {
    async fn get_all_counselors(&self) -> Result<Arc<[Counselor]>> {
        self.cache
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    async fn get_counselor_by_name(&self, firstname: &str) -> Result<Option<Counselor>> {
        if firstname.is_empty() {
            return Ok(None);
        }

        let counselors = self.get_all_counselors().await?;
        let needle = firstname.to_lowercase();

        Ok(counselors
            .iter()
            .find(|c| c.first_name.to_lowercase() == needle)
            .cloned())
    }
}
