use crate::core::loader::load_document;
use crate::domain::model::{Newsletter, NewsletterData};
use crate::domain::ports::{FileSource, NewsletterRepository};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Newsletter repository backed by a JSON file.
///
/// Same read-through caching contract as the counselor repository, with
/// exact id lookup instead of name lookup.
pub struct JsonNewsletterRepository<S: FileSource> {
    source: S,
    path: String,
    cache: OnceCell<Arc<[Newsletter]>>,
}

impl<S: FileSource> JsonNewsletterRepository<S> {
    pub fn new(source: S, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    async fn load(&self) -> Result<Arc<[Newsletter]>> {
        let data: NewsletterData = load_document(&self.source, &self.path).await?;

        for (index, newsletter) in data.newsletter_list.iter().enumerate() {
            newsletter
                .validate()
                .map_err(|e| e.at_field(&format!("newsletterList[{index}]")))?;
        }

        tracing::debug!(
            count = data.newsletter_list.len(),
            path = %self.path,
            "loaded newsletter collection"
        );

        Ok(data.newsletter_list.into())
    }
}

#[async_trait]
impl<S: FileSource> NewsletterRepository for JsonNewsletterRepository<S> {
    async fn get_all_newsletters(&self) -> Result<Arc<[Newsletter]>> {
        self.cache
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    async fn get_newsletter_by_id(&self, id: &str) -> Result<Option<Newsletter>> {
        if id.is_empty() {
            return Ok(None);
        }

        let newsletters = self.get_all_newsletters().await?;
        Ok(newsletters.iter().find(|n| n.id == id).cloned())
    }
}
