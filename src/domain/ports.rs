use crate::domain::model::{Counselor, Newsletter};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to files under a data directory.
pub trait FileSource: Send + Sync {
    fn read_to_string(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn counselor_file(&self) -> &str;
    fn newsletter_file(&self) -> &str;
}

/// Counselor data access contract consumed by the presentation layer.
#[async_trait]
pub trait CounselorRepository: Send + Sync {
    /// All counselors in source-file order.
    async fn get_all_counselors(&self) -> Result<Arc<[Counselor]>>;

    /// Find a counselor by first name, case-insensitively.
    ///
    /// Empty input and unmatched names both return `Ok(None)`.
    async fn get_counselor_by_name(&self, firstname: &str) -> Result<Option<Counselor>>;
}

/// Newsletter data access contract consumed by the presentation layer.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// All newsletters in source-file order.
    async fn get_all_newsletters(&self) -> Result<Arc<[Newsletter]>>;

    /// Find a newsletter by exact id.
    ///
    /// Empty input and unmatched ids both return `Ok(None)`.
    async fn get_newsletter_by_id(&self, id: &str) -> Result<Option<Newsletter>>;
}
