pub mod counselor;
mod loader;
pub mod newsletter;

pub use crate::domain::model::{Counselor, Newsletter};
pub use crate::domain::ports::{ConfigProvider, CounselorRepository, FileSource, NewsletterRepository};
pub use crate::utils::error::Result;
