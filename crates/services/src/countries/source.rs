use async_trait::async_trait;

use quiz_core::model::CountryDraft;

use crate::error::SourceError;

/// Anything that can hand back the raw country catalog.
///
/// Drafts are returned unvalidated; filtering happens in the loader.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<CountryDraft>, SourceError>;
}
