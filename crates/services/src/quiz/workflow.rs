use std::sync::Arc;

use log::{debug, error, info};
use rand::Rng;

use quiz_core::RngSource;
use quiz_core::model::{Country, Dataset};

use super::session::QuizSession;
use crate::countries::CountrySource;
use crate::error::LoadError;

/// Orchestrates the one-shot dataset load and hands back a playable session.
#[derive(Clone)]
pub struct QuizLoopService {
    source: Arc<dyn CountrySource>,
    rng_source: RngSource,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self {
            source,
            rng_source: RngSource::default(),
        }
    }

    #[must_use]
    pub fn with_rng_source(mut self, rng_source: RngSource) -> Self {
        self.rng_source = rng_source;
        self
    }

    #[must_use]
    pub fn rng_source(&self) -> RngSource {
        self.rng_source
    }

    /// Fetch, filter and shuffle the playable countries.
    ///
    /// Entries without a common name or a flag are dropped.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the source fails.
    pub async fn load_dataset<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Dataset, LoadError> {
        let drafts = self.source.fetch_countries().await?;
        let fetched = drafts.len();

        let countries: Vec<Country> = drafts
            .into_iter()
            .filter_map(|draft| match draft.validate() {
                Ok(country) => Some(country),
                Err(err) => {
                    debug!("skipping country: {err}");
                    None
                }
            })
            .collect();

        info!("loaded {} of {fetched} countries", countries.len());
        Ok(Dataset::shuffled(countries, rng))
    }

    /// Load the dataset and start a session over it.
    ///
    /// Never fails: a failed load yields a session in the `Error` status.
    pub async fn start_session(&self) -> QuizSession {
        let mut rng = self.rng_source.build();
        let result = self.load_dataset(&mut rng).await;
        if let Err(err) = &result {
            error!("failed to load countries: {err}");
        }

        let mut session = QuizSession::new(rng);
        session.finish_loading(result);
        session
    }
}
