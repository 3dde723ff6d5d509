use async_trait::async_trait;
use reqwest::Client;

use seekho_core::model::{CurriculumModule, Lesson, ModuleId, TrackId};

use crate::config::ApiConfig;
use crate::error::FetchError;

/// Read-only client for the remote curriculum service.
///
/// Both operations are single-shot: no retry, no backoff, no caching. Every
/// navigation re-fetches, and callers own the retry affordance.
#[async_trait]
pub trait CurriculumClient: Send + Sync {
    /// Fetch the ordered module list for a track.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on network or HTTP failure.
    async fn fetch_curriculum(&self, track: &TrackId)
    -> Result<Vec<CurriculumModule>, FetchError>;

    /// Fetch the lesson content for a single module.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the module does not exist server-side or the
    /// request fails.
    async fn fetch_lesson(&self, id: &ModuleId) -> Result<Lesson, FetchError>;
}

/// `CurriculumClient` backed by the HTTP curriculum service.
#[derive(Clone)]
pub struct HttpCurriculumClient {
    client: Client,
    config: ApiConfig,
}

impl HttpCurriculumClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CurriculumClient for HttpCurriculumClient {
    async fn fetch_curriculum(
        &self,
        track: &TrackId,
    ) -> Result<Vec<CurriculumModule>, FetchError> {
        let url = format!("{}/curriculum/{track}", self.config.base());
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let modules: Vec<CurriculumModule> = response.json().await?;
        Ok(modules)
    }

    async fn fetch_lesson(&self, id: &ModuleId) -> Result<Lesson, FetchError> {
        let url = format!("{}/lesson/{id}", self.config.base());
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let lesson: Lesson = response.json().await?;
        Ok(lesson)
    }
}
