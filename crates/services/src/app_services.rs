use std::sync::Arc;

use seekho_core::model::TrackId;
use storage::repository::Storage;

use crate::config::ApiConfig;
use crate::curriculum_service::{CurriculumClient, HttpCurriculumClient};
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::tutor_service::{HttpTutorClient, TutorClient};

/// Assembles app-facing services over storage and the remote API.
#[derive(Clone)]
pub struct AppServices {
    track: TrackId,
    curriculum: Arc<dyn CurriculumClient>,
    tutor: Arc<dyn TutorClient>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(storage, config))
    }

    /// Assemble services over an already-built storage bundle.
    #[must_use]
    pub fn new(storage: Storage, config: ApiConfig) -> Self {
        let track = config.track.clone();
        let curriculum: Arc<dyn CurriculumClient> =
            Arc::new(HttpCurriculumClient::new(config.clone()));
        let tutor: Arc<dyn TutorClient> = Arc::new(HttpTutorClient::new(config));
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.kv)));

        Self {
            track,
            curriculum,
            tutor,
            progress,
        }
    }

    #[must_use]
    pub fn track(&self) -> TrackId {
        self.track.clone()
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<dyn CurriculumClient> {
        Arc::clone(&self.curriculum)
    }

    #[must_use]
    pub fn tutor(&self) -> Arc<dyn TutorClient> {
        Arc::clone(&self.tutor)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}
