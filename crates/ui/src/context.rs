use std::sync::Arc;

use seekho_core::Clock;
use seekho_core::model::TrackId;
use services::{CurriculumClient, ProgressService, TutorClient};

/// What the composition root must supply for the UI to run.
pub trait UiApp: Send + Sync {
    fn track(&self) -> TrackId;
    fn clock(&self) -> Clock;

    fn curriculum(&self) -> Arc<dyn CurriculumClient>;
    fn tutor(&self) -> Arc<dyn TutorClient>;
    fn progress(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    track: TrackId,
    clock: Clock,

    curriculum: Arc<dyn CurriculumClient>,
    tutor: Arc<dyn TutorClient>,
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            track: app.track(),
            clock: app.clock(),
            curriculum: app.curriculum(),
            tutor: app.tutor(),
            progress: app.progress(),
        }
    }

    #[must_use]
    pub fn track(&self) -> TrackId {
        self.track.clone()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
