#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod curriculum_service;
pub mod error;
pub mod progress_service;
pub mod tutor_service;

pub use app_services::AppServices;
pub use config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_TRACK};
pub use curriculum_service::{CurriculumClient, HttpCurriculumClient};
pub use error::{AppServicesError, ConfigError, FetchError, ProgressError, RelayError};
pub use progress_service::{PROGRESS_KEY, ProgressService};
pub use tutor_service::{HttpTutorClient, TutorClient, TutorReply};
