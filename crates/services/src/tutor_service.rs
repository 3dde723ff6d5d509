use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use seekho_core::model::{ImageAttachment, can_submit};

use crate::config::ApiConfig;
use crate::error::RelayError;

/// Reply from the tutor service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorReply {
    pub text: String,
}

/// Relays a user question (text and/or image) to the remote tutor.
///
/// One request per call, no retry. The relay does not serialize concurrent
/// calls; the view keeps at most one request in flight.
#[async_trait]
pub trait TutorClient: Send + Sync {
    /// Submit a question with an optional image attachment.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::EmptyPrompt` when both question and image are
    /// empty (no request is issued), or `RelayError` on network/HTTP failure.
    async fn ask(
        &self,
        question: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<TutorReply, RelayError>;
}

/// `TutorClient` backed by the HTTP tutor service.
#[derive(Clone)]
pub struct HttpTutorClient {
    client: Client,
    config: ApiConfig,
}

impl HttpTutorClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TutorClient for HttpTutorClient {
    async fn ask(
        &self,
        question: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<TutorReply, RelayError> {
        // The view enforces this guard too; rejecting here keeps the
        // no-network-call property even for future callers.
        if !can_submit(question, image) {
            return Err(RelayError::EmptyPrompt);
        }

        let mut form = Form::new().text("question", question.to_owned());
        if let Some(image) = image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime_type)?;
            form = form.part("image", part);
        }

        let url = format!("{}/tutor", self.config.base());
        let response = self.client.post(url).multipart(form).send().await?;

        if !response.status().is_success() {
            return Err(RelayError::HttpStatus(response.status()));
        }

        let body: TutorResponseBody = response.json().await?;
        let text = body.response.trim().to_owned();
        if text.is_empty() {
            return Err(RelayError::EmptyReply);
        }

        Ok(TutorReply { text })
    }
}

#[derive(Debug, Deserialize)]
struct TutorResponseBody {
    response: String,
}
