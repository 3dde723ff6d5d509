use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// An image the user attached to a question.
///
/// The bytes are opaque to the client; they are forwarded to the tutor
/// service as a multipart file part and previewed by file name in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// One entry in the per-session chat transcript.
///
/// The transcript is append-only, lives only in memory, and is dropped when
/// the page is torn down. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub image: Option<ImageAttachment>,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(
        text: impl Into<String>,
        image: Option<ImageAttachment>,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            text: text.into(),
            image,
            sent_at,
        }
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Assistant,
            text: text.into(),
            image: None,
            sent_at,
        }
    }
}

/// Caller-side guard for tutor submissions: at least one of question text or
/// image must be present before the relay is invoked.
#[must_use]
pub fn can_submit(question: &str, image: Option<&ImageAttachment>) -> bool {
    !question.trim().is_empty() || image.is_some()
}
