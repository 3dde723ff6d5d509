use seekho_core::model::{ChatMessage, ChatRole};

/// UI-ready representation of one transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessageVm {
    pub id: String,
    pub bubble_class: &'static str,
    pub text: String,
    pub attachment_label: Option<String>,
}

/// Convert the transcript into display bubbles, oldest first.
#[must_use]
pub fn map_chat_messages(messages: &[ChatMessage]) -> Vec<ChatMessageVm> {
    messages
        .iter()
        .map(|message| ChatMessageVm {
            id: message.id.to_string(),
            bubble_class: match message.role {
                ChatRole::User => "chat-bubble chat-bubble--user",
                ChatRole::Assistant => "chat-bubble chat-bubble--assistant",
            },
            text: message.text.clone(),
            attachment_label: message
                .image
                .as_ref()
                .map(|image| image.file_name.clone()),
        })
        .collect()
}

/// Best-effort mime type for a picked file, from its extension.
#[must_use]
pub fn mime_for_file_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
