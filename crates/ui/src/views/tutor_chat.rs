use std::sync::Arc;

use dioxus::prelude::*;

use seekho_core::model::{can_submit, ChatMessage, ImageAttachment};
use services::TutorClient;

use crate::context::AppContext;
use crate::vm::{map_chat_messages, mime_for_file_name};

const GREETING: &str =
    "Hello! I'm your AI tutor. Ask me anything about this module and I'll do my best to help.";
const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Resolve a tutor request into display text. Any relay failure is absorbed
/// into the generic fallback message; raw errors never reach the transcript.
async fn relay_reply(
    tutor: &Arc<dyn TutorClient>,
    question: &str,
    image: Option<&ImageAttachment>,
) -> String {
    match tutor.ask(question, image).await {
        Ok(reply) => reply.text,
        Err(_) => FALLBACK_REPLY.to_owned(),
    }
}

#[component]
pub fn TutorChat() -> Element {
    let ctx = use_context::<AppContext>();
    let tutor = ctx.tutor();
    let clock = ctx.clock();

    let mut messages =
        use_signal(move || vec![ChatMessage::assistant(GREETING, clock.now())]);
    let mut input = use_signal(String::new);
    let mut attachment = use_signal(|| Option::<ImageAttachment>::None);
    let mut busy = use_signal(|| false);

    let can_send = !busy() && can_submit(&input(), attachment().as_ref());

    let send = {
        let tutor = tutor.clone();
        move |_| {
            if busy() {
                return;
            }
            let question = input();
            let image = attachment();
            if !can_submit(&question, image.as_ref()) {
                return;
            }

            messages
                .write()
                .push(ChatMessage::user(&question, image.clone(), clock.now()));
            input.set(String::new());
            attachment.set(None);
            busy.set(true);

            let tutor = tutor.clone();
            spawn(async move {
                let reply = relay_reply(&tutor, &question, image.as_ref()).await;
                messages
                    .write()
                    .push(ChatMessage::assistant(reply, clock.now()));
                busy.set(false);
            });
        }
    };

    let bubbles = map_chat_messages(&messages());

    rsx! {
        section { class: "tutor-chat",
            h2 { class: "tutor-chat-title", "Ask the AI Tutor" }
            div { class: "chat-log",
                for bubble in bubbles {
                    div { key: "{bubble.id}", class: "{bubble.bubble_class}",
                        if let Some(label) = bubble.attachment_label {
                            span { class: "chat-attachment-label", "📎 {label}" }
                        }
                        p { "{bubble.text}" }
                    }
                }
                if busy() {
                    div { class: "chat-bubble chat-bubble--assistant chat-bubble--pending",
                        p { "AI is thinking..." }
                    }
                }
            }
            if let Some(image) = attachment() {
                div { class: "chat-attachment-preview",
                    span { "📎 {image.file_name}" }
                    button {
                        class: "chat-attachment-remove",
                        r#type: "button",
                        onclick: move |_| attachment.set(None),
                        "Remove"
                    }
                }
            }
            form {
                class: "chat-composer",
                onsubmit: send,
                input {
                    class: "chat-input",
                    r#type: "text",
                    placeholder: "Ask a question about this module...",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                }
                label { class: "chat-attach",
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |evt| {
                            let files = evt.files();
                            spawn(async move {
                                let Some(file) = files.into_iter().next() else {
                                    return;
                                };
                                let name = file.name();
                                if let Ok(bytes) = file.read_bytes().await {
                                    attachment
                                        .set(Some(ImageAttachment::new(
                                            &name,
                                            mime_for_file_name(&name),
                                            bytes.to_vec(),
                                        )));
                                }
                            });
                        },
                    }
                    span { "Attach image" }
                }
                button {
                    class: "btn btn-primary chat-send",
                    r#type: "submit",
                    disabled: !can_send,
                    "Send"
                }
            }
        }
    }
}
