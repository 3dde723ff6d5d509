mod chat_vm;
mod markdown_vm;
mod module_vm;

pub use chat_vm::{ChatMessageVm, map_chat_messages, mime_for_file_name};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use module_vm::{ModuleCardVm, ProgressVm, map_module_cards, map_progress};
