mod chat;
mod ids;
mod module;
mod progress;

pub use chat::{can_submit, ChatMessage, ChatRole, ImageAttachment};
pub use ids::{ModuleId, TrackId};
pub use module::{CurriculumModule, Lesson};
pub use progress::CompletionSet;
