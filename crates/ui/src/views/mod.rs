mod curriculum;
mod lesson;
mod state;
mod tutor_chat;

pub use curriculum::CurriculumView;
pub use lesson::LessonView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use tutor_chat::TutorChat;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;
