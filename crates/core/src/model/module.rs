use serde::Deserialize;

use crate::model::ids::ModuleId;

/// One entry in the ordered curriculum list, as served by the curriculum
/// service.
///
/// The position of a module within the fetched list defines the course
/// sequence; prev/next navigation and progress all derive from that order.
/// The client never creates or mutates modules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurriculumModule {
    pub module_id: ModuleId,
    pub title: String,
    pub description: String,
}

/// Lesson content for a single module, fetched individually by module id.
///
/// `content` is markdown and is rendered as-is; the client performs no
/// validation beyond best-effort error display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub content: String,
}
