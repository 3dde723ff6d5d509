use seekho_core::model::{CompletionSet, CurriculumModule, ModuleId};
use seekho_core::navigation;

/// UI-ready representation of one module row on the curriculum page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub id: ModuleId,
    /// 1-based position in course order.
    pub position: usize,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub action_label: &'static str,
}

/// Convert the fetched curriculum plus the completion set into row view
/// models, preserving course order.
#[must_use]
pub fn map_module_cards(
    modules: &[CurriculumModule],
    completed: &CompletionSet,
) -> Vec<ModuleCardVm> {
    modules
        .iter()
        .enumerate()
        .map(|(index, module)| {
            let done = completed.contains(&module.module_id);
            ModuleCardVm {
                id: module.module_id.clone(),
                position: index + 1,
                title: module.title.clone(),
                description: module.description.clone(),
                completed: done,
                action_label: if done { "Review Module" } else { "Start Learning" },
            }
        })
        .collect()
}

/// Progress bar state for the curriculum page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed: usize,
    pub total: usize,
    /// Rounded percentage in `0..=100`.
    pub percent: u32,
    pub count_label: String,
    pub encouragement: String,
}

#[must_use]
pub fn map_progress(modules: &[CurriculumModule], completed: &CompletionSet) -> ProgressVm {
    let total = modules.len();
    let done = modules
        .iter()
        .filter(|module| completed.contains(&module.module_id))
        .count();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (navigation::progress_ratio(modules, completed) * 100.0).round() as u32;

    let encouragement = if total > 0 && done == total {
        "Congratulations! You've completed all modules!".to_owned()
    } else if done > 0 {
        format!("Keep going! You're {percent}% done.")
    } else {
        "Start your journey by completing the first module!".to_owned()
    };

    ProgressVm {
        completed: done,
        total,
        percent,
        count_label: format!("{done} of {total} modules completed"),
        encouragement,
    }
}
