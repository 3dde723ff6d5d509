//! Pure navigation policy over the ordered curriculum list.
//!
//! All functions are total: a `current` id that is missing from the list
//! (stale bookmark, renamed module) yields "no navigation available" rather
//! than an error.

use crate::model::{CompletionSet, CurriculumModule, ModuleId};

/// Position of `id` within the ordered module list.
#[must_use]
pub fn module_index(modules: &[CurriculumModule], id: &ModuleId) -> Option<usize> {
    modules.iter().position(|module| &module.module_id == id)
}

/// Module preceding `current` in course order, if any.
#[must_use]
pub fn previous_module<'a>(
    modules: &'a [CurriculumModule],
    current: &ModuleId,
) -> Option<&'a CurriculumModule> {
    let index = module_index(modules, current)?;
    index.checked_sub(1).and_then(|prev| modules.get(prev))
}

/// Module following `current` in course order, if any.
#[must_use]
pub fn next_module<'a>(
    modules: &'a [CurriculumModule],
    current: &ModuleId,
) -> Option<&'a CurriculumModule> {
    let index = module_index(modules, current)?;
    modules.get(index + 1)
}

/// Fraction of the curriculum marked complete, in `[0, 1]`.
///
/// Only completed ids that still exist in the curriculum count; an empty
/// curriculum yields `0.0` rather than dividing by zero.
#[must_use]
pub fn progress_ratio(modules: &[CurriculumModule], completed: &CompletionSet) -> f64 {
    if modules.is_empty() {
        return 0.0;
    }
    let done = modules
        .iter()
        .filter(|module| completed.contains(&module.module_id))
        .count();
    done as f64 / modules.len() as f64
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn curriculum(ids: &[&str]) -> Vec<CurriculumModule> {
        ids.iter()
            .map(|id| CurriculumModule {
                module_id: ModuleId::new(*id),
                title: format!("Module {id}"),
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn index_of_known_and_unknown_ids() {
        let modules = curriculum(&["a", "b", "c"]);
        assert_eq!(module_index(&modules, &ModuleId::new("b")), Some(1));
        assert_eq!(module_index(&modules, &ModuleId::new("zz")), None);
    }

    #[test]
    fn previous_and_next_in_the_middle() {
        let modules = curriculum(&["m0", "m1", "m2", "m3", "m4"]);
        let current = ModuleId::new("m2");

        let prev = previous_module(&modules, &current).unwrap();
        let next = next_module(&modules, &current).unwrap();
        assert_eq!(prev.module_id, ModuleId::new("m1"));
        assert_eq!(next.module_id, ModuleId::new("m3"));
    }

    #[test]
    fn previous_at_first_and_next_at_last_are_none() {
        let modules = curriculum(&["a", "b", "c"]);
        assert!(previous_module(&modules, &ModuleId::new("a")).is_none());
        assert!(next_module(&modules, &ModuleId::new("c")).is_none());
    }

    #[test]
    fn stale_current_id_disables_navigation() {
        let modules = curriculum(&["a", "b"]);
        let gone = ModuleId::new("removed");
        assert!(previous_module(&modules, &gone).is_none());
        assert!(next_module(&modules, &gone).is_none());
    }

    #[test]
    fn navigation_over_empty_curriculum() {
        let modules: Vec<CurriculumModule> = Vec::new();
        let current = ModuleId::new("a");
        assert!(module_index(&modules, &current).is_none());
        assert!(previous_module(&modules, &current).is_none());
        assert!(next_module(&modules, &current).is_none());
    }

    #[test]
    fn ratio_is_zero_for_empty_curriculum() {
        let completed = CompletionSet::from_ids([ModuleId::new("a")]);
        assert_eq!(progress_ratio(&[], &completed), 0.0);
    }

    #[test]
    fn ratio_counts_only_modules_still_in_the_curriculum() {
        let modules = curriculum(&["a", "b", "c"]);
        let completed = CompletionSet::from_ids([ModuleId::new("b"), ModuleId::new("stale")]);
        let ratio = progress_ratio(&modules, &completed);
        assert!((ratio - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_is_one_when_everything_is_done() {
        let modules = curriculum(&["a", "b"]);
        let completed = CompletionSet::from_ids([ModuleId::new("a"), ModuleId::new("b")]);
        assert!((progress_ratio(&modules, &completed) - 1.0).abs() < f64::EPSILON);
    }
}
