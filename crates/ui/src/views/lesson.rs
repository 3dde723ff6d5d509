use dioxus::prelude::*;
use dioxus_router::Link;

use seekho_core::model::{CompletionSet, CurriculumModule, Lesson, ModuleId};
use seekho_core::navigation;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{TutorChat, ViewError, ViewState, view_state_from_resource};
use crate::vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq)]
struct LessonData {
    lesson: Lesson,
    modules: Vec<CurriculumModule>,
}

#[component]
pub fn LessonView(module_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let progress = ctx.progress();
    let track = ctx.track();
    let current_id = ModuleId::new(module_id);

    let mut completed = use_signal(CompletionSet::new);
    let progress_for_load = progress.clone();
    use_future(move || {
        let progress = progress_for_load.clone();
        async move {
            let loaded = progress.load().await;
            completed.set(loaded);
        }
    });

    // The lesson and the full module list are fetched together: navigation
    // needs the ordered list, and both share one error state.
    let curriculum_for_resource = curriculum.clone();
    let resource_id = current_id.clone();
    let resource = use_resource(move || {
        let curriculum = curriculum_for_resource.clone();
        let track = track.clone();
        let id = resource_id.clone();
        async move {
            let lesson = curriculum
                .fetch_lesson(&id)
                .await
                .map_err(|_| ViewError::LessonUnavailable)?;
            let modules = curriculum
                .fetch_curriculum(&track)
                .await
                .map_err(|_| ViewError::LessonUnavailable)?;
            Ok::<_, ViewError>(LessonData { lesson, modules })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page lesson-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "placeholder", "Loading your lesson..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error-box",
                        p { "{err.message()}" }
                        div { class: "error-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut resource = resource;
                                    resource.restart();
                                },
                                "Try Again"
                            }
                            Link {
                                to: Route::Curriculum {},
                                class: "btn btn-muted",
                                "Back to Curriculum"
                            }
                        }
                    }
                },
                ViewState::Ready(data) => {
                    let is_done = completed().contains(&current_id);
                    let html = markdown_to_html(&data.lesson.content);
                    let prev = navigation::previous_module(&data.modules, &current_id).cloned();
                    let next = navigation::next_module(&data.modules, &current_id).cloned();
                    let toggle = {
                        let progress = progress.clone();
                        let id = current_id.clone();
                        // Flip the signal synchronously, persist async; see
                        // the curriculum view's toggle for the ordering
                        // contract.
                        move |_| {
                            let progress = progress.clone();
                            let next = completed().toggled(&id);
                            completed.set(next.clone());
                            spawn(async move {
                                if let Err(err) = progress.save(&next).await {
                                    tracing::warn!(
                                        error = %err,
                                        "could not persist completion toggle"
                                    );
                                }
                            });
                        }
                    };
                    rsx! {
                        nav { class: "breadcrumb",
                            Link { to: Route::Curriculum {}, "Curriculum" }
                            span { class: "breadcrumb-sep", "›" }
                            span { class: "breadcrumb-current", "{data.lesson.title}" }
                        }
                        article { class: "lesson-card",
                            h1 { "{data.lesson.title}" }
                            div { class: "lesson-content", dangerous_inner_html: "{html}" }
                        }
                        section { class: "completion-card",
                            label { class: "module-toggle module-toggle--large",
                                input {
                                    r#type: "checkbox",
                                    checked: is_done,
                                    onchange: toggle,
                                }
                                span {
                                    if is_done {
                                        "Module completed! You can move on to the next one."
                                    } else {
                                        "Mark this module as complete"
                                    }
                                }
                            }
                            if is_done {
                                if let Some(next) = next.clone() {
                                    Link {
                                        to: Route::Lesson { module_id: next.module_id.to_string() },
                                        class: "btn btn-primary",
                                        "Next Module"
                                    }
                                } else {
                                    span { class: "course-complete", "Course Complete!" }
                                }
                            }
                        }
                        nav { class: "lesson-nav",
                            Link {
                                to: Route::Curriculum {},
                                class: "btn btn-muted",
                                "Back to Curriculum"
                            }
                            if let Some(prev) = prev {
                                Link {
                                    to: Route::Lesson { module_id: prev.module_id.to_string() },
                                    class: "btn btn-secondary",
                                    "Previous Module"
                                }
                            }
                            if !is_done {
                                if let Some(next) = next {
                                    Link {
                                        to: Route::Lesson { module_id: next.module_id.to_string() },
                                        class: "btn btn-secondary",
                                        "Skip to Next"
                                    }
                                }
                            }
                        }
                        TutorChat {}
                    }
                }
            }
        }
    }
}
