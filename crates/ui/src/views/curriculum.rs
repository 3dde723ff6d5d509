use dioxus::prelude::*;
use dioxus_router::Link;

use seekho_core::model::{CompletionSet, CurriculumModule};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ModuleCardVm, map_module_cards, map_progress};

#[derive(Clone, Debug, PartialEq)]
struct CurriculumData {
    modules: Vec<CurriculumModule>,
}

#[component]
pub fn CurriculumView() -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let progress = ctx.progress();
    let track = ctx.track();

    // Completion state is owned by this view: loaded once at mount, then
    // mutated only by the toggle handler. A response that arrives after the
    // view is gone updates nothing.
    let mut completed = use_signal(CompletionSet::new);
    let progress_for_load = progress.clone();
    use_future(move || {
        let progress = progress_for_load.clone();
        async move {
            let loaded = progress.load().await;
            completed.set(loaded);
        }
    });

    let resource = use_resource(move || {
        let curriculum = curriculum.clone();
        let track = track.clone();
        async move {
            let modules = curriculum
                .fetch_curriculum(&track)
                .await
                .map_err(|_| ViewError::CurriculumUnavailable)?;
            Ok::<_, ViewError>(CurriculumData { modules })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page curriculum-page",
            header { class: "view-header",
                h2 { class: "view-title", "Your Learning Journey" }
                p { class: "view-subtitle",
                    "Work through the modules in order and mark each one done when you finish."
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "placeholder", "Loading your personalized curriculum..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error-box",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Try Again"
                        }
                    }
                },
                ViewState::Ready(data) => {
                    let done = completed();
                    let progress_vm = map_progress(&data.modules, &done);
                    let cards = map_module_cards(&data.modules, &done);
                    rsx! {
                        section { class: "progress-card",
                            div { class: "progress-heading",
                                h3 { "Progress" }
                                span { class: "progress-count", "{progress_vm.count_label}" }
                            }
                            div { class: "progress-track",
                                div {
                                    class: "progress-fill",
                                    style: "width: {progress_vm.percent}%",
                                }
                            }
                            p { class: "progress-note", "{progress_vm.encouragement}" }
                        }
                        div { class: "module-list",
                            for card in cards {
                                ModuleCard {
                                    key: "{card.id}",
                                    card: card.clone(),
                                    ontoggle: {
                                        let progress = progress.clone();
                                        let id = card.id.clone();
                                        // The signal flips synchronously so a
                                        // second click always derives from the
                                        // first; only the persist is async.
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
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ModuleCard(card: ModuleCardVm, ontoggle: EventHandler<FormEvent>) -> Element {
    let card_class = if card.completed {
        "module-card module-card--done"
    } else {
        "module-card"
    };
    rsx! {
        div { class: "{card_class}",
            div { class: "module-card-position",
                if card.completed {
                    span { class: "module-check", "✓" }
                } else {
                    span { "{card.position}" }
                }
            }
            div { class: "module-card-body",
                h3 { "{card.title}" }
                p { "{card.description}" }
                div { class: "module-card-actions",
                    Link {
                        to: Route::Lesson { module_id: card.id.to_string() },
                        class: "module-link",
                        "{card.action_label}"
                    }
                    label { class: "module-toggle",
                        input {
                            r#type: "checkbox",
                            checked: card.completed,
                            onchange: move |evt| ontoggle.call(evt),
                        }
                        span { if card.completed { "Done" } else { "Mark Done" } }
                    }
                }
            }
        }
    }
}
