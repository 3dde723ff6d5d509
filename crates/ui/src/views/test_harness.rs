use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use seekho_core::Clock;
use seekho_core::model::{CurriculumModule, ImageAttachment, Lesson, ModuleId, TrackId};
use seekho_core::time::fixed_now;
use services::{CurriculumClient, FetchError, ProgressService, RelayError, TutorClient, TutorReply};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{CurriculumView, LessonView};

pub struct FakeCurriculum {
    modules: Vec<CurriculumModule>,
    lessons: HashMap<ModuleId, Lesson>,
    fail: bool,
}

impl FakeCurriculum {
    pub fn with_modules(ids: &[&str]) -> Self {
        let modules = ids
            .iter()
            .map(|id| CurriculumModule {
                module_id: ModuleId::new(*id),
                title: format!("Module {id}"),
                description: format!("All about {id}"),
            })
            .collect();
        let lessons = ids
            .iter()
            .map(|id| {
                (
                    ModuleId::new(*id),
                    Lesson {
                        title: format!("Module {id}"),
                        content: format!("# Lesson {id}\n\nBody for **{id}**."),
                    },
                )
            })
            .collect();
        Self {
            modules,
            lessons,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            modules: Vec::new(),
            lessons: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CurriculumClient for FakeCurriculum {
    async fn fetch_curriculum(
        &self,
        _track: &TrackId,
    ) -> Result<Vec<CurriculumModule>, FetchError> {
        if self.fail {
            return Err(FetchError::HttpStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(self.modules.clone())
    }

    async fn fetch_lesson(&self, id: &ModuleId) -> Result<Lesson, FetchError> {
        if self.fail {
            return Err(FetchError::HttpStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        self.lessons
            .get(id)
            .cloned()
            .ok_or(FetchError::HttpStatus(reqwest::StatusCode::NOT_FOUND))
    }
}

pub struct FakeTutor {
    reply: String,
    fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl FakeTutor {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl TutorClient for FakeTutor {
    async fn ask(
        &self,
        _question: &str,
        _image: Option<&ImageAttachment>,
    ) -> Result<TutorReply, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RelayError::HttpStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(TutorReply {
            text: self.reply.clone(),
        })
    }
}

struct TestApp {
    curriculum: Arc<FakeCurriculum>,
    tutor: Arc<FakeTutor>,
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn track(&self) -> TrackId {
        TrackId::new("solar-technician")
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn curriculum(&self) -> Arc<dyn CurriculumClient> {
        Arc::clone(&self.curriculum) as Arc<dyn CurriculumClient>
    }

    fn tutor(&self) -> Arc<dyn TutorClient> {
        Arc::clone(&self.tutor) as Arc<dyn TutorClient>
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Curriculum,
    Lesson(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Curriculum => rsx! { CurriculumView {} },
        ViewKind::Lesson(module_id) => rsx! { LessonView { module_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub tutor: Arc<FakeTutor>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, curriculum: FakeCurriculum) -> ViewHarness {
    setup_view_harness_with_storage(view, curriculum, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    curriculum: FakeCurriculum,
    storage: Storage,
) -> ViewHarness {
    let tutor = Arc::new(FakeTutor::replying("Here is an explanation."));
    let progress = Arc::new(ProgressService::new(Arc::clone(&storage.kv)));

    let app = Arc::new(TestApp {
        curriculum: Arc::new(curriculum),
        tutor: Arc::clone(&tutor),
        progress,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage, tutor }
}
