use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::GameSession;
use services::{QuizLoopService, RngMode};
use storage::BuiltinCatalog;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Raise an intent the way an event handler would, then settle the DOM.
    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> GameSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| GameSession::clone(&session.peek()))
    }

    pub fn current_composer(&self) -> String {
        self.session()
            .current_item()
            .expect("current item")
            .composer()
            .to_owned()
    }

    pub fn wrong_composer(&self) -> String {
        let session = self.session();
        let correct = self.current_composer();
        session
            .options()
            .iter()
            .map(|opt| opt.composer().to_owned())
            .find(|composer| *composer != correct)
            .expect("another option")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(seed: u64) -> ViewHarness {
    let quiz_loop = Arc::new(
        QuizLoopService::from_source(&BuiltinCatalog, RngMode::Seeded(seed))
            .expect("builtin catalog"),
    );
    setup_view_harness_with_loop(quiz_loop)
}

pub fn setup_view_harness_with_loop(quiz_loop: Arc<QuizLoopService>) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        quiz_loop,
    });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
