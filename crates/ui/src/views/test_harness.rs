use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::RngSource;
use quiz_core::model::CountryDraft;
use services::{CountrySource, QuizLoopService, SourceError, StatusCode};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

pub struct StaticSource {
    pub drafts: Vec<CountryDraft>,
}

#[async_trait::async_trait]
impl CountrySource for StaticSource {
    async fn fetch_countries(&self) -> Result<Vec<CountryDraft>, SourceError> {
        Ok(self.drafts.clone())
    }
}

pub struct FailingSource;

#[async_trait::async_trait]
impl CountrySource for FailingSource {
    async fn fetch_countries(&self) -> Result<Vec<CountryDraft>, SourceError> {
        Err(SourceError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE))
    }
}

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
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
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

pub fn sample_countries(names: &[&str]) -> Vec<CountryDraft> {
    names
        .iter()
        .map(|name| {
            CountryDraft::new(*name)
                .with_official(format!("Republic of {name}"))
                .with_svg(format!("https://flags.example/{name}.svg"))
        })
        .collect()
}

pub fn setup_view_harness(source: Arc<dyn CountrySource>, rng_source: RngSource) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(source).with_rng_source(rng_source));
    let app = Arc::new(TestApp { quiz_loop });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app });
    ViewHarness { dom }
}
