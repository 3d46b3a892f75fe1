use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use listen_core::model::{ListKey, TargetLanguage};
use listen_core::{SessionState, TranslationError};
use services::{AppServices, InMemoryListSource, ListenConfig, RecordingSpeech, Translator};

use crate::context::{UiApp, build_app_context};
use crate::views::ListenView;
use crate::views::listen::ListenTestHandles;

/// Translator that answers from a fixed script, or fails when none is set.
#[derive(Clone, Default)]
pub struct ScriptedTranslator {
    reply: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTranslator {
    pub fn replying(reply: &str) -> Self {
        let translator = Self::default();
        translator.set_reply(Some(reply));
        translator
    }

    pub fn set_reply(&self, reply: Option<&str>) {
        *self.reply.lock().unwrap() = reply.map(ToString::to_string);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        self.calls.lock().unwrap().push(format!("{target}:{text}"));
        self.reply
            .lock()
            .unwrap()
            .clone()
            .ok_or(TranslationError::Status(503))
    }
}

struct TestApp {
    services: AppServices,
    list: ListKey,
    target: TargetLanguage,
}

impl UiApp for TestApp {
    fn playback(&self) -> Arc<services::PlaybackController> {
        self.services.playback()
    }

    fn initial_list(&self) -> ListKey {
        self.list
    }

    fn initial_target(&self) -> TargetLanguage {
        self.target
    }
}

#[derive(Props, Clone)]
struct ListenHarnessProps {
    app: Arc<TestApp>,
    handles: ListenTestHandles,
}

impl PartialEq for ListenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ListenRouterHarness(props: ListenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
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
    rsx! { ListenView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub source: InMemoryListSource,
    pub translator: ScriptedTranslator,
    pub speech: RecordingSpeech,
    pub handles: ListenTestHandles,
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

    /// Drive until chained effects (load, translate, speak) have all run.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub async fn send(&mut self, event: listen_core::Event) {
        self.handles.dispatch().call(event);
        drive_dom(&mut self.dom);
        self.settle().await;
    }

    pub fn session(&self) -> SessionState {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().clone())
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

pub fn setup_listen_harness(
    source: InMemoryListSource,
    translator: ScriptedTranslator,
    target: TargetLanguage,
) -> ViewHarness {
    let config = ListenConfig::from_lookup(|_| None).expect("default config");
    let speech = RecordingSpeech::new();
    let services = AppServices::with_parts(
        config,
        Arc::new(source.clone()),
        Arc::new(translator.clone()),
        Arc::new(speech.clone()),
    );
    let handles = ListenTestHandles::default();
    let app = Arc::new(TestApp {
        services,
        list: ListKey::Sentences,
        target,
    });

    let dom = VirtualDom::new_with_props(
        ListenRouterHarness,
        ListenHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        source,
        translator,
        speech,
        handles,
    }
}
