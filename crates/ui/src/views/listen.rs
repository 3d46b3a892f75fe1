use std::sync::Arc;

use dioxus::prelude::*;
use listen_core::model::{ListKey, TargetLanguage, Voice};
use listen_core::{Effect, Event, SessionState};
use services::PlaybackController;

use crate::context::AppContext;
use crate::speech::use_voice_catalog;
use crate::vm::map_listen_vm;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Spawn every effect on the UI runtime and apply whatever it reports back.
fn run_effects(
    mut session: Signal<SessionState>,
    playback: &Arc<PlaybackController>,
    effects: Vec<Effect>,
) {
    for effect in effects {
        let playback = Arc::clone(playback);
        spawn(async move {
            if let Some(event) = playback.perform(effect).await {
                let follow_up = session.write().apply(event);
                run_effects(session, &playback, follow_up);
            }
        });
    }
}

#[component]
pub fn ListenView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session =
        use_signal(|| SessionState::new(ctx.initial_list(), ctx.initial_target()));

    let dispatch = {
        let playback = ctx.playback();
        use_callback(move |event: Event| {
            let effects = session.write().apply(event);
            run_effects(session, &playback, effects);
        })
    };

    let on_voices = use_callback(move |voices: Vec<Voice>| {
        dispatch.call(Event::VoicesChanged(voices));
    });
    use_voice_catalog(on_voices);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ListenTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let on_list_change = move |evt: FormEvent| match evt.value().parse::<ListKey>() {
        Ok(list) => dispatch.call(Event::SelectList(list)),
        Err(err) => tracing::warn!(error = %err, "ignoring list selection"),
    };
    let on_target_change = move |evt: FormEvent| match TargetLanguage::from_voice_tag(&evt.value()) {
        Ok(target) => dispatch.call(Event::SelectTarget(target)),
        Err(err) => tracing::warn!(error = %err, "ignoring language selection"),
    };

    let vm = map_listen_vm(&session.read());
    let lists = vm.lists.clone();
    let languages = vm.languages.clone();
    let progress_width = vm.progress_width();
    let progress_value = format!("{:.0}", vm.progress_percent);
    let english = if vm.english.is_empty() {
        "Press \"Speak English\" to hear a sentence.".to_string()
    } else {
        vm.english.clone()
    };
    let status = if vm.loading {
        Some("Loading list...")
    } else if vm.translating {
        Some("Translating...")
    } else {
        None
    };

    rsx! {
        section { class: "page listen", id: "listen-root",
            div { class: "listen__controls",
                label { class: "field",
                    span { class: "field__label", "List" }
                    select {
                        id: "list-select",
                        onchange: on_list_change,
                        for item in lists {
                            option {
                                key: "{item.value}",
                                value: "{item.value}",
                                selected: item.selected,
                                "{item.label}"
                            }
                        }
                    }
                }
                label { class: "field",
                    span { class: "field__label", "Translate to" }
                    select {
                        id: "target-select",
                        onchange: on_target_change,
                        for item in languages {
                            option {
                                key: "{item.value}",
                                value: "{item.value}",
                                selected: item.selected,
                                "{item.label}"
                            }
                        }
                    }
                }
            }

            div { class: "listen__actions",
                button {
                    id: "speak-english",
                    class: "btn btn-primary",
                    onclick: move |_| dispatch.call(Event::SpeakEnglish),
                    "Speak English"
                }
                button {
                    id: "speak-target",
                    class: "btn",
                    disabled: !vm.can_speak_target,
                    onclick: move |_| dispatch.call(Event::SpeakTarget),
                    "Speak Translation"
                }
            }

            div { class: "listen__progress",
                p { class: "listen__progress-label", id: "progress-label", "{vm.progress_label}" }
                div {
                    class: "progress",
                    role: "progressbar",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    aria_valuenow: "{progress_value}",
                    div { class: "progress__fill", style: "width: {progress_width}" }
                }
                if let Some(status) = status {
                    p { class: "listen__status", "{status}" }
                }
                if let Some(notice) = vm.notice.as_ref() {
                    p { class: "notice", role: "alert", "{notice}" }
                }
            }

            div { class: "listen__cards",
                article { class: "card",
                    h3 { "English" }
                    p { id: "english-text", "{english}" }
                }
                article { class: "card",
                    h3 { "Translation" }
                    p { id: "translation-text", "{vm.translation}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ListenTestHandles {
    dispatch: Rc<RefCell<Option<Callback<Event>>>>,
    session: Rc<RefCell<Option<Signal<SessionState>>>>,
}

#[cfg(test)]
impl ListenTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<Event>, session: Signal<SessionState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<Event> {
        (*self.dispatch.borrow()).expect("listen dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<SessionState> {
        (*self.session.borrow()).expect("listen session registered")
    }
}
