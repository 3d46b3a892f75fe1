use listen_core::model::{ListKey, ListPhase, TargetLanguage};
use listen_core::{Event, ListLoadError};
use services::InMemoryListSource;

use super::test_harness::{ScriptedTranslator, setup_listen_harness};

#[tokio::test(flavor = "current_thread")]
async fn listen_view_smoke_renders_controls() {
    let mut harness = setup_listen_harness(
        InMemoryListSource::new(),
        ScriptedTranslator::default(),
        TargetLanguage::default(),
    );
    harness.rebuild();

    let html = harness.render();
    for expected in [
        "Speak English",
        "Speak Translation",
        "Sentences",
        "Verbs",
        "Spanish",
        "French",
        "German",
        "Italian",
        "Russian",
        "Translation",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("width: 0%"), "missing empty bar in {html}");
    assert!(harness.source.fetches().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn listen_view_primes_then_speaks() {
    let mut harness = setup_listen_harness(
        InMemoryListSource::new().with_text(ListKey::Sentences, "Good morning\n"),
        ScriptedTranslator::default(),
        TargetLanguage::default(),
    );
    harness.rebuild();

    harness.send(Event::SpeakEnglish).await;
    assert_eq!(
        harness.session().list_phase(ListKey::Sentences),
        ListPhase::Ready
    );
    assert!(harness.speech.spoken().is_empty());

    harness.send(Event::SpeakEnglish).await;
    assert_eq!(harness.speech.spoken_texts(), vec!["Good morning"]);

    let html = harness.render();
    assert!(html.contains("Good morning"), "missing sentence in {html}");
    assert!(html.contains("Sentences: 1 / 1"), "missing progress in {html}");
    assert!(html.contains("width: 100%"), "missing full bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn listen_view_speaks_translation_and_clears_it_on_language_change() {
    let mut harness = setup_listen_harness(
        InMemoryListSource::new().with_text(ListKey::Sentences, "Good morning"),
        ScriptedTranslator::replying("Buenos días"),
        TargetLanguage::SPANISH,
    );
    harness.rebuild();

    harness.send(Event::SpeakEnglish).await;
    harness.send(Event::SpeakEnglish).await;
    harness.send(Event::SpeakTarget).await;

    assert_eq!(harness.translator.calls(), vec!["es:Good morning"]);
    assert_eq!(
        harness.speech.spoken_texts(),
        vec!["Good morning", "Buenos días"]
    );
    let html = harness.render();
    assert!(html.contains("Buenos días"), "missing translation in {html}");

    harness
        .send(Event::SelectTarget(TargetLanguage::FRENCH))
        .await;
    let html = harness.render();
    assert!(!html.contains("Buenos días"), "stale translation in {html}");
    assert_eq!(harness.session().target(), TargetLanguage::FRENCH);
}

#[tokio::test(flavor = "current_thread")]
async fn listen_view_surfaces_failures() {
    let mut harness = setup_listen_harness(
        InMemoryListSource::new().with_error(
            ListKey::Sentences,
            ListLoadError::Fetch("offline".to_string()),
        ),
        ScriptedTranslator::default(),
        TargetLanguage::default(),
    );
    harness.rebuild();

    harness.send(Event::SpeakEnglish).await;
    let html = harness.render();
    assert!(html.contains("load Sentences"), "missing load notice in {html}");

    harness
        .source
        .set(ListKey::Sentences, Ok("See you".to_string()));
    harness.send(Event::SpeakEnglish).await;
    harness.send(Event::SpeakEnglish).await;
    harness.send(Event::SpeakTarget).await;

    let html = harness.render();
    assert!(html.contains("translate:"), "missing translation notice in {html}");
    assert_eq!(harness.speech.spoken_texts(), vec!["See you"]);
    assert!(harness.session().translation().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn listen_view_switches_lists() {
    let mut harness = setup_listen_harness(
        InMemoryListSource::new()
            .with_text(ListKey::Sentences, "Hello")
            .with_text(ListKey::Verbs, "run"),
        ScriptedTranslator::default(),
        TargetLanguage::default(),
    );
    harness.rebuild();

    harness.send(Event::SelectList(ListKey::Verbs)).await;
    harness.send(Event::SpeakEnglish).await;
    harness.send(Event::SpeakEnglish).await;

    assert_eq!(harness.source.fetches(), vec![ListKey::Verbs]);
    assert_eq!(harness.speech.spoken_texts(), vec!["run"]);
    let html = harness.render();
    assert!(html.contains("Verbs: 1 / 1"), "missing progress in {html}");
}
