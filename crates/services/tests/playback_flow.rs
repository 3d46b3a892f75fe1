use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use listen_core::model::{ListKey, ListPhase, TargetLanguage, Voice};
use listen_core::{Event, ListLoadError, Notice, SessionState, TranslationError};
use services::{
    AppServices, InMemoryListSource, ListenConfig, PlaybackController, RecordingSpeech,
    SpeechError, Translator,
};

#[derive(Default)]
struct StubTranslator {
    calls: Mutex<Vec<(String, String, String)>>,
    fail: bool,
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), source.to_string(), target.to_string()));
        if self.fail {
            return Err(TranslationError::Request("connection reset".to_string()));
        }
        Ok(format!("[{target}] {text}"))
    }
}

struct Fixture {
    playback: Arc<PlaybackController>,
    source: InMemoryListSource,
    translator: Arc<StubTranslator>,
    speech: RecordingSpeech,
}

fn fixture(source: InMemoryListSource, translator: StubTranslator) -> Fixture {
    let config = ListenConfig::from_lookup(|_| None).unwrap();
    let translator = Arc::new(translator);
    let speech = RecordingSpeech::new();
    let services = AppServices::with_parts(
        config,
        Arc::new(source.clone()),
        translator.clone(),
        Arc::new(speech.clone()),
    );
    Fixture {
        playback: services.playback(),
        source,
        translator,
        speech,
    }
}

#[tokio::test]
async fn first_press_primes_then_second_press_speaks() {
    let fx = fixture(
        InMemoryListSource::new().with_text(ListKey::Sentences, "Hello there\nGood night\n"),
        StubTranslator::default(),
    );
    let mut session = SessionState::default();

    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;

    assert_eq!(session.list_phase(ListKey::Sentences), ListPhase::Ready);
    assert!(fx.speech.spoken().is_empty());
    assert!(session.sentence().is_none());

    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;

    let spoken = fx.speech.spoken();
    assert_eq!(spoken.len(), 1);
    assert_eq!(Some(spoken[0].text.as_str()), session.sentence());
    assert_eq!(spoken[0].lang, "en-GB");
    assert_eq!(session.progress().unwrap().label(), "Sentences: 1 / 2");
}

#[tokio::test]
async fn exhausting_a_list_reloads_with_a_new_shuffle() {
    let fx = fixture(
        InMemoryListSource::new().with_text(ListKey::Verbs, "go\nsee\n"),
        StubTranslator::default(),
    );
    let mut session = SessionState::new(ListKey::Verbs, TargetLanguage::SPANISH);

    for _ in 0..3 {
        fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;
    }
    assert_eq!(fx.speech.spoken().len(), 2);
    assert_eq!(session.list(ListKey::Verbs).unwrap().index(), 2);

    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;

    assert_eq!(fx.speech.spoken().len(), 2);
    assert_eq!(session.list(ListKey::Verbs).unwrap().index(), 0);
    assert_eq!(fx.source.fetches(), vec![ListKey::Verbs, ListKey::Verbs]);

    let mut spoken = fx.speech.spoken_texts();
    spoken.sort();
    assert_eq!(spoken, vec!["go", "see"]);
}

#[tokio::test]
async fn translation_is_fetched_and_spoken_in_target_voice() {
    let fx = fixture(
        InMemoryListSource::new().with_text(ListKey::Sentences, "Thank you"),
        StubTranslator::default(),
    );
    let mut session = SessionState::new(ListKey::Sentences, TargetLanguage::ITALIAN);
    fx.playback
        .dispatch(
            &mut session,
            Event::VoicesChanged(vec![
                Voice::new("Daniel", "en-GB"),
                Voice::new("Alice", "it-IT"),
            ]),
        )
        .await;
    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;
    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;

    fx.playback.dispatch(&mut session, Event::SpeakTarget).await;

    assert_eq!(
        fx.translator.calls.lock().unwrap().as_slice(),
        [(
            "Thank you".to_string(),
            "en".to_string(),
            "it".to_string()
        )]
    );
    assert_eq!(session.translation(), Some("[it] Thank you"));
    let spoken = fx.speech.spoken();
    assert_eq!(spoken.len(), 2);
    assert_eq!(spoken[1].text, "[it] Thank you");
    assert_eq!(spoken[1].lang, "it-IT");
    assert_eq!(spoken[1].voice.as_ref().map(|v| v.name.as_str()), Some("Alice"));
}

#[tokio::test]
async fn failures_surface_as_notices() {
    let fx = fixture(
        InMemoryListSource::new().with_error(
            ListKey::Sentences,
            ListLoadError::Fetch("dns error".to_string()),
        ),
        StubTranslator {
            fail: true,
            ..StubTranslator::default()
        },
    );
    let mut session = SessionState::default();

    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;
    assert!(matches!(
        session.notice(),
        Some(Notice::ListLoadFailed {
            list: ListKey::Sentences,
            ..
        })
    ));
    assert_eq!(session.list_phase(ListKey::Sentences), ListPhase::Empty);

    fx.source
        .set(ListKey::Sentences, Ok("Good luck".to_string()));
    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;
    fx.playback.dispatch(&mut session, Event::SpeakEnglish).await;
    assert!(session.notice().is_none());

    fx.playback.dispatch(&mut session, Event::SpeakTarget).await;

    assert!(session.translation().is_none());
    assert!(matches!(
        session.notice(),
        Some(Notice::TranslationFailed(TranslationError::Request(_)))
    ));
    assert_eq!(fx.speech.spoken_texts(), vec!["Good luck"]);
}

#[tokio::test]
async fn speech_failures_do_not_block_progress() {
    let config = ListenConfig::from_lookup(|_| None).unwrap();
    let services = AppServices::with_parts(
        config,
        Arc::new(InMemoryListSource::new().with_text(ListKey::Sentences, "a\nb\nc")),
        Arc::new(StubTranslator::default()),
        Arc::new(RecordingSpeech::failing(SpeechError::Unavailable)),
    );
    let playback = services.playback();
    let mut session = SessionState::default();

    for _ in 0..3 {
        playback.dispatch(&mut session, Event::SpeakEnglish).await;
    }

    assert_eq!(session.list(ListKey::Sentences).unwrap().index(), 2);
    assert_eq!(session.progress().unwrap().label(), "Sentences: 2 / 3");
}
