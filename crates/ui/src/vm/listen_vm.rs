use listen_core::SessionState;
use listen_core::model::{ListKey, TargetLanguage};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptionVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Everything the listen page renders, derived from one `SessionState` snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ListenVm {
    pub lists: Vec<SelectOptionVm>,
    pub languages: Vec<SelectOptionVm>,
    pub english: String,
    pub translation: String,
    pub progress_label: String,
    pub progress_percent: f64,
    pub notice: Option<String>,
    pub loading: bool,
    pub translating: bool,
    pub can_speak_target: bool,
}

#[must_use]
pub fn map_listen_vm(session: &SessionState) -> ListenVm {
    let selected = session.selected();
    let target = session.target();

    let lists = ListKey::ALL
        .into_iter()
        .map(|key| SelectOptionVm {
            value: key.as_str().to_string(),
            label: key.label().to_string(),
            selected: key == selected,
        })
        .collect();

    let languages = TargetLanguage::ALL
        .into_iter()
        .map(|language| SelectOptionVm {
            value: language.voice_tag().to_string(),
            label: language.label().to_string(),
            selected: language == target,
        })
        .collect();

    let (progress_label, progress_percent) = session
        .progress()
        .map_or_else(|| (String::new(), 0.0), |p| (p.label(), p.percent()));

    ListenVm {
        lists,
        languages,
        english: session.sentence().unwrap_or_default().to_string(),
        translation: session.translation().unwrap_or_default().to_string(),
        progress_label,
        progress_percent,
        notice: session.notice().map(listen_core::Notice::message),
        loading: session.is_loading(selected),
        translating: session.is_translating(),
        can_speak_target: session.sentence().is_some(),
    }
}

impl ListenVm {
    /// Width of the progress bar fill, clamped to `0..=100`.
    #[must_use]
    pub fn progress_width(&self) -> String {
        format!("{:.0}%", self.progress_percent.clamp(0.0, 100.0))
    }
}
