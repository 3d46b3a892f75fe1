use listen_core::model::Utterance;

/// Script that hands `utterance` to `window.speechSynthesis`.
///
/// The voice is matched by name and tag against the live catalog; when it is
/// gone the engine falls back to its default voice for `lang`.
pub(super) fn speak_script(utterance: &Utterance) -> Result<String, serde_json::Error> {
    let payload = serde_json::to_string(utterance)?;
    Ok(format!(
        r#"(function() {{
                    const synth = window.speechSynthesis;
                    if (!synth) {{
                        return;
                    }}
                    const request = {payload};
                    const utterance = new SpeechSynthesisUtterance(request.text);
                    utterance.lang = request.lang;
                    utterance.rate = request.rate;
                    if (request.voice) {{
                        const match = synth.getVoices().find(
                            (voice) => voice.name === request.voice.name && voice.lang === request.voice.lang
                        );
                        if (match) {{
                            utterance.voice = match;
                        }}
                    }}
                    synth.speak(utterance);
                }})();"#
    ))
}

/// Script that posts the voice catalog now and after every `voiceschanged`.
///
/// Each message is an array of `{ name, lang, default }` objects.
pub(super) fn voice_catalog_script() -> &'static str {
    r#"
        const synth = window.speechSynthesis;
        if (!synth) {
            dioxus.send([]);
            return;
        }
        const post = () => {
            dioxus.send(
                synth.getVoices().map((voice) => ({
                    name: voice.name,
                    lang: voice.lang,
                    default: voice.default,
                }))
            );
        };
        post();
        synth.addEventListener("voiceschanged", post);
        await new Promise(() => {});
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use listen_core::model::Voice;

    #[test]
    fn speak_script_embeds_escaped_utterance() {
        let utterance = Utterance::new(
            "He said \"hi\"".to_string(),
            Some(Voice::new("Daniel", "en-GB")),
            "en-GB",
        );
        let js = speak_script(&utterance).unwrap();
        assert!(js.contains(r#""text":"He said \"hi\"""#), "{js}");
        assert!(js.contains(r#""lang":"en-GB""#), "{js}");
        assert!(js.contains(r#""rate":0.95"#), "{js}");
        assert!(js.contains("synth.speak(utterance)"));
    }

    #[test]
    fn speak_script_without_voice_sends_null() {
        let utterance = Utterance::new("Hola".to_string(), None, "es-ES");
        let js = speak_script(&utterance).unwrap();
        assert!(js.contains(r#""voice":null"#), "{js}");
    }

    #[test]
    fn catalog_script_subscribes_to_changes() {
        let js = voice_catalog_script();
        assert!(js.contains("voiceschanged"));
        assert!(js.contains("dioxus.send"));
    }
}
