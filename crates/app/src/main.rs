use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use listen_core::model::{ListKey, TargetLanguage};
use services::{AppServices, ListenConfig, PlaybackController};
use ui::{App, UiApp, WebSpeech, build_app_context};

const LIST_ENV: &str = "LISTEN_LIST";
const LANG_ENV: &str = "LISTEN_LANG";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidList { raw: String },
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidList { raw } => write!(f, "invalid --list value: {raw}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --lang value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    playback: Arc<PlaybackController>,
    list: ListKey,
    target: TargetLanguage,
}

impl UiApp for DesktopApp {
    fn playback(&self) -> Arc<PlaybackController> {
        Arc::clone(&self.playback)
    }

    fn initial_list(&self) -> ListKey {
        self.list
    }

    fn initial_target(&self) -> TargetLanguage {
        self.target
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    list: ListKey,
    target: TargetLanguage,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--list <sentences|verbs>] [--lang <voice tag>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --list sentences");
    eprintln!("  --lang es-ES   (one of es-ES, fr-FR, de-DE, it-IT, ru-RU)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LISTEN_LIST, LISTEN_LANG");
    eprintln!("  LISTEN_SENTENCES_URL, LISTEN_VERBS_URL, LISTEN_TRANSLATE_URL");
    eprintln!("  LISTEN_HTTP_TIMEOUT_SECS (default 15)");
    eprintln!("  RUST_LOG (default warn)");
}

fn parse_list(raw: String) -> Result<ListKey, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidList { raw })
}

fn parse_language(raw: String) -> Result<TargetLanguage, ArgsError> {
    TargetLanguage::from_voice_tag(&raw).map_err(|_| ArgsError::InvalidLanguage { raw })
}

impl Args {
    /// Flags override the environment, which overrides the defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut list = env(LIST_ENV).map_or(Ok(ListKey::default()), parse_list)?;
        let mut target = env(LANG_ENV).map_or(Ok(TargetLanguage::default()), parse_language)?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" => list = parse_list(require_value(args, "--list")?)?,
                "--lang" => target = parse_language(require_value(args, "--lang")?)?,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { list, target }))
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .try_init()
        .ok();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_tracing();

    let config = ListenConfig::from_env()?;
    tracing::info!(
        sentences = %config.catalog().get(ListKey::Sentences).source(),
        verbs = %config.catalog().get(ListKey::Verbs).source(),
        timeout_secs = config.http_timeout().as_secs(),
        "starting listen app"
    );
    let services = AppServices::new_http(config, Arc::new(WebSpeech::new()))?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        playback: services.playback(),
        list: args.list,
        target: args.target,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Listen & Speak")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
