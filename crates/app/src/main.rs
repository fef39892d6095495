use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use content::{Content, ContentPack, builtin_pack};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lingo_core::model::{LanguageCode, LearnerProgress};
use lingo_core::unlock::{UnlockAll, UnlockPolicy};
use services::{CatalogService, Clock, DashboardService, QuizLoopService};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DAILY_GOAL: u32 = 50;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDailyGoal { raw: String },
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDailyGoal { raw } => {
                write!(f, "invalid --daily-goal value: {raw} (expected a positive number)")
            }
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --language value: {raw}"),
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

fn parse_daily_goal(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(goal) if goal > 0 => Ok(goal),
        _ => Err(ArgsError::InvalidDailyGoal { raw }),
    }
}

fn parse_language(raw: String) -> Result<LanguageCode, ArgsError> {
    LanguageCode::new(raw.trim().to_ascii_lowercase()).map_err(|_| ArgsError::InvalidLanguage { raw })
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    content: Option<PathBuf>,
    language: Option<LanguageCode>,
    daily_goal: Option<u32>,
    unlock_all: bool,
    log_level: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

impl Args {
    /// Flags win over the `LINGO_*` variables read through `env`.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut parsed = Args {
            content: env("LINGO_CONTENT")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            language: env("LINGO_LANGUAGE")
                .filter(|value| !value.trim().is_empty())
                .map(parse_language)
                .transpose()?,
            daily_goal: env("LINGO_DAILY_GOAL").map(parse_daily_goal).transpose()?,
            unlock_all: false,
            log_level: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => {
                    parsed.content = Some(PathBuf::from(require_value(args, "--content")?));
                }
                "--language" => {
                    parsed.language = Some(parse_language(require_value(args, "--language")?)?);
                }
                "--daily-goal" => {
                    parsed.daily_goal = Some(parse_daily_goal(require_value(args, "--daily-goal")?)?);
                }
                "--unlock-all" => parsed.unlock_all = true,
                "--log-level" => {
                    parsed.log_level = Some(require_value(args, "--log-level")?);
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(parsed))
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--content <pack.json>] [--language <code>] [--daily-goal <xp>] [--unlock-all] [--log-level <level>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in catalog and demo learner profile");
    eprintln!("  --daily-goal from the profile, or {DEFAULT_DAILY_GOAL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LINGO_CONTENT, LINGO_LANGUAGE, LINGO_DAILY_GOAL, RUST_LOG");
}

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    let _ = builder.try_init();
}

struct DesktopApp {
    clock: Clock,
    progress: LearnerProgress,
    start_language: Option<LanguageCode>,
    catalog: Arc<CatalogService>,
    dashboard: Arc<DashboardService>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn initial_progress(&self) -> LearnerProgress {
        self.progress.clone()
    }

    fn start_language(&self) -> Option<LanguageCode> {
        self.start_language.clone()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn load_pack(path: Option<&PathBuf>) -> Result<ContentPack, content::ContentError> {
    match path {
        Some(path) => {
            log::info!("loading content pack from {}", path.display());
            ContentPack::from_path(path)
        }
        None => builtin_pack(),
    }
}

fn learner_progress(
    pack: &ContentPack,
    clock: &Clock,
    daily_goal: Option<u32>,
) -> Result<LearnerProgress, Box<dyn std::error::Error>> {
    let mut progress = match pack.profile.clone() {
        Some(profile) => profile.into_progress(clock.today())?,
        None => LearnerProgress::new(DEFAULT_DAILY_GOAL)?,
    };
    if let Some(goal) = daily_goal {
        progress.set_daily_goal(goal)?;
    }
    Ok(progress)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Command::Run(parsed)) => parsed,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            return Err(e.into());
        }
    };

    init_logging(parsed.log_level.as_deref());

    let clock = Clock::default_clock();
    let pack = load_pack(parsed.content.as_ref())?;
    let content = Content::from_pack(&pack).await?;
    let progress = learner_progress(&pack, &clock, parsed.daily_goal)?;
    log::info!(
        "learner: {} XP, streak {}, daily goal {}",
        progress.total_xp(),
        progress.streak(),
        progress.daily_goal()
    );

    let catalog = Arc::new(CatalogService::new(Arc::clone(&content.languages)));
    let policy: Arc<dyn UnlockPolicy> = if parsed.unlock_all {
        log::info!("all lessons unlocked");
        Arc::new(UnlockAll)
    } else {
        Arc::new(pack.unlock.sequential())
    };
    let dashboard = DashboardService::new(
        Arc::clone(&content.languages),
        Arc::clone(&content.courses),
    )
    .with_policy(policy);
    let quiz_loop = Arc::new(QuizLoopService::new(Arc::clone(&content.lessons)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock,
        progress,
        start_language: parsed.language,
        catalog,
        dashboard: Arc::new(dashboard),
        quiz_loop,
    });

    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Oromo Lingo Hub")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
