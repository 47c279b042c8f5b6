use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuizLoopService, RngMode};
use storage::{BuiltinCatalog, CatalogSource, JsonCatalog};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidLogLevel { raw: String },
    InvalidCatalogPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw:?}"),
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
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [--catalog <path>] [--seed <u64>] [--log-level <level>]");
    eprintln!("  cargo run -p app -- validate [--catalog <path>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in catalog, entropy-seeded draws, --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CATALOG, QUIZ_SEED, QUIZ_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Validate,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "validate" => Some(Self::Validate),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    catalog: Option<PathBuf>,
    rng_mode: RngMode,
    log_level: LevelFilter,
}

fn parse_seed(raw: String) -> Result<RngMode, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(RngMode::Seeded)
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_log_level(raw: String) -> Result<LevelFilter, ArgsError> {
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| ArgsError::InvalidLogLevel { raw })
}

fn parse_catalog_path(raw: String) -> Result<PathBuf, ArgsError> {
    if raw.trim().is_empty() {
        return Err(ArgsError::InvalidCatalogPath { raw });
    }
    Ok(PathBuf::from(raw.trim()))
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut catalog = std::env::var("QUIZ_CATALOG")
            .ok()
            .map(parse_catalog_path)
            .transpose()?;
        let mut rng_mode = std::env::var("QUIZ_SEED")
            .ok()
            .map(parse_seed)
            .transpose()?
            .unwrap_or_default();
        let mut log_level = std::env::var("QUIZ_LOG")
            .ok()
            .map(parse_log_level)
            .transpose()?
            .unwrap_or(LevelFilter::INFO);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    catalog = Some(parse_catalog_path(require_value(args, "--catalog")?)?);
                }
                "--seed" => {
                    rng_mode = parse_seed(require_value(args, "--seed")?)?;
                }
                "--log-level" => {
                    log_level = parse_log_level(require_value(args, "--log-level")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog,
            rng_mode,
            log_level,
        })
    }

    fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog {
            Some(path) => Box::new(JsonCatalog::from_path(path)),
            None => Box::new(BuiltinCatalog),
        }
    }
}

fn init_logging(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the quiz window.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(parsed.log_level)?;

    let source = parsed.catalog_source();
    let quiz_loop = QuizLoopService::from_source(source.as_ref(), parsed.rng_mode)?;

    match cmd {
        Command::Ui => {
            info!(rng_mode = ?quiz_loop.rng_mode(), "launching quiz window");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_loop: Arc::new(quiz_loop),
            });
            let title = app.title();
            let context = build_app_context(&app);

            // Some desktop setups default to always-on-top; keep it a normal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Validate => {
            let catalog = quiz_loop.catalog();
            println!(
                "{}: {} items, {} composers",
                source.describe(),
                catalog.len(),
                catalog.options().len()
            );
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // Binary glue: report once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
