use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use seekho_core::Clock;
use seekho_core::model::TrackId;
use services::{
    ApiConfig, AppServices, CurriculumClient, DEFAULT_API_BASE_URL, DEFAULT_TRACK,
    ProgressService, TutorClient,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

/// Blank environment values count as unset so defaults still apply.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn track(&self) -> TrackId {
        self.services.track()
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }

    fn curriculum(&self) -> Arc<dyn CurriculumClient> {
        self.services.curriculum()
    }

    fn tutor(&self) -> Arc<dyn TutorClient> {
        self.services.tutor()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }
}

struct Args {
    db_url: String,
    api_base_url: String,
    track: TrackId,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--api <base_url>] [--track <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://seekho.sqlite3");
    eprintln!("  --api {DEFAULT_API_BASE_URL}");
    eprintln!("  --track {DEFAULT_TRACK}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SEEKHO_DB_URL, SEEKHO_API_BASE_URL, SEEKHO_TRACK");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = non_empty(std::env::var("SEEKHO_DB_URL").ok())
            .map_or_else(|| "sqlite://seekho.sqlite3".into(), normalize_sqlite_url);
        let mut api_base_url = non_empty(std::env::var("SEEKHO_API_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let mut track = non_empty(std::env::var("SEEKHO_TRACK").ok())
            .map_or_else(|| TrackId::new(DEFAULT_TRACK), TrackId::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--api" => {
                    api_base_url = require_value(args, "--api")?;
                }
                "--track" => {
                    track = TrackId::new(require_value(args, "--track")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            api_base_url,
            track,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = ApiConfig::from_parts(&parsed.api_base_url, parsed.track)?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, config).await?;

    tracing::info!(db = %parsed.db_url, api = %parsed.api_base_url, "starting desktop app");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Seekho")
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
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
