use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use api::{ApiConfig, HttpApi, VitaApi};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AuthService, CoinService, CourseService, FileSessionStore, ForumService,
    QuizService, SessionStore, UserService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn users(&self) -> Arc<UserService> {
        self.services.users()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn courses(&self) -> Arc<CourseService> {
        self.services.courses()
    }

    fn coins(&self) -> Arc<CoinService> {
        self.services.coins()
    }

    fn forum(&self) -> Arc<ForumService> {
        self.services.forum()
    }
}

struct Args {
    api_url: Option<String>,
    session_file: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--session-file <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:5000/api");
    eprintln!("  --session-file ./session.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VITA_API_URL, VITA_SESSION_FILE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = None;
        let mut session_file = std::env::var_os("VITA_SESSION_FILE")
            .map_or_else(|| PathBuf::from("session.json"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = Some(value);
                }
                "--session-file" => {
                    let value = require_value(args, "--session-file")?;
                    session_file = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            session_file,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    // Flag wins over env; the default matches the local dev server.
    let config = parsed.api_url.map_or_else(
        || {
            ApiConfig::from_env()
                .unwrap_or_else(|| ApiConfig::new("http://localhost:5000/api"))
        },
        ApiConfig::new,
    );
    tracing::info!(api_url = %config.base_url, "starting Vitaversity");

    let api: Arc<dyn VitaApi> = Arc::new(HttpApi::new(config));
    let sessions: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(parsed.session_file));
    let services = AppServices::new(api, sessions);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Vitaversity")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
            |_| "app=info,api=info,services=info".to_string(),
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
