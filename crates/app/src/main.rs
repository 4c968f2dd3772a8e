use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use quiz_core::RngSource;
use services::{CountriesApiConfig, QuizLoopService, RestCountriesSource};
use ui::{App, UiApp, build_app_context};
use url::Url;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidSeed { raw: String },
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout value: {raw}"),
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

#[derive(Debug)]
struct Args {
    endpoint: Url,
    timeout: Duration,
    rng_source: RngSource,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--seed <n>] [--timeout <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::countries::DEFAULT_ENDPOINT);
    eprintln!("  --seed    (random order every launch)");
    eprintln!(
        "  --timeout {}",
        services::countries::DEFAULT_TIMEOUT.as_secs()
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLAGQUIZ_API_URL, FLAGQUIZ_SEED, FLAGQUIZ_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run,
    Help,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Parsed), ArgsError> {
        let mut endpoint = parse_api_url(services::countries::DEFAULT_ENDPOINT.to_string())?;
        let mut timeout = services::countries::DEFAULT_TIMEOUT;
        let mut rng_source = RngSource::default();

        if let Some(raw) = env("FLAGQUIZ_API_URL") {
            endpoint = parse_api_url(raw)?;
        }
        if let Some(raw) = env("FLAGQUIZ_SEED") {
            rng_source = parse_seed(raw)?;
        }
        if let Some(raw) = env("FLAGQUIZ_TIMEOUT_SECS") {
            timeout = parse_timeout(raw)?;
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    endpoint = parse_api_url(require_value(args, "--api-url")?)?;
                }
                "--seed" => {
                    rng_source = parse_seed(require_value(args, "--seed")?)?;
                }
                "--timeout" => {
                    timeout = parse_timeout(require_value(args, "--timeout")?)?;
                }
                "--help" | "-h" => {
                    let args = Self {
                        endpoint,
                        timeout,
                        rng_source,
                    };
                    return Ok((args, Parsed::Help));
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let args = Self {
            endpoint,
            timeout,
            rng_source,
        };
        Ok((args, Parsed::Run))
    }
}

fn parse_api_url(raw: String) -> Result<Url, ArgsError> {
    CountriesApiConfig::parse_endpoint(&raw).map_err(|_| ArgsError::InvalidApiUrl { raw })
}

fn parse_seed(raw: String) -> Result<RngSource, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(RngSource::seeded)
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_timeout(raw: String) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ArgsError::InvalidTimeout { raw }),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let (parsed, action) = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if action == Parsed::Help {
        print_usage();
        return Ok(());
    }

    info!(
        "countries endpoint {} (timeout {:?})",
        parsed.endpoint, parsed.timeout
    );
    if let RngSource::Seeded(seed) = parsed.rng_source {
        info!("using fixed seed {seed}");
    }

    let api = CountriesApiConfig::new(parsed.endpoint).with_timeout(parsed.timeout);
    let source = RestCountriesSource::new(api)?;
    let quiz_loop =
        Arc::new(QuizLoopService::new(Arc::new(source)).with_rng_source(parsed.rng_source));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_loop });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Guess the Flag")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
