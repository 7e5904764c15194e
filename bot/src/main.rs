use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use sweeper_bot::config::BotConfig;
use sweeper_bot::{Controller, SessionStore, console};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load .env file if it exists (silently ignore if not found)
    let dotenv = dotenvy::dotenv();
    let config = BotConfig::from_env().context("invalid startup configuration")?;
    setup_logging(&args.verbose, config.log_directives.as_deref());
    if let Ok(path) = dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    log::info!("Starting with token {:?}, seed {}", config.token, seed);

    let store = Arc::new(SessionStore::new());
    let controller = Controller::new(Arc::clone(&store), seed);

    console::run(&controller, io::stdin().lock(), io::stdout().lock())
        .context("console transport failed")?;

    log::info!("Input closed after serving {} sessions", store.len());
    Ok(())
}

/// Logs to stderr; `RUST_LOG` directives take precedence over `-v`/`-q`.
fn setup_logging(verbose: &Verbosity<InfoLevel>, directives: Option<&str>) {
    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
