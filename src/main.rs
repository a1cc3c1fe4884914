//! tldemo - walks a terminal through termlib's cursor and style operations

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use termlib::cli::{Cli, LICENSE_TEXT};
use termlib::demo::{self, DemoOptions};
use termlib::{Config, ConfigError, Terminal};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "TERMLIB_LOG";

/// Exit code conventionally used after SIGINT.
const EXIT_INTERRUPTED: i32 = 130;

/// Log to stderr so diagnostics never land in the controlled terminal output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    let mut config = match loaded {
        Ok(config) => config,
        Err(ConfigError::NoConfigDir) => {
            tracing::warn!("no configuration directory available, using defaults");
            Config::default()
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to load configuration")),
    };

    cli.apply_overrides(&mut config);
    Ok(config)
}

#[cfg(not(tarpaulin_include))]
fn run_demo(config: &Config) -> Result<bool> {
    let stdout: Stdout = io::stdout();
    let mut options = DemoOptions::from_config(&config.demo);
    if !stdout.is_tty() {
        tracing::debug!("stdout is not a terminal, skipping delays");
        options.delay = Duration::ZERO;
    }

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .context("Failed to install Ctrl-C handler")?;
    }

    let term = Terminal::new(stdout);
    tracing::debug!(
        width = term.width(),
        height = term.height(),
        steps = options.steps,
        "starting demo"
    );

    let summary = demo::run(&term, &options, &stop);
    Ok(summary.interrupted)
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.license {
        println!("{}", LICENSE_TEXT);
        return Ok(());
    }

    let config = load_config(&cli)?;
    if run_demo(&config)? {
        std::process::exit(EXIT_INTERRUPTED);
    }
    Ok(())
}
