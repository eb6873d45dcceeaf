//! chaincalc: interactive four-function calculator.
//!
//! Reads key presses line by line from stdin and prints the display after
//! each line. Logs go to stderr.

use anyhow::{Context, Result};
use chaincalc::config::CalculatorConfig;
use chaincalc::host::{Outcome, Session};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "chaincalc")]
#[command(about = "Four-function chaining calculator", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "chaincalc=debug" (overrides RUST_LOG and the config)
    #[arg(short, long)]
    log: Option<String>,
}

fn init_tracing(cli_filter: Option<&str>, config_filter: &str) -> Result<()> {
    let filter = match cli_filter {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid --log filter '{directive}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_filter)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    init_tracing(cli.log.as_deref(), &config.logging.filter)?;
    tracing::debug!(?config, "configuration loaded");

    let mut session = Session::new(&config);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    if interactive {
        writeln!(stdout, "chaincalc (:help for commands)")?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "{}", session.prompt())?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        match session.handle_line(&line) {
            Outcome::Continue(output) => {
                for text in output {
                    writeln!(stdout, "{text}")?;
                }
            }
            Outcome::Quit => break,
        }
    }

    tracing::debug!(
        calculations = session.calculator().history().len(),
        "session ended"
    );
    Ok(())
}
