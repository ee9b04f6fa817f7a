//! `gridcar`: drive the simulator from the terminal.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gridcar_cli::{Messages, Session};
use gridcar_core::Field;
use tracing_subscriber::EnvFilter;

/// Interactive multi-car grid simulation.
#[derive(Parser, Debug)]
#[command(name = "gridcar", version, about)]
struct CliArgs {
    /// Log filter directive (e.g. `info`, `gridcar_engine=debug`). Logs go to stderr.
    #[arg(long, env = "GRIDCAR_LOG", default_value = "warn")]
    log_level: String,

    /// JSON file overriding any of the user-facing messages.
    #[arg(long, value_name = "PATH")]
    messages: Option<PathBuf>,

    /// Field size; skips the size prompt.
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    field: Option<Vec<u32>>,
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_messages(path: Option<&PathBuf>) -> Result<Messages> {
    let Some(path) = path else {
        return Ok(Messages::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read messages file {}", path.display()))?;
    Messages::from_json(&json)
        .with_context(|| format!("failed to parse messages file {}", path.display()))
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_level)?;
    let messages = load_messages(args.messages.as_ref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), &messages);
    if let Some(dims) = args.field.as_deref() {
        let [width, height] = dims else {
            anyhow::bail!("--field takes exactly two values");
        };
        let field = Field::new(*width, *height).context("invalid --field")?;
        session = session.with_field(field);
    }

    session.run().context("terminal session failed")?;
    Ok(())
}
