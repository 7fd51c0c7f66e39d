use std::{io::Write, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod console;

use console::{run, RunOptions};

/// Drives the card form from a line-oriented script (stdin when no script is given).
#[derive(Parser, Debug)]
#[command(name = "cardfolio-console")]
struct Args {
    #[arg(long)]
    script: Option<PathBuf>,
    #[arg(long, default_value_t = 3000)]
    hint_banner_ms: u64,
    /// Wait for a pending hint banner to hide before exiting.
    #[arg(long)]
    drain: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let options = RunOptions {
        hint_banner_duration: Duration::from_millis(args.hint_banner_ms),
        drain: args.drain,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &args.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open script '{}'", path.display()))?;
            run(BufReader::new(file), &mut out, options).await?;
        }
        None => run(BufReader::new(tokio::io::stdin()), &mut out, options).await?,
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
