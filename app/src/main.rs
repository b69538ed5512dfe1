use anyhow::{anyhow, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

use todo_app::{shell, AppConfig, Cli, HttpTransport, Session};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let config = AppConfig::try_from(Cli::parse())?;
    tracing::info!(base_url = %config.base_url, limit = config.page_limit, "starting");

    let mut session = Session::new(config.client(), HttpTransport::new());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell::run(&mut session, stdin, &mut stdout).await
}

/// Diagnostics go to stderr so they stay out of the rendered list.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}
