use anyhow::Context;
use hotel_desk::{DeskConfig, Session};
use std::io;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_desk=warn".into()),
        )
        .init();

    let config = DeskConfig::default();
    tracing::info!(capacity = config.capacity, "starting front desk");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock())
        .context("failed to start front desk session")?;
    session.run().context("front desk session aborted")?;

    Ok(())
}
