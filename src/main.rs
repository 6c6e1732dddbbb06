use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use favplaces::cli::{App, Cli};
use favplaces::logging::init_tracing;
use favplaces::notifier::ErrorNotifier;
use favplaces::transport::HttpTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.load_config().context("Failed to load configuration")?;
    let api = config.get().api;
    tracing::debug!(base_url = %api.base_url, config = %config.path().display(), "Starting");

    let transport = HttpTransport::new(&api).context("Failed to set up places API client")?;
    let app = App::new(Arc::new(transport), ErrorNotifier::new());

    let mut stdout = std::io::stdout();
    let succeeded = app.run(cli.command, &mut stdout).await?;
    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
