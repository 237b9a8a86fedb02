use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use newsdesk::api::NewsletterClient;
use newsdesk::config::Config;
use newsdesk::logging::init_tracing;
use newsdesk::sync;
use newsdesk::ui::app::App;
use newsdesk::ui::events::EventHandler;

/// Terminal dashboard for curating a newsletter issue.
#[derive(Debug, Parser)]
#[command(name = "newsdesk", version, about)]
struct Cli {
    /// Id of the newsletter to edit.
    newsletter_id: String,

    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config file.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let client = NewsletterClient::from_config(&config.api)?;

    // The board only exists once a snapshot loaded successfully; a failed
    // fetch is a page-level error, not an empty editor.
    tracing::info!(newsletter = %cli.newsletter_id, "fetching newsletter");
    let newsletter = runtime
        .block_on(client.fetch_newsletter(&cli.newsletter_id))
        .with_context(|| format!("failed to load newsletter '{}'", cli.newsletter_id))?;

    let tick_rate = Duration::from_millis(config.ui.tick_ms.max(50));
    let events = EventHandler::new(tick_rate);
    let sync = sync::start(
        runtime.handle(),
        client,
        cli.newsletter_id.clone(),
        events.sender(),
    );

    let app = App::new(newsletter, sync);
    newsdesk::ui::runtime::run(app, events, tick_rate)?;
    Ok(())
}
