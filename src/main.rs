use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cfgdash::api::{ConfigApi, HttpTransport};
use cfgdash::commands::{cache, crud, list};
use cfgdash::config::{config_path, expand_path, load_settings, log_path, Overrides};
use cfgdash::logging::{init_logging, LogTarget};
use cfgdash::tui::{self, theme};

/// Terminal dashboard for a remote key/value configuration store
#[derive(Parser, Debug)]
#[command(name = "cfgdash", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Settings file (default: <config dir>/cfgdash/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Server base URL, e.g. http://127.0.0.1:8000
    #[arg(long, env = "CFGDASH_BASE_URL")]
    base_url: Option<String>,

    /// Sent as X-API-Key on every request
    #[arg(long, env = "CFGDASH_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full-screen dashboard (default)
    Tui,
    /// Print every config as a table
    List,
    /// Create a config interactively
    Create,
    /// Edit the value and description of a config
    Edit {
        /// Key to edit; pick from a list when omitted
        key: Option<String>,
    },
    /// Invalidate the server-side cache of a key
    ClearCache {
        key: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    let path = cli
        .config
        .as_deref()
        .map(expand_path)
        .unwrap_or_else(config_path);
    let settings = load_settings(&path)
        .with_context(|| format!("cannot load settings from {}", path.display()))?
        .apply(Overrides {
            base_url: cli.base_url,
            api_key: cli.api_key,
        });

    let target = match command {
        Command::Tui => LogTarget::File(log_path()),
        _ => LogTarget::Stderr,
    };
    init_logging(target, settings.json_logs)?;

    let transport =
        HttpTransport::from_settings(&settings).context("cannot set up the http client")?;
    info!(base_url = transport.base_url(), config = %path.display(), "starting");
    let api: Arc<dyn ConfigApi> = Arc::new(transport);

    match command {
        Command::Tui => tui::run_tui(api, theme::from_config(&settings.theme)).await,
        Command::List => list::list_configs(api.as_ref()).await,
        Command::Create => crud::create(api.as_ref()).await,
        Command::Edit { key } => crud::edit(api.as_ref(), key).await,
        Command::ClearCache { key, yes } => cache::clear_cache(api.as_ref(), &key, yes).await,
    }
}
