use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use roster_client::CharacterClientFactory;
use roster_core::{CharacterState, CharacterStore, FetchCoordinator, FetchOutcome, RosterConfig};
use roster_types::FetchEvent;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[clap(name = "roster", version = "0.1.0", about = "Browse a remote character catalog")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, help = "Path to a YAML configuration file")]
    config: Option<String>,

    #[clap(long, help = "Override the catalog base URL")]
    base_url: Option<String>,

    #[clap(long, help = "Serve the canned fixture roster instead of calling the catalog")]
    offline: bool,

    #[clap(long, short, default_value = "info")]
    log_level: String,

    #[clap(long, help = "Print the folded state as JSON instead of a table")]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the full character listing
    List,
    /// Fetch the characters matching a query
    Search { query: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let mut config = match &cli.config {
        Some(path) => RosterConfig::from_file(path)?,
        None => RosterConfig::from_env(),
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    let client = if cli.offline {
        log::info!("Offline mode: serving the fixture roster");
        CharacterClientFactory::create_fixture_client()
    } else {
        log::info!("Using character catalog at {}", config.api.base_url);
        CharacterClientFactory::create_http_client(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )
    };

    let coordinator = FetchCoordinator::new(client);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let dispatch = move |event: FetchEvent| {
        let _ = tx.send(event);
    };

    let outcome = match &cli.command {
        Commands::List => coordinator.get_characters(&dispatch).await,
        Commands::Search { query } => coordinator.search_characters(&dispatch, query).await,
    };

    // The coordinator has returned, so both events are already buffered;
    // fold them in emission order.
    let mut store = CharacterStore::new();
    while let Ok(event) = rx.try_recv() {
        store.apply(&event);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(store.state())?);
    } else {
        render(store.state());
    }

    match outcome {
        FetchOutcome::Loaded(count) => {
            log::info!("Loaded {} characters", count);
            Ok(())
        }
        FetchOutcome::Failed(message) => anyhow::bail!("fetch failed: {}", message),
    }
}

fn render(state: &CharacterState) {
    if state.characters.is_empty() {
        if state.error.is_none() {
            println!("No characters found.");
        }
        return;
    }

    let width = state
        .characters
        .iter()
        .map(|character| character.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    println!("{:<width$}  BIRTH YEAR", "NAME", width = width);
    for character in &state.characters {
        let birth_year = character
            .extra
            .get("birth_year")
            .and_then(|value| value.as_str())
            .unwrap_or("-");
        println!("{:<width$}  {}", character.name, birth_year, width = width);
    }
}
