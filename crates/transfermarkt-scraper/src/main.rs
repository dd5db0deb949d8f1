//! Fetch a player's transfer history and print it as cleaned JSON.
//!
//! Usage: transfermarkt-scraper <player_id>

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use transfermarkt_scraper::clients::transfermarkt::TransfermarktClient;
use transfermarkt_scraper::config::Config;
use transfermarkt_scraper::services::player_transfers::PlayerTransfers;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let player_id = match env::args().nth(1) {
        Some(id) => id,
        None => {
            eprintln!("Usage: transfermarkt-scraper <player_id>");
            return ExitCode::from(2);
        }
    };

    let config = Config::from_env();
    let client = match TransfermarktClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match PlayerTransfers::fetch(&client, &player_id).await {
        Ok(extractor) => {
            let history = extractor.transfer_history();
            tracing::info!(
                "Extracted {} transfers for player {}",
                history.transfers.len(),
                history.id
            );
            match serde_json::to_string_pretty(&history.cleaned_value()) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::error!("Failed to serialize response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
