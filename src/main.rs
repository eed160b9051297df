// src/main.rs
use std::process;

use flexi_logger::Logger;
use log::{error, info};

use sheets_cache::{config, CacheBuilder, SheetFetcher};

#[tokio::main]
async fn main() {
    // Log to stderr; RUST_LOG overrides the default level.
    let _logger = Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .ok();

    info!("Refreshing Google Sheets cache...");
    info!("Spreadsheet ID: {}", config::SPREADSHEET_ID);

    let builder = CacheBuilder::new(SheetFetcher::new());
    match builder
        .run(&config::locations_config(), &config::sectors_config())
        .await
    {
        Ok(document) => {
            info!("Cache updated successfully");
            info!("Cache file: {}", builder.cache_file().display());
            info!("Timestamp: {}", document.timestamp);
            info!(
                "Locations overview: {} rows",
                document.locations.overview.rows.len()
            );
            info!(
                "Sectors overview: {} rows",
                document.sectors.overview.rows.len()
            );
        }
        Err(err) => {
            error!("Cache update failed: {}", err);
            process::exit(1);
        }
    }
}
