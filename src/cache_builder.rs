// src/cache_builder.rs
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use log::info;
use tokio::fs;

use crate::config;
use crate::data_types::{CacheDocument, Dataset, DatasetConfig};
use crate::error::CacheError;
use crate::sheet_fetcher::SheetFetcher;

/// Orchestrates one cache refresh: both datasets concurrently, one shared
/// capture instant, one full overwrite of the cache file. Any failure aborts
/// before the write, leaving the previous cache file as it was.
pub struct CacheBuilder {
    fetcher: SheetFetcher,
    cache_dir: PathBuf,
}

impl CacheBuilder {
    pub fn new(fetcher: SheetFetcher) -> Self {
        Self::with_cache_dir(fetcher, config::CACHE_DIR)
    }

    pub fn with_cache_dir(fetcher: SheetFetcher, cache_dir: impl Into<PathBuf>) -> Self {
        CacheBuilder {
            fetcher,
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir.join(config::CACHE_FILE)
    }

    pub async fn run(
        &self,
        locations: &DatasetConfig,
        sectors: &DatasetConfig,
    ) -> Result<CacheDocument, CacheError> {
        fs::create_dir_all(&self.cache_dir).await?;

        // Both datasets in flight at once, fourteen tab requests total. As
        // with tabs inside a dataset, the loser of a failed join detaches.
        let (locations, sectors) = tokio::try_join!(
            self.spawn_dataset(locations, "locations"),
            self.spawn_dataset(sectors, "sectors"),
        )?;

        // One instant for both fields, so they always serialize identically.
        let captured_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let document = CacheDocument {
            timestamp: captured_at.clone(),
            last_updated: captured_at,
            locations,
            sectors,
        };

        let json = serde_json::to_string_pretty(&document)?;
        fs::write(self.cache_file(), json).await?;
        info!("Cache file written: {}", self.cache_file().display());

        Ok(document)
    }

    async fn spawn_dataset(
        &self,
        config: &DatasetConfig,
        dataset_name: &'static str,
    ) -> Result<Dataset, CacheError> {
        let fetcher = self.fetcher.clone();
        let config = config.clone();
        tokio::spawn(async move { fetcher.fetch_dataset(&config, dataset_name).await }).await?
    }
}
