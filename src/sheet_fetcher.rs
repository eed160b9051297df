// src/sheet_fetcher.rs
use chrono::Utc;
use log::{error, info};

use crate::config;
use crate::data_types::{Dataset, DatasetConfig, TabHandle, TableData};
use crate::error::CacheError;
use crate::sheet_parser::parse_sheet_response;

/// Pulls individual tabs from the gviz endpoint and fans out over the seven
/// slots of a dataset. Cheap to clone; clones share the underlying
/// connection pool.
#[derive(Clone)]
pub struct SheetFetcher {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
}

impl SheetFetcher {
    pub fn new() -> Self {
        Self::with_base_url(config::SHEETS_BASE_URL, config::SPREADSHEET_ID)
    }

    /// The base url is injectable so tests can point the fetcher at a local
    /// stub server.
    pub fn with_base_url(base_url: &str, spreadsheet_id: &str) -> Self {
        SheetFetcher {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
        }
    }

    // The timestamp query parameter busts any intermediary cache so repeated
    // runs always see fresh data.
    fn build_tab_url(&self, gid: &str) -> String {
        let timestamp = Utc::now().timestamp_millis();
        format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:json&gid={}&timestamp={}",
            self.base_url, self.spreadsheet_id, gid, timestamp
        )
    }

    /// Fetches and normalizes one tab. Placeholder tabs resolve to an empty
    /// table without touching the network. A non-success status is fatal for
    /// this tab; there are no retries.
    pub async fn fetch_tab(&self, tab: &TabHandle, name: &str) -> Result<TableData, CacheError> {
        let gid = match tab {
            TabHandle::Placeholder => {
                info!("Skipping {} (placeholder tab)", name);
                return Ok(TableData::empty());
            }
            TabHandle::Active(gid) => gid,
        };

        info!("Fetching {} (gid {})...", name, gid);

        let response = self
            .client
            .get(self.build_tab_url(gid))
            .send()
            .await
            .map_err(|source| CacheError::Transport {
                name: name.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::FetchStatus {
                name: name.to_string(),
                status,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| CacheError::Transport {
                name: name.to_string(),
                source,
            })?;

        let table = parse_sheet_response(&text).map_err(|err| {
            error!("Failed to parse {}: {}", name, err);
            err
        })?;
        info!(
            "{}: {} rows, {} columns",
            name,
            table.rows.len(),
            table.headers.len()
        );
        Ok(table)
    }

    /// Fetches all seven tabs of a dataset concurrently. The first failure
    /// fails the whole dataset with the dataset name attached; tabs still in
    /// flight at that point keep running detached and their results are
    /// dropped.
    pub async fn fetch_dataset(
        &self,
        config: &DatasetConfig,
        dataset_name: &str,
    ) -> Result<Dataset, CacheError> {
        info!("Fetching {} dataset...", dataset_name);

        let result = tokio::try_join!(
            self.spawn_tab(&config.overview, dataset_name, "overview"),
            self.spawn_tab(&config.yearly, dataset_name, "yearly"),
            self.spawn_tab(&config.quarterly, dataset_name, "quarterly"),
            self.spawn_tab(&config.regional, dataset_name, "regional"),
            self.spawn_tab(&config.ev_timeseries, dataset_name, "evTimeseries"),
            self.spawn_tab(&config.vc_timeseries, dataset_name, "vcTimeseries"),
            self.spawn_tab(&config.deep_tech_share, dataset_name, "deepTechShare"),
        );

        match result {
            Ok((overview, yearly, quarterly, regional, ev_timeseries, vc_timeseries, deep_tech_share)) => {
                Ok(Dataset {
                    overview,
                    yearly,
                    quarterly,
                    regional,
                    ev_timeseries,
                    vc_timeseries,
                    deep_tech_share,
                })
            }
            Err(source) => {
                error!("Failed to fetch {}: {}", dataset_name, source);
                Err(CacheError::Dataset {
                    dataset: dataset_name.to_string(),
                    source: Box::new(source),
                })
            }
        }
    }

    // Each tab runs as its own task so a sibling failure detaches the rest
    // instead of cancelling them mid-request.
    async fn spawn_tab(
        &self,
        tab: &TabHandle,
        dataset_name: &str,
        slot: &str,
    ) -> Result<TableData, CacheError> {
        let fetcher = self.clone();
        let tab = tab.clone();
        let name = format!("{}/{}", dataset_name, slot);
        tokio::spawn(async move { fetcher.fetch_tab(&tab, &name).await }).await?
    }
}

impl Default for SheetFetcher {
    fn default() -> Self {
        Self::new()
    }
}
