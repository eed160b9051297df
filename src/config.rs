// src/config.rs
use crate::data_types::{DatasetConfig, TabHandle};

// Same spreadsheet for both datasets, different gids per tab.
pub const SPREADSHEET_ID: &str = "1peZPgji4R4-KO4EuuvHGJRWTfHZmuBc9WPVRmn_ldrw";
pub const SHEETS_BASE_URL: &str = "https://docs.google.com";

pub const CACHE_DIR: &str = "public/cached-data";
pub const CACHE_FILE: &str = "sectors-cache.json";

pub fn locations_config() -> DatasetConfig {
    DatasetConfig {
        overview: TabHandle::from_gid("1304110900"),
        yearly: TabHandle::from_gid("0"),
        quarterly: TabHandle::from_gid("0"),
        regional: TabHandle::from_gid("0"),
        ev_timeseries: TabHandle::from_gid("1009631018"),
        vc_timeseries: TabHandle::from_gid("1452246798"),
        deep_tech_share: TabHandle::from_gid("2142869021"),
    }
}

pub fn sectors_config() -> DatasetConfig {
    DatasetConfig {
        overview: TabHandle::from_gid("1065279143"),
        yearly: TabHandle::from_gid("0"),
        quarterly: TabHandle::from_gid("0"),
        regional: TabHandle::from_gid("0"),
        ev_timeseries: TabHandle::from_gid("1754921105"),
        vc_timeseries: TabHandle::from_gid("879771746"),
        deep_tech_share: TabHandle::from_gid("1539405594"),
    }
}
