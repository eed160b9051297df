// src/lib.rs
pub mod cache_builder;
pub mod config;
pub mod data_types;
pub mod error;
pub mod sheet_fetcher;
pub mod sheet_parser;

pub use cache_builder::CacheBuilder;
pub use data_types::{CacheDocument, CellValue, Dataset, DatasetConfig, TabHandle, TableData};
pub use error::CacheError;
pub use sheet_fetcher::SheetFetcher;
