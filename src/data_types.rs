// src/data_types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// One spreadsheet tab within the source document. The original config keeps
/// gid "0" as a "not wired up yet" marker; that state is explicit here so no
/// caller has to compare against a magic value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabHandle {
    Active(String),
    Placeholder,
}

impl TabHandle {
    pub fn from_gid(gid: &str) -> Self {
        if gid == "0" {
            TabHandle::Placeholder
        } else {
            TabHandle::Active(gid.to_string())
        }
    }
}

/// A single cell, kept as the scalar the sheet actually holds. `Null` is a
/// real value (empty cell), distinct from `""` and from `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl CellValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => CellValue::Number(n),
            Value::String(s) => CellValue::String(s),
            // gviz cells only carry scalars; anything else is kept as its
            // textual form rather than widening the union.
            other => CellValue::String(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TableData {
    pub fn empty() -> Self {
        TableData {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// Tab assignments for one dataset: which gid backs each of the seven slots.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub overview: TabHandle,
    pub yearly: TabHandle,
    pub quarterly: TabHandle,
    pub regional: TabHandle,
    pub ev_timeseries: TabHandle,
    pub vc_timeseries: TabHandle,
    pub deep_tech_share: TabHandle,
}

/// The seven tables of one dataset, serialized with the slot names the
/// dashboard expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub overview: TableData,
    pub yearly: TableData,
    pub quarterly: TableData,
    pub regional: TableData,
    pub ev_timeseries: TableData,
    pub vc_timeseries: TableData,
    pub deep_tech_share: TableData,
}

/// The persisted cache artifact. Both timestamp fields are captured from the
/// same instant of a run, so they always compare equal within one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheDocument {
    pub timestamp: String,
    pub last_updated: String,
    pub locations: Dataset,
    pub sectors: Dataset,
}
