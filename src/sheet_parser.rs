// src/sheet_parser.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::data_types::{CellValue, TableData};
use crate::error::CacheError;

// The gviz endpoint answers with a JSONP-style wrapper:
//   google.visualization.Query.setResponse({...});
// The payload may span multiple lines, and the trailing semicolon is optional.
static RESPONSE_ENVELOPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)google\.visualization\.Query\.setResponse\((.*)\);?\s*$")
        .expect("envelope pattern is a valid regex")
});

#[derive(Deserialize)]
struct GvizResponse {
    table: Option<GvizTable>,
}

#[derive(Deserialize)]
struct GvizTable {
    cols: Option<Vec<GvizColumn>>,
    rows: Option<Vec<GvizRow>>,
}

#[derive(Deserialize)]
struct GvizColumn {
    label: Option<String>,
}

#[derive(Deserialize)]
struct GvizRow {
    c: Option<Vec<Option<GvizCell>>>,
}

#[derive(Deserialize)]
struct GvizCell {
    v: Option<Value>,
}

/// Unwraps the gviz envelope and normalizes the payload into headers + rows.
///
/// A payload without a table or row container is an empty tab, not an error.
/// Cells without a value slot become [`CellValue::Null`]; an empty cell never
/// turns into `""` or `0`.
pub fn parse_sheet_response(text: &str) -> Result<TableData, CacheError> {
    let captures = RESPONSE_ENVELOPE
        .captures(text)
        .ok_or(CacheError::InvalidFormat)?;
    let payload: GvizResponse = serde_json::from_str(&captures[1])?;

    let table = match payload.table {
        Some(table) => table,
        None => return Ok(TableData::empty()),
    };
    let raw_rows = match table.rows {
        Some(rows) => rows,
        None => return Ok(TableData::empty()),
    };

    let headers = table
        .cols
        .unwrap_or_default()
        .into_iter()
        .map(|col| col.label.unwrap_or_default())
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            row.c
                .unwrap_or_default()
                .into_iter()
                .map(|cell| match cell.and_then(|cell| cell.v) {
                    Some(value) => CellValue::from_json(value),
                    None => CellValue::Null,
                })
                .collect()
        })
        .collect();

    Ok(TableData { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(json: &str) -> String {
        format!("/*O_o*/\ngoogle.visualization.Query.setResponse({json});")
    }

    #[test]
    fn parses_a_wrapped_table() {
        let body = wrap(r#"{"table":{"cols":[{"label":"A"}],"rows":[{"c":[{"v":1}]}]}}"#);
        let table = parse_sheet_response(&body).unwrap();
        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.rows, vec![vec![CellValue::from_json(json!(1))]]);
    }

    #[test]
    fn payload_may_span_multiple_lines() {
        let body = wrap("{\"table\":{\n\"cols\":[{\"label\":\"A\"},{\"label\":\"B\"}],\n\"rows\":[{\"c\":[{\"v\":\"x\"},{\"v\":2.5}]}]\n}}");
        let table = parse_sheet_response(&body).unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn valueless_cells_become_null() {
        let body = wrap(
            r#"{"table":{"cols":[{"label":"A"},{"label":"B"},{"label":"C"},{"label":"D"}],"rows":[{"c":[{"v":null},{"v":""},{"v":0},null]}]}}"#,
        );
        let table = parse_sheet_response(&body).unwrap();
        assert_eq!(
            table.rows[0],
            vec![
                CellValue::Null,
                CellValue::String(String::new()),
                CellValue::from_json(json!(0)),
                CellValue::Null,
            ]
        );
    }

    #[test]
    fn row_without_cell_container_is_an_empty_row() {
        let body = wrap(r#"{"table":{"cols":[{"label":"A"}],"rows":[{}]}}"#);
        let table = parse_sheet_response(&body).unwrap();
        assert_eq!(table.rows, vec![Vec::<CellValue>::new()]);
    }

    #[test]
    fn column_without_label_gets_an_empty_header() {
        let body = wrap(r#"{"table":{"cols":[{"id":"A"},{"label":"B"}],"rows":[]}}"#);
        let table = parse_sheet_response(&body).unwrap();
        assert_eq!(table.headers, vec!["", "B"]);
    }

    #[test]
    fn missing_table_is_an_empty_tab() {
        let body = wrap(r#"{"status":"ok"}"#);
        let table = parse_sheet_response(&body).unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn missing_row_container_is_an_empty_tab() {
        let body = wrap(r#"{"table":{"cols":[{"label":"A"}]}}"#);
        let table = parse_sheet_response(&body).unwrap();
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn missing_envelope_is_a_format_error() {
        let err = parse_sheet_response("<html>sign in required</html>").unwrap_err();
        assert!(matches!(err, CacheError::InvalidFormat));
    }

    #[test]
    fn unparseable_payload_is_a_decode_error() {
        let body = "google.visualization.Query.setResponse({oops);";
        let err = parse_sheet_response(body).unwrap_err();
        assert!(matches!(err, CacheError::Decode(_)));
    }
}
