// File: crates/scatter-core/src/loader.rs
// Summary: Dataset retrieval (HTTP, local JSON, local CSV) followed by record validation.

use std::path::Path;

use crate::error::{ChartError, FetchError, Result};
use crate::record::{validate, RawRecord, Record};

/// GET `url` once and validate the JSON array it returns. No retry.
pub async fn fetch_records(client: &reqwest::Client, url: &str) -> Result<Vec<Record>> {
    tracing::debug!(url, "fetching dataset");
    let response = client.get(url).send().await.map_err(FetchError::from)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()).into());
    }
    let body = response.bytes().await.map_err(FetchError::from)?;
    tracing::debug!(bytes = body.len(), "dataset received");
    parse_records(&body)
}

/// Parse a JSON array of raw records and validate every entry.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    let raw: Vec<RawRecord> = serde_json::from_slice(bytes).map_err(FetchError::from)?;
    finish(raw)
}

pub fn load_json_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let bytes = std::fs::read(path.as_ref()).map_err(FetchError::from)?;
    parse_records(&bytes)
}

/// Load a CSV file whose header row uses the same column names as the JSON payload.
pub fn load_csv_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .map_err(FetchError::from)?;
    let mut raw = rdr
        .deserialize::<RawRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(FetchError::from)?;
    // CSV cannot tell an empty cell from a missing one; an empty Doping cell means "none".
    for r in &mut raw {
        r.doping.get_or_insert_with(String::new);
    }
    finish(raw)
}

/// Dispatch on extension: `.csv` goes through the CSV reader, anything else is JSON.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv { load_csv_file(path) } else { load_json_file(path) }
}

fn finish(raw: Vec<RawRecord>) -> Result<Vec<Record>> {
    if raw.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    Ok(validate(raw)?)
}
