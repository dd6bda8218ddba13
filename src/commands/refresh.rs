use crate::catalog::{write_catalog, Catalog};
use crate::config::JobConfig;
use crate::error::JobError;
use crate::http_client::build_blocking_client;
use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde_json::Value;
use std::path::PathBuf;

/// Outcome of a successful refresh.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub records_fetched: usize,
    pub entries_written: usize,
    pub records_dropped: usize,
    pub output_path: PathBuf,
    pub completed_at: DateTime<Utc>,
}

/// Fetches the coin listing, rebuilds the catalog and overwrites the output
/// file. The file is only touched once the listing has been fetched and
/// decoded.
pub fn run(config: &JobConfig) -> Result<RunSummary, JobError> {
    info!("Fetching coin catalog from {}", config.catalog_url);

    let records = fetch_listing(config)?;
    let catalog = Catalog::from_records(&records);
    if catalog.dropped() > 0 {
        warn!(
            "Skipped {} of {} records without a symbol and name",
            catalog.dropped(),
            records.len()
        );
    }

    write_catalog(&config.output_path, &catalog)?;

    Ok(RunSummary {
        records_fetched: records.len(),
        entries_written: catalog.len(),
        records_dropped: catalog.dropped(),
        output_path: config.output_path.clone(),
        completed_at: Utc::now(),
    })
}

fn fetch_listing(config: &JobConfig) -> Result<Vec<Value>, JobError> {
    let client = build_blocking_client(Some(config.timeout))?;
    let response = client
        .get(&config.catalog_url)
        .send()?
        .error_for_status()?;
    let body = response.text()?;

    let decoded: Value =
        serde_json::from_str(&body).context("failed to decode catalog response as JSON")?;
    match decoded {
        Value::Array(records) => Ok(records),
        other => Err(anyhow!(
            "catalog response must be a JSON array, got {}",
            json_kind(&other)
        )
        .into()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
