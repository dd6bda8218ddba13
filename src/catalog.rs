use crate::models::{CoinRecord, DisplayEntry};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Sorted display entries built from one upstream listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<DisplayEntry>,
    dropped: usize,
}

impl Catalog {
    /// Formats every usable record and sorts the result. Records without a
    /// string `symbol` and `name` are skipped and counted in `dropped`.
    pub fn from_records(records: &[Value]) -> Self {
        let mut entries = Vec::with_capacity(records.len());
        let mut dropped = 0usize;

        for value in records {
            match CoinRecord::from_value(value) {
                Some(record) => entries.push(record.display_entry()),
                None => dropped += 1,
            }
        }

        entries.sort();
        Self { entries, dropped }
    }

    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// The exact text written to disk: a 4-space indented JSON array with
/// non-ASCII characters left as-is.
pub fn render_catalog(catalog: &Catalog) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    catalog
        .entries()
        .serialize(&mut serializer)
        .context("failed to serialize catalog")?;
    String::from_utf8(buffer).context("serialized catalog is not valid UTF-8")
}

/// Replaces the file at `path` with the rendered catalog.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let rendered = render_catalog(catalog)?;
    let file = File::create(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(rendered.as_bytes())
        .with_context(|| format!("failed to write catalog to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush catalog to {}", path.display()))?;
    Ok(())
}

/// Loads a previously written catalog. A missing file yields `Ok(None)`.
pub fn read_catalog(path: &Path) -> Result<Option<Vec<String>>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let entries: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("{} does not contain a JSON array of strings", path.display()))?;
    Ok(Some(entries))
}
