use std::path::PathBuf;
use std::time::Duration;

/// Catalog listing endpoint; returns every coin as `{ id, symbol, name }`.
pub const DEFAULT_CATALOG_URL: &str = "https://api.coingecko.com/api/v3/coins/list";
/// Output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "cryptos.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for a single refresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub catalog_url: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl JobConfig {
    /// Builds a config from optional overrides, keeping the default for every
    /// value left unset. Blank URLs and a zero timeout count as unset.
    pub fn with_overrides(
        catalog_url: Option<String>,
        output_path: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            catalog_url: catalog_url
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.catalog_url),
            output_path: output_path.unwrap_or(defaults.output_path),
            timeout: timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}
