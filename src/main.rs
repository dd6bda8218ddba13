use clap::Parser;
use crypto_catalog::{commands::refresh, config::JobConfig};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crypto-catalog")]
#[command(about = "Refresh the local cryptocurrency catalog used by the selector")]
struct Cli {
    /// Catalog listing endpoint (defaults to the CoinGecko coin list)
    #[arg(long, value_name = "URL")]
    url: Option<String>,
    /// Destination file for the catalog (defaults to cryptos.json)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Request timeout in seconds (defaults to 10)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

fn main() {
    let Cli {
        url,
        output,
        timeout_secs,
    } = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = JobConfig::with_overrides(url, output, timeout_secs);

    match refresh::run(&config) {
        Ok(summary) => {
            info!(
                "Catalog with {} entries saved to {} at {}",
                summary.entries_written,
                summary.output_path.display(),
                summary.completed_at.to_rfc3339()
            );
        }
        Err(err) if err.is_network() => {
            error!(
                "Could not fetch the coin catalog from {}: {}. {} was left unchanged.",
                config.catalog_url,
                err,
                config.output_path.display()
            );
        }
        Err(err) => {
            error!("Catalog refresh failed with an {} error: {}", err.kind(), err);
        }
    }
}
