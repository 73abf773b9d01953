use anyhow::Result;
use marketsync::application::{report_failure, OzonSyncApp};
use marketsync::infrastructure::config::SyncConfig;
use marketsync::infrastructure::logging::init_tracing_with_level;
use tracing::info;
use watch_sync_bot::bin_common::{load_config_from_env, ConfigType};

#[tokio::main]
async fn main() -> Result<()> {
    // Load config first (before logging is initialized)
    let config_path = load_config_from_env(ConfigType::Sync);
    let mut config = SyncConfig::load(&config_path)?;
    config.ozon.load_credentials()?;

    // Initialize logging with configured level
    init_tracing_with_level(&config.log_level);
    config.log();

    print_banner("Ozon stock/price sync");

    let app = OzonSyncApp::new(&config);
    match app.run().await {
        Ok(report) => {
            info!(
                "Synced {} offers: {}/{} stock entries in stock ({} batches), {} price entries ({} batches)",
                report.offers_listed,
                report.stock_in_stock,
                report.stock_entries,
                report.stock_batches,
                report.price_entries,
                report.price_batches
            );
        }
        Err(err) => report_failure(&err),
    }

    print_shutdown("Ozon sync");
    Ok(())
}

fn print_banner(name: &str) {
    info!("");
    info!("========================================");
    info!("Starting {}", name);
    info!("========================================");
    info!("");
}

fn print_shutdown(name: &str) {
    info!("");
    info!("========================================");
    info!("{} finished", name);
    info!("========================================");
}
