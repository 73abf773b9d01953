use anyhow::Result;
use marketsync::application::{report_failure, YandexSyncApp};
use marketsync::infrastructure::config::SyncConfig;
use marketsync::infrastructure::logging::init_tracing_with_level;
use tracing::info;
use watch_sync_bot::bin_common::{load_config_from_env, ConfigType};

#[tokio::main]
async fn main() -> Result<()> {
    // Load config first (before logging is initialized)
    let config_path = load_config_from_env(ConfigType::Sync);
    let mut config = SyncConfig::load(&config_path)?;
    config.yandex.load_credentials()?;

    // Initialize logging with configured level
    init_tracing_with_level(&config.log_level);
    config.log();

    print_banner("Yandex Market stock/price sync");

    let app = YandexSyncApp::new(&config);
    match app.run().await {
        Ok(reports) => {
            for (label, report) in reports {
                info!(
                    "Campaign {}: {} offers, {}/{} stock entries in stock ({} batches), {} price entries ({} batches)",
                    label,
                    report.offers_listed,
                    report.stock_in_stock,
                    report.stock_entries,
                    report.stock_batches,
                    report.price_entries,
                    report.price_batches
                );
            }
        }
        Err(err) => report_failure(&err),
    }

    print_shutdown("Yandex Market sync");
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
