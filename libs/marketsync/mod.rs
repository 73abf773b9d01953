//! Marketplace stock/price synchronization
//!
//! Syncs the supplier watch stock feed (ZIP archive with an XLS spreadsheet)
//! into the Ozon and Yandex Market seller catalogs: list the offers a
//! marketplace knows, normalize feed quantities and prices, build the
//! marketplace-specific payloads and upload them in API-sized batches.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod utils;

// Re-export commonly used items
pub use application::{report_failure, OzonSyncApp, SyncError, YandexSyncApp};
pub use domain::{InventoryRecord, SyncReport};
pub use infrastructure::{
    client::{OzonClient, YandexClient},
    config::SyncConfig,
    feed::FeedClient,
    logging::{init_tracing, init_tracing_with_level},
};
pub use utils::divide;
