//! Marketplace synchronization services
//!
//! One orchestrator per marketplace. Each run is one-shot and fully
//! sequential: list offers, fetch the feed, build payloads, upload them in
//! batches. Errors propagate unmodified to the binary, which is the single
//! recovery point.

pub mod ozon;
pub mod yandex;

pub use ozon::OzonSyncApp;
pub use yandex::YandexSyncApp;

use crate::domain::inventory::ParseError;
use crate::infrastructure::client::{OzonError, YandexError};
use crate::infrastructure::feed::FeedError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Inventory feed failed: {0}")]
    Feed(#[from] FeedError),

    #[error("Ozon sync failed: {0}")]
    Ozon(#[from] OzonError),

    #[error("Yandex Market sync failed: {0}")]
    Yandex(#[from] YandexError),

    #[error("Malformed inventory record: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, SyncError>;

impl SyncError {
    /// The underlying transport error, if this failure came from the
    /// network layer rather than from an API response or the feed content.
    pub fn transport(&self) -> Option<&reqwest::Error> {
        match self {
            SyncError::Feed(FeedError::RequestFailed(e)) => Some(e),
            SyncError::Ozon(OzonError::RequestFailed(e)) => Some(e),
            SyncError::Yandex(YandexError::RequestFailed(e)) => Some(e),
            _ => None,
        }
    }
}

/// Report a failed run. Timeouts and connection failures are called out
/// separately; everything else is reported as-is. The run is not retried.
pub fn report_failure(err: &SyncError) {
    match err.transport() {
        Some(transport) if transport.is_timeout() => {
            error!("Request timed out, aborting this run");
        }
        Some(transport) if transport.is_connect() => {
            error!("Connection failed: {}", transport);
        }
        _ => {
            error!("Sync failed: {}", err);
        }
    }
}
