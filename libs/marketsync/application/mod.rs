//! Application Layer
//!
//! Sync orchestration use cases. This layer depends on domain and
//! infrastructure layers.

pub mod sync;

// Re-export sync services for binaries
pub use sync::{report_failure, OzonSyncApp, SyncError, YandexSyncApp};
