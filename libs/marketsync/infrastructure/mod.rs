//! Infrastructure Layer
//!
//! Implementations of external interfaces (marketplace APIs, stock feed,
//! configuration, logging). This layer depends on the domain layer but not
//! on the application layer.

pub mod client;
pub mod config;
pub mod feed;
pub mod logging;

// Re-export commonly used types from client
pub use client::{OzonClient, OzonError, YandexClient, YandexError};

// Re-export config types
pub use config::{CampaignTarget, ConfigError, SyncConfig};

// Re-export infrastructure services
pub use feed::{FeedClient, FeedError};
pub use logging::{init_tracing, init_tracing_with_level};
