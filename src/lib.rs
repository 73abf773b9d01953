//! Watch Sync Bot - Main Library
//!
//! Root crate for the marketplace sync binaries. The business logic lives in
//! the `marketsync` workspace library; this crate adds the thin presentation
//! layer the binaries share.
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use watch_sync_bot::bin_common::{load_config_from_env, ConfigType};
//! use watch_sync_bot::marketsync::OzonSyncApp;
//! ```

// Re-export workspace library for convenience
pub use marketsync;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, ConfigType};
}
