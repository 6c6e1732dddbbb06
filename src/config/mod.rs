//! Configuration for the favorites client.
//!
//! Loaded from `~/.config/favplaces/config.toml`; every field has a
//! default so a missing file yields a working configuration.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config};
