//! Favorite places client.
//!
//! Keeps the user's favorite places in memory, applies add/remove
//! optimistically and reconciles against the places API, rolling back
//! and raising a global error message when the server refuses.

pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod notifier;
pub mod places;
pub mod transport;
pub mod ui;
