//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod gated_transport;
pub mod mock_backend;

use favplaces::config::ApiConfig;
use favplaces::favorites::FavoritesStore;
use favplaces::notifier::ErrorNotifier;
use favplaces::places::Place;
use favplaces::transport::HttpTransport;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn park() -> Place {
    Place::new("p1", "Park")
}

pub fn lake() -> Place {
    Place::new("p2", "Lake")
}

pub fn ids(places: &[Place]) -> Vec<String> {
    places.iter().map(|p| p.id.clone()).collect()
}

pub fn http_transport(base_url: &str) -> HttpTransport {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        timeout_seconds: Some(5),
    };
    HttpTransport::new(&config).expect("Failed to build transport")
}

/// Store wired to a real HTTP transport pointed at `base_url`.
pub fn http_store(base_url: &str) -> (FavoritesStore, ErrorNotifier) {
    let notifier = ErrorNotifier::new();
    let store = FavoritesStore::new(Arc::new(http_transport(base_url)), notifier.clone());
    (store, notifier)
}

/// Poll `condition` until it holds or `timeout` elapses.
pub async fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    condition()
}
