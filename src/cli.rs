//! Command-line front end: parses arguments, drives the catalog and the
//! favorites store, and renders list state as text.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError, ConfigStore};
use crate::error::OperationFailed;
use crate::favorites::FavoritesStore;
use crate::notifier::ErrorNotifier;
use crate::places::{Catalog, Place};
use crate::transport::PlacesTransport;
use crate::ui::mvi::Reducer;
use crate::ui::places_list::{PlacesListIntent, PlacesListReducer, PlacesListState};

#[derive(Debug, Parser)]
#[command(name = "favplaces", version, about = "Browse places and keep a list of favorites")]
pub struct Cli {
    /// Config file (default: ~/.config/favplaces/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the places API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every place that can be added to favorites
    Available,
    /// List favorite places
    Favorites,
    /// Add a catalog place to favorites
    Add { place_id: String },
    /// Remove a place from favorites
    Remove { place_id: String },
}

impl Cli {
    /// Resolve configuration: explicit `--config`, else the default path,
    /// then apply `--base-url`.
    pub fn load_config(&self) -> Result<ConfigStore, ConfigError> {
        let (config, path) = match &self.config {
            Some(path) => (Config::load_from(path)?, path.clone()),
            None => (Config::load()?, Config::config_path()),
        };
        let store = ConfigStore::new(config, path);
        if let Some(base_url) = &self.base_url {
            store.override_base_url(base_url)?;
        }
        Ok(store)
    }
}

/// Wires the catalog, the favorites store and the notifier for one run.
pub struct App {
    catalog: Catalog,
    favorites: FavoritesStore,
    notifier: ErrorNotifier,
}

impl App {
    pub fn new(transport: Arc<dyn PlacesTransport>, notifier: ErrorNotifier) -> Self {
        Self {
            catalog: Catalog::new(transport.clone()),
            favorites: FavoritesStore::new(transport, notifier.clone()),
            notifier,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Execute `command`, writing human-readable output to `out`.
    ///
    /// Returns `Ok(false)` when the command failed in a way already
    /// reported to the user.
    pub async fn run(&self, command: Command, out: &mut impl Write) -> std::io::Result<bool> {
        match command {
            Command::Available => {
                let state = self.fetch_available().await;
                write!(out, "{}", render_list("Available places", &state))?;
                Ok(state.error().is_none())
            }
            Command::Favorites => {
                let state = self.fetch_favorites().await;
                write!(out, "{}", render_list("Favorite places", &state))?;
                Ok(state.error().is_none())
            }
            Command::Add { place_id } => self.add(&place_id, out).await,
            Command::Remove { place_id } => self.remove(&place_id, out).await,
        }
    }

    async fn fetch_available(&self) -> PlacesListState {
        let state = PlacesListReducer::reduce(
            PlacesListState::default(),
            PlacesListIntent::FetchStarted,
        );
        let intent = match self.catalog.load_available().await {
            Ok(places) => PlacesListIntent::FetchSucceeded { places },
            Err(e) => PlacesListIntent::FetchFailed {
                message: e.to_string(),
            },
        };
        PlacesListReducer::reduce(state, intent)
    }

    async fn fetch_favorites(&self) -> PlacesListState {
        let state = PlacesListReducer::reduce(
            PlacesListState::default(),
            PlacesListIntent::FetchStarted,
        );
        let intent = match self.favorites.load().await {
            Ok(places) => PlacesListIntent::FetchSucceeded { places },
            Err(e) => PlacesListIntent::FetchFailed {
                message: e.to_string(),
            },
        };
        PlacesListReducer::reduce(state, intent)
    }

    async fn add(&self, place_id: &str, out: &mut impl Write) -> std::io::Result<bool> {
        let available = self.fetch_available().await;
        let Some(places) = available.places() else {
            write!(out, "{}", render_list("Available places", &available))?;
            return Ok(false);
        };
        let Some(place) = places.iter().find(|p| p.id == place_id).cloned() else {
            writeln!(out, "Unknown place: {}", place_id)?;
            return Ok(false);
        };

        let favorites = self.fetch_favorites().await;
        if favorites.error().is_some() {
            write!(out, "{}", render_list("Favorite places", &favorites))?;
            return Ok(false);
        }

        let outcome = self.favorites.add(place).await;
        self.finish_mutation(favorites, outcome, out)
    }

    async fn remove(&self, place_id: &str, out: &mut impl Write) -> std::io::Result<bool> {
        let favorites = self.fetch_favorites().await;
        let Some(places) = favorites.places() else {
            write!(out, "{}", render_list("Favorite places", &favorites))?;
            return Ok(false);
        };
        let place = places
            .iter()
            .find(|p| p.id == place_id)
            .cloned()
            .unwrap_or_else(|| Place::new(place_id, place_id));

        let outcome = self.favorites.remove(place).await;
        self.finish_mutation(favorites, outcome, out)
    }

    fn finish_mutation(
        &self,
        state: PlacesListState,
        outcome: Result<(), OperationFailed>,
        out: &mut impl Write,
    ) -> std::io::Result<bool> {
        let succeeded = outcome.is_ok();
        if let Err(e) = outcome {
            if self.notifier.has_error() {
                writeln!(out, "Error: {}", self.notifier.current_message())?;
            }
            writeln!(out, "{}", e)?;
        }

        let state = PlacesListReducer::reduce(
            state,
            PlacesListIntent::PlacesChanged {
                places: self.favorites.favorites(),
            },
        );
        write!(out, "{}", render_list("Favorite places", &state))?;
        Ok(succeeded)
    }
}

/// Render one list state as text.
pub fn render_list(title: &str, state: &PlacesListState) -> String {
    match state {
        PlacesListState::Idle => String::new(),
        PlacesListState::Loading => format!("{}: loading...\n", title),
        PlacesListState::Failed { message } => format!("{}: {}\n", title, message),
        PlacesListState::Loaded { places } if places.is_empty() => {
            format!("{}: none\n", title)
        }
        PlacesListState::Loaded { places } => {
            let mut text = format!("{} ({}):\n", title, places.len());
            for place in places {
                text.push_str(&format!("  {:<12} {}\n", place.id, place.title));
            }
            text
        }
    }
}
