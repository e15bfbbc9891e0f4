//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{config::Config, scoreboard::ContestBoard};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Loaded contest boards keyed by board id.
    ///
    /// All board mutation (load, advance, discard) goes through the write
    /// guard, which preserves the engine's single-writer discipline.
    boards: RwLock<HashMap<Uuid, ContestBoard>>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                boards: RwLock::new(HashMap::new()),
                config,
            }),
        }
    }

    /// Get a reference to the board map
    pub fn boards(&self) -> &RwLock<HashMap<Uuid, ContestBoard>> {
        &self.inner.boards
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
