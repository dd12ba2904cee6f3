use std::sync::Arc;

use crate::catalog::{CatalogError, RouteCatalog};
use crate::config::Config;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RouteCatalog>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(catalog: RouteCatalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    /// State with the built-in catalog documented for `config`.
    pub fn from_config(config: Config) -> Result<Self, CatalogError> {
        let catalog = RouteCatalog::builtin(config.default_length)?;
        Ok(Self::new(catalog, config))
    }
}
