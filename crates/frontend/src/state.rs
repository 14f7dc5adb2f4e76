//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::BackendClient;
use crate::catalog::CatalogStore;
use crate::config::FrontendConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the backend client and the catalog
/// store the fragment handlers read from.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FrontendConfig,
    api: BackendClient,
    catalog: CatalogStore<BackendClient>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: FrontendConfig) -> Self {
        let api = BackendClient::new(&config.backend_url);
        let catalog = CatalogStore::new(api.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                catalog,
            }),
        }
    }

    /// Get a reference to the frontend configuration.
    #[must_use]
    pub fn config(&self) -> &FrontendConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &BackendClient {
        &self.inner.api
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore<BackendClient> {
        &self.inner.catalog
    }
}
