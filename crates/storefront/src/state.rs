//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::MenuCatalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Nothing in it is mutated per
/// request except the menu catalog, which guards itself.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: MenuCatalog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: MenuCatalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &MenuCatalog {
        &self.inner.catalog
    }
}
