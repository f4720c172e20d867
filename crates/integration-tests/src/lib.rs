//! Integration tests for FoodieHub.
//!
//! Each test starts its own storefront API server on an ephemeral port, so
//! nothing needs to be running beforehand.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodiehub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_api` - Stub API server over real HTTP (CORS, errors, menu CRUD)
//! - `menu_loader` - Menu page loading against live and failing servers
//! - `session_flow` - Cart, session and order history working together

use std::net::SocketAddr;

use axum::Router;
use url::Url;

use foodiehub_storefront::app;
use foodiehub_storefront::catalog::MenuCatalog;
use foodiehub_storefront::config::StorefrontConfig;
use foodiehub_storefront::state::AppState;

/// A storefront API server running on a background task.
pub struct TestServer {
    pub addr: SocketAddr,
    pub catalog: MenuCatalog,
}

impl TestServer {
    /// Start a server with the sample menu in development mode.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn start() -> Self {
        let catalog = MenuCatalog::seeded().expect("sample menu is valid");
        Self::with_catalog(catalog, |_| None).await
    }

    /// Start a server over `catalog` with configuration taken from `lookup`.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or the server cannot be started.
    pub async fn with_catalog(
        catalog: MenuCatalog,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let config = StorefrontConfig::from_lookup(lookup).expect("valid test configuration");
        let router = app::router(AppState::new(config, catalog.clone()));
        let addr = serve(router).await;
        Self { addr, catalog }
    }

    /// Base URL of the server, without a trailing path.
    ///
    /// # Panics
    ///
    /// Panics if the address does not form a URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("socket address forms a URL")
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Serve any router on an ephemeral local port.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// A base URL nothing is listening on.
///
/// # Panics
///
/// Panics if no local port can be bound.
#[must_use]
pub fn unreachable_base_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("socket address forms a URL")
}
