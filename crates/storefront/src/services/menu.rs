//! Menu API client and the menu page view model.
//!
//! The menu page issues a single GET for the full menu when it is shown. A
//! failure of any kind leaves the page with no items and loading cleared; the
//! page then shows its empty-menu diagnostic. Nothing is retried.

use thiserror::Error;
use url::Url;

use foodiehub_core::{Menu, MenuItem, MenuItemId, NewMenuItem};

use super::view_task::ViewTask;
use crate::error::add_breadcrumb;

/// Path of the menu collection on the menu API.
pub const MENU_PATH: &str = "/api/menu/";

/// Errors that can occur when talking to the menu API.
#[derive(Debug, Error)]
pub enum MenuClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The configured base URL cannot be extended with the menu path.
    #[error("invalid menu API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the menu API.
#[derive(Debug, Clone)]
pub struct MenuClient {
    client: reqwest::Client,
    menu_url: Url,
}

impl MenuClient {
    /// Create a client for the menu API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the menu URL cannot be built or the HTTP client fails to build.
    pub fn new(base_url: &Url) -> Result<Self, MenuClientError> {
        let menu_url = Url::parse(&format!(
            "{}{MENU_PATH}",
            base_url.as_str().trim_end_matches('/')
        ))?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, menu_url })
    }

    /// The URL the menu is fetched from.
    #[must_use]
    pub const fn menu_url(&self) -> &Url {
        &self.menu_url
    }

    /// Fetch the full menu with one GET request.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx status or an unparsable body.
    pub async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuClientError> {
        let response = self.client.get(self.menu_url.clone()).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch a single menu item.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx status or an unparsable body.
    pub async fn fetch_item(&self, id: MenuItemId) -> Result<MenuItem, MenuClientError> {
        let url = self.menu_url.join(&id.to_string())?;
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Create a menu item and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-2xx status or an unparsable body.
    pub async fn create_item(&self, item: &NewMenuItem) -> Result<MenuItem, MenuClientError> {
        let response = self
            .client
            .post(self.menu_url.clone())
            .json(item)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MenuClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(MenuClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// State behind the menu page.
#[derive(Debug, Clone, Default)]
pub struct MenuPage {
    pub loading: bool,
    pub menu: Menu,
}

impl MenuPage {
    /// The page as first shown, before the fetch resolves.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            menu: Menu::default(),
        }
    }

    /// Fetch the menu and build the settled page.
    ///
    /// Never fails: errors are logged and produce an empty page.
    pub async fn load(client: &MenuClient) -> Self {
        let menu = match client.fetch_menu().await {
            Ok(items) => {
                let count = items.len().to_string();
                add_breadcrumb("menu", "Menu loaded", Some(&[("items", count.as_str())]));
                Menu::new(items)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    url = %client.menu_url(),
                    "Error fetching menu"
                );
                Menu::default()
            }
        };
        Self {
            loading: false,
            menu,
        }
    }

    /// Whether the page should show the "no menu items" diagnostic.
    #[must_use]
    pub fn shows_empty_diagnostic(&self) -> bool {
        !self.loading && self.menu.is_empty()
    }
}

/// Start loading the menu for a page that is being shown.
///
/// Dropping the returned task discards the result.
#[must_use]
pub fn spawn_menu_load(client: MenuClient) -> ViewTask<MenuPage> {
    ViewTask::spawn(async move { MenuPage::load(&client).await })
}
