//! CLI command implementations.

pub mod menu;

use thiserror::Error;

use foodiehub_storefront::services::MenuClientError;

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Talking to the menu API failed.
    #[error("menu API: {0}")]
    MenuApi(#[from] MenuClientError),
}
