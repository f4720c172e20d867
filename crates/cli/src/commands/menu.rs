//! Menu inspection and seeding commands.
//!
//! # Usage
//!
//! ```bash
//! foodiehub menu list
//! foodiehub menu seed
//! ```
//!
//! # Environment Variables
//!
//! - `MENU_API_BASE_URL` - Base URL of the menu API (default `http://localhost:8000`)

use tracing::info;
use url::Url;

use foodiehub_core::MenuItem;
use foodiehub_storefront::services::MenuClient;

use super::CommandError;

/// What `menu seed` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The API already had items; nothing was added.
    Skipped { existing: usize },
    /// Every sample item was created.
    Seeded { created: usize },
}

/// List all menu items, then a summary by category.
///
/// # Errors
///
/// Returns an error if the menu API cannot be reached or answers with an error.
pub async fn list(api_url: &Url) -> Result<(), CommandError> {
    let client = MenuClient::new(api_url)?;
    info!(url = %client.menu_url(), "Fetching menu");
    let items = client.fetch_menu().await?;

    if items.is_empty() {
        info!("No menu items found");
        info!("Run `foodiehub menu seed` to add sample data");
        return Ok(());
    }

    info!("Menu items ({} items)", items.len());
    for item in &items {
        info!(
            id = %item.id,
            name = %item.name,
            price = %item.price,
            category = %item.category,
            popular = item.popular,
            image = item.image.as_deref().unwrap_or("-"),
            created = %item.created_at.map(|at| at.to_rfc3339()).unwrap_or_default(),
            "{}",
            item.description
        );
    }

    info!("Summary by category");
    for (category, names) in category_summary(&items) {
        info!("{}: {} items", category.to_uppercase(), names.len());
        for name in names {
            info!("  - {name}");
        }
    }

    Ok(())
}

/// Add the sample menu unless the API already has items.
///
/// # Errors
///
/// Returns an error if the menu API cannot be reached or rejects an item.
pub async fn seed(api_url: &Url) -> Result<SeedOutcome, CommandError> {
    let client = MenuClient::new(api_url)?;
    seed_with(&client).await
}

async fn seed_with(client: &MenuClient) -> Result<SeedOutcome, CommandError> {
    let existing = client.fetch_menu().await?.len();
    if existing > 0 {
        info!(existing, "Menu already has items, skipping seed");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let items = foodiehub_core::seed::menu_items();
    info!(count = items.len(), "Seeding menu");
    for item in &items {
        let created = client.create_item(item).await?;
        info!(id = %created.id, name = %created.name, "Created menu item");
    }

    info!("Seeding complete");
    Ok(SeedOutcome::Seeded {
        created: items.len(),
    })
}

/// Item names grouped by category, categories in order of first appearance.
fn category_summary(items: &[MenuItem]) -> Vec<(&str, Vec<&str>)> {
    let mut summary: Vec<(&str, Vec<&str>)> = Vec::new();
    for item in items {
        match summary
            .iter_mut()
            .find(|(category, _)| *category == item.category)
        {
            Some((_, names)) => names.push(item.name.as_str()),
            None => summary.push((item.category.as_str(), vec![item.name.as_str()])),
        }
    }
    summary
}
