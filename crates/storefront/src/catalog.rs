//! In-memory menu catalog backing the menu API.
//!
//! The catalog lives for the lifetime of the process. It is seeded with the
//! sample dishes at startup and forgets every change on restart.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use foodiehub_core::{MenuError, MenuItem, MenuItemId, NewMenuItem};

/// Errors raised while storing menu items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// Every positive `i32` id has been handed out.
    #[error("menu item ids exhausted")]
    IdsExhausted,
}

/// Shared, cloneable handle to the menu catalog.
#[derive(Clone, Default)]
pub struct MenuCatalog {
    inner: Arc<RwLock<CatalogInner>>,
}

#[derive(Default)]
struct CatalogInner {
    items: Vec<MenuItem>,
    next_id: i32,
}

impl CatalogInner {
    fn insert(&mut self, item: NewMenuItem) -> Result<MenuItem, CatalogError> {
        let id = self
            .next_id
            .checked_add(1)
            .ok_or(CatalogError::IdsExhausted)?;
        self.next_id = id;
        let stored = item.into_item(MenuItemId::new(id), Utc::now());
        self.items.push(stored.clone());
        Ok(stored)
    }

    fn position(&self, id: MenuItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl MenuCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the given items, ids assigned from 1.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Menu` if any item fails validation.
    pub fn with_items(items: Vec<NewMenuItem>) -> Result<Self, CatalogError> {
        let mut inner = CatalogInner::default();
        for item in items {
            item.validate()?;
            inner.insert(item)?;
        }
        Ok(Self {
            inner: Arc::new(RwLock::new(inner)),
        })
    }

    /// Create a catalog holding the sample menu.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Menu` if the sample data fails validation.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::with_items(foodiehub_core::seed::menu_items())
    }

    /// A page of items in id order.
    pub async fn list(&self, skip: usize, limit: usize) -> Vec<MenuItem> {
        let inner = self.inner.read().await;
        inner.items.iter().skip(skip).take(limit).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn get(&self, id: MenuItemId) -> Option<MenuItem> {
        let inner = self.inner.read().await;
        inner.items.iter().find(|item| item.id == id).cloned()
    }

    /// Validate and store a new item.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Menu` if validation fails, or
    /// `CatalogError::IdsExhausted` once no further id can be assigned.
    pub async fn create(&self, item: NewMenuItem) -> Result<MenuItem, CatalogError> {
        item.validate()?;
        let mut inner = self.inner.write().await;
        let stored = inner.insert(item)?;
        tracing::info!(id = %stored.id, name = %stored.name, "Menu item created");
        Ok(stored)
    }

    /// Replace an existing item, keeping its id and creation time.
    ///
    /// Returns `Ok(None)` if no item has that id.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidItem` if validation fails.
    pub async fn update(
        &self,
        id: MenuItemId,
        item: NewMenuItem,
    ) -> Result<Option<MenuItem>, MenuError> {
        item.validate()?;
        let mut inner = self.inner.write().await;
        let Some(index) = inner.position(id) else {
            return Ok(None);
        };
        let Some(slot) = inner.items.get_mut(index) else {
            return Ok(None);
        };
        let created_at = slot.created_at.unwrap_or_else(Utc::now);
        *slot = item.into_item(id, created_at);
        tracing::info!(id = %id, "Menu item updated");
        Ok(Some(slot.clone()))
    }

    /// Remove an item. Returns whether it existed.
    pub async fn delete(&self, id: MenuItemId) -> bool {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.position(id) else {
            return false;
        };
        inner.items.remove(index);
        tracing::info!(id = %id, "Menu item deleted");
        true
    }
}
