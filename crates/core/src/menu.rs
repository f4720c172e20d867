//! Menu items and the category filter.
//!
//! A [`Menu`] is whatever the menu API returned for this page session plus
//! the currently selected [`CategoryFilter`]. Categories are always derived
//! from the loaded items, never stored, so the filter can only ever point at
//! `"all"` or a category that is actually present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{MenuItemId, Price};

/// Name of the catch-all category.
pub const ALL_CATEGORIES: &str = "all";

/// Errors raised by menu operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// The requested category is not present in the loaded menu.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A create/update payload failed validation.
    #[error("invalid menu item: {0}")]
    InvalidItem(String),
}

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or replacing a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub popular: bool,
}

impl NewMenuItem {
    /// Check the payload before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidItem` for a blank name or category, or a
    /// price that is negative or above [`Price::MAX_ITEM`].
    pub fn validate(&self) -> Result<(), MenuError> {
        if self.name.trim().is_empty() {
            return Err(MenuError::InvalidItem("name cannot be empty".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(MenuError::InvalidItem(
                "category cannot be empty".to_string(),
            ));
        }
        if self.price.is_negative() {
            return Err(MenuError::InvalidItem(
                "price cannot be negative".to_string(),
            ));
        }
        if self.price > Price::MAX_ITEM {
            return Err(MenuError::InvalidItem(format!(
                "price cannot exceed {}",
                Price::MAX_ITEM
            )));
        }
        Ok(())
    }

    /// Materialize the payload as a stored item.
    #[must_use]
    pub fn into_item(self, id: MenuItemId, created_at: DateTime<Utc>) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            popular: self.popular,
            created_at: Some(created_at),
        }
    }
}

/// The active category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Whether an item passes this filter.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category == *category,
        }
    }

    /// The filter's name as shown on its button.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loaded menu items together with the selected category.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
    filter: CategoryFilter,
}

impl Menu {
    /// Create a menu showing every category.
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            filter: CategoryFilter::All,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// `"all"` followed by each distinct category in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for item in &self.items {
            let category = item.category.as_str();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Whether `category` is present in the loaded items.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.items.iter().any(|item| item.category == category)
    }

    /// Select a category by name; `"all"` clears the filter.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::UnknownCategory` if no loaded item has that
    /// category. The current selection is left unchanged.
    pub fn select_category(&mut self, category: &str) -> Result<(), MenuError> {
        if category == ALL_CATEGORIES {
            self.filter = CategoryFilter::All;
            return Ok(());
        }
        if !self.has_category(category) {
            return Err(MenuError::UnknownCategory(category.to_string()));
        }
        self.filter = CategoryFilter::Category(category.to_string());
        Ok(())
    }

    /// Items that pass the active filter.
    pub fn filtered(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| self.filter.matches(item))
    }

    /// Items flagged as popular.
    pub fn popular(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.popular)
    }

    #[must_use]
    pub fn find(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Swap in a freshly loaded item list.
    ///
    /// The filter falls back to `All` if its category is no longer present.
    pub fn replace_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        if let CategoryFilter::Category(category) = &self.filter
            && !self.has_category(category)
        {
            self.filter = CategoryFilter::All;
        }
    }
}
