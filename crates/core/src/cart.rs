//! Cart store.
//!
//! The cart lives for one browser tab and is never persisted. Lines are keyed
//! by menu item id and keep insertion order; a line's quantity is always at
//! least 1, and a line whose quantity would reach 0 is removed instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::menu::MenuItem;
use crate::types::{MenuItemId, Price};

/// A menu item held in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub const fn id(&self) -> MenuItemId {
        self.item.id
    }

    /// Quantity times unit price.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price * self.quantity
    }
}

/// A serialized cart that breaks the line invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("cart line for item {0} has quantity 0")]
    ZeroQuantity(MenuItemId),
    #[error("cart has more than one line for item {0}")]
    DuplicateLine(MenuItemId),
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartLines")]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Deserialize)]
struct CartLines {
    lines: Vec<CartLine>,
}

impl TryFrom<CartLines> for Cart {
    type Error = CartError;

    fn try_from(raw: CartLines) -> Result<Self, Self::Error> {
        for (index, line) in raw.lines.iter().enumerate() {
            if line.quantity == 0 {
                return Err(CartError::ZeroQuantity(line.id()));
            }
            if raw.lines[..index].iter().any(|seen| seen.id() == line.id()) {
                return Err(CartError::DuplicateLine(line.id()));
            }
        }
        Ok(Self { lines: raw.lines })
    }
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `item`.
    ///
    /// Inserts a new line with quantity 1, or increments the existing line
    /// with the same id. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, item: &MenuItem) -> u32 {
        if let Some(line) = self.line_mut(item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            item: item.clone(),
            quantity: 1,
        });
        1
    }

    /// Remove the line for `id`, returning it if it was present.
    pub fn remove_from_cart(&mut self, id: MenuItemId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id() == id)?;
        Some(self.lines.remove(index))
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: MenuItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(line) = self.line_mut(id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines (the cart badge).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of quantity times price across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn line_mut(&mut self, id: MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }
}
