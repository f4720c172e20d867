//! FoodieHub Core - Domain model for the food-ordering storefront.
//!
//! This crate holds the state model shared by the storefront server, the CLI
//! and the integration tests:
//! - `storefront` - Stub API server, menu loader and auth service
//! - `cli` - Operator commands against a menu API
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O, no
//! HTTP clients, no clocks. Loading and timing live in the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices and order statuses
//! - [`menu`] - Menu items, category derivation and the category filter
//! - [`cart`] - The cart store and its derived totals
//! - [`order`] - Past orders and the sample order history
//! - [`session`] - Local/external identity resolution
//! - [`nav`] - Navigation bar summary derived from session and cart
//! - [`seed`] - Sample menu catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod menu;
pub mod nav;
pub mod order;
pub mod seed;
pub mod session;
pub mod types;

pub use cart::{Cart, CartError, CartLine};
pub use menu::{CategoryFilter, Menu, MenuError, MenuItem, NewMenuItem};
pub use nav::NavSummary;
pub use order::{Order, OrderLine};
pub use session::{AuthSession, ExternalAccount, ExternalAuthState, Identity, LocalUser};
pub use types::*;
