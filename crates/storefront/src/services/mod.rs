//! Client-side services for the storefront views.
//!
//! # Services
//!
//! - `auth` - Local and external sign-in, sign-out
//! - `menu` - Menu API client and the menu page loader
//! - `orders` - Order history view model
//! - `view_task` - Background work tied to the lifetime of a view

pub mod auth;
pub mod menu;
pub mod orders;
pub mod view_task;

pub use auth::{AuthError, AuthService, IdentityProvider};
pub use menu::{MenuClient, MenuClientError, MenuPage, spawn_menu_load};
pub use orders::{OrderHistory, load_order_history, spawn_order_history};
pub use view_task::ViewTask;
