//! Navigation bar summary.

use crate::cart::Cart;
use crate::session::AuthSession;

/// Everything the navigation bar needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSummary {
    /// Name for the greeting, if the session has one.
    pub display_name: Option<String>,
    /// Orders link and logout control are shown only when logged in.
    pub logged_in: bool,
    /// Cart badge; hidden when the cart is empty.
    pub cart_badge: Option<u64>,
}

impl NavSummary {
    #[must_use]
    pub fn new(session: &AuthSession, cart: &Cart) -> Self {
        let count = cart.item_count();
        Self {
            display_name: session.display_name().map(String::from),
            logged_in: session.is_logged_in(),
            cart_badge: (count > 0).then_some(count),
        }
    }

    #[must_use]
    pub const fn shows_orders_link(&self) -> bool {
        self.logged_in
    }
}
