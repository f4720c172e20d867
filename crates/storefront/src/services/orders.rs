//! Order history view model.
//!
//! Orders are not fetched from anywhere yet. A signed-in user sees the sample
//! orders after a short simulated delay; a signed-out user is asked to sign in.

use std::collections::BTreeMap;
use std::time::Duration;

use foodiehub_core::order::{group_by_status, sample_orders};
use foodiehub_core::{AuthSession, Order, OrderStatus};

use super::view_task::ViewTask;

/// Delay before the sample orders appear.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

/// What the order history page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderHistory {
    /// Nobody is signed in; show the sign-in prompt.
    SignInRequired,
    /// The user's orders, newest first.
    Loaded(Vec<Order>),
}

impl OrderHistory {
    /// The loaded orders, or an empty slice when signed out.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        match self {
            Self::SignInRequired => &[],
            Self::Loaded(orders) => orders,
        }
    }

    /// Loaded orders grouped by status.
    #[must_use]
    pub fn grouped(&self) -> BTreeMap<OrderStatus, Vec<&Order>> {
        group_by_status(self.orders())
    }
}

/// Resolve the order history for `session`.
///
/// Returns immediately when signed out. Otherwise waits `latency` before
/// returning the sample orders.
pub async fn load_order_history(session: &AuthSession, latency: Duration) -> OrderHistory {
    if !session.is_logged_in() {
        return OrderHistory::SignInRequired;
    }
    tokio::time::sleep(latency).await;
    let orders = sample_orders();
    tracing::debug!(count = orders.len(), "Order history loaded");
    OrderHistory::Loaded(orders)
}

/// Start loading the order history for a page that is being shown.
///
/// Dropping the returned task discards the result.
#[must_use]
pub fn spawn_order_history(session: AuthSession, latency: Duration) -> ViewTask<OrderHistory> {
    ViewTask::spawn(async move { load_order_history(&session, latency).await })
}
