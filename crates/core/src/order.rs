//! Past orders.
//!
//! Orders are read-only in the storefront. Until an order service exists the
//! history view is fed from [`sample_orders`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{MenuItemId, OrderNumber, OrderStatus, Price};

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub price: Price,
}

impl OrderLine {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderNumber,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
    pub total: Price,
    pub delivery_address: String,
}

impl Order {
    /// Sum of the line totals. Normally equal to `total`.
    #[must_use]
    pub fn items_total(&self) -> Price {
        self.items.iter().map(OrderLine::line_total).sum()
    }

    /// Long-form date, e.g. `November 28, 2023`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Group orders by status, keeping each group's original order.
#[must_use]
pub fn group_by_status(orders: &[Order]) -> BTreeMap<OrderStatus, Vec<&Order>> {
    let mut groups: BTreeMap<OrderStatus, Vec<&Order>> = BTreeMap::new();
    for order in orders {
        groups.entry(order.status).or_default().push(order);
    }
    groups
}

const SAMPLE_ADDRESS: &str = "123 Foodie St, Cuisine City, 10001";

fn sample_line(id: i32, name: &str, quantity: u32, price: i64) -> OrderLine {
    OrderLine {
        id: MenuItemId::new(id),
        name: name.to_string(),
        quantity,
        price: Price::whole(price),
    }
}

/// The fixed order history shown to signed-in users.
#[must_use]
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderNumber::new("ORD-12345"),
            date: NaiveDate::from_ymd_opt(2023, 11, 28).unwrap_or_default(),
            status: OrderStatus::Delivered,
            items: vec![
                sample_line(1, "Margherita Pizza", 1, 299),
                sample_line(3, "Pasta Carbonara", 2, 249),
            ],
            total: Price::whole(797),
            delivery_address: SAMPLE_ADDRESS.to_string(),
        },
        Order {
            id: OrderNumber::new("ORD-12344"),
            date: NaiveDate::from_ymd_opt(2023, 11, 25).unwrap_or_default(),
            status: OrderStatus::Preparing,
            items: vec![
                sample_line(2, "Caesar Salad", 1, 199),
                sample_line(4, "Chocolate Lava Cake", 1, 149),
            ],
            total: Price::whole(348),
            delivery_address: SAMPLE_ADDRESS.to_string(),
        },
    ]
}
