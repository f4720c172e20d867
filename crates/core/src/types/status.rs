//! Order status and its display table.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a placed order.
///
/// Wire values are lowercase. Anything unrecognised deserializes to
/// [`OrderStatus::Unknown`] so a new backend status never breaks the history view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Preparing,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Icon shown next to an order's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    /// Check mark (delivered).
    Check,
    /// Clock (preparing).
    Clock,
    /// Cross (cancelled).
    Cross,
}

impl OrderStatus {
    /// Icon lookup; unknown statuses have none.
    #[must_use]
    pub const fn icon(self) -> Option<StatusIcon> {
        match self {
            Self::Delivered => Some(StatusIcon::Check),
            Self::Preparing => Some(StatusIcon::Clock),
            Self::Cancelled => Some(StatusIcon::Cross),
            Self::Unknown => None,
        }
    }

    /// Wire value of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preparing => "preparing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// Capitalised label for display (`"Delivered"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preparing => "Preparing",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
