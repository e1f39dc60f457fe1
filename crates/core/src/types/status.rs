//! Status enums for orders and stock.

use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Submitted, awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by the farm.
    Confirmed,
    /// Shipped to the buyer.
    Shipped,
    /// Cancelled before fulfillment.
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Shipped => write!(f, "shipped"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "shipped" => Ok(Self::Shipped),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Result of checking a requested quantity against a stock limit.
///
/// The cart never enforces stock; callers run this check before changing
/// quantities and decide what to do with the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Requested quantity is within the reported stock.
    Within,
    /// Requested quantity exceeds the reported stock.
    Exceeded,
    /// The catalog reported no stock figure.
    Unknown,
}

impl StockStatus {
    /// Check a requested quantity against an optional stock limit.
    #[must_use]
    pub fn check(requested: u32, limit: Option<u32>) -> Self {
        limit.map_or(Self::Unknown, |limit| {
            if requested <= limit {
                Self::Within
            } else {
                Self::Exceeded
            }
        })
    }
}
