//! Order lifecycle status types.
//!
//! [`OrderStatus`] is the closed set of delivery stages shared with the rest of
//! the client. [`StatusValue`] is what actually arrives at a render boundary:
//! a known status, or raw text that did not match any of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stage of a delivery order's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    /// Placed, waiting for a courier.
    Pending,
    /// A courier accepted the order.
    Accepted,
    /// Picked up and on the way.
    PickedUp,
    /// Handed over to the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Accepted,
        Self::PickedUp,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::PickedUp => "pickedUp",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text that is not one of the [`OrderStatus`] wire names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A status as received at the render boundary.
///
/// Upstream data is not guaranteed to stay inside the closed set (older
/// payloads, statuses added server-side before the client knows them), so the
/// unmatched text is carried along instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusValue {
    /// One of the known lifecycle stages.
    Known(OrderStatus),
    /// Anything else, kept verbatim.
    Unrecognized(String),
}

impl StatusValue {
    /// Classify raw text. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<OrderStatus>()
            .map_or_else(|UnknownStatus(text)| Self::Unrecognized(text), Self::Known)
    }

    /// Wire name for known statuses, the original text otherwise.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// The known status, if any.
    #[must_use]
    pub const fn known(&self) -> Option<OrderStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<OrderStatus> for StatusValue {
    fn from(status: OrderStatus) -> Self {
        Self::Known(status)
    }
}

impl From<&str> for StatusValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for StatusValue {
    fn from(raw: String) -> Self {
        match raw.parse::<OrderStatus>() {
            Ok(status) => Self::Known(status),
            Err(_) => Self::Unrecognized(raw),
        }
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
