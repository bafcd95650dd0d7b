//! Payment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sm_shared::Id;

/// Payment gateway state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    #[serde(alias = "success", alias = "settlement")]
    Paid,
    Failed,
    Expired,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    pub fn awaits_customer(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }
}

/// Payment for an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Id,
    pub order_id: Id,
    pub amount: f64,
    #[serde(alias = "payment_method")]
    pub method: String,
    pub status: PaymentStatus,
    /// Gateway page the customer completes the payment on
    #[serde(default, alias = "redirect_url")]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
