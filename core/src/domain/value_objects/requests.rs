//! Request payloads sent to the backend.
//!
//! Payloads are validated only by type; business rules (password strength,
//! stock limits, address format) are enforced by the backend.

use serde::{Deserialize, Serialize};
use sm_shared::{Id, Pagination, SortOrder};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

/// Body of the endpoints that take only an email (resend OTP, forgot password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

pub type ResendOtpRequest = EmailRequest;
pub type ForgotPasswordRequest = EmailRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Third-party identity provider whose ID token is exchanged for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Facebook,
    Apple,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Apple => "apple",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthLoginRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Filters for the product listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub pagination: Option<Pagination>,
    pub search: Option<String>,
    pub category_id: Option<Id>,
    /// Field to sort by, with direction
    pub sort: Option<(String, SortOrder)>,
}

impl ProductQuery {
    pub fn page(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() { None } else { Some(term) };
        self
    }

    pub fn category(mut self, category_id: impl Into<Id>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some((field.into(), order));
        self
    }

    /// Query string pairs in a stable order
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(pagination) = &self.pagination {
            pairs.push(("page".to_string(), pagination.page.to_string()));
            pairs.push(("limit".to_string(), pagination.per_page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.trim().to_string()));
        }
        if let Some(category_id) = &self.category_id {
            pairs.push(("category_id".to_string(), category_id.to_string()));
        }
        if let Some((field, order)) = &self.sort {
            pairs.push(("sort".to_string(), field.clone()));
            pairs.push(("order".to_string(), order.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: Id,
    pub quantity: u32,
}

impl AddCartItemRequest {
    pub fn new(product_id: impl Into<Id>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: Id,
    pub quantity: u32,
}

/// Checkout request; with no explicit items the backend orders the cart contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub shipping_address: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub order_id: Id,
    #[serde(rename = "payment_method")]
    pub method: String,
}

/// Store details for creating or updating a seller store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRequest {
    pub store_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_query_pairs() {
        let query = ProductQuery::default()
            .page(Pagination::new(2, 10))
            .search("  batik ")
            .category(3u64)
            .sort_by("price", SortOrder::Desc);

        let pairs = query.to_query_pairs();
        let as_strs: Vec<(&str, &str)> =
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            as_strs,
            vec![
                ("page", "2"),
                ("limit", "10"),
                ("search", "batik"),
                ("category_id", "3"),
                ("sort", "price"),
                ("order", "desc"),
            ]
        );
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let query = ProductQuery::default().search("   ");
        assert!(query.to_query_pairs().is_empty());
    }

    #[test]
    fn test_order_request_omits_empty_items() {
        let request = CreateOrderRequest {
            shipping_address: "Jl. Merdeka 1".to_string(),
            payment_method: "bank_transfer".to_string(),
            notes: None,
            items: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"shipping_address": "Jl. Merdeka 1", "payment_method": "bank_transfer"})
        );
    }

    #[test]
    fn test_payment_request_wire_name() {
        let request = CreatePaymentRequest {
            order_id: Id::from(5u64),
            method: "ewallet".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"order_id": 5, "payment_method": "ewallet"})
        );
    }
}
