//! Shopping cart entities.

use serde::{Deserialize, Serialize};
use sm_shared::Id;

use super::product::Product;

/// Line in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Id,
    pub product_id: Id,
    #[serde(default)]
    pub product: Option<Product>,
    pub quantity: u32,
    /// Unit price; falls back to the embedded product price when absent
    #[serde(default)]
    pub price: Option<f64>,
}

impl CartItem {
    pub fn unit_price(&self) -> f64 {
        self.price
            .or_else(|| self.product.as_ref().map(|p| p.price))
            .unwrap_or(0.0)
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}

/// The signed-in user's cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Total as computed by the backend
    #[serde(default, alias = "total_price", alias = "total_amount")]
    pub total: Option<f64>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Backend total, or the sum of line totals when the backend sent none
    pub fn total(&self) -> f64 {
        self.total
            .unwrap_or_else(|| self.items.iter().map(CartItem::line_total).sum())
    }

    pub fn find_by_product(&self, product_id: &Id) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_from_lines() {
        let cart: Cart = serde_json::from_str(
            r#"{"items": [
                {"id": 1, "product_id": 10, "quantity": 2, "price": 5000},
                {"id": 2, "product_id": 11, "quantity": 1,
                 "product": {"id": 11, "name": "Teh", "price": 3000}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), 13_000.0);
        assert!(cart.find_by_product(&Id::from(11u64)).is_some());
    }

    #[test]
    fn test_backend_total_wins() {
        let cart: Cart = serde_json::from_str(
            r#"{"items": [{"id": 1, "product_id": 10, "quantity": 2, "price": 5000}], "total_price": 9000}"#,
        )
        .unwrap();
        assert_eq!(cart.total(), 9_000.0);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
