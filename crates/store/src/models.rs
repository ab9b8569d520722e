//! Storefront API data model.
//!
//! Shapes mirror the storefront's JSON verbatim; unknown fields (version
//! counters and the like) are ignored on deserialization.

use chrono::{DateTime, Utc};
use order_sync_core::{CartId, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One user's cart: the products they selected and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    /// The storefront calls cart lines "products".
    #[serde(rename = "products")]
    pub lines: Vec<CartLine>,
}

/// A single cart line: a product reference and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    /// Positive integer count of units.
    pub quantity: u32,
}

/// A storefront user, fetched once per distinct user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub name: UserName,
}

/// First/last name pair as the storefront stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserName {
    pub firstname: String,
    pub lastname: String,
}

impl UserRecord {
    /// Display name used for the billing customer record.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.firstname, self.name.lastname)
    }
}

/// A storefront product, fetched once per distinct product id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    /// Decimal currency amount (e.g., `109.95`), converted to minor units
    /// only at billing-price creation time.
    pub price: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cart_deserializes_storefront_json() {
        let json = r#"{
            "id": 1,
            "userId": 1,
            "date": "2020-03-02T00:00:00.000Z",
            "products": [
                { "productId": 1, "quantity": 4 },
                { "productId": 2, "quantity": 1 }
            ],
            "__v": 0
        }"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.id, CartId::new(1));
        assert_eq!(cart.user_id, UserId::new(1));
        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].product_id, ProductId::new(1));
        assert_eq!(cart.lines[0].quantity, 4);
    }

    #[test]
    fn test_user_full_name() {
        let user: UserRecord = serde_json::from_str(
            r#"{
                "email": "john@gmail.com",
                "username": "johnd",
                "name": { "firstname": "john", "lastname": "doe" }
            }"#,
        )
        .unwrap();
        assert_eq!(user.full_name(), "john doe");
    }

    #[test]
    fn test_product_price_is_decimal() {
        let product: ProductRecord = serde_json::from_str(
            r#"{ "title": "Fjallraven Backpack", "price": 109.95, "category": "men's clothing" }"#,
        )
        .unwrap();
        assert_eq!(product.price, dec!(109.95));
    }
}
