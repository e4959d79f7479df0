//! Core domain model for the order gateway

mod lookup;

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

pub use lookup::Lookup;

/// Name given to every synthesized product
pub const PLACEHOLDER_PRODUCT_NAME: &str = "Sample Product";
/// Price given to every synthesized product
pub const PLACEHOLDER_PRODUCT_PRICE: f64 = 99.99;
/// Name given to every synthesized user
pub const PLACEHOLDER_USER_NAME: &str = "Sample User";
/// Email given to every synthesized user
pub const PLACEHOLDER_USER_EMAIL: &str = "user@example.com";

/// Order record as served by the order service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: i32,
    /// Identifier of the ordered product
    pub product_id: i32,
    /// Identifier of the ordering user
    pub user_id: i32,
    /// Number of items ordered, null when the order service has none
    pub quantity: Option<i32>,
    /// Processing status, null when the order service has none
    pub status: Option<String>,
}

/// Product attached to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Stand-in product carrying only the real identifier
    pub fn placeholder(id: i32) -> Self {
        Self {
            id,
            name: PLACEHOLDER_PRODUCT_NAME.to_string(),
            price: PLACEHOLDER_PRODUCT_PRICE,
        }
    }
}

/// User attached to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Stand-in user carrying only the real identifier
    pub fn placeholder(id: i32) -> Self {
        Self {
            id,
            name: PLACEHOLDER_USER_NAME.to_string(),
            email: PLACEHOLDER_USER_EMAIL.to_string(),
        }
    }
}

/// An order merged with its product and user.
///
/// Exposed in GraphQL as `Order`, keeping the upstream snake_case field names.
/// Serializes flat: the order fields sit next to `product` and `user`.
/// The identifiers are required since the relations hang off them.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[graphql(name = "Order", rename_fields = "snake_case")]
pub struct OrderDetails {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub quantity: Option<i32>,
    pub status: Option<String>,
    pub product: Option<Product>,
    pub user: Option<User>,
}

impl OrderDetails {
    /// Merge an order with its related entities.
    ///
    /// Relations that do not belong to the order are dropped, so
    /// `product.id == product_id` and `user.id == user_id` always hold.
    pub fn compose(order: Order, product: Option<Product>, user: Option<User>) -> Self {
        let product = product.filter(|p| p.id == order.product_id);
        let user = user.filter(|u| u.id == order.user_id);

        Self {
            id: order.id,
            product_id: order.product_id,
            user_id: order.user_id,
            quantity: order.quantity,
            status: order.status,
            product,
            user,
        }
    }

    /// Merge an order with placeholder product and user values
    pub fn with_placeholders(order: Order) -> Self {
        let product = Product::placeholder(order.product_id);
        let user = User::placeholder(order.user_id);
        Self::compose(order, Some(product), Some(user))
    }

    /// The order fields of this composite
    pub fn order(&self) -> Order {
        Order {
            id: self.id,
            product_id: self.product_id,
            user_id: self.user_id,
            quantity: self.quantity,
            status: self.status.clone(),
        }
    }
}
