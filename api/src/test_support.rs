use std::collections::HashMap;

use async_trait::async_trait;
use order_gateway_core::{Lookup, Order, Product, User};
use order_gateway_upstream::{OrderSource, ProductSource, Result, UpstreamError, UserSource};

pub fn shipped_order() -> Order {
    Order {
        id: 1,
        product_id: 7,
        user_id: 3,
        quantity: Some(2),
        status: Some("shipped".to_string()),
    }
}

/// Serves orders from memory
#[derive(Default)]
pub struct StaticOrders {
    orders: HashMap<i32, Order>,
}

impl StaticOrders {
    pub fn with(order: Order) -> Self {
        Self { orders: HashMap::from([(order.id, order)]) }
    }
}

#[async_trait]
impl OrderSource for StaticOrders {
    async fn order(&self, id: i32) -> Result<Lookup<Order>> {
        Ok(self.orders.get(&id).cloned().into())
    }
}

/// Never finds anything
pub struct MissingSource;

#[async_trait]
impl ProductSource for MissingSource {
    async fn product(&self, _id: i32) -> Result<Lookup<Product>> {
        Ok(Lookup::NotFound)
    }
}

#[async_trait]
impl UserSource for MissingSource {
    async fn user(&self, _id: i32) -> Result<Lookup<User>> {
        Ok(Lookup::NotFound)
    }
}

/// Always answers with a payload that does not parse
pub struct BrokenSource;

fn malformed(collection: &str, id: i32) -> UpstreamError {
    UpstreamError::Malformed {
        url: format!("http://upstream.test/{}/{}", collection, id),
        reason: "expected value at line 1 column 1".to_string(),
    }
}

#[async_trait]
impl OrderSource for BrokenSource {
    async fn order(&self, id: i32) -> Result<Lookup<Order>> {
        Err(malformed("orders", id))
    }
}

#[async_trait]
impl UserSource for BrokenSource {
    async fn user(&self, id: i32) -> Result<Lookup<User>> {
        Err(malformed("users", id))
    }
}
