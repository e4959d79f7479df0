use order_gateway_core::{Lookup, OrderDetails};
use order_gateway_upstream::{Result, Upstreams};
use tracing::debug;

/// Aggregates an order with its product and user
#[derive(Clone)]
pub struct OrderResolver {
    upstreams: Upstreams,
}

impl OrderResolver {
    pub fn new(upstreams: Upstreams) -> Self {
        Self { upstreams }
    }

    /// Fetches the order, then its product and user concurrently.
    ///
    /// Both relation reads settle before any of their errors is reported.
    /// A relation that is not found leaves its field empty.
    pub async fn resolve(&self, id: i32) -> Result<Lookup<OrderDetails>> {
        let order = match self.upstreams.orders.order(id).await? {
            Lookup::Found(order) => order,
            Lookup::NotFound => {
                debug!("Order {} not found", id);
                return Ok(Lookup::NotFound);
            }
        };

        let (product, user) = futures::join!(
            self.upstreams.products.product(order.product_id),
            self.upstreams.users.user(order.user_id),
        );
        let product = product?.found();
        let user = user?.found();

        Ok(Lookup::Found(OrderDetails::compose(order, product, user)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use order_gateway_core::{Product, User};
    use order_gateway_upstream::{PlaceholderCatalog, UpstreamError};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{shipped_order, BrokenSource, MissingSource, StaticOrders};

    #[tokio::test]
    async fn test_resolves_with_placeholders() {
        let resolver = OrderResolver::new(Upstreams::with_placeholders(Arc::new(
            StaticOrders::with(shipped_order()),
        )));

        let details = resolver.resolve(1).await.unwrap().found().unwrap();

        assert_eq!(details.order(), shipped_order());
        assert_eq!(details.product, Some(Product::placeholder(7)));
        assert_eq!(details.user, Some(User::placeholder(3)));
    }

    #[tokio::test]
    async fn test_missing_order() {
        let resolver =
            OrderResolver::new(Upstreams::with_placeholders(Arc::new(StaticOrders::default())));

        assert_eq!(resolver.resolve(1).await.unwrap(), Lookup::NotFound);
    }

    #[tokio::test]
    async fn test_missing_relation_leaves_field_empty() {
        let upstreams = Upstreams {
            orders: Arc::new(StaticOrders::with(shipped_order())),
            products: Arc::new(MissingSource),
            users: Arc::new(PlaceholderCatalog),
        };

        let details = OrderResolver::new(upstreams).resolve(1).await.unwrap().found().unwrap();

        assert_eq!(details.product, None);
        assert_eq!(details.user, Some(User::placeholder(3)));
    }

    #[tokio::test]
    async fn test_relation_error_fails_resolution() {
        let upstreams = Upstreams {
            orders: Arc::new(StaticOrders::with(shipped_order())),
            products: Arc::new(PlaceholderCatalog),
            users: Arc::new(BrokenSource),
        };

        let err = OrderResolver::new(upstreams).resolve(1).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Malformed { .. }));
    }
}
