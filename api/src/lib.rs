//! GraphQL API layer for the order gateway

mod resolver;
mod routes;
#[cfg(test)]
mod test_support;

use async_graphql::{Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Schema};
use order_gateway_core::OrderDetails;
use order_gateway_upstream::{UpstreamError, Upstreams};
use tracing::warn;

pub use resolver::OrderResolver;
pub use routes::{router, GatewayStatus};

/// Schema served by the gateway
pub type GatewaySchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// GraphQL Query root
pub struct Query;

#[Object]
impl Query {
    /// Get an order with its product and user, or null if the order service does not know it.
    ///
    /// Upstream failures are reported in `errors` and null only this field.
    async fn order(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<OrderDetails>> {
        let resolver = ctx.data::<OrderResolver>()?;

        match resolver.resolve(id).await {
            Ok(lookup) => Ok(lookup.found()),
            Err(err) => {
                warn!("Failed to resolve order {}: {}", id, err);
                ctx.add_error(graphql_error(&err).into_server_error(ctx.item.pos));
                Ok(None)
            }
        }
    }
}

fn graphql_error(err: &UpstreamError) -> async_graphql::Error {
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| {
        ext.set("code", err.code());
        ext.set("retryable", err.is_retryable());
    })
}

/// Create the GraphQL schema
pub fn create_schema(upstreams: Upstreams) -> GatewaySchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(OrderResolver::new(upstreams))
        .finish()
}
