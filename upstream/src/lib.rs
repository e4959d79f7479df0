//! Upstream services behind the order gateway

mod config;
mod error;
mod http;
mod placeholder;

use std::sync::Arc;

use async_trait::async_trait;
use order_gateway_core::{Lookup, Order, Product, User};
use tracing::info;

pub use config::{UpstreamConfig, DEFAULT_ORDER_SERVICE_URL};
pub use error::{Result, UpstreamError};
pub use http::{HttpOrderSource, HttpProductSource, HttpUserSource};
pub use placeholder::PlaceholderCatalog;

/// Reads orders by identifier
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn order(&self, id: i32) -> Result<Lookup<Order>>;
}

/// Reads products by identifier
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn product(&self, id: i32) -> Result<Lookup<Product>>;
}

/// Reads users by identifier
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn user(&self, id: i32) -> Result<Lookup<User>>;
}

/// The set of sources the resolver aggregates
#[derive(Clone)]
pub struct Upstreams {
    pub orders: Arc<dyn OrderSource>,
    pub products: Arc<dyn ProductSource>,
    pub users: Arc<dyn UserSource>,
}

impl Upstreams {
    /// Orders from `orders`, products and users synthesized
    pub fn with_placeholders(orders: Arc<dyn OrderSource>) -> Self {
        Self { orders, products: Arc::new(PlaceholderCatalog), users: Arc::new(PlaceholderCatalog) }
    }

    /// Builds HTTP sources for every configured service
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        config.validate()?;
        let client = config.build_client()?;

        let orders: Arc<dyn OrderSource> =
            Arc::new(HttpOrderSource::new(client.clone(), &config.order_service_url));
        let mut upstreams = Self::with_placeholders(orders);

        match &config.product_service_url {
            Some(url) => {
                info!("Fetching products from {}", url);
                upstreams.products = Arc::new(HttpProductSource::new(client.clone(), url));
            }
            None => info!("No product service configured, using placeholder products"),
        }

        match &config.user_service_url {
            Some(url) => {
                info!("Fetching users from {}", url);
                upstreams.users = Arc::new(HttpUserSource::new(client, url));
            }
            None => info!("No user service configured, using placeholder users"),
        }

        Ok(upstreams)
    }
}
