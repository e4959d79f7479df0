use async_trait::async_trait;
use order_gateway_core::{Lookup, Order, Product, User};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, UpstreamError};
use crate::{OrderSource, ProductSource, UserSource};

/// A REST collection served as `{base_url}/{collection}/{id}`
#[derive(Debug, Clone)]
struct Resource {
    client: reqwest::Client,
    base_url: String,
    collection: &'static str,
}

impl Resource {
    fn new(client: reqwest::Client, base_url: &str, collection: &'static str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_string(), collection }
    }

    fn url(&self, id: i32) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }

    /// Reads one record. Any non-success status counts as not found.
    async fn fetch<T: DeserializeOwned>(&self, id: i32) -> Result<Lookup<T>> {
        let url = self.url(id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            if status.is_server_error() {
                warn!("{} answered {}, treating as not found", url, status);
            } else {
                debug!("{} answered {}", url, status);
            }
            return Ok(Lookup::NotFound);
        }

        let body = response.bytes().await.map_err(|e| UpstreamError::transport(&url, e))?;
        let record = serde_json::from_slice(&body)
            .map_err(|e| UpstreamError::Malformed { url: url.clone(), reason: e.to_string() })?;

        Ok(Lookup::Found(record))
    }

    /// Reads one record and checks it carries the requested identifier
    async fn fetch_entity<T, F>(&self, id: i32, record_id: F) -> Result<Lookup<T>>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> i32,
    {
        match self.fetch::<T>(id).await? {
            Lookup::Found(record) if record_id(&record) != id => Err(UpstreamError::Malformed {
                url: self.url(id),
                reason: format!("expected id {} but got {}", id, record_id(&record)),
            }),
            lookup => Ok(lookup),
        }
    }
}

/// Order service client
#[derive(Debug, Clone)]
pub struct HttpOrderSource {
    resource: Resource,
}

impl HttpOrderSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self { resource: Resource::new(client, base_url, "orders") }
    }
}

#[async_trait]
impl OrderSource for HttpOrderSource {
    async fn order(&self, id: i32) -> Result<Lookup<Order>> {
        self.resource.fetch(id).await
    }
}

/// Product service client
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    resource: Resource,
}

impl HttpProductSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self { resource: Resource::new(client, base_url, "products") }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn product(&self, id: i32) -> Result<Lookup<Product>> {
        self.resource.fetch_entity(id, |product: &Product| product.id).await
    }
}

/// User service client
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    resource: Resource,
}

impl HttpUserSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self { resource: Resource::new(client, base_url, "users") }
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn user(&self, id: i32) -> Result<Lookup<User>> {
        self.resource.fetch_entity(id, |user: &User| user.id).await
    }
}
