use async_trait::async_trait;
use order_gateway_core::{Lookup, Product, User};

use crate::error::Result;
use crate::{ProductSource, UserSource};

/// Synthesizes products and users that carry only the requested identifier.
///
/// Stands in for the product and user services until they serve reads by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCatalog;

#[async_trait]
impl ProductSource for PlaceholderCatalog {
    async fn product(&self, id: i32) -> Result<Lookup<Product>> {
        Ok(Lookup::Found(Product::placeholder(id)))
    }
}

#[async_trait]
impl UserSource for PlaceholderCatalog {
    async fn user(&self, id: i32) -> Result<Lookup<User>> {
        Ok(Lookup::Found(User::placeholder(id)))
    }
}
