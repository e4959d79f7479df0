pub mod config;
pub mod error;
pub mod server;

pub use config::{ConfigOverrides, GatewayConfig, ListenConfig};
pub use error::{GatewayError, Result};
pub use order_gateway_api::{create_schema, GatewaySchema};
pub use order_gateway_core::{Lookup, Order, OrderDetails, Product, User};
pub use order_gateway_upstream::{UpstreamConfig, UpstreamError, Upstreams};
pub use server::{bind, run, Gateway};
