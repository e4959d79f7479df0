//! GraphQL gateway for the order service

use std::path::PathBuf;

use clap::Parser;
use order_gateway::{ConfigOverrides, GatewayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Host to listen on
    #[arg(long, env = "GATEWAY_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "GATEWAY_PORT")]
    port: Option<u16>,

    /// Base URL of the order service
    #[arg(long, env = "ORDER_SERVICE_URL")]
    order_service_url: Option<String>,

    /// Base URL of the product service
    #[arg(long, env = "PRODUCT_SERVICE_URL")]
    product_service_url: Option<String>,

    /// Base URL of the user service
    #[arg(long, env = "USER_SERVICE_URL")]
    user_service_url: Option<String>,

    /// Timeout in seconds for upstream requests
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            order_service_url: self.order_service_url.clone(),
            product_service_url: self.product_service_url.clone(),
            user_service_url: self.user_service_url.clone(),
            request_timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> order_gateway::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = GatewayConfig::load(cli.config.as_deref(), cli.overrides())?;

    info!(
        "Starting GraphQL gateway on {} for order service {}",
        config.listen.address(),
        config.upstream.order_service_url
    );

    order_gateway::run(config).await
}
