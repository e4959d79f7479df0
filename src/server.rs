use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use order_gateway_api::{create_schema, router, GatewayStatus};
use order_gateway_upstream::Upstreams;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};

/// A gateway bound to its listening socket, ready to serve
pub struct Gateway {
    listener: TcpListener,
    app: Router,
}

/// Builds the upstream sources and schema, then binds the listening socket
pub async fn bind(config: &GatewayConfig) -> Result<Gateway> {
    let upstreams = Upstreams::from_config(&config.upstream)?;
    let schema = create_schema(upstreams);
    let app = router(schema, GatewayStatus::new(config.upstream.order_service_url.clone()));

    let addr = config.listen.address();
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        error!("Failed to bind to {}: {}", addr, e);
        GatewayError::Io(e)
    })?;

    Ok(Gateway { listener, app })
}

impl Gateway {
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serves until `signal` completes, letting in-flight requests finish
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("GraphQL gateway ready at http://{}/graphql", addr);

        axum::serve(self.listener, self.app).with_graceful_shutdown(signal).await?;

        info!("GraphQL gateway stopped");
        Ok(())
    }
}

/// Binds and serves with the given configuration until Ctrl-C
pub async fn run(config: GatewayConfig) -> Result<()> {
    bind(&config).await?.serve().await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
