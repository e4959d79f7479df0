use order_gateway_upstream::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Error during configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),
    /// Error reading files or serving sockets
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error setting up the upstream services
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
