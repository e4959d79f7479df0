/// Failure talking to an upstream service.
///
/// A non-success status is not an error: sources report it as
/// [`Lookup::NotFound`](order_gateway_core::Lookup::NotFound).
#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("Upstream {url} is unavailable: {source}")]
    Unavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Upstream {url} returned a malformed payload: {reason}")]
    Malformed { url: String, reason: String },
    #[error("Invalid upstream URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Classifies a transport error raised while calling `url`
    pub fn transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_connect() || source.is_timeout() {
            UpstreamError::Unavailable { url: url.to_string(), source }
        } else {
            UpstreamError::Request { url: url.to_string(), source }
        }
    }

    /// Stable code reported to GraphQL clients
    pub fn code(&self) -> &'static str {
        match self {
            UpstreamError::Unavailable { .. } => "UPSTREAM_UNAVAILABLE",
            UpstreamError::Request { .. } => "UPSTREAM_REQUEST_FAILED",
            UpstreamError::Malformed { .. } => "UPSTREAM_MALFORMED",
            UpstreamError::InvalidUrl { .. } => "UPSTREAM_INVALID_URL",
            UpstreamError::Client(_) => "UPSTREAM_CLIENT",
        }
    }

    /// Whether trying again later could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, UpstreamError::Unavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
