use thiserror::Error;

use crate::transport::TransportError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong when talking to the API.
#[derive(Debug, Error)]
pub enum Error {
    /// The request payload was rejected before any network call was made.
    #[error("invalid payload: {0}")]
    Validation(String),

    /// The transport collaborator failed (connect, DNS, TLS, timeout).
    /// Propagated unchanged; the client never retries.
    #[error("transport failure")]
    Transport(#[from] TransportError),

    /// The API answered with a non-2xx status.
    #[error("api returned status {status}")]
    Api { status: u16, body: String },

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),

    /// An endpoint URL could not be assembled from the base URL.
    #[error("invalid request url")]
    Url(#[from] url::ParseError),
}
