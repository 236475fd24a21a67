/// Errors surfaced by the client transport.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with `{ "success": false, "error": ... }`.
    #[error("{0}")]
    Api(String),

    /// Non-2xx response without a recognizable envelope.
    #[error("Request failed with status {0}")]
    Status(u16),

    /// Connection, TLS, or body-read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON shape the caller expected.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
