use thiserror::Error;

/// A submission that did not produce a mindmap.
///
/// Callers treat every variant as the same "request failed" outcome; the
/// variant only records the cause for logs.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed: response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Only produced under [`crate::StatusPolicy::Strict`].
    #[error("request failed: server answered {status}: {body}")]
    Status { status: u16, body: String },
}

/// Errors building a [`crate::MindmapClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
}
