use thiserror::Error;

/// Errors raised while talking to the services under test.
///
/// None of these abort a run: the runner turns each one into a
/// [`Failure`](crate::report::Failure) and moves on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("unable to read response body from {url}: {message}")]
    Payload { url: String, message: String },

    #[error("unable to parse cookies: {0}")]
    Cookie(String),

    #[error("access token missing from session cookies")]
    MissingAccessToken,

    #[error("malformed access token: {0}")]
    Token(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
