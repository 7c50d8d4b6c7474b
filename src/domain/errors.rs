use thiserror::Error;

// Failures produced by the authentication use case. The set is closed:
// callers only ever tell a rejected login apart from everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("something went wrong, try again soon")]
    Unexpected,
}

// Raised by an HTTP client when no status code could be obtained at all
// (connection refused, DNS failure, timeout, unreadable body).
#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("http transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
