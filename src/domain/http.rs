use async_trait::async_trait;
use std::fmt;

use crate::domain::errors::HttpClientError;

/// HTTP status code as seen by the use cases.
///
/// Any `u16` is representable; the named constants are the codes the
/// authentication flow distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    pub const OK: Self = Self(200);
    pub const BAD_REQUEST: Self = Self(400);
    pub const UNAUTHORIZED: Self = Self(401);
    pub const NOT_FOUND: Self = Self(404);
    pub const SERVER_ERROR: Self = Self(500);

    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Request handed to an HTTP client for a single POST.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpPostParams<B> {
    pub url: String,
    pub body: Option<B>,
}

// Status and optional decoded body returned by an HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse<R> {
    pub status_code: HttpStatusCode,
    pub body: Option<R>,
}

// Use cases depend on this trait, never on a concrete transport.
// Implementations resolve with whatever status the server answered; `Err` is
// reserved for failures that produced no status code.
#[async_trait]
pub trait HttpPostClient<B, R>: Send + Sync {
    async fn post(&self, params: HttpPostParams<B>) -> Result<HttpResponse<R>, HttpClientError>;
}
