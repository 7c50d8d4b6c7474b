use async_trait::async_trait;

use crate::domain::{
    AccountModel, AuthError, Authentication, Credentials, HttpPostClient, HttpPostParams,
    HttpResponse, HttpStatusCode,
};

// Authentication use case backed by a remote endpoint.
// The target URL is fixed at construction; the HTTP client is injected.
pub struct RemoteAuthentication<C> {
    url: String,
    http_client: C,
}

impl<C> RemoteAuthentication<C> {
    pub fn new(url: impl Into<String>, http_client: C) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<C> Authentication for RemoteAuthentication<C>
where
    C: HttpPostClient<Credentials, AccountModel>,
{
    async fn auth(&self, params: Credentials) -> Result<AccountModel, AuthError> {
        // One POST per call; no retries.
        let response = self
            .http_client
            .post(HttpPostParams {
                url: self.url.clone(),
                body: Some(params),
            })
            .await
            .map_err(|_| AuthError::Unexpected)?;

        map_response(response)
    }
}

/// Translate an HTTP response from the login endpoint into the use case result.
///
/// Total over every status code: only `200` with a decoded body succeeds and
/// only `401` means the credentials were rejected.
pub fn map_response(response: HttpResponse<AccountModel>) -> Result<AccountModel, AuthError> {
    match response.status_code {
        HttpStatusCode::OK => response.body.ok_or(AuthError::Unexpected),
        HttpStatusCode::UNAUTHORIZED => Err(AuthError::InvalidCredentials),
        HttpStatusCode::BAD_REQUEST | HttpStatusCode::NOT_FOUND | HttpStatusCode::SERVER_ERROR => {
            Err(AuthError::Unexpected)
        }
        _ => Err(AuthError::Unexpected),
    }
}
