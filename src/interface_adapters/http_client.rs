use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::{HttpClientError, HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode};

// Thin wrapper around reqwest implementing the HTTP client port with JSON bodies.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    http: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<B, R> HttpPostClient<B, R> for ReqwestHttpClient
where
    B: Serialize + Send + Sync + 'static,
    R: DeserializeOwned + Send + 'static,
{
    async fn post(&self, params: HttpPostParams<B>) -> Result<HttpResponse<R>, HttpClientError> {
        let mut request = self.http.post(params.url.as_str());
        if let Some(body) = &params.body {
            request = request.json(body);
        }

        let res = request.send().await.map_err(|err| {
            tracing::debug!(url = %params.url, error = %err, "http post failed without a response.");
            HttpClientError::Transport(Box::new(err))
        })?;
        let status_code = HttpStatusCode::from(res.status().as_u16());

        let bytes = res.bytes().await.map_err(|err| {
            tracing::debug!(url = %params.url, %status_code, error = %err, "failed to read response body.");
            HttpClientError::Transport(Box::new(err))
        })?;

        // The status is always reported; a body that does not decode is dropped
        // and the caller decides what a missing body means for that status.
        let body = if bytes.is_empty() {
            None
        } else {
            match serde_json::from_slice::<R>(&bytes) {
                Ok(body) => Some(body),
                Err(err) => {
                    tracing::debug!(url = %params.url, %status_code, error = %err, "response body did not decode.");
                    None
                }
            }
        };

        Ok(HttpResponse { status_code, body })
    }
}
