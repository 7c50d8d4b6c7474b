use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{
    AccountModel, AuthError, Authentication, Credentials, HttpClientError, HttpPostClient,
    HttpPostParams, HttpResponse, Validation,
};

pub(crate) fn mock_credentials() -> Credentials {
    Credentials::new("pilot@example.com", "hunter22")
}

pub(crate) fn mock_account() -> AccountModel {
    let mut account = AccountModel::new("token-42");
    account.identity.insert("name".to_string(), json!("Pilot"));
    account
}

// Records every POST and replies with a canned response.
// `None` simulates a transport failure with no status code.
#[derive(Clone)]
pub(crate) struct HttpPostClientSpy<B, R> {
    calls: Arc<Mutex<Vec<HttpPostParams<B>>>>,
    response: Option<HttpResponse<R>>,
}

impl<B, R> HttpPostClientSpy<B, R> {
    pub(crate) fn responding(response: HttpResponse<R>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Some(response),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: None,
        }
    }

    pub(crate) fn calls(&self) -> Vec<HttpPostParams<B>>
    where
        B: Clone,
    {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl<B, R> HttpPostClient<B, R> for HttpPostClientSpy<B, R>
where
    B: Send + 'static,
    R: Clone + Send + Sync + 'static,
{
    async fn post(&self, params: HttpPostParams<B>) -> Result<HttpResponse<R>, HttpClientError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(params);

        self.response
            .clone()
            .ok_or_else(|| HttpClientError::Transport("connection refused".into()))
    }
}

// Authentication double with a fixed outcome.
#[derive(Clone)]
pub(crate) struct AuthenticationSpy {
    calls: Arc<Mutex<Vec<Credentials>>>,
    result: Result<AccountModel, AuthError>,
}

impl AuthenticationSpy {
    pub(crate) fn succeeding(account: AccountModel) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Ok(account),
        }
    }

    pub(crate) fn failing(error: AuthError) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Err(error),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Credentials> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl Authentication for AuthenticationSpy {
    async fn auth(&self, params: Credentials) -> Result<AccountModel, AuthError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(params);
        self.result.clone()
    }
}

// Validation double: returns the configured message for every field and
// records what it was asked.
#[derive(Clone, Default)]
pub(crate) struct ValidationStub {
    error_message: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ValidationStub {
    pub(crate) fn with_error(message: impl Into<String>) -> Self {
        let stub = Self::default();
        stub.set_error(Some(message.into()));
        stub
    }

    pub(crate) fn set_error(&self, message: Option<String>) {
        *self.error_message.lock().expect("error mutex poisoned") = message;
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

impl Validation for ValidationStub {
    fn validate(&self, field_name: &str, value: &str) -> Option<String> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push((field_name.to_string(), value.to_string()));
        self.error_message
            .lock()
            .expect("error mutex poisoned")
            .clone()
    }
}
