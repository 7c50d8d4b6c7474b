use async_trait::async_trait;

use crate::domain::account::AccountModel;
use crate::domain::credentials::Credentials;
use crate::domain::errors::AuthError;

// Port the login form submits through.
#[async_trait]
pub trait Authentication: Send + Sync {
    async fn auth(&self, params: Credentials) -> Result<AccountModel, AuthError>;
}

// Port the login form validates through. Called with one field at a time;
// `None` means the value is valid.
pub trait Validation: Send + Sync {
    fn validate(&self, field_name: &str, value: &str) -> Option<String>;
}
