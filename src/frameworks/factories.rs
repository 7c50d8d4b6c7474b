use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::frameworks::config;
use crate::interface_adapters::http_client::ReqwestHttpClient;
use crate::interface_adapters::login_form::{LoginField, LoginForm};
use crate::interface_adapters::validation::{ValidationBuilder, ValidationComposite};
use crate::use_cases::RemoteAuthentication;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid login endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub fn make_remote_authentication(
    url: &Url,
    timeout: Duration,
) -> Result<RemoteAuthentication<ReqwestHttpClient>, SetupError> {
    let http_client = ReqwestHttpClient::new(timeout)?;
    Ok(RemoteAuthentication::new(url.as_str(), http_client))
}

// Remote authentication wired from the environment.
pub fn make_remote_authentication_from_env()
-> Result<RemoteAuthentication<ReqwestHttpClient>, SetupError> {
    let url = config::login_api_url()?;
    make_remote_authentication(&url, config::http_timeout())
}

pub fn make_login_validation() -> ValidationComposite {
    ValidationComposite::new(
        ValidationBuilder::field(LoginField::Email.name())
            .required()
            .email()
            .build()
            .into_iter()
            .chain(
                ValidationBuilder::field(LoginField::Password.name())
                    .required()
                    .min_length(config::PASSWORD_MIN_LENGTH)
                    .build(),
            ),
    )
}

pub fn make_login_form() -> LoginForm<ValidationComposite> {
    LoginForm::new(make_login_validation())
}
