use std::{env, time::Duration};
use url::Url;

// Runtime settings read from the environment (`.env` is loaded first by the binary).

pub fn login_api_url() -> Result<Url, url::ParseError> {
    let raw = env::var("LOGIN_API_URL")
        .unwrap_or_else(|_| "http://localhost:5050/api/login".to_string());
    Url::parse(&raw)
}

const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

pub fn http_timeout() -> Duration {
    parse_http_timeout(env::var("LOGIN_HTTP_TIMEOUT_MS").ok().as_deref())
}

// Zero would make every request time out immediately; treat it as unset.
fn parse_http_timeout(raw: Option<&str>) -> Duration {
    let millis = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS);
    Duration::from_millis(millis)
}

// Credentials submitted by the binary; missing values stay empty and are
// reported by form validation.
pub fn login_email() -> String {
    env::var("LOGIN_EMAIL").unwrap_or_default()
}

pub fn login_password() -> String {
    env::var("LOGIN_PASSWORD").unwrap_or_default()
}

pub const PASSWORD_MIN_LENGTH: usize = 5;
