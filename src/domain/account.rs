use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Account returned by the login endpoint after a successful authentication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountModel {
    // Token issued by the server for subsequent calls.
    #[serde(rename = "accessToken")]
    pub access_token: String,
    // Identity fields sent next to the token, kept exactly as received.
    #[serde(flatten)]
    pub identity: Map<String, Value>,
}

impl AccountModel {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            identity: Map::new(),
        }
    }
}
