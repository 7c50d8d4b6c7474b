// Use cases layer: application workflows for the login flow.

pub mod remote_authentication;

#[cfg(test)]
pub(crate) mod test_support;

pub use remote_authentication::{RemoteAuthentication, map_response};
