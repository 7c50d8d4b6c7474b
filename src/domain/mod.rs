mod account;
mod credentials;
mod errors;
mod http;
mod ports;

// Re-export the domain boundary types and ports.
pub use account::AccountModel;
pub use credentials::Credentials;
pub use errors::{AuthError, HttpClientError};
pub use http::{HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode};
pub use ports::{Authentication, Validation};
