pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{AccountModel, AuthError, Authentication, Credentials, Validation};
pub use frameworks::cli::run;
pub use use_cases::RemoteAuthentication;
