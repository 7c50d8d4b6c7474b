// Interface adapters: concrete HTTP transport, field validators and the login form model.

pub mod http_client;
pub mod login_form;
pub mod validation;
