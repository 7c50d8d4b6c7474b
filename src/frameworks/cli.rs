use std::process::ExitCode;

use crate::frameworks::{config, factories};
use crate::interface_adapters::login_form::LoginField;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Fill the login form from the environment, submit it once and report the outcome.
pub async fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let authentication = match factories::make_remote_authentication_from_env() {
        Ok(authentication) => authentication,
        Err(e) => {
            tracing::error!(error = %e, "failed to set up authentication");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(url = %authentication.url(), "login endpoint configured.");

    let mut form = factories::make_login_form();
    form.set_email(config::login_email());
    form.set_password(config::login_password());

    for field in LoginField::ALL {
        let status = form.status(field);
        tracing::info!(
            field = field.name(),
            indicator = status.indicator,
            title = %status.title,
            "field status"
        );
    }

    if !form.can_submit() {
        tracing::warn!("login form is invalid; nothing was submitted");
        return ExitCode::FAILURE;
    }

    match form.submit(&authentication).await {
        Some(account) => {
            // Never log the token itself.
            tracing::info!(
                identity_fields = account.identity.len(),
                "authenticated"
            );
            ExitCode::SUCCESS
        }
        None => {
            tracing::error!(
                error = form.main_error().unwrap_or_default(),
                "authentication failed"
            );
            ExitCode::FAILURE
        }
    }
}
