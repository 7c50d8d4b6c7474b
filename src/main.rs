use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    login_client::run().await
}
