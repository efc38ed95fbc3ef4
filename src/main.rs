use roster::commands::Cli;
use roster::libs::messages::{macros::is_debug_mode, Message};
use roster::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match Cli::menu() {
        Ok(code) => code,
        Err(e) => {
            msg_error!(Message::OperationFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
