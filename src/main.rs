//! SecureTrack CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use securetrack::cli;
use securetrack::config::{OperationMode, SecuretrackConfig};
use securetrack::registry::RegistryError;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RegistryError> {
    let config = load_config()?;
    match config.operation_mode() {
        OperationMode::Dashboard => cli::dashboard::run(&config).await,
        OperationMode::SectionListing => cli::output::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`RegistryError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<SecuretrackConfig, RegistryError> {
    SecuretrackConfig::load().map_err(|error| RegistryError::Configuration {
        message: error.to_string(),
    })
}

/// Installs the global tracing subscriber, filtered by `RUST_LOG`.
///
/// Logs go to stderr so the section listing on stdout stays clean.
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    let _ignored = tracing::subscriber::set_global_default(subscriber);
}
