//! Login Service - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use login_service::{
    cli::{Cli, Commands},
    commands,
    config::{Config, DEFAULT_LOG_FILTER},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // .env may carry RUST_LOG, so it must be loaded before tracing starts
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!("Configuration loaded: {:?}", config);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::User(args) => commands::user::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = log_filter(verbose, std::env::var("RUST_LOG").ok());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

/// Verbose mode sets debug level, otherwise `RUST_LOG` or the default
fn log_filter(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        "debug".to_string()
    } else {
        rust_log.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_prefers_verbose() {
        assert_eq!(log_filter(true, Some("warn".to_string())), "debug");
    }

    #[test]
    fn test_log_filter_uses_rust_log_from_env_file() {
        let env_file = "DATABASE_URL=postgres://db/app\nRUST_LOG=login_service=trace\n";
        let rust_log = dotenvy::from_read_iter(env_file.as_bytes())
            .filter_map(Result::ok)
            .find(|(key, _)| key == "RUST_LOG")
            .map(|(_, value)| value);

        assert_eq!(log_filter(false, rust_log), "login_service=trace");
    }

    #[test]
    fn test_log_filter_falls_back_to_default() {
        assert_eq!(log_filter(false, None), DEFAULT_LOG_FILTER);
    }
}
