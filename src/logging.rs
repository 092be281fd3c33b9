// Tracing setup for both binaries
//
// RUST_LOG overrides the defaults. Everything goes to stderr so the CLI's
// stdout carries only the bill output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const SERVER_FILTER: &str = "bill_demo=info,tower_http=info";
pub const CLI_FILTER: &str = "bill_demo=warn";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_server_logger() {
    tracing_subscriber::registry()
        .with(filter_or(SERVER_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn init_cli_logger() {
    tracing_subscriber::registry()
        .with(filter_or(CLI_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
