#![deny(missing_docs)]

//! # PM2OAS CLI
//!
//! Converts a request-tree API collection (JSON) into an OpenAPI document.
//!
//! Usage: `pm2oas <INPUT> <OUTPUT> [--format yaml|json]`

use clap::Parser;
use pm2oas_core::AppResult;
use tracing_subscriber::EnvFilter;

mod convert;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Convert an API collection (JSON) to an OpenAPI definition")]
struct Cli {
    #[clap(flatten)]
    convert: convert::ConvertArgs,

    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `pm2oas_core=debug`).
    #[clap(long, env = "PM2OAS_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    convert::execute(&cli.convert)
}
