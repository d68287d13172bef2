//! `basen` — base64-encode or decode a string given on the command line.
//!
//! Usage:
//!   basen [--url-safe] encode '<text>'
//!   basen [--url-safe] decode '<base64>'
//!
//! Any other mode, or a missing payload, prints nothing.

use basen::cli;
use basen::logging::setup_logging;
use clap::Parser;
use std::io::{self, Write};

/// Base64 text encoder and decoder.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// `encode` or `decode`.
    mode: Option<String>,

    /// Text to encode, or base64 to decode.
    #[arg(allow_hyphen_values = true)]
    payload: Option<String>,

    /// Use the URL-safe alphabet (`-`, `_`, padding `*`).
    #[arg(long, env = "BASEN_URL_SAFE")]
    url_safe: bool,

    /// Filter directives used when `RUST_LOG` is not set.
    #[arg(long, default_value_t = String::from("warn"), env = "BASEN_LOG_DIRECTIVES")]
    log_directives: String,

    /// Human-readable logs instead of JSON.
    #[arg(long, env = "BASEN_LOG_PRETTY")]
    pretty_logs: bool,
}

fn main() {
    let args = Args::parse();

    setup_logging(&args.log_directives, args.pretty_logs);

    match cli::run(args.mode.as_deref(), args.payload.as_deref(), args.url_safe) {
        Ok(Some(output)) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{output}") {
                tracing::error!(error = %e, "failed to write to stdout");
                std::process::exit(1);
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::debug!(error = %e, "conversion failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
