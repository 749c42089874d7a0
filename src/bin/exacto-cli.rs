//! exacto-cli: conformance runner for int8 quantized kernels
//!
//! This is a thin shell that delegates to library functions; all logic
//! lives in `exacto::cli` where it is testable.

use clap::Parser;
use exacto::cli::{run, Args};

fn main() {
    init_tracing();

    let args = Args::parse();
    match run(args) {
        Ok(result) => {
            if !result.message.is_empty() {
                println!("{}", result.message);
            }
            if !result.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
