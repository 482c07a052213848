use clap::Parser;
use colored::Colorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use corgi::cli::{self, Cli};

fn main() {
    initialize_logging();

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Per-production parse tracing is off unless RUST_LOG asks for it,
/// e.g. RUST_LOG=corgi=trace.
fn initialize_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
