//! Background

use background::{Args, Error, Renderer};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Main binary point of entry
fn main() {
    initialise_tracing();

    let mode = Args::parse().mode();

    let result = dirs::home_dir()
        .ok_or(Error::Config("Couldn't find your home directory ($HOME)"))
        .and_then(|home| {
            background::run(
                mode,
                &home,
                &Renderer::default(),
                &mut std::io::stdout().lock(),
            )
        });

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
