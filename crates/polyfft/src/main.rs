//! PolyFFT: polynomial multiplication via recursive FFT.

use polyfft_core::{exit_codes, PolyError};
use polyfft_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing (stderr, so JSON output on stdout stays clean)
    let default_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            err.downcast_ref::<PolyError>()
                .map_or(exit_codes::ERROR_GENERIC, errors::handle_error)
        }
    };
    std::process::exit(code);
}
