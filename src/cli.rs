//! Shared command-line plumbing for the binaries.

use clap::error::ErrorKind;
use clap::Parser;

/// Parse command-line arguments.
///
/// Help and version requests exit 0 as usual; any other argument error
/// prints the usage message and exits with status 1.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    }
}

/// Map a `-v` count to a default log level.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise `env_logger`; `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .init();
}
