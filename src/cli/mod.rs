mod handlers;
pub mod parse;
pub mod screen;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::GraphError;

/// `--debug` forces debug level, otherwise `RUST_LOG` (default `warn`).
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    init_tracing(cli.debug);
    let screen = screen::ClearScreen::detect();
    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(&a, screen),
        parse::Command::Demo(a) => handlers::demo(&a, screen),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
