//! grkit — arena and dynamic array demo.

use anyhow::Result;
use grkit_lib::{app, config, errors};
use grkit_memory::MemError;

fn main() -> Result<()> {
    let config = config::DemoConfig::parse();

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

    match app::run(&config) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<MemError>() {
            Some(mem_err) => {
                eprintln!("error: {err:#}");
                std::process::exit(errors::handle_error(mem_err));
            }
            None => Err(err),
        },
    }
}
