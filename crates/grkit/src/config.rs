//! Demo configuration from CLI flags and environment.

use clap::Parser;

use grkit_memory::units::parse_size;

/// grkit — walk through the arena and dynamic array primitives.
#[derive(Parser, Debug)]
#[command(name = "grkit", version, about)]
pub struct DemoConfig {
    /// Arena size (e.g., "1K", "64M", "4096").
    #[arg(long, default_value = "1K", env = "GRKIT_ARENA_SIZE", value_parser = parse_arena_size)]
    pub arena_size: usize,

    /// Number of elements appended to the dynamic array.
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Index used for the swap-remove and remove steps.
    #[arg(long, default_value = "5")]
    pub remove_at: usize,

    /// Print the final report as JSON instead of the walk-through.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl DemoConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

fn parse_arena_size(s: &str) -> Result<usize, String> {
    parse_size(s).map_err(|e| e.to_string())
}
