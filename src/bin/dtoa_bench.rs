//! Command-line entry point.
//!
//! Usage:
//!   dtoa-bench                # Verify and benchmark every method
//!   dtoa-bench LABEL TRIALS   # Label the report, custom trial count
//!   dtoa-bench --list         # List available methods
//!   dtoa-bench --help         # Show help

use dtoa_bench::config::{self, Command};
use dtoa_bench::logging::init_logging;
use dtoa_bench::registry::build_registry;
use dtoa_bench::tui;
use std::env;

fn main() -> anyhow::Result<()> {
    init_logging("info");

    let command = config::parse_args(env::args().skip(1))?;
    let registry = build_registry();

    match command {
        Command::Help => tui::print_help(),
        Command::List => tui::print_method_list(&registry),
        Command::Run(config) => {
            tui::print_header();
            let summary = dtoa_bench::run(&config, &registry)?;
            tui::print_summary(&summary);
        }
    }

    Ok(())
}
