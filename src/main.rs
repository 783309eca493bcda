#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! ukairports — UK airports with IATA codes and coordinates.

mod airports;
mod cli;
mod commands;
mod fetch;
mod types;

use clap::Parser;
use log::LevelFilter;

use airports::AirportsError;
use cli::{Cli, OutputCtx, write_error};
use fetch::HttpSources;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header);

    // No request can be made without a client, so a client failure counts as the page failing.
    let result = HttpSources::new(cli.fetch_config())
        .map_err(AirportsError::PageFetch)
        .and_then(|sources| commands::list::run(&sources, &cli.output_config(), &ctx));

    if let Err(err) = result {
        write_error(&ErrorOutput::from_airports_error(&err), ctx.format);
        std::process::exit(err.exit_code());
    }
}

/// Logs go to stderr. `--debug` lowers the crate filter to debug; `RUST_LOG` wins over both.
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .parse_default_env()
        .init();
}
