//! snaketoga: config generator and launcher for the TOGA annotation pipeline
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This binary validates the command line, writes the run config and
//! launches snakemake on it. A failure on our side exits with 1; once
//! the workflow starts, its own exit code is the exit code of the run.

use clap::{self, Parser};
use log::{error, info, Level};
use simple_logger::init_with_level;

use snaketoga::cli::Args;
use snaketoga::core::run;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let code = run(&args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:?}", elapsed);

    std::process::exit(code);
}
