//! xcgo - xcodebuild archive and export CLI
//!
//! Wraps xcodebuild behind one flat command: assemble the argument list
//! for build/clean/archive/exportArchive, generate ExportOptions.plist
//! for exports, backfill manual-signing fields from the project's build
//! settings, then run the tool and propagate its exit code.

mod cli;
mod command;
mod config;
mod error;
mod exec;
mod export_options;
mod runner;
mod settings;

use clap::Parser;

use cli::Cli;
use error::XcgoError;

fn main() {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            if let Some(xcgo_err) = err.downcast_ref::<XcgoError>() {
                xcgo_err.display_with_hints();
            } else {
                eprintln!("\n{} {:#}\n", console::style("ERROR:").red().bold(), err);
            }
            std::process::exit(1);
        }
    }
}
