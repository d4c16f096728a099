//! Top-level run sequence
//!
//! validate action (the enum makes unrecognized values a clap usage
//! error) → settings query → export-options plist for exportArchive →
//! argument assembly → blocking xcodebuild invocation. The first failure
//! aborts; partial artifacts are left in place.

use anyhow::Result;
use console::style;

use crate::config::{Action, BuildConfig};
use crate::error::{hints, XcgoError};
use crate::exec::{self, XCODEBUILD};
use crate::{command, export_options, settings};

/// Run the configured action, returning xcodebuild's exit code
pub fn run(mut config: BuildConfig, verbose: bool) -> Result<i32> {
    if !exec::command_exists(XCODEBUILD) {
        return Err(XcgoError::missing_tool(
            XCODEBUILD,
            format!("the {} action", config.action),
            hints::xcode(),
        )
        .into());
    }

    // The settings query runs for every action, clean included
    let patch = settings::load_project_settings(&config)?;
    config.apply(patch);

    if config.action == Action::ExportArchive {
        export_options::write_export_options(&config)?;
        if verbose {
            eprintln!(
                "{} wrote {}",
                style("xcgo:").cyan().bold(),
                config.export_options_path
            );
        }
    }

    let args = command::build_args(&config)?;
    if verbose {
        eprintln!(
            "{} {} {}",
            style("xcgo:").cyan().bold(),
            XCODEBUILD,
            args.join(" ")
        );
    }

    let result = exec::run_inherited(XCODEBUILD, &args)?;
    Ok(result.exit_code)
}
