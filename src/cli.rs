//! CLI argument parsing using clap derive macros
//!
//! The surface mirrors the long-standing build script this tool replaces:
//! one positional action plus camelCase long options, so existing CI
//! invocations keep working unchanged.

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::config::{Action, BuildConfig, ExportType};
use crate::runner;

/// xcgo - xcodebuild archive and export CLI
///
/// Assembles and runs one xcodebuild invocation for building, cleaning,
/// archiving or exporting an Xcode project.
#[derive(Parser, Debug)]
#[command(name = "xcgo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Action to run (build, clean, archive, exportArchive)
    #[arg(value_enum)]
    pub action: Action,

    /// Project name for the build (App.xcodeproj)
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// Target name for the build
    #[arg(long, short = 't')]
    pub target: Option<String>,

    /// Workspace name for the build (App.xcworkspace); wins over --project
    #[arg(long, short = 'w')]
    pub workspace: Option<String>,

    /// Scheme to build
    #[arg(long, short = 's')]
    pub scheme: Option<String>,

    /// Build configuration
    #[arg(long, short = 'c', default_value = "Release")]
    pub configuration: String,

    /// Bundle identifier override
    #[arg(long = "bundleIdentifier")]
    pub bundle_identifier: Option<String>,

    /// Code-signing certificate name
    #[arg(long)]
    pub certificate: Option<String>,

    /// Provisioning profile name
    #[arg(long = "provisionProfile")]
    pub provision_profile: Option<String>,

    /// Development team id
    #[arg(long)]
    pub team: Option<String>,

    /// Export distribution type
    #[arg(long = "exportType", value_enum, default_value_t = ExportType::AdHoc)]
    pub export_type: ExportType,

    /// Path of the .xcarchive to produce or export
    #[arg(long = "archivePath", default_value = "./output/app.xcarchive")]
    pub archive_path: String,

    /// Path of the generated ExportOptions.plist
    #[arg(long = "exportOptionsPath", default_value = "./output/ExportOptions.plist")]
    pub export_options_path: String,

    /// Directory the exported app is written to
    #[arg(long = "exportPath", default_value = "./output/app/")]
    pub export_path: String,

    /// DerivedData location
    #[arg(long = "derivedDataPath", default_value = "./build/")]
    pub derived_data_path: String,

    /// Upload debug symbols on app-store exports.
    /// Presence sets true and the default is already true; kept for
    /// compatibility with the script this tool replaces.
    #[arg(long = "uploadSymbols", action = ArgAction::SetTrue, default_value_t = true)]
    pub upload_symbols: bool,

    /// Extra arguments passed to xcodebuild verbatim
    #[arg(long = "otherArgs", num_args = 0.., allow_hyphen_values = true)]
    pub other_args: Vec<String>,

    /// Echo the assembled xcodebuild invocation
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Execute the requested action, returning xcodebuild's exit code
    pub fn execute(self) -> Result<i32> {
        let verbose = self.verbose;
        runner::run(self.into_config(), verbose)
    }

    /// Fold the parsed arguments into one configuration object
    pub fn into_config(self) -> BuildConfig {
        let mut config = BuildConfig::new(self.action);
        config.target_name = self.target.unwrap_or_default();
        config.project_name = self.project.unwrap_or_default();
        config.workspace_name = self.workspace.unwrap_or_default();
        config.scheme = self.scheme.unwrap_or_default();
        config.configuration = self.configuration;
        config.bundle_identifier = self.bundle_identifier.unwrap_or_default();
        config.certification_name = self.certificate.unwrap_or_default();
        config.provision_profile_name = self.provision_profile.unwrap_or_default();
        config.team_id = self.team.unwrap_or_default();
        config.export_type = self.export_type;
        config.archive_path = self.archive_path;
        config.export_options_path = self.export_options_path;
        config.export_path = self.export_path;
        config.derived_data_path = self.derived_data_path;
        config.upload_symbols = self.upload_symbols;
        config.other_args = self.other_args;
        config
    }
}
