//! Build configuration model
//!
//! Holds the single configuration object for one xcodebuild invocation:
//! the requested action, target identity, signing identity, output paths
//! and passthrough arguments. The settings loader returns a
//! [`SettingsPatch`] that is merged in before command construction, so the
//! configuration itself is never mutated behind the caller's back.

use clap::ValueEnum;

/// Top-level xcodebuild action
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Build the scheme
    Build,
    /// Clean build products
    Clean,
    /// Build and archive the scheme
    Archive,
    /// Export a previously built archive
    #[value(name = "exportArchive")]
    ExportArchive,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Build => write!(f, "build"),
            Action::Clean => write!(f, "clean"),
            Action::Archive => write!(f, "archive"),
            Action::ExportArchive => write!(f, "exportArchive"),
        }
    }
}

/// Distribution channel for an archived build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportType {
    /// Ad-hoc distribution to registered devices
    #[default]
    AdHoc,
    /// Development distribution
    Development,
    /// App Store submission
    AppStore,
    /// In-house enterprise distribution
    Enterprise,
}

impl ExportType {
    /// The `method` value expected by xcodebuild in ExportOptions.plist
    pub fn method(&self) -> &'static str {
        match self {
            ExportType::AdHoc => "ad-hoc",
            ExportType::Development => "development",
            ExportType::AppStore => "app-store",
            ExportType::Enterprise => "enterprise",
        }
    }
}

impl std::fmt::Display for ExportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method())
    }
}

/// Configuration for one xcodebuild run
///
/// String fields use the empty string as "unset", mirroring the non-empty
/// checks the command builder performs before emitting each flag.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub action: Action,

    pub target_name: String,
    pub project_name: String,
    pub workspace_name: String,
    pub scheme: String,
    pub configuration: String,

    pub bundle_identifier: String,
    pub certification_name: String,
    pub provision_profile_name: String,
    pub team_id: String,

    pub export_type: ExportType,
    pub archive_path: String,
    pub export_path: String,
    pub export_options_path: String,
    pub derived_data_path: String,

    pub compile_bitcode: bool,
    pub strip_swift_symbols: bool,
    pub upload_symbols: bool,

    /// Signing style reported by the project ("Manual" or "Automatic");
    /// populated by the settings loader, never set from the CLI.
    pub signing_style: String,

    /// Extra raw arguments appended verbatim to the assembled command
    pub other_args: Vec<String>,
}

impl BuildConfig {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            target_name: String::new(),
            project_name: String::new(),
            workspace_name: String::new(),
            scheme: String::new(),
            configuration: "Release".to_string(),
            bundle_identifier: String::new(),
            certification_name: String::new(),
            provision_profile_name: String::new(),
            team_id: String::new(),
            export_type: ExportType::AdHoc,
            archive_path: "./output/app.xcarchive".to_string(),
            export_path: "./output/app/".to_string(),
            export_options_path: "./output/ExportOptions.plist".to_string(),
            derived_data_path: "./build/".to_string(),
            compile_bitcode: true,
            strip_swift_symbols: true,
            upload_symbols: true,
            signing_style: String::new(),
            other_args: Vec::new(),
        }
    }

    /// Merge a settings patch produced by the settings loader
    ///
    /// The loader only fills fields it actually queried, so applying the
    /// patch never overwrites a value the user passed on the command line.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(configuration) = patch.configuration {
            self.configuration = configuration;
        }
        if let Some(signing_style) = patch.signing_style {
            self.signing_style = signing_style;
        }
        if let Some(certification_name) = patch.certification_name {
            self.certification_name = certification_name;
        }
        if let Some(provision_profile_name) = patch.provision_profile_name {
            self.provision_profile_name = provision_profile_name;
        }
        if let Some(team_id) = patch.team_id {
            self.team_id = team_id;
        }
        if let Some(bundle_identifier) = patch.bundle_identifier {
            self.bundle_identifier = bundle_identifier;
        }
        if let Some(compile_bitcode) = patch.compile_bitcode {
            self.compile_bitcode = compile_bitcode;
        }
        if let Some(strip_swift_symbols) = patch.strip_swift_symbols {
            self.strip_swift_symbols = strip_swift_symbols;
        }
    }
}

/// Values backfilled from `xcodebuild -showBuildSettings`
///
/// Each field is `Some` only when the loader decided the project settings
/// should supply it (see `settings::load_project_settings`).
#[derive(Debug, Default)]
pub struct SettingsPatch {
    pub configuration: Option<String>,
    pub signing_style: Option<String>,
    pub certification_name: Option<String>,
    pub provision_profile_name: Option<String>,
    pub team_id: Option<String>,
    pub bundle_identifier: Option<String>,
    pub compile_bitcode: Option<bool>,
    pub strip_swift_symbols: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::new(Action::Build);
        assert_eq!(config.configuration, "Release");
        assert_eq!(config.export_type, ExportType::AdHoc);
        assert_eq!(config.archive_path, "./output/app.xcarchive");
        assert_eq!(config.export_options_path, "./output/ExportOptions.plist");
        assert_eq!(config.derived_data_path, "./build/");
        assert!(config.compile_bitcode);
        assert!(config.strip_swift_symbols);
        assert!(config.upload_symbols);
        assert!(config.signing_style.is_empty());
    }

    #[test]
    fn test_apply_patch_fills_queried_fields_only() {
        let mut config = BuildConfig::new(Action::Archive);
        config.team_id = "USER_TEAM".to_string();

        let patch = SettingsPatch {
            signing_style: Some("Manual".to_string()),
            certification_name: Some("Apple Distribution: Acme".to_string()),
            ..Default::default()
        };
        config.apply(patch);

        assert_eq!(config.signing_style, "Manual");
        assert_eq!(config.certification_name, "Apple Distribution: Acme");
        // No team_id in the patch, the CLI value survives
        assert_eq!(config.team_id, "USER_TEAM");
    }

    #[test]
    fn test_export_type_method_strings() {
        assert_eq!(ExportType::AdHoc.method(), "ad-hoc");
        assert_eq!(ExportType::Development.method(), "development");
        assert_eq!(ExportType::AppStore.method(), "app-store");
        assert_eq!(ExportType::Enterprise.method(), "enterprise");
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Build.to_string(), "build");
        assert_eq!(Action::ExportArchive.to_string(), "exportArchive");
    }
}
