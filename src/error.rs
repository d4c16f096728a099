//! Error types and helpers for user-friendly error messages
//!
//! This module provides custom error types with actionable hints to help
//! users quickly resolve common xcodebuild configuration issues.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum XcgoError {
    /// Missing workspace/project or scheme for the requested action
    #[error("Scheme configuration error: {message}")]
    Scheme { message: String, hint: String },

    /// Export-options plist cannot be produced
    #[error("Export options error: {message}")]
    ExportOptions { message: String, hint: String },

    /// Manual signing is selected but a required signing field is empty
    #[error("Signing configuration error: missing {field}")]
    Signing { field: String, hint: String },

    /// An expected build setting was absent from xcodebuild output
    #[error("Build setting '{key}' not found in xcodebuild output")]
    Settings { key: String, hint: String },

    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool} (required for {required_for})")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },
}

impl XcgoError {
    /// Create a scheme configuration error
    pub fn scheme_error(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Scheme {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an export-options error
    pub fn export_options_error(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::ExportOptions {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create a signing error naming the missing field
    pub fn signing_error(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Signing {
            field: field.into(),
            hint: hint.into(),
        }
    }

    /// Create a missing-build-setting error
    pub fn settings_error(key: impl Into<String>) -> Self {
        Self::Settings {
            key: key.into(),
            hint: "Run `xcodebuild -showBuildSettings` in the project directory and \
                   check that the project is configured for the requested configuration."
                .to_string(),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            XcgoError::Scheme { hint, .. }
            | XcgoError::ExportOptions { hint, .. }
            | XcgoError::Signing { hint, .. }
            | XcgoError::Settings { hint, .. }
            | XcgoError::MissingTool { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing Xcode
    pub fn xcode() -> &'static str {
        "Install Xcode from the App Store:\n\
         1. Open App Store\n\
         2. Search for 'Xcode'\n\
         3. Click Install\n\
         4. Run: sudo xcode-select --install"
    }

    /// Get hint for a missing workspace/project or scheme
    pub fn scheme_config() -> &'static str {
        "Pass exactly one of --workspace/-w or --project/-p, and the scheme \
         via --scheme/-s.\n\
         List available schemes with: xcodebuild -list"
    }

    /// Get hint for incomplete manual signing configuration
    pub fn manual_signing() -> &'static str {
        "The project uses manual signing. Provide the missing value via \
         --certificate, --provisionProfile, --team or --bundleIdentifier, \
         or configure it in the Xcode project so it can be read from \
         -showBuildSettings."
    }

    /// Get hint for an unusable export-options path
    pub fn export_options_path() -> &'static str {
        "Pass a writable file path via --exportOptionsPath, \
         e.g. --exportOptionsPath ./output/ExportOptions.plist"
    }
}
