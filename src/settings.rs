//! Project build-settings query and backfill
//!
//! Runs `xcodebuild -showBuildSettings`, parses the `KEY = VALUE` output
//! into a typed lookup and produces a [`SettingsPatch`] for the fields the
//! command line left unset. A setting the project is expected to carry but
//! does not is a fatal, typed error.

use std::collections::HashMap;

use anyhow::{bail, Result};
use regex::Regex;

use crate::config::{BuildConfig, SettingsPatch};
use crate::error::XcgoError;
use crate::exec::{run_captured, XCODEBUILD};

/// Parsed output of `xcodebuild -showBuildSettings`
#[derive(Debug, Default)]
pub struct BuildSettings {
    values: HashMap<String, String>,
}

impl BuildSettings {
    /// Parse the textual settings dump
    ///
    /// Lines look like `    CODE_SIGN_STYLE = Manual`; anything else
    /// (section headers, blank lines) is ignored.
    pub fn parse(output: &str) -> Self {
        let line_re = Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$").unwrap();

        let mut values = HashMap::new();
        for line in output.lines() {
            if let Some(caps) = line_re.captures(line) {
                values.insert(caps[1].to_string(), caps[2].trim().to_string());
            }
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a setting the project must define
    pub fn require(&self, key: &str) -> Result<&str, XcgoError> {
        self.get(key).ok_or_else(|| XcgoError::settings_error(key))
    }

    /// Look up a YES/NO setting the project must define
    pub fn require_bool(&self, key: &str) -> Result<bool, XcgoError> {
        Ok(self.require(key)? == "YES")
    }
}

/// Query the project's build settings and compute the backfill patch
///
/// Always resolves `CODE_SIGN_STYLE`. Under manual signing, additionally
/// backfills every signing field the command line left empty, plus the
/// bitcode and Swift-symbol flags. Runs for every action, clean included.
pub fn load_project_settings(config: &BuildConfig) -> Result<SettingsPatch> {
    let mut patch = SettingsPatch::default();

    let configuration = if config.configuration.is_empty() {
        patch.configuration = Some("Debug".to_string());
        "Debug".to_string()
    } else {
        config.configuration.clone()
    };

    let result = run_captured(
        XCODEBUILD,
        &[
            "-showBuildSettings".to_string(),
            "-configuration".to_string(),
            configuration,
        ],
    )?;
    if !result.success {
        bail!(
            "xcodebuild -showBuildSettings failed with exit code {}:\n{}",
            result.exit_code,
            result.stderr.trim()
        );
    }

    let settings = BuildSettings::parse(&result.stdout);
    patch_from_settings(config, &settings, &mut patch)?;
    Ok(patch)
}

/// Fill the patch from parsed settings; split out for direct testing
fn patch_from_settings(
    config: &BuildConfig,
    settings: &BuildSettings,
    patch: &mut SettingsPatch,
) -> Result<(), XcgoError> {
    let signing_style = settings.require("CODE_SIGN_STYLE")?.to_string();

    if signing_style == "Manual" {
        if config.certification_name.is_empty() {
            patch.certification_name = Some(settings.require("CODE_SIGN_IDENTITY")?.to_string());
        }
        if config.provision_profile_name.is_empty() {
            patch.provision_profile_name =
                Some(settings.require("PROVISIONING_PROFILE_SPECIFIER")?.to_string());
        }
        if config.team_id.is_empty() {
            patch.team_id = Some(settings.require("DEVELOPMENT_TEAM")?.to_string());
        }
        if config.bundle_identifier.is_empty() {
            patch.bundle_identifier =
                Some(settings.require("PRODUCT_BUNDLE_IDENTIFIER")?.to_string());
        }
        patch.compile_bitcode = Some(settings.require_bool("ENABLE_BITCODE")?);
        patch.strip_swift_symbols = Some(settings.require_bool("STRIP_SWIFT_SYMBOLS")?);
    }

    patch.signing_style = Some(signing_style);
    Ok(())
}
