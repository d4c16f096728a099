//! ExportOptions.plist generation
//!
//! Builds the typed options document consumed by `xcodebuild
//! -exportArchive` and serializes it as an XML property list. Keys are
//! emitted in sorted order so the output is deterministic.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{BuildConfig, ExportType};
use crate::error::{hints, XcgoError};

/// A property-list value supported by the export-options document
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    String(String),
    Bool(bool),
    Dict(BTreeMap<String, String>),
}

/// The export-options document, keyed in sorted order
#[derive(Debug, Default)]
pub struct ExportOptions {
    entries: BTreeMap<String, PlistValue>,
}

impl ExportOptions {
    /// Build the document from a configuration
    ///
    /// Validates the manual-signing field set before any value is
    /// assembled, so a failure here never leaves a partial file behind.
    pub fn from_config(config: &BuildConfig) -> Result<Self, XcgoError> {
        if config.signing_style == "Manual" {
            if config.certification_name.is_empty() {
                return Err(XcgoError::signing_error("certificate", hints::manual_signing()));
            }
            if config.provision_profile_name.is_empty() {
                return Err(XcgoError::signing_error("provision profile", hints::manual_signing()));
            }
            if config.team_id.is_empty() {
                return Err(XcgoError::signing_error("team id", hints::manual_signing()));
            }
            if config.bundle_identifier.is_empty() {
                return Err(XcgoError::signing_error("bundle identifier", hints::manual_signing()));
            }
        }

        let mut entries = BTreeMap::new();
        entries.insert(
            "method".to_string(),
            PlistValue::String(config.export_type.method().to_string()),
        );
        entries.insert(
            "destination".to_string(),
            PlistValue::String("export".to_string()),
        );
        entries.insert(
            "compileBitcode".to_string(),
            PlistValue::Bool(config.compile_bitcode),
        );

        // Single bundle-id -> profile mapping; multi-target projects are
        // out of scope for one invocation.
        let mut profiles = BTreeMap::new();
        profiles.insert(
            config.bundle_identifier.clone(),
            config.provision_profile_name.clone(),
        );
        entries.insert(
            "provisioningProfiles".to_string(),
            PlistValue::Dict(profiles),
        );

        entries.insert(
            "signingCertificate".to_string(),
            PlistValue::String(config.certification_name.clone()),
        );
        entries.insert(
            "signingStyle".to_string(),
            PlistValue::String(config.signing_style.clone()),
        );
        entries.insert(
            "stripSwiftSymbols".to_string(),
            PlistValue::Bool(config.strip_swift_symbols),
        );
        entries.insert(
            "teamID".to_string(),
            PlistValue::String(config.team_id.clone()),
        );

        match config.export_type {
            ExportType::AdHoc | ExportType::Development => {
                entries.insert(
                    "thinning".to_string(),
                    PlistValue::String("<none>".to_string()),
                );
            }
            ExportType::AppStore => {
                entries.insert(
                    "uploadSymbols".to_string(),
                    PlistValue::Bool(config.upload_symbols),
                );
            }
            // Enterprise exports set neither thinning nor uploadSymbols.
            // Matches the behavior CI pipelines already depend on; see
            // DESIGN.md before changing it.
            ExportType::Enterprise => {}
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.entries.get(key)
    }

    /// Serialize to XML property-list format
    pub fn to_xml(&self) -> String {
        let mut out = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
             \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
             <plist version=\"1.0\">\n<dict>\n",
        );

        for (key, value) in &self.entries {
            out.push_str(&format!("\t<key>{}</key>\n", xml_escape(key)));
            match value {
                PlistValue::String(s) => {
                    out.push_str(&format!("\t<string>{}</string>\n", xml_escape(s)));
                }
                PlistValue::Bool(true) => out.push_str("\t<true/>\n"),
                PlistValue::Bool(false) => out.push_str("\t<false/>\n"),
                PlistValue::Dict(map) => {
                    out.push_str("\t<dict>\n");
                    for (k, v) in map {
                        out.push_str(&format!("\t\t<key>{}</key>\n", xml_escape(k)));
                        out.push_str(&format!("\t\t<string>{}</string>\n", xml_escape(v)));
                    }
                    out.push_str("\t</dict>\n");
                }
            }
        }

        out.push_str("</dict>\n</plist>\n");
        out
    }
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Validate, build and write the export-options plist for a configuration
pub fn write_export_options(config: &BuildConfig) -> Result<()> {
    if config.export_options_path.is_empty() {
        return Err(XcgoError::export_options_error(
            "export options path is empty",
            hints::export_options_path(),
        )
        .into());
    }

    let options = ExportOptions::from_config(config)?;

    let path = Path::new(&config.export_options_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory {}", parent.display())
            })?;
        }
    }

    fs::write(path, options.to_xml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
