//! xcodebuild argument list construction
//!
//! Pure translation of a [`BuildConfig`] into the ordered argument vector
//! for one xcodebuild invocation. No IO happens here; the same
//! configuration always yields the same argument list.

use crate::config::{Action, BuildConfig};
use crate::error::{hints, XcgoError};

/// Build the xcodebuild argument list for the configured action
///
/// The returned vector excludes the program name itself; the runner passes
/// it to [`crate::exec::XCODEBUILD`].
pub fn build_args(config: &BuildConfig) -> Result<Vec<String>, XcgoError> {
    let mut args: Vec<String> = Vec::new();

    match config.action {
        Action::Build | Action::Clean | Action::Archive => {
            args.push(config.action.to_string());

            if !config.workspace_name.is_empty() {
                args.push("-workspace".to_string());
                args.push(config.workspace_name.clone());
            } else if !config.project_name.is_empty() {
                args.push("-project".to_string());
                args.push(config.project_name.clone());
            } else {
                return Err(XcgoError::scheme_error(
                    "workspace or project is empty",
                    hints::scheme_config(),
                ));
            }

            if config.scheme.is_empty() {
                return Err(XcgoError::scheme_error(
                    "scheme is empty",
                    hints::scheme_config(),
                ));
            }
            args.push("-scheme".to_string());
            args.push(config.scheme.clone());

            if !config.configuration.is_empty() {
                args.push("-configuration".to_string());
                args.push(config.configuration.clone());
            }

            if !config.derived_data_path.is_empty() {
                args.push("-derivedDataPath".to_string());
                args.push(config.derived_data_path.clone());
            }

            if config.action == Action::Archive && !config.archive_path.is_empty() {
                args.push("-archivePath".to_string());
                args.push(config.archive_path.clone());
            }

            // Signing overrides apply to build and archive, never to clean
            if config.action != Action::Clean {
                if !config.certification_name.is_empty() {
                    args.push(format!("CODE_SIGN_IDENTITY={}", config.certification_name));
                }
                if !config.provision_profile_name.is_empty() {
                    args.push(format!(
                        "PROVISIONING_PROFILE_SPECIFIER={}",
                        config.provision_profile_name
                    ));
                }
                if !config.team_id.is_empty() {
                    args.push(format!("DEVELOPMENT_TEAM={}", config.team_id));
                }
                if !config.bundle_identifier.is_empty() {
                    args.push(format!(
                        "PRODUCT_BUNDLE_IDENTIFIER={}",
                        config.bundle_identifier
                    ));
                }
            }
        }
        Action::ExportArchive => {
            args.push("-exportArchive".to_string());

            if !config.archive_path.is_empty() {
                args.push("-archivePath".to_string());
                args.push(config.archive_path.clone());
            }
            if !config.export_path.is_empty() {
                args.push("-exportPath".to_string());
                args.push(config.export_path.clone());
            }
            if !config.export_options_path.is_empty() {
                args.push("-exportOptionsPlist".to_string());
                args.push(config.export_options_path.clone());
            }
        }
    }

    args.extend(config.other_args.iter().cloned());

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Action, BuildConfig};

    fn archive_config() -> BuildConfig {
        let mut config = BuildConfig::new(Action::Archive);
        config.workspace_name = "App.xcworkspace".to_string();
        config.scheme = "App".to_string();
        config
    }

    #[test]
    fn test_archive_argument_order() {
        let mut config = archive_config();
        config.archive_path = "./out/a.xcarchive".to_string();

        let args = build_args(&config).unwrap();
        assert_eq!(
            args,
            vec![
                "archive",
                "-workspace",
                "App.xcworkspace",
                "-scheme",
                "App",
                "-configuration",
                "Release",
                "-derivedDataPath",
                "./build/",
                "-archivePath",
                "./out/a.xcarchive",
            ]
        );
    }

    #[test]
    fn test_workspace_wins_over_project() {
        let mut config = archive_config();
        config.project_name = "App.xcodeproj".to_string();

        let args = build_args(&config).unwrap();
        assert!(args.contains(&"-workspace".to_string()));
        assert!(!args.contains(&"-project".to_string()));
    }

    #[test]
    fn test_project_used_when_no_workspace() {
        let mut config = BuildConfig::new(Action::Build);
        config.project_name = "App.xcodeproj".to_string();
        config.scheme = "App".to_string();

        let args = build_args(&config).unwrap();
        let pos = args.iter().position(|a| a == "-project").unwrap();
        assert_eq!(args[pos + 1], "App.xcodeproj");
    }

    #[test]
    fn test_missing_workspace_and_project_fails() {
        let mut config = BuildConfig::new(Action::Build);
        config.scheme = "App".to_string();

        let err = build_args(&config).unwrap_err();
        assert!(matches!(err, XcgoError::Scheme { .. }));
    }

    #[test]
    fn test_empty_scheme_fails() {
        let mut config = BuildConfig::new(Action::Build);
        config.workspace_name = "App.xcworkspace".to_string();

        let err = build_args(&config).unwrap_err();
        assert!(matches!(err, XcgoError::Scheme { .. }));
    }

    #[test]
    fn test_scheme_follows_flag() {
        let args = build_args(&archive_config()).unwrap();
        let pos = args.iter().position(|a| a == "-scheme").unwrap();
        assert_eq!(args[pos + 1], "App");
    }

    #[test]
    fn test_signing_overrides_for_build_and_archive() {
        for action in [Action::Build, Action::Archive] {
            let mut config = BuildConfig::new(action);
            config.workspace_name = "App.xcworkspace".to_string();
            config.scheme = "App".to_string();
            config.certification_name = "Apple Distribution: Acme".to_string();
            config.provision_profile_name = "Acme AdHoc".to_string();
            config.team_id = "TEAM123".to_string();
            config.bundle_identifier = "com.acme.app".to_string();

            let args = build_args(&config).unwrap();
            let tail: Vec<&String> = args.iter().rev().take(4).collect();
            assert_eq!(tail[3], "CODE_SIGN_IDENTITY=Apple Distribution: Acme");
            assert_eq!(tail[2], "PROVISIONING_PROFILE_SPECIFIER=Acme AdHoc");
            assert_eq!(tail[1], "DEVELOPMENT_TEAM=TEAM123");
            assert_eq!(tail[0], "PRODUCT_BUNDLE_IDENTIFIER=com.acme.app");
        }
    }

    #[test]
    fn test_clean_skips_signing_overrides() {
        let mut config = BuildConfig::new(Action::Clean);
        config.workspace_name = "App.xcworkspace".to_string();
        config.scheme = "App".to_string();
        config.team_id = "TEAM123".to_string();

        let args = build_args(&config).unwrap();
        assert!(!args.iter().any(|a| a.starts_with("DEVELOPMENT_TEAM=")));
        assert!(!args.contains(&"-archivePath".to_string()));
    }

    #[test]
    fn test_export_archive_arguments() {
        let config = BuildConfig::new(Action::ExportArchive);

        let args = build_args(&config).unwrap();
        assert_eq!(
            args,
            vec![
                "-exportArchive",
                "-archivePath",
                "./output/app.xcarchive",
                "-exportPath",
                "./output/app/",
                "-exportOptionsPlist",
                "./output/ExportOptions.plist",
            ]
        );
    }

    #[test]
    fn test_export_archive_skips_empty_paths() {
        let mut config = BuildConfig::new(Action::ExportArchive);
        config.export_path = String::new();

        let args = build_args(&config).unwrap();
        assert!(!args.contains(&"-exportPath".to_string()));
    }

    #[test]
    fn test_other_args_appended_last_in_order() {
        let mut config = archive_config();
        config.other_args = vec![
            "-allowProvisioningUpdates".to_string(),
            "ONLY_ACTIVE_ARCH=NO".to_string(),
        ];

        let args = build_args(&config).unwrap();
        let n = args.len();
        assert_eq!(args[n - 2], "-allowProvisioningUpdates");
        assert_eq!(args[n - 1], "ONLY_ACTIVE_ARCH=NO");
    }

    #[test]
    fn test_builder_is_deterministic() {
        let config = archive_config();
        assert_eq!(build_args(&config).unwrap(), build_args(&config).unwrap());
    }
}
