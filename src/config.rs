// Configuration module for mojicount
// This module handles loading and parsing configuration from ~/.config/mojicount/config.toml

mod types;

pub use crate::metrics::Language;
pub use types::{ClipboardBackend, Config};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/mojicount/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path with the same fallback rules
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => {
            #[cfg(debug_assertions)]
            log::debug!("Config file read successfully, {} bytes", contents.len());
            contents
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Config parsed successfully: live_update={} language={:?}",
                config.counting.live_update,
                config.display.language
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e.message())),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/mojicount/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mojicount")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Language;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (temp_dir, path)
    }

    // Feature: config-system, Property 3: Malformed TOML fallback
    // For any malformed TOML syntax in the config file, loading should return
    // all default values together with a warning.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_malformed_toml_fallback(
            malformed in prop::sample::select(vec![
                "[counting\nlive_update = true",
                "[counting]\nlive_update = maybe",
                "[counting]\n live_update",
                "counting]\nlive_update = true",
                "[display]\nlanguage = \"ja",
            ])
        ) {
            let (_dir, path) = write_config(malformed);
            let result = load_config_from(&path);

            prop_assert!(result.warning.is_some(), "Malformed TOML should produce a warning");
            prop_assert!(result.config.counting.live_update);
            prop_assert_eq!(result.config.display.language, Language::En);
        }
    }

    #[test]
    fn test_missing_file_returns_defaults_without_warning() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config_from(&temp_dir.path().join("absent.toml"));

        assert!(result.warning.is_none());
        assert!(result.config.counting.live_update);
        assert_eq!(result.config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let (_dir, path) = write_config(
            r#"
[counting]
live_update = false

[display]
language = "ja"
"#,
        );
        let result = load_config_from(&path);

        assert!(result.warning.is_none());
        assert!(!result.config.counting.live_update);
        assert_eq!(result.config.display.language, Language::Ja);
    }

    #[test]
    fn test_invalid_value_warns_and_uses_defaults() {
        let (_dir, path) = write_config("[clipboard]\nbackend = \"carrier-pigeon\"\n");
        let result = load_config_from(&path);

        let warning = result.warning.expect("should warn");
        assert!(warning.starts_with("Invalid config:"));
        assert_eq!(result.config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_directory_path_warns_on_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config_from(temp_dir.path());

        let warning = result.warning.expect("should warn");
        assert!(warning.starts_with("Failed to read config:"));
    }

    #[test]
    fn test_config_path_consistency() {
        let path = get_config_path();
        assert_eq!(path, get_config_path());

        let path_str = path.to_string_lossy();
        assert!(
            path_str.ends_with("mojicount/config.toml")
                || path_str.ends_with("mojicount\\config.toml"),
            "Config path should end with mojicount/config.toml, got: {}",
            path_str
        );
    }
}
