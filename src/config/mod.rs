mod schema;

pub use schema::{Config, DEFAULT_MAC_APP};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/chrome-opener/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("chrome-opener"))
}

/// Get the default config file path (~/.config/chrome-opener/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed or fails validation
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!("Loading config from {}", config_path.display());
    parse_config_file(&config_path)
}

fn parse_config_file(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    // An empty file is a valid "all defaults" config
    if config_content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    validate(&config)?;
    Ok(config)
}

/// Reject settings that would produce an unusable launch command
pub fn validate(config: &Config) -> Result<()> {
    if config.mac_app.trim().is_empty() {
        anyhow::bail!("mac_app must not be empty");
    }
    if let Some(exe) = &config.windows_executable {
        if exe.trim().is_empty() {
            anyhow::bail!("windows_executable must not be empty when set");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// Config file under the temp dir, removed on drop even if the test panics
    struct TempConfig(PathBuf);

    impl TempConfig {
        fn path(&self) -> PathBuf {
            self.0.clone()
        }
    }

    impl Drop for TempConfig {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    fn write_temp(name: &str, contents: &str) -> TempConfig {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        TempConfig(path)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mac_app, "Google Chrome");
        assert!(config.windows_executable.is_none());
        assert!(config.fallback_to_default_browser);
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let file = write_temp(
            "chrome_opener_test_partial.yaml",
            "windows_executable: 'D:\\Chrome\\chrome.exe'\n",
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.mac_app, DEFAULT_MAC_APP);
        assert_eq!(
            config.windows_executable.as_deref(),
            Some("D:\\Chrome\\chrome.exe")
        );
        assert!(config.fallback_to_default_browser);
    }

    #[test]
    fn test_load_full_config() {
        let file = write_temp(
            "chrome_opener_test_full.yaml",
            "mac_app: Google Chrome Canary\nfallback_to_default_browser: false\n",
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.mac_app, "Google Chrome Canary");
        assert!(!config.fallback_to_default_browser);
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let file = write_temp("chrome_opener_test_empty.yaml", "\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_temp_config_removed_on_drop() {
        let file = write_temp("chrome_opener_test_drop.yaml", "mac_app: Chromium\n");
        let path = file.path();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let path = env::temp_dir().join("chrome_opener_test_missing.yaml");
        let _ = fs::remove_file(&path);

        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let file = write_temp("chrome_opener_test_invalid.yaml", "mac_app: [unclosed\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        let config = Config {
            mac_app: "  ".to_string(),
            ..Config::default()
        };
        assert!(validate(&config).is_err());

        let config = Config {
            windows_executable: Some(String::new()),
            ..Config::default()
        };
        assert!(validate(&config).is_err());

        assert!(validate(&Config::default()).is_ok());
    }
}
