use serde::{Deserialize, Serialize};

pub const DEFAULT_MAC_APP: &str = "Google Chrome";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Application name passed to `open -a` on macOS
    pub mac_app: String,
    /// Explicit chrome.exe path; replaces the LOCALAPPDATA-derived location
    pub windows_executable: Option<String>,
    /// Open the system default browser when chrome.exe cannot be located
    pub fallback_to_default_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mac_app: DEFAULT_MAC_APP.to_string(),
            windows_executable: None,
            fallback_to_default_browser: true,
        }
    }
}
