use std::fmt;

/// Operating system family the launcher runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    /// Anything else, carrying the raw OS identifier (e.g. "linux")
    Other(String),
}

impl Platform {
    /// Detect the platform of the running process.
    ///
    /// Rust reports "macos" and "windows"; those are normalized to the
    /// conventional "darwin" and "win32" identifiers before classification.
    pub fn detect() -> Self {
        let raw = match std::env::consts::OS {
            "macos" => "darwin",
            "windows" => "win32",
            other => other,
        };
        Self::from_identifier(raw)
    }

    /// Classify a raw platform identifier such as "darwin", "win32" or "linux".
    pub fn from_identifier(raw: &str) -> Self {
        match raw {
            "darwin" => Platform::MacOs,
            "win32" => Platform::Windows,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Human-readable label printed on the `OS:` line
    pub fn label(&self) -> &str {
        match self {
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
            Platform::Other(raw) => raw,
        }
    }

    /// Raw identifier printed on the `Platform:` line
    pub fn identifier(&self) -> &str {
        match self {
            Platform::MacOs => "darwin",
            Platform::Windows => "win32",
            Platform::Other(raw) => raw,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Other(_))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identifier_known() {
        assert_eq!(Platform::from_identifier("darwin"), Platform::MacOs);
        assert_eq!(Platform::from_identifier("win32"), Platform::Windows);
    }

    #[test]
    fn test_from_identifier_other_keeps_raw() {
        let platform = Platform::from_identifier("linux");
        assert_eq!(platform, Platform::Other("linux".to_string()));
        assert_eq!(platform.label(), "linux");
        assert_eq!(platform.identifier(), "linux");
        assert!(!platform.is_supported());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Platform::MacOs.label(), "macOS");
        assert_eq!(Platform::Windows.label(), "Windows");
        assert_eq!(Platform::MacOs.identifier(), "darwin");
        assert_eq!(Platform::Windows.identifier(), "win32");
    }

    #[test]
    fn test_identifier_is_case_sensitive() {
        // "Darwin" is what uname prints, not a recognized identifier
        assert!(!Platform::from_identifier("Darwin").is_supported());
    }

    #[test]
    fn test_detect_matches_build_target() {
        let platform = Platform::detect();
        if cfg!(target_os = "macos") {
            assert_eq!(platform, Platform::MacOs);
        } else if cfg!(target_os = "windows") {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform.identifier(), std::env::consts::OS);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::MacOs.to_string(), "macOS (darwin)");
    }
}
