use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::platform::Platform;

/// The two lines identifying the detected platform
/// Format: "OS: {label}\nPlatform: {identifier}"
pub fn format_platform_lines(platform: &Platform) -> String {
    format!("OS: {}\nPlatform: {}", platform.label(), platform.identifier())
}

/// Confirmation printed after a successful launch
pub fn format_confirmation(address: Option<&str>) -> String {
    match address.filter(|a| !a.is_empty()) {
        Some(address) => format!("Opened Chrome with {}", address),
        None => "Opened Chrome".to_string(),
    }
}

/// Warning logged when chrome.exe could not be located and the system
/// default browser was used instead
pub fn format_fallback_notice(target: &str) -> String {
    format!(
        "Chrome executable not found (LOCALAPPDATA unavailable); opened {} in the default browser, which may not be Chrome",
        target
    )
}

pub fn format_unsupported() -> String {
    "Unsupported platform for this script.".to_string()
}

/// Format a fatal error for stderr
pub fn format_error(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "error:".red().bold(), message)
    } else {
        format!("error: {}", message)
    }
}

/// Check if stderr is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stderr().is_terminal()
}
