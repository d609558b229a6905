use std::io;

use crate::config::Config;
use crate::error::LaunchError;
use crate::platform::Platform;

/// `open` lives here on every macOS install; using the full path keeps
/// launches working when PATH is minimal (e.g. started from an IDE).
pub const MAC_OPEN: &str = "/usr/bin/open";

/// Address used on Windows when none is given
pub const BLANK_PAGE: &str = "about:blank";

const CHROME_SUBPATH: &str = "\\Google\\Chrome\\Application\\chrome.exe";

/// A fully assembled external command: program, discrete arguments and a
/// shell-style rendering for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    command_line: String,
}

impl LaunchCommand {
    /// Shell-style rendering of the command. Only used for display; the
    /// process is spawned from `program` and `args` directly.
    pub fn display(&self) -> &str {
        &self.command_line
    }
}

/// What the launcher should do to bring up the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Spawn a specific command
    Command(LaunchCommand),
    /// Hand the target to the system default browser
    DefaultBrowser(String),
}

/// Escape embedded double quotes with a backslash.
///
/// Other shell metacharacters (`$`, backticks) pass through untouched.
pub fn escape_double_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Location of chrome.exe under a per-user local application-data directory.
///
/// Always joined with backslashes, independent of the host the crate runs on.
pub fn windows_chrome_path(local_app_data: &str) -> String {
    format!("{}{}", local_app_data.trim_end_matches('\\'), CHROME_SUBPATH)
}

/// Build the launch plan for `platform`.
///
/// An empty `address` counts as absent. `local_app_data` is the value of
/// `LOCALAPPDATA`, only consulted on Windows.
pub fn build_launch_command(
    platform: &Platform,
    address: Option<&str>,
    config: &Config,
    local_app_data: Option<&str>,
) -> Result<LaunchPlan, LaunchError> {
    let address = address.filter(|a| !a.is_empty());

    match platform {
        Platform::MacOs => Ok(LaunchPlan::Command(mac_command(&config.mac_app, address))),
        Platform::Windows => {
            let target = address.unwrap_or(BLANK_PAGE);
            let local_app_data = local_app_data.filter(|v| !v.is_empty());

            let executable = match (&config.windows_executable, local_app_data) {
                (Some(exe), _) => exe.clone(),
                (None, Some(dir)) => windows_chrome_path(dir),
                (None, None) if config.fallback_to_default_browser => {
                    return Ok(LaunchPlan::DefaultBrowser(target.to_string()));
                }
                (None, None) => {
                    return Err(LaunchError::Spawn {
                        program: format!("%LOCALAPPDATA%{}", CHROME_SUBPATH),
                        source: io::Error::new(
                            io::ErrorKind::NotFound,
                            "LOCALAPPDATA is not set",
                        ),
                    });
                }
            };

            Ok(LaunchPlan::Command(windows_command(executable, target)))
        }
        Platform::Other(raw) => Err(LaunchError::UnsupportedPlatform {
            platform: raw.clone(),
        }),
    }
}

fn mac_command(app: &str, address: Option<&str>) -> LaunchCommand {
    let mut args = vec!["-a".to_string(), app.to_string()];
    let mut command_line = format!("{} -a \"{}\"", MAC_OPEN, escape_double_quotes(app));

    if let Some(address) = address {
        args.extend(["--new".to_string(), "--args".to_string(), address.to_string()]);
        command_line.push_str(&format!(
            " --new --args \"{}\"",
            escape_double_quotes(address)
        ));
    }

    LaunchCommand {
        program: MAC_OPEN.to_string(),
        args,
        command_line,
    }
}

fn windows_command(executable: String, target: &str) -> LaunchCommand {
    let command_line = format!("\"{}\" \"{}\"", executable, escape_double_quotes(target));
    LaunchCommand {
        program: executable,
        args: vec![target.to_string()],
        command_line,
    }
}
