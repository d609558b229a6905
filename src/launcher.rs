use std::env::VarError;
use std::io::Write;

use crate::browser::{build_launch_command, CommandRunner, LaunchPlan};
use crate::config::Config;
use crate::error::LaunchError;
use crate::output;
use crate::platform::Platform;

/// Detects nothing itself: everything it needs from the environment is
/// handed in, so a launch is fully determined by its inputs and the runner.
#[derive(Debug, Clone)]
pub struct Launcher {
    platform: Platform,
    config: Config,
    local_app_data: Option<String>,
}

/// Interpret a `LOCALAPPDATA` lookup.
///
/// A value that is not valid UTF-8 cannot be joined into the chrome.exe path,
/// so it is reported and treated as unusable rather than silently dropped.
pub fn local_app_data_from(lookup: Result<String, VarError>) -> Option<String> {
    match lookup {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            tracing::warn!(
                "LOCALAPPDATA is not valid UTF-8 ({}), ignoring it",
                raw.to_string_lossy()
            );
            None
        }
    }
}

impl Launcher {
    pub fn new(platform: Platform, config: Config, local_app_data: Option<String>) -> Self {
        Self {
            platform,
            config,
            local_app_data,
        }
    }

    /// Build a launcher from the running process's environment
    pub fn from_env(config: Config) -> Self {
        let platform = Platform::detect();
        let local_app_data = match platform {
            Platform::Windows => local_app_data_from(std::env::var("LOCALAPPDATA")),
            _ => None,
        };
        Self::new(platform, config, local_app_data)
    }

    /// Report the platform, launch the browser and confirm on `out`.
    ///
    /// On an unsupported platform the unsupported message is written before
    /// the error is returned; the runner is never called. When the runner
    /// fails no confirmation is written.
    pub fn launch<R, W>(
        &self,
        address: Option<&str>,
        runner: &mut R,
        out: &mut W,
    ) -> Result<(), LaunchError>
    where
        R: CommandRunner,
        W: Write,
    {
        writeln!(out, "{}", output::format_platform_lines(&self.platform))?;
        tracing::debug!("Detected platform {}", self.platform);

        if !self.platform.is_supported() {
            writeln!(out, "{}", output::format_unsupported())?;
            return Err(LaunchError::UnsupportedPlatform {
                platform: self.platform.identifier().to_string(),
            });
        }

        let plan = build_launch_command(
            &self.platform,
            address,
            &self.config,
            self.local_app_data.as_deref(),
        )?;

        match &plan {
            LaunchPlan::Command(cmd) => {
                tracing::debug!("Running: {}", cmd.display());
                runner.run(&cmd.program, &cmd.args)?;
            }
            LaunchPlan::DefaultBrowser(target) => {
                runner.open_default(target)?;
                tracing::warn!("{}", output::format_fallback_notice(target));
            }
        }

        writeln!(out, "{}", output::format_confirmation(address))?;
        Ok(())
    }
}
