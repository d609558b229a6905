use std::process::Command;

use crate::error::LaunchError;

/// Narrow seam around process invocation so launches can be faked in tests
pub trait CommandRunner {
    /// Run `program` with `args` to completion, inheriting stdio
    fn run(&mut self, program: &str, args: &[String]) -> Result<(), LaunchError>;

    /// Open `url` in the system default browser
    fn open_default(&mut self, url: &str) -> Result<(), LaunchError>;
}

/// Runs commands on the real system
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(LaunchError::ExitStatus {
                program: program.to_string(),
                status,
            });
        }
        Ok(())
    }

    fn open_default(&mut self, url: &str) -> Result<(), LaunchError> {
        webbrowser::open(url).map_err(|source| LaunchError::DefaultBrowser { source })
    }
}
