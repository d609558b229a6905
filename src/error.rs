use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Exit code for a successful launch
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when the platform has no launch command
pub const EXIT_UNSUPPORTED: i32 = 1;
/// Exit code when the browser process could not be started
pub const EXIT_LAUNCH: i32 = 2;
/// Exit code for an unreadable or invalid config file
pub const EXIT_CONFIG: i32 = 3;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },

    #[error("Failed to open default browser: {source}")]
    DefaultBrowser {
        #[source]
        source: io::Error,
    },

    #[error("Failed to write status output: {0}")]
    Output(#[from] io::Error),
}

impl LaunchError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::UnsupportedPlatform { .. } => EXIT_UNSUPPORTED,
            LaunchError::Spawn { .. }
            | LaunchError::ExitStatus { .. }
            | LaunchError::DefaultBrowser { .. }
            | LaunchError::Output(_) => EXIT_LAUNCH,
        }
    }
}
