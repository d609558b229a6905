pub mod browser;
pub mod config;
pub mod error;
pub mod launcher;
pub mod output;
pub mod platform;

pub use error::LaunchError;
pub use launcher::Launcher;
pub use platform::Platform;
