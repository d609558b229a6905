pub mod command;
pub mod runner;

pub use command::{
    build_launch_command, escape_double_quotes, windows_chrome_path, LaunchCommand, LaunchPlan,
    BLANK_PAGE, MAC_OPEN,
};
pub use runner::{CommandRunner, SystemRunner};
