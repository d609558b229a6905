use clap::Parser;
use std::path::PathBuf;

use chrome_opener::error::{EXIT_CONFIG, EXIT_SUCCESS};
use chrome_opener::{browser::SystemRunner, config, output, LaunchError, Launcher};

#[derive(Parser, Debug)]
#[command(name = "chrome-opener")]
#[command(about = "Detect the OS and open Google Chrome", long_about = None)]
#[command(version)]
struct Cli {
    /// Address to open (omit to just bring up Chrome)
    address: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/chrome-opener/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("chrome_opener={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let use_colors = output::should_use_colors();

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", output::format_error(&format!("Config error: {:#}", e), use_colors));
            std::process::exit(EXIT_CONFIG);
        }
    };

    let launcher = Launcher::from_env(config);
    let mut runner = SystemRunner;
    let mut stdout = std::io::stdout().lock();

    match launcher.launch(cli.address.as_deref(), &mut runner, &mut stdout) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        // Already reported on stdout by the launcher
        Err(e @ LaunchError::UnsupportedPlatform { .. }) => std::process::exit(e.exit_code()),
        Err(e) => {
            drop(stdout);
            eprintln!("{}", output::format_error(&e.to_string(), use_colors));
            std::process::exit(e.exit_code());
        }
    }
}
