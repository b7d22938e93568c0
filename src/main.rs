use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pad::core::config::{self, ConfigError, PadConfig};
use pad::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "pad", about = "Minimal raw-mode terminal surface")]
struct Args {
    /// Read settings from this file instead of ~/.pad/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text shown in the middle of the screen
    #[arg(short, long)]
    banner: Option<String>,

    /// Print each decoded key instead of drawing the screen (q exits)
    #[arg(short, long)]
    keys: bool,

    /// Log file (stdout and stderr belong to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to pad.log in current directory by default
    let log_path = args
        .log_file
        .clone()
        .or_else(|| std::env::var("PAD_LOG_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("pad.log"));
    let log_level = std::env::var("PAD_LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&log_path) {
        let _ = WriteLogger::init(log_level, log_config, log_file);
    }

    log::info!("Pad starting up");

    let file_config = match load(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("pad: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        std::env::var("PAD_BANNER").ok(),
        args.banner.as_deref(),
    );

    let result = if args.keys {
        tui::run_key_echo(&resolved)
    } else {
        tui::run(&resolved)
    };

    match result {
        Ok(()) => {
            log::info!("Pad exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Raw mode is already restored here
            log::error!("Fatal: {}", e);
            let _ = tui::ui::clear_screen(&mut io::stdout());
            eprintln!("pad: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(args: &Args) -> Result<PadConfig, ConfigError> {
    match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
}
