use clap::Parser;
use quicktasks::core::config::{self, CliOverrides, Notice, ResolvedConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quicktasks", about = "A single-screen to-do list for the terminal")]
struct Args {
    /// Config file (default: ~/.quicktasks/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log (default: quicktasks.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// How long snackbar messages stay on screen, in milliseconds
    #[arg(long)]
    snackbar_ms: Option<u64>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logging isn't up yet: collect what config loading has to say and
    // replay it once the logger exists
    let mut notices = Vec::new();
    let file_config = match config::load_config(args.config.as_deref(), &mut notices) {
        Ok(c) => c,
        Err(e) => {
            notices.push(Notice {
                level: log::Level::Warn,
                message: format!("Ignoring config file: {}", e),
            });
            config::QuickTasksConfig::default()
        }
    };
    let cli = CliOverrides {
        log_file: args.log_file,
        log_level: args.log_level,
        snackbar_ms: args.snackbar_ms,
    };
    let resolved = config::resolve(&file_config, &cli, &mut notices);

    init_logging(&resolved);
    log::info!("QuickTasks starting up");
    config::replay(notices);
    log::debug!("Config: {:?}", resolved);

    quicktasks::tui::run(resolved)
}

/// File logger - the terminal itself belongs to the UI.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&config.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "quicktasks: cannot open log file {}: {}",
            config.log_file.display(),
            e
        ),
    }
}
