//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quicktasks/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolution run before the file logger exists (the logger's
//! own settings come from here), so they record [`Notice`]s instead of
//! logging directly. `main` replays them once logging is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuickTasksConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// How long each snackbar message stays on screen.
    pub snackbar_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Matches the "short" duration of a mobile snackbar.
pub const DEFAULT_SNACKBAR_MS: u64 = 4000;
/// Shorter than this and a message can expire before it is ever drawn.
pub const MIN_SNACKBAR_MS: u64 = 250;
pub const DEFAULT_LOG_FILE: &str = "quicktasks.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub snackbar_duration: Duration,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            snackbar_duration: Duration::from_millis(DEFAULT_SNACKBAR_MS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub snackbar_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Deferred Log Records
// ============================================================================

/// A log record held back until the logger is initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

fn note(notices: &mut Vec<Notice>, level: Level, message: String) {
    notices.push(Notice { level, message });
}

/// Emit collected notices through the `log` facade.
pub fn replay(notices: Vec<Notice>) {
    for notice in notices {
        log::log!(notice.level, "{}", notice.message);
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quicktasks/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quicktasks").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise `~/.quicktasks/config.toml`.
///
/// A missing default file is generated (commented out) and defaults are
/// returned. A missing explicit file is only warned about. A malformed file
/// returns `ConfigError::Parse`.
pub fn load_config(
    explicit: Option<&Path>,
    notices: &mut Vec<Notice>,
) -> Result<QuickTasksConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                note(
                    notices,
                    Level::Warn,
                    "Could not determine home directory, using default config".to_string(),
                );
                return Ok(QuickTasksConfig::default());
            }
        },
    };

    if !path.exists() {
        if explicit.is_some() {
            note(
                notices,
                Level::Warn,
                format!("Config file {} not found, using defaults", path.display()),
            );
        } else {
            note(
                notices,
                Level::Info,
                format!("No config file found, generating default at {}", path.display()),
            );
            generate_default_config(&path, notices);
        }
        return Ok(QuickTasksConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    note(notices, Level::Info, format!("Loaded config from {}", path.display()));
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<QuickTasksConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path, notices: &mut Vec<Notice>) {
    let default_content = r#"# QuickTasks Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [ui]
# snackbar_ms = 4000                 # Or set QUICKTASKS_SNACKBAR_MS

# [logging]
# file = "quicktasks.log"            # Or set QUICKTASKS_LOG_FILE
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            note(notices, Level::Warn, format!("Failed to create config directory: {}", e));
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        note(notices, Level::Warn, format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &QuickTasksConfig,
    cli: &CliOverrides,
    notices: &mut Vec<Notice>,
) -> ResolvedConfig {
    let env_snackbar_ms = std::env::var("QUICKTASKS_SNACKBAR_MS")
        .ok()
        .and_then(|v| match v.parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                note(
                    notices,
                    Level::Warn,
                    format!("Ignoring invalid QUICKTASKS_SNACKBAR_MS: {:?}", v),
                );
                None
            }
        });

    // Snackbar duration: CLI → env → config → default
    let snackbar_ms = match cli
        .snackbar_ms
        .or(env_snackbar_ms)
        .or(config.ui.snackbar_ms)
    {
        Some(ms) if ms < MIN_SNACKBAR_MS => {
            note(
                notices,
                Level::Warn,
                format!(
                    "snackbar_ms = {} is below {}, using {}",
                    ms, MIN_SNACKBAR_MS, DEFAULT_SNACKBAR_MS
                ),
            );
            DEFAULT_SNACKBAR_MS
        }
        Some(ms) => ms,
        None => DEFAULT_SNACKBAR_MS,
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("QUICKTASKS_LOG_FILE").ok().map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("QUICKTASKS_LOG_LEVEL").ok())
        .or_else(|| config.logging.level.clone())
        .map(|level| {
            parse_level(&level).unwrap_or_else(|| {
                note(
                    notices,
                    Level::Warn,
                    format!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL),
                );
                DEFAULT_LOG_LEVEL
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        snackbar_duration: Duration::from_millis(snackbar_ms),
        log_file,
        log_level,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
