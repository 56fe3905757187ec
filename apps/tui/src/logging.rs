use career_ladder::config::AppConfig;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// The TUI owns stdout and the alternate screen, so interactive runs only log
/// to the configured file and drop everything otherwise. Headless runs fall
/// back to stderr.
pub fn init(config: &AppConfig, headless: bool) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, ansi) = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if headless => (BoxMakeWriter::new(std::io::stderr), true),
        None => (BoxMakeWriter::new(std::io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .compact()
        .try_init()
        .map_err(|e| eyre!("Failed to install logger: {e}"))
}
