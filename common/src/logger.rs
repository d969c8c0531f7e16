use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

/// Maps a textual level to a filter. Unknown names fall back to `Warn`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Installs the global logger.
///
/// Records go to stderr, leaving stdout to the program output, and are
/// appended to `log_file_path` when one is given. Fails if the file cannot
/// be opened or a logger is already installed.
pub fn init_logger(log_level: &str, log_file_path: Option<&str>) -> Result<(), fern::InitError> {
    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn  => "WARN".yellow(),
                log::Level::Info  => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level_str,
                record.target(),
                message
            ))
        })
        .level(parse_level(log_level))
        .chain(std::io::stderr());

    if let Some(path) = log_file_path {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir_all(parent)?;
            }
        }
        let log_file = OpenOptions::new().create(true).append(true).open(path)?;
        dispatch = dispatch.chain(log_file);
    }

    dispatch.apply()?;
    Ok(())
}
