use colored::Colorize;
use fern::Dispatch;
use log::{LevelFilter, SetLoggerError};

/// Sends log records to stdout.
///
/// Only one logger can be installed per process, later calls return the error
/// from `log` and leave the first logger in place.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}] {}",
                level_str,
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}
