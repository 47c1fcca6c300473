use crate::error::{CliError, Result as CliErrorResult};

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Initialize the stderr logger. Stdout stays reserved for command output.
pub fn initialize(level: LevelFilter, colored: bool) -> CliErrorResult<()> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let date = humantime::format_rfc3339(SystemTime::now());
            if colored {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    level = colors.color(record.level()),
                ))
            } else {
                out.finish(format_args!("[{date} - {level}] {message}", level = record.level()))
            }
        })
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))
}
