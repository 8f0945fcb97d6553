//! Forwarding of [`log`] facade records through the global dispatcher.
//!
//! Records are formatted as `target: message` followed by a newline. The `log` levels map onto syslog levels as
//! follows:
//!
//! | `log`   | syslog            |
//! |---------|-------------------|
//! | `Error` | [`Level::Err`]     |
//! | `Warn`  | [`Level::Warning`] |
//! | `Info`  | [`Level::Info`]    |
//! | `Debug` | [`Level::Debug`]   |
//! | `Trace` | [`Level::Debug`]   |

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::global::get_dispatcher;
use crate::priority::Level;

/// A [`Log`] implementation that hands every record to the global dispatcher.
#[derive(Debug, Default)]
pub struct SyslogLogger;

static LOGGER: SyslogLogger = SyslogLogger;

/// Maps a `log` level onto the syslog level it is dispatched at.
pub const fn level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Err,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl Log for SyslogLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        get_dispatcher().enabled(level(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        // The facade has no way to report failures.
        let _ = get_dispatcher().logv(
            level(record.level()),
            format_args!("{}: {}\n", record.target(), record.args()),
        );
    }

    fn flush(&self) {}
}

/// Installs [`SyslogLogger`] as the `log` facade's logger and sets its maximum level.
///
/// # Examples
///
/// ```rust
/// ksyslog::bridge::init(log::LevelFilter::Info).unwrap();
///
/// log::warn!("dropping frame {}", 12);
/// ```
pub fn init(max: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(max);
    Ok(())
}
