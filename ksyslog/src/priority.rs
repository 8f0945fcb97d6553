//! Syslog priorities: a facility and a severity level packed into one integer.
//!
//! The encoding follows POSIX `<syslog.h>`: the low three bits hold the [`Level`], the bits above hold the
//! [`Facility`]. Only the level takes part in filtering.

use core::fmt;
use core::str::FromStr;

/// Mask of the level bits of a priority (`LOG_PRIMASK`).
const LEVEL_MASK: i32 = 0x07;
/// Mask of the facility bits of a priority (`LOG_FACMASK`).
const FACILITY_MASK: i32 = 0x03f8;

/// Severity level of a message, most severe first.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// System is unusable.
    Emerg = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Crit = 2,
    /// Error conditions.
    Err = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal, but significant, condition.
    Notice = 5,
    /// Informational message.
    Info = 6,
    /// Debug-level message.
    Debug = 7,
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Level; 8] = [
        Level::Emerg,
        Level::Alert,
        Level::Crit,
        Level::Err,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// Extracts the level from the low bits of a raw priority (`LOG_PRI`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::Level;
    ///
    /// assert_eq!(Level::from_priority_bits(3), Level::Err);
    /// // LOG_DAEMON | LOG_INFO
    /// assert_eq!(Level::from_priority_bits((3 << 3) | 6), Level::Info);
    /// ```
    pub const fn from_priority_bits(raw: i32) -> Level {
        match raw & LEVEL_MASK {
            0 => Level::Emerg,
            1 => Level::Alert,
            2 => Level::Crit,
            3 => Level::Err,
            4 => Level::Warning,
            5 => Level::Notice,
            6 => Level::Info,
            _ => Level::Debug,
        }
    }

    /// The lowercase name used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Emerg => "emerg",
            Level::Alert => "alert",
            Level::Crit => "crit",
            Level::Err => "err",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown syslog level, expected one of emerg, alert, crit, err, warning, notice, info, debug")]
pub struct ParseLevelError(());

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, also accepting the common long forms (`error`, `warn`, `critical`, ...).
    fn from_str(s: &str) -> Result<Self, ParseLevelError> {
        let level = match s {
            "emerg" | "panic" => Level::Emerg,
            "alert" => Level::Alert,
            "crit" | "critical" => Level::Crit,
            "err" | "error" => Level::Err,
            "warning" | "warn" => Level::Warning,
            "notice" => Level::Notice,
            "info" => Level::Info,
            "debug" => Level::Debug,
            _ => return Err(ParseLevelError(())),
        };
        Ok(level)
    }
}

/// Originating subsystem of a message.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(missing_docs, reason = "names match <syslog.h>")]
pub enum Facility {
    Kern = 0 << 3,
    User = 1 << 3,
    Mail = 2 << 3,
    Daemon = 3 << 3,
    Auth = 4 << 3,
    Syslog = 5 << 3,
    Lpr = 6 << 3,
    News = 7 << 3,
    Uucp = 8 << 3,
    Cron = 9 << 3,
    Authpriv = 10 << 3,
    Ftp = 11 << 3,
    Local0 = 16 << 3,
    Local1 = 17 << 3,
    Local2 = 18 << 3,
    Local3 = 19 << 3,
    Local4 = 20 << 3,
    Local5 = 21 << 3,
    Local6 = 22 << 3,
    Local7 = 23 << 3,
}

impl Facility {
    const fn from_priority_bits(raw: i32) -> Option<Facility> {
        let facility = match (raw & FACILITY_MASK) >> 3 {
            0 => Facility::Kern,
            1 => Facility::User,
            2 => Facility::Mail,
            3 => Facility::Daemon,
            4 => Facility::Auth,
            5 => Facility::Syslog,
            6 => Facility::Lpr,
            7 => Facility::News,
            8 => Facility::Uucp,
            9 => Facility::Cron,
            10 => Facility::Authpriv,
            11 => Facility::Ftp,
            16 => Facility::Local0,
            17 => Facility::Local1,
            18 => Facility::Local2,
            19 => Facility::Local3,
            20 => Facility::Local4,
            21 => Facility::Local5,
            22 => Facility::Local6,
            23 => Facility::Local7,
            _ => return None,
        };
        Some(facility)
    }
}

/// A raw syslog priority, `facility | level`.
///
/// Raw integers are accepted as-is so callers can pass C-style priorities; bits outside the level and facility masks
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Priority(i32);

impl Priority {
    /// Combines a facility and a level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::{Facility, Level, Priority};
    ///
    /// let priority = Priority::new(Facility::Daemon, Level::Warning);
    /// assert_eq!(priority.raw(), 28);
    /// assert_eq!(priority.level(), Level::Warning);
    /// assert_eq!(priority.facility(), Some(Facility::Daemon));
    /// ```
    pub const fn new(facility: Facility, level: Level) -> Self {
        Self(facility as i32 | level as i32)
    }

    /// Wraps a raw priority value.
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw priority value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the severity level.
    pub const fn level(self) -> Level {
        Level::from_priority_bits(self.0)
    }

    /// Returns the facility, if the facility bits name a known one.
    pub const fn facility(self) -> Option<Facility> {
        Facility::from_priority_bits(self.0)
    }
}

impl From<Level> for Priority {
    fn from(level: Level) -> Self {
        Self::new(Facility::Kern, level)
    }
}

impl From<i32> for Priority {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}
