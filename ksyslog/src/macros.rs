//! Macros for emitting log messages.
//!
//! - `syslog!`: logs at an explicit priority, the equivalent of `syslog(3)`
//! - `emerg!`, `alert!`, `crit!`, `err!`, `warning!`, `notice!`, `info!`, `debug!`: log at a fixed level
//!
//! Every macro goes through the global dispatcher unless it is given one with a leading `dispatcher: <expr>,`.
//! Formatting uses the usual [`format_args!`] syntax and the macros evaluate to the dispatch result, which callers
//! that only care about the C-style integer can pass to [`return_code`](crate::return_code).

/// Logs a message at the given priority.
///
/// The priority is anything convertible into a [`Priority`](crate::Priority): a [`Level`](crate::Level), a
/// [`Priority`](crate::Priority) carrying a facility, or a raw `i32`.
///
/// # Examples
///
/// Through the global dispatcher:
/// ```rust
/// use ksyslog::{Facility, Level, Priority, syslog};
///
/// syslog!(Level::Info, "link up, {} Mbit/s\n", 100);
/// syslog!(Priority::new(Facility::Daemon, Level::Err), "restart\n");
/// syslog!(3, "raw priority\n");
/// ```
///
/// Through a specific dispatcher:
/// ```rust
/// use ksyslog::sink::{Reach, RecordingSink};
/// use ksyslog::{Level, Outcome, SeverityMask, syslog};
/// use ksyslog_osal_std::context::Context;
///
/// let mask = SeverityMask::all();
/// let (sink, recorded) = RecordingSink::new(Reach::Anywhere);
/// let dispatcher = ksyslog::dispatch::build()
///     .mask(&mask)
///     .sink(&sink)
///     .context::<Context>()
///     .finish();
///
/// let result = syslog!(dispatcher: dispatcher, Level::Notice, "{} ok", "boot");
///
/// assert_eq!(result, Ok(Outcome::Delivered(7)));
/// assert_eq!(recorded.contents(), "boot ok");
/// ```
#[macro_export]
macro_rules! syslog {
    (dispatcher: $dispatcher:expr, $priority:expr, $($arg:tt)+) => {
        ($dispatcher).logv($priority, ::core::format_args!($($arg)+))
    };
    ($priority:expr, $($arg:tt)+) => {
        $crate::vsyslog($priority, ::core::format_args!($($arg)+))
    };
}

/// Logs an emergency message: the system is unusable.
///
/// Shorthand for [`syslog!`] with [`Level::Emerg`](crate::Level::Emerg).
///
/// # Examples
///
/// ```rust
/// use ksyslog::emerg;
///
/// emerg!("kernel panic: {}\n", "out of memory");
/// ```
#[macro_export]
macro_rules! emerg {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Emerg, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Emerg, $($arg)+)
    };
}

/// Logs an alert: action must be taken immediately.
///
/// Shorthand for [`syslog!`] with [`Level::Alert`](crate::Level::Alert).
///
/// # Examples
///
/// ```rust
/// use ksyslog::alert;
///
/// alert!("watchdog about to expire\n");
/// ```
#[macro_export]
macro_rules! alert {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Alert, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Alert, $($arg)+)
    };
}

/// Logs a critical condition.
///
/// Shorthand for [`syslog!`] with [`Level::Crit`](crate::Level::Crit).
///
/// # Examples
///
/// ```rust
/// use ksyslog::crit;
///
/// crit!("thermal limit reached: {}C\n", 105);
/// ```
#[macro_export]
macro_rules! crit {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Crit, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Crit, $($arg)+)
    };
}

/// Logs an error condition.
///
/// Shorthand for [`syslog!`] with [`Level::Err`](crate::Level::Err).
///
/// # Examples
///
/// ```rust
/// use ksyslog::err;
///
/// err!("mount failed: {}\n", -19);
/// ```
#[macro_export]
macro_rules! err {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Err, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Err, $($arg)+)
    };
}

/// Logs a warning condition.
///
/// Shorthand for [`syslog!`] with [`Level::Warning`](crate::Level::Warning).
///
/// # Examples
///
/// ```rust
/// use ksyslog::warning;
///
/// warning!("falling back to polling\n");
/// ```
#[macro_export]
macro_rules! warning {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Warning, $($arg)+)
    };
}

/// Logs a normal but significant condition.
///
/// Shorthand for [`syslog!`] with [`Level::Notice`](crate::Level::Notice).
///
/// # Examples
///
/// ```rust
/// use ksyslog::notice;
///
/// notice!("boot ok\n");
/// ```
#[macro_export]
macro_rules! notice {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Notice, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Notice, $($arg)+)
    };
}

/// Logs an informational message.
///
/// Shorthand for [`syslog!`] with [`Level::Info`](crate::Level::Info).
///
/// # Examples
///
/// ```rust
/// use ksyslog::info;
///
/// info!("mounted {} at {}\n", "/dev/mmcblk0p1", "/data");
/// ```
#[macro_export]
macro_rules! info {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Info, $($arg)+)
    };
}

/// Logs a debug-level message.
///
/// Shorthand for [`syslog!`] with [`Level::Debug`](crate::Level::Debug).
///
/// # Examples
///
/// ```rust
/// use ksyslog::debug;
///
/// debug!("irq {} fired\n", 7);
/// ```
#[macro_export]
macro_rules! debug {
    (dispatcher: $dispatcher:expr, $($arg:tt)+) => {
        $crate::syslog!(dispatcher: $dispatcher, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::syslog!($crate::Level::Debug, $($arg)+)
    };
}
