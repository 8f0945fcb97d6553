//! The dispatcher: filters, annotates and routes one log call to the bound sink.
//!
//! Each call walks a short state machine:
//!
//! 1. In interrupt context with a task-only sink and no fallback, the message is [`Outcome::Dropped`].
//! 2. A level disabled in the severity mask is [`Outcome::Suppressed`] before any formatting happens.
//! 3. With no backend configured the message is [`Outcome::Discarded`], again without formatting.
//! 4. Otherwise the optional timestamp prefix and the message are written, [`Outcome::Delivered`].
//!
//! Which sink serves task and interrupt context is decided once, when the dispatcher is built.

mod builder;
mod writer;

use core::fmt;

pub use self::builder::{Builder, build};
use crate::error::LogError;
use crate::mask::SeverityMask;
use crate::priority::Priority;
use crate::sink::{Reach, Sink};
use crate::timestamp::Timestamp;

/// What happened to a message that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message was written; holds the number of message bytes, excluding any timestamp prefix.
    Delivered(usize),
    /// No backend is configured; nothing was formatted.
    Discarded,
    /// The call came from interrupt context and the bound sink cannot be used there.
    Dropped,
    /// The level is disabled in the severity mask.
    Suppressed,
}

impl Outcome {
    /// Returns the number of message bytes written, zero unless delivered.
    pub const fn bytes(self) -> usize {
        match self {
            Outcome::Delivered(bytes) => bytes,
            Outcome::Discarded | Outcome::Dropped | Outcome::Suppressed => 0,
        }
    }
}

/// Collapses a dispatch result into the integer a `syslog(3)` caller expects.
///
/// Bytes written on delivery, `0` when nothing was written, a negative `errno` on failure.
///
/// # Examples
///
/// ```rust
/// use ksyslog::{LogError, Outcome, return_code};
/// use ksyslog_osal_api::Error;
///
/// assert_eq!(return_code(Ok(Outcome::Delivered(7))), 7);
/// assert_eq!(return_code(Ok(Outcome::Dropped)), 0);
/// assert_eq!(return_code(Err(LogError::Write(Error::Io(5)))), -5);
/// ```
pub fn return_code(result: Result<Outcome, LogError>) -> i32 {
    match result {
        Ok(outcome) => i32::try_from(outcome.bytes()).unwrap_or(i32::MAX),
        Err(error) => error.code(),
    }
}

/// Where messages from one execution context go.
#[derive(Debug, Clone, Copy)]
enum Route<'a> {
    /// Render into this sink.
    Sink(&'a dyn Sink),
    /// No backend: accept without rendering.
    Discard,
    /// No sink is safe to use: drop without looking at the mask.
    Drop,
}

impl<'a> Route<'a> {
    /// The route for calls from task context.
    fn task(sink: &'a dyn Sink) -> Self {
        match sink.reach() {
            Reach::Anywhere | Reach::TaskOnly => Route::Sink(sink),
            Reach::Nowhere => Route::Discard,
        }
    }

    /// The route for calls from interrupt context.
    ///
    /// `fallback` is a low-level console, which is usable from interrupt context.
    fn interrupt(sink: &'a dyn Sink, fallback: Option<&'a dyn Sink>) -> Self {
        match (sink.reach(), fallback) {
            (Reach::Anywhere, _) => Route::Sink(sink),
            (Reach::Nowhere, _) => Route::Discard,
            (Reach::TaskOnly, Some(fallback)) => Route::Sink(fallback),
            (Reach::TaskOnly, None) => Route::Drop,
        }
    }
}

fn never_in_interrupt() -> bool {
    false
}

/// Dispatches log calls to one bound sink.
///
/// Created through [`build()`]. The dispatcher performs no locking: it can be called concurrently and from interrupt
/// handlers. The timestamp prefix and the message are two separate sink writes; if other writers must not interleave
/// between them, the sink has to provide that guarantee.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    mask: &'a SeverityMask,
    task: Route<'a>,
    interrupt: Route<'a>,
    in_interrupt_fn: fn() -> bool,
    timestamp_fn: Option<fn() -> Timestamp>,
}

impl<'a> Dispatcher<'a> {
    /// A dispatcher without a backend, filtering with `mask`.
    pub(crate) const fn nop(mask: &'a SeverityMask) -> Self {
        Self {
            mask,
            task: Route::Discard,
            interrupt: Route::Discard,
            in_interrupt_fn: never_in_interrupt,
            timestamp_fn: None,
        }
    }

    fn new(
        mask: &'a SeverityMask,
        sink: &'a dyn Sink,
        fallback: Option<&'a dyn Sink>,
        in_interrupt_fn: fn() -> bool,
        timestamp_fn: Option<fn() -> Timestamp>,
    ) -> Self {
        Self {
            mask,
            task: Route::task(sink),
            interrupt: Route::interrupt(sink, fallback),
            in_interrupt_fn,
            timestamp_fn,
        }
    }

    /// Returns whether a message of `priority` would pass the severity mask right now.
    pub fn enabled(&self, priority: impl Into<Priority>) -> bool {
        self.mask.is_enabled(priority.into())
    }

    /// Formats and dispatches one message from pre-collected arguments.
    ///
    /// Prefer the [`syslog!`](crate::syslog) macro, which builds `args` and calls this.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::sink::{Reach, RecordingSink};
    /// use ksyslog::{Level, Levels, Outcome, SeverityMask};
    /// use ksyslog_osal_std::context::Context;
    ///
    /// let mask = SeverityMask::new(Levels::only(Level::Err));
    /// let (sink, recorded) = RecordingSink::new(Reach::Anywhere);
    /// let dispatcher = ksyslog::dispatch::build()
    ///     .mask(&mask)
    ///     .sink(&sink)
    ///     .context::<Context>()
    ///     .finish();
    ///
    /// assert_eq!(dispatcher.logv(Level::Err, format_args!("boot ok")), Ok(Outcome::Delivered(7)));
    /// assert_eq!(dispatcher.logv(Level::Notice, format_args!("ignored")), Ok(Outcome::Suppressed));
    /// assert_eq!(recorded.contents(), "boot ok");
    /// ```
    pub fn logv(
        &self,
        priority: impl Into<Priority>,
        args: fmt::Arguments<'_>,
    ) -> Result<Outcome, LogError> {
        let route = if (self.in_interrupt_fn)() {
            self.interrupt
        } else {
            self.task
        };

        let sink = match route {
            Route::Drop => return Ok(Outcome::Dropped),
            _ if !self.mask.is_enabled(priority.into()) => return Ok(Outcome::Suppressed),
            Route::Discard => return Ok(Outcome::Discarded),
            Route::Sink(sink) => sink,
        };

        if let Some(timestamp_fn) = self.timestamp_fn {
            // Best effort, the message is written even if the prefix is not.
            let _ = writer::prefix(sink, timestamp_fn());
        }

        writer::render(sink, args).map(Outcome::Delivered)
    }
}
