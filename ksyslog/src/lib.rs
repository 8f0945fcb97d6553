//! # `ksyslog`
//!
//! The message-logging dispatch core of an embedded kernel: it takes a severity-tagged, printf-style log request and
//! delivers it to exactly one output backend.
//!
//! The core reconciles three constraints that application logging does not face:
//!
//! - a call may happen before the hardware timer is initialized,
//! - a call may happen inside an interrupt handler, where task-context I/O is undefined behavior,
//! - the backend is a system-wide configuration decision, bound once rather than chosen per call.
//!
//! ## Feature Flags
//!
//! - `log` - Forward records of the [`log`](https://docs.rs/log) facade through the global dispatcher
//! - `std` - Enable the in-memory recording sink used by tests
//!
//! ## Basic Usage
//!
//! Bind the backend once, at start-up:
//!
//! ```rust
//! use ksyslog::sink::StructuredSink;
//! use ksyslog_osal_std::{context::Context, log::Log, time::Time};
//!
//! static SINK: StructuredSink<Log> = StructuredSink::new();
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! ksyslog::dispatch::build()
//!     .global_mask()
//!     .sink(&SINK)
//!     .context::<Context>()
//!     .timestamps::<Time>()
//!     .set_global()?;
//! # Ok(())
//! # }
//! ```
//!
//! Then log through the macros:
//!
//! ```rust
//! use ksyslog::{Level, Levels, syslog};
//!
//! syslog!(Level::Notice, "boot ok\n");
//! ksyslog::err!("mount failed: {}\n", -19);
//!
//! // Only errors and above from now on.
//! ksyslog::set_mask(Levels::upto(Level::Err));
//! ```
//!
//! ## Interrupt Context
//!
//! A raw descriptor backend can only be written from task context. When the call comes from an interrupt handler the
//! record goes to the configured low-level console fallback, or is dropped silently. Dropping is reported as
//! [`Outcome::Dropped`] rather than an error: a logging call must never fail its caller.

#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "log")]
pub mod bridge;
pub mod dispatch;
mod error;
mod global;
mod macros;
pub mod mask;
pub mod priority;
pub mod sink;
pub mod timestamp;

pub use dispatch::{Dispatcher, Outcome, return_code};
pub use error::{LogError, SetGlobalError};
pub use global::{MASK, get_dispatcher, set_dispatcher, set_mask, vsyslog};
pub use mask::{Levels, SeverityMask};
pub use priority::{Facility, Level, Priority};
pub use timestamp::Timestamp;
