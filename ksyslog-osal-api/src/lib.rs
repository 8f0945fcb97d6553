//! The kernel syslog operating system abstraction layer API.
//!
//! The dispatch core in `ksyslog` never touches hardware or the host directly. Everything it consumes from the
//! platform is described here as a trait with static methods, implemented by unit structs in a platform crate
//! (e.g. `ksyslog-osal-std`):
//!
//! - [`context::ExecutionContext`]: whether the caller runs inside an interrupt handler.
//! - [`time::Clock`]: readiness of the hardware timer and the monotonic time since boot.
//! - [`log::LogChannel`]: the kernel-internal structured logging channel.
//! - [`console::Descriptor`]: writes to a numbered file descriptor.
//! - [`console::LowPutc`]: the bare character output primitive.

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(test)]
extern crate std;

pub mod console;
pub mod context;
mod error;
pub mod log;
pub mod time;

pub use error::{Error, Result};
