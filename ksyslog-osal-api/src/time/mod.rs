//! Abstractions for reading the monotonic system clock.
//!
//! The main purpose of this module is to provide the definition of [`Clock`], the trait that has to be implemented to
//! read time from the underlying operating system. In order to keep the time abstractions decoupled from the running
//! environment, this module provides its own [`Duration`] type with microsecond precision.
//!
//! # Example
//!
//! Code reading time should rely on the [`Clock`] trait and never use specific implementations. The concrete
//! implementation for the targeted environment is chosen when the dispatcher is built.
//!
//! ```rust
//! use ksyslog_osal_api::time::{Clock, Duration};
//! use ksyslog_osal_std::time::Time;
//!
//! fn uptime<C: Clock>() -> Duration {
//!     if !C::is_ready() {
//!         return Duration::ZERO;
//!     }
//!     C::now().unwrap_or(Duration::ZERO)
//! }
//!
//! let first = uptime::<Time>();
//! let second = uptime::<Time>();
//! assert!(second >= first);
//! ```

mod duration;

pub use self::duration::Duration;

/// `Clock` is used to read monotonic time in a platform-agnostic manner.
pub trait Clock {
    /// Returns `true` once the hardware timer has been initialized and [`Clock::now`] can be trusted.
    ///
    /// Debug output may be generated very early in the start-up sequence, before the timer is running.
    fn is_ready() -> bool;

    /// Retrieves the time elapsed since boot.
    ///
    /// ## Errors
    ///
    /// Implementations return an error when the clock cannot be read.
    fn now() -> crate::Result<Duration>;
}
