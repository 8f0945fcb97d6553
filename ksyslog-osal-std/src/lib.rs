//! Std operating system abstraction layer for the kernel syslog dispatcher.
//!
//! This provides the platform primitives the dispatcher consumes, using the std library, so the dispatch core can run
//! and be tested on a hosted target.

#![deny(unsafe_code)]

pub mod console;
pub mod context;
pub mod log;
pub mod time;

pub use ksyslog_osal_api::{Error, Result};

/// Helper trait to convert errors into osal errors.
///
/// We cannot implement `From` as that would be part of the public API.
pub(crate) trait IntoOsalError<E>
where
    E: core::error::Error,
{
    /// Converts the error into an OSAL error.
    fn into_osal_error(self) -> E;
}

impl IntoOsalError<Error> for std::io::Error {
    fn into_osal_error(self) -> Error {
        match self.raw_os_error() {
            Some(errno) => Error::Io(errno),
            None => Error::Unknown,
        }
    }
}
