//! Logging channel for hosted targets.

use std::io::Write;

pub use ksyslog_osal_api::log::LogChannel;

use crate::IntoOsalError;

/// Implements the [`LogChannel`] trait by writing to standard output.
///
/// Each write holds the stdout lock, so a single write is never interleaved with another thread's output.
#[derive(Debug)]
pub struct Log;

impl LogChannel for Log {
    fn init() {
        // Standard output needs no setup.
    }

    fn write(bytes: &[u8]) -> crate::Result<usize> {
        std::io::stdout()
            .lock()
            .write_all(bytes)
            .map(|()| bytes.len())
            .map_err(IntoOsalError::into_osal_error)
    }
}
