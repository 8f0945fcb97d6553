//! Raw console primitives for hosted targets.

use std::io::Write;

pub use ksyslog_osal_api::console::{Descriptor, LowPutc};

use crate::IntoOsalError;

/// Implements the [`Descriptor`] trait with the `write(2)` system call.
#[derive(Debug)]
pub struct Fd;

impl Descriptor for Fd {
    #[expect(unsafe_code, reason = "`write(2)` on a caller-provided descriptor number")]
    fn write(fd: i32, bytes: &[u8]) -> crate::Result<usize> {
        // SAFETY: `bytes` is valid for reads of `bytes.len()` bytes for the duration of the call, and `write(2)`
        // does not retain the pointer. An invalid `fd` is reported through `errno`.
        let written = unsafe { libc::write(fd, bytes.as_ptr().cast(), bytes.len()) };

        usize::try_from(written).map_err(|_| std::io::Error::last_os_error().into_osal_error())
    }
}

/// Implements the [`LowPutc`] trait by emitting single bytes on standard error.
#[derive(Debug)]
pub struct Console;

impl LowPutc for Console {
    fn putc(byte: u8) {
        // The character primitive cannot fail, ignore any errors writing.
        let _ = std::io::stderr().write_all(&[byte]);
    }
}
