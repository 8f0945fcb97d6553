use core::fmt;

/// Why a dispatched message could not be delivered.
///
/// Returned once and never retried; [`LogError::code`] gives the negative integer a C-style caller expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// A `Display` or `Debug` implementation among the arguments returned an error.
    #[error("a formatting trait implementation returned an error")]
    Format,
    /// The sink rejected the bytes.
    #[error("the sink failed to accept the message")]
    Write(#[source] ksyslog_osal_api::Error),
}

impl LogError {
    /// `EINVAL` on Linux and NuttX.
    const EINVAL: i32 = 22;

    /// Returns the negative `errno` describing this error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::LogError;
    /// use ksyslog_osal_api::Error;
    ///
    /// assert_eq!(LogError::Write(Error::Io(9)).code(), -9);
    /// assert_eq!(LogError::Format.code(), -22);
    /// ```
    pub const fn code(&self) -> i32 {
        match self {
            LogError::Format => -Self::EINVAL,
            LogError::Write(error) => -error.errno(),
        }
    }
}

/// The type returned by [`set_global`][crate::dispatch::Builder::set_global] if the global dispatcher has already
/// been set.
#[derive(Debug)]
pub struct SetGlobalError(pub(crate) ());

impl SetGlobalError {
    const MESSAGE: &'static str = "a global dispatcher has already been set";
}

impl fmt::Display for SetGlobalError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(Self::MESSAGE)
    }
}

impl core::error::Error for SetGlobalError {}
