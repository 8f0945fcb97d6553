/// A result with the [`Error`] error.
pub type Result<T> = core::result::Result<T, Error>;

/// An error reported by a platform output or time primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The primitive failed with the given (positive) `errno` value.
    Io(i32),
    /// The primitive is not available yet, or not available from the current context.
    Unavailable,
    /// Could not apply the operation due to unknown error.
    Unknown,
}

impl Error {
    /// `EIO` on Linux and NuttX.
    const EIO: i32 = 5;
    /// `EAGAIN` on Linux and NuttX.
    const EAGAIN: i32 = 11;

    /// Returns the positive `errno` value describing this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::Error;
    ///
    /// assert_eq!(Error::Io(9).errno(), 9);
    /// assert_eq!(Error::Unavailable.errno(), 11);
    /// assert_eq!(Error::Unknown.errno(), 5);
    /// ```
    pub const fn errno(&self) -> i32 {
        match self {
            Error::Io(errno) => *errno,
            Error::Unavailable => Self::EAGAIN,
            Error::Unknown => Self::EIO,
        }
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Io(errno) => write!(f, "i/o error (errno {errno})"),
            Error::Unavailable => write!(f, "primitive unavailable"),
            Error::Unknown => write!(f, "unknown error"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::string::ToString;

    use pretty_assertions::assert_eq;

    use super::Error;

    #[test]
    fn display() {
        assert_eq!(Error::Io(32).to_string(), "i/o error (errno 32)");
        assert_eq!(Error::Unavailable.to_string(), "primitive unavailable");
        assert_eq!(Error::Unknown.to_string(), "unknown error");
    }
}
