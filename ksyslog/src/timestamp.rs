//! Best-effort monotonic timestamps for the message prefix.
//!
//! Debug output is often generated very early in the start-up sequence, before the hardware timer runs. Reading the
//! time therefore never fails: an unready or failing clock yields [`Timestamp::ZERO`].

use core::fmt;

use ksyslog_osal_api::time::{Clock, Duration};

/// Time since boot as whole seconds and microseconds.
///
/// Displays as the fixed-width prefix `[%6d.%06d]`.
///
/// # Examples
///
/// ```rust
/// use ksyslog::Timestamp;
///
/// assert_eq!(Timestamp::ZERO.to_string(), "[     0.000000]");
/// assert_eq!(Timestamp::new(12, 3_456).to_string(), "[    12.003456]");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    secs: u64,
    micros: u32,
}

impl Timestamp {
    /// The timestamp used while no clock is available.
    pub const ZERO: Timestamp = Timestamp { secs: 0, micros: 0 };

    /// Length of the longest rendering, `[18446744073709551615.999999]`.
    pub const MAX_LEN: usize = 29;

    const MICROS_PER_SECOND: u32 = 1_000_000;

    /// Creates a timestamp, carrying whole seconds out of `micros`.
    ///
    /// Saturates at `u64::MAX` seconds and 999999 microseconds.
    pub const fn new(secs: u64, micros: u32) -> Self {
        let carry = (micros / Self::MICROS_PER_SECOND) as u64;
        match secs.checked_add(carry) {
            Some(secs) => Self {
                secs,
                micros: micros % Self::MICROS_PER_SECOND,
            },
            None => Self {
                secs: u64::MAX,
                micros: Self::MICROS_PER_SECOND - 1,
            },
        }
    }

    /// Reads the clock `C`, substituting [`Timestamp::ZERO`] when it is not ready or the read fails.
    pub fn capture<C>() -> Self
    where
        C: Clock,
    {
        if !C::is_ready() {
            return Self::ZERO;
        }
        C::now().map(Self::from).unwrap_or(Self::ZERO)
    }

    /// Whole seconds.
    pub const fn secs(&self) -> u64 {
        self.secs
    }

    /// Microseconds within the second.
    pub const fn micros(&self) -> u32 {
        self.micros
    }
}

impl From<Duration> for Timestamp {
    fn from(since_boot: Duration) -> Self {
        Self::new(since_boot.as_secs(), since_boot.subsec_micros())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:6}.{:06}]", self.secs, self.micros)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::string::ToString;

    use ksyslog_osal_api::Error;
    use ksyslog_osal_api::time::{Clock, Duration};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::Timestamp;

    struct Unready;

    impl Clock for Unready {
        fn is_ready() -> bool {
            false
        }

        fn now() -> Result<Duration, Error> {
            Ok(Duration::from_secs(99))
        }
    }

    struct Broken;

    impl Clock for Broken {
        fn is_ready() -> bool {
            true
        }

        fn now() -> Result<Duration, Error> {
            Err(Error::Unavailable)
        }
    }

    struct Fixed;

    impl Clock for Fixed {
        fn is_ready() -> bool {
            true
        }

        fn now() -> Result<Duration, Error> {
            Ok(Duration::from_micros(4_000_017))
        }
    }

    #[test]
    fn unready_clock_reads_zero() {
        assert_eq!(Timestamp::capture::<Unready>(), Timestamp::ZERO);
    }

    #[test]
    fn failing_clock_reads_zero() {
        assert_eq!(Timestamp::capture::<Broken>(), Timestamp::ZERO);
    }

    #[test]
    fn ready_clock_splits_duration() {
        assert_eq!(Timestamp::capture::<Fixed>(), Timestamp::new(4, 17));
    }

    #[test_case(Timestamp::ZERO, "[     0.000000]")]
    #[test_case(Timestamp::new(4, 17), "[     4.000017]")]
    #[test_case(Timestamp::new(123_456, 999_999), "[123456.999999]")]
    #[test_case(Timestamp::new(1_234_567, 1), "[1234567.000001]" ; "wider than six digits")]
    fn prefix_format(timestamp: Timestamp, expected: &str) {
        assert_eq!(timestamp.to_string(), expected);
    }

    #[test_case(1, 1_000_000, (2, 0))]
    #[test_case(0, 3_500_000, (3, 500_000))]
    #[test_case(u64::MAX, 999_999, (u64::MAX, 999_999) ; "largest exact")]
    #[test_case(u64::MAX, u32::MAX, (u64::MAX, 999_999) ; "saturates")]
    #[test_case(u64::MAX - 1, 2_000_000, (u64::MAX, 999_999) ; "carry saturates")]
    fn micros_carry_into_seconds(secs: u64, micros: u32, expected: (u64, u32)) {
        let timestamp = Timestamp::new(secs, micros);

        assert_eq!((timestamp.secs(), timestamp.micros()), expected);
        assert!(timestamp.to_string().len() <= Timestamp::MAX_LEN);
    }
}
