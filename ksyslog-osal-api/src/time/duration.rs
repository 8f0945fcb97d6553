//! This module implements a [`Duration`] with microsecond precision.

use core::fmt;
use core::num::TryFromIntError;

/// Duration represents a span of time.
///
/// Negative durations are not supported. [`Duration`] is not meant to be used
/// for math operations, only to carry the time since boot from a clock to its reader.
#[derive(Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    micros: u64,
}

impl Duration {
    /// The largest value that can be represented by the `Duration` type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::MAX, Duration::from_micros(u64::MAX));
    /// ```
    pub const MAX: Duration = Duration { micros: u64::MAX };

    /// A duration of zero time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::ZERO, Duration::from_micros(0));
    /// ```
    pub const ZERO: Duration = Duration { micros: 0 };

    /// Factor of microseconds per second.
    const MICROS_PER_SECOND: u64 = 1_000_000;
    /// Factor of microseconds per millisecond.
    const MICROS_PER_MILLI: u64 = 1_000;

    /// Creates a duration from the specified number of seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_secs(1), Duration::from_millis(1000));
    /// ```
    pub const fn from_secs(secs: u64) -> Duration {
        Duration {
            micros: secs * Self::MICROS_PER_SECOND,
        }
    }

    /// Creates a duration from the specified number of milliseconds.
    pub const fn from_millis(millis: u64) -> Duration {
        Duration {
            micros: millis * Self::MICROS_PER_MILLI,
        }
    }

    /// Creates a duration from the specified number of microseconds.
    pub const fn from_micros(micros: u64) -> Duration {
        Duration { micros }
    }

    /// Returns the total amount of whole seconds, rounded down.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_millis(1980).as_secs(), 1);
    /// ```
    pub const fn as_secs(&self) -> u64 {
        self.micros / Self::MICROS_PER_SECOND
    }

    /// Returns the fractional part of this duration in whole microseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_millis(1980).subsec_micros(), 980_000);
    /// ```
    pub const fn subsec_micros(&self) -> u32 {
        // Always below 1_000_000, fits in u32.
        (self.micros % Self::MICROS_PER_SECOND) as u32
    }

    /// Returns the total amount of microseconds.
    pub const fn as_micros(&self) -> u64 {
        self.micros
    }
}

impl fmt::Debug for Duration {
    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::time::Duration;
    ///
    /// let duration = Duration::from_millis(1980);
    /// assert_eq!(format!("{duration:?}"), "1s.980000us");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}s.{}us", self.as_secs(), self.subsec_micros())
    }
}

impl TryFrom<core::time::Duration> for Duration {
    type Error = TryFromIntError;

    /// # Examples
    ///
    /// ```
    /// use ksyslog_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::try_from(core::time::Duration::from_secs(1)), Ok(Duration::from_secs(1)));
    /// ```
    fn try_from(value: core::time::Duration) -> Result<Self, Self::Error> {
        value.as_micros().try_into().map(Self::from_micros)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Duration;

    #[test]
    fn split_into_seconds_and_micros() {
        let duration = Duration::from_micros(12_345_678);

        assert_eq!(duration.as_secs(), 12);
        assert_eq!(duration.subsec_micros(), 345_678);
        assert_eq!(duration.as_micros(), 12_345_678);
    }

    #[test]
    fn ordering_follows_micros() {
        assert!(Duration::from_millis(1) > Duration::from_micros(999));
        assert!(Duration::from_secs(1) < Duration::MAX);
    }

    #[test]
    fn std_duration_beyond_range_is_rejected() {
        assert!(Duration::try_from(core::time::Duration::MAX).is_err());
        assert_eq!(
            Duration::try_from(core::time::Duration::from_nanos(1_999)),
            Ok(Duration::from_micros(1))
        );
    }
}
