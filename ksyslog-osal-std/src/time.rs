//! Monotonic clock backed by `std::time`.

pub use ksyslog_osal_api::time::{Clock, Duration};

/// Implements the [`Clock`] trait for standard Rust.
///
/// Time is measured from the first call into this clock, which stands in for boot.
#[derive(Debug)]
pub struct Time;

impl Clock for Time {
    fn is_ready() -> bool {
        // A hosted process never runs before its timer.
        true
    }

    fn now() -> crate::Result<Duration> {
        use std::sync::LazyLock;
        static EPOCH: LazyLock<std::time::Instant> = LazyLock::new(std::time::Instant::now);
        // Overflows after roughly 584 thousand years of uptime.
        Duration::try_from(EPOCH.elapsed()).map_err(|_| crate::Error::Unknown)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use ksyslog_osal_api::time::{Clock, Duration};

    use crate::time::Time;

    #[test]
    fn clock_is_monotonic() {
        assert!(Time::is_ready());

        let a = Time::now().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let b = Time::now().unwrap();

        assert!(b >= a);
        assert!(b.as_micros() - a.as_micros() >= Duration::from_millis(5).as_micros());
    }
}
