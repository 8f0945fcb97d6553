//! Global dispatcher state and initialization.

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::dispatch::{Dispatcher, Outcome};
use crate::error::{LogError, SetGlobalError};
use crate::mask::{Levels, SeverityMask};
use crate::priority::Priority;

/// The process-wide severity mask, all levels enabled until changed with [`set_mask`].
///
/// Bound by [`Builder::global_mask`](crate::dispatch::Builder::global_mask) and consulted by the global dispatcher
/// before it is installed.
pub static MASK: SeverityMask = SeverityMask::all();

static NO_DISPATCHER: Dispatcher<'static> = Dispatcher::nop(&MASK);

/// Written exactly once, by the caller that moves `STATE` from `EMPTY` to `WRITING`.
/// Only read after `STATE` is observed as `READY`.
static mut INSTALLED: Dispatcher<'static> = Dispatcher::nop(&MASK);

static STATE: AtomicU8 = AtomicU8::new(EMPTY);

/// Nothing installed, [`get_dispatcher`] hands out `NO_DISPATCHER`.
const EMPTY: u8 = 0;
/// An installation claimed the slot and is writing `INSTALLED`.
const WRITING: u8 = 1;
/// `INSTALLED` is written and never changes again.
const READY: u8 = 2;

/// Installs `dispatcher` as the global dispatcher.
///
/// Usually reached through [`Builder::set_global`](crate::dispatch::Builder::set_global); this form takes a
/// dispatcher that was already built. Only the first installation in a process succeeds; a concurrent one fails
/// rather than waits.
///
/// # Examples
///
/// ```rust
/// use ksyslog::sink::NullSink;
/// use ksyslog_osal_std::context::Context;
///
/// let dispatcher = ksyslog::dispatch::build()
///     .global_mask()
///     .sink(&NullSink)
///     .context::<Context>()
///     .finish();
///
/// assert!(ksyslog::set_dispatcher(dispatcher).is_ok());
/// ```
pub fn set_dispatcher(dispatcher: Dispatcher<'static>) -> Result<(), SetGlobalError> {
    STATE
        .compare_exchange(EMPTY, WRITING, Ordering::Acquire, Ordering::Relaxed)
        .map_err(|_| SetGlobalError(()))?;

    // SAFETY: winning the exchange above makes this the only writer, and readers skip `INSTALLED` until `READY` is
    // published below.
    unsafe { INSTALLED = dispatcher }
    STATE.store(READY, Ordering::Release);

    Ok(())
}

/// Returns a reference to the global dispatcher.
///
/// Until one is installed, a dispatcher without a backend is returned: it filters with [`MASK`] and discards the rest.
pub fn get_dispatcher() -> &'static Dispatcher<'static> {
    // Pairs with the `Release` store in `set_dispatcher`, so the write to `INSTALLED` is visible once `READY` is.
    if STATE.load(Ordering::Acquire) == READY {
        // SAFETY: `READY` is final, `INSTALLED` is no longer written.
        unsafe {
            #[expect(clippy::deref_addrof, reason = "false positive")]
            &*&raw const INSTALLED
        }
    } else {
        &NO_DISPATCHER
    }
}

/// Dispatches one message through the global dispatcher.
///
/// This is what [`syslog!`](crate::syslog) expands to.
pub fn vsyslog(
    priority: impl Into<Priority>,
    args: fmt::Arguments<'_>,
) -> Result<Outcome, LogError> {
    get_dispatcher().logv(priority, args)
}

/// Replaces the process-wide [`MASK`] and returns the previous levels.
///
/// Affects every dispatcher built with [`global_mask`](crate::dispatch::Builder::global_mask), starting with the
/// next call.
///
/// # Examples
///
/// ```rust
/// use ksyslog::{Level, Levels};
///
/// let previous = ksyslog::set_mask(Levels::upto(Level::Warning));
/// assert!(!ksyslog::MASK.levels().contains(Levels::only(Level::Info)));
/// ksyslog::set_mask(previous);
/// ```
pub fn set_mask(levels: Levels) -> Levels {
    MASK.set(levels)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::vec;

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::priority::Level;

    #[test]
    #[serial]
    fn set_mask_returns_previous_levels() {
        let original = set_mask(Levels::only(Level::Crit));

        assert_eq!(set_mask(original), Levels::only(Level::Crit));
        assert_eq!(MASK.levels(), original);
    }

    #[test]
    fn uninitialized_dispatcher_discards() {
        // Unit tests never install a global dispatcher.
        assert_eq!(STATE.load(Ordering::Acquire), EMPTY);
        assert!(core::ptr::eq(get_dispatcher(), &NO_DISPATCHER));
    }
}
