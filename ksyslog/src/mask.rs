//! The severity mask: which levels are currently eligible for output.
//!
//! The mask has a narrow lifecycle. It starts with every level enabled, is replaced only through
//! [`SeverityMask::set`], and is read with exactly one atomic load per dispatched message. A reader racing with
//! [`SeverityMask::set`] observes either the old or the new mask, which at worst emits or drops one message late.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::priority::{Level, Priority};

bitflags::bitflags! {
    /// A set of syslog levels, one bit per level (`1 << level`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Levels: u8 {
        /// [`Level::Emerg`]
        const EMERG = 1 << 0;
        /// [`Level::Alert`]
        const ALERT = 1 << 1;
        /// [`Level::Crit`]
        const CRIT = 1 << 2;
        /// [`Level::Err`]
        const ERR = 1 << 3;
        /// [`Level::Warning`]
        const WARNING = 1 << 4;
        /// [`Level::Notice`]
        const NOTICE = 1 << 5;
        /// [`Level::Info`]
        const INFO = 1 << 6;
        /// [`Level::Debug`]
        const DEBUG = 1 << 7;
    }
}

impl Levels {
    /// The set containing just `level` (`LOG_MASK`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::{Level, Levels};
    ///
    /// assert_eq!(Levels::only(Level::Err), Levels::ERR);
    /// ```
    pub const fn only(level: Level) -> Self {
        Self::from_bits_retain(1 << level as u8)
    }

    /// The set of `level` and every more severe level (`LOG_UPTO`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::{Level, Levels};
    ///
    /// assert_eq!(Levels::upto(Level::Crit), Levels::EMERG | Levels::ALERT | Levels::CRIT);
    /// assert_eq!(Levels::upto(Level::Debug), Levels::all());
    /// ```
    pub const fn upto(level: Level) -> Self {
        Self::from_bits_retain(((1_u16 << (level as u8 + 1)) - 1) as u8)
    }
}

impl From<Level> for Levels {
    fn from(level: Level) -> Self {
        Self::only(level)
    }
}

impl FromIterator<Level> for Levels {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Levels::empty(), |levels, level| levels | Levels::only(level))
    }
}

/// Shared, atomically updated set of enabled levels.
///
/// A dispatcher holds a reference to one mask; the process-wide instance is [`crate::MASK`].
#[derive(Debug)]
pub struct SeverityMask {
    bits: AtomicU8,
}

impl SeverityMask {
    /// Creates a mask enabling `levels`.
    pub const fn new(levels: Levels) -> Self {
        Self {
            bits: AtomicU8::new(levels.bits()),
        }
    }

    /// Creates a mask enabling every level, the start-up default.
    pub const fn all() -> Self {
        Self::new(Levels::all())
    }

    /// Returns the currently enabled levels.
    pub fn levels(&self) -> Levels {
        // The mask guards no other memory, a stale value is acceptable.
        Levels::from_bits_retain(self.bits.load(Ordering::Relaxed))
    }

    /// Returns whether messages of `priority` are eligible for output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::{Level, Levels, SeverityMask};
    ///
    /// let mask = SeverityMask::new(Levels::only(Level::Err));
    /// assert!(mask.is_enabled(Level::Err.into()));
    /// assert!(!mask.is_enabled(Level::Notice.into()));
    /// ```
    pub fn is_enabled(&self, priority: Priority) -> bool {
        self.levels().contains(Levels::only(priority.level()))
    }

    /// Replaces the enabled levels, returning the previous ones.
    pub fn set(&self, levels: Levels) -> Levels {
        Levels::from_bits_retain(self.bits.swap(levels.bits(), Ordering::Relaxed))
    }
}

impl Default for SeverityMask {
    fn default() -> Self {
        Self::all()
    }
}
