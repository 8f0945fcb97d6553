//! Output sinks: the single "accept these bytes" capability every backend exposes.
//!
//! A sink is bound to a dispatcher once, when the dispatcher is built. The dispatcher never asks which variant it
//! holds; it only looks at the sink's [`Reach`] at build time to decide how interrupt-context calls are routed.
//!
//! # Built-in Sinks
//!
//! - [`StructuredSink`] - forwards to the kernel logging channel, usable from any context
//! - [`RawDescriptorSink`] - writes to a numbered file descriptor, task context only
//! - [`LowLevelConsoleSink`] - emits one character at a time, usable from any context
//! - [`NullSink`] - discards everything, used when no backend is configured

#[cfg(feature = "std")]
mod test_sink;

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

use ksyslog_osal_api::Error;
use ksyslog_osal_api::console::{Descriptor, LowPutc};
use ksyslog_osal_api::log::LogChannel;

#[cfg(feature = "std")]
#[doc(hidden)]
pub use test_sink::{Recorded, RecordingPutc, RecordingSink};

/// From which execution contexts a sink may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Safe from task and interrupt context.
    Anywhere,
    /// Only safe from task context; writing from an interrupt handler is undefined behavior.
    TaskOnly,
    /// The sink discards its input, so there is nothing to render.
    Nowhere,
}

/// Trait for delivering formatted log bytes to a backend.
///
/// # Examples
///
/// ```rust
/// use ksyslog::sink::{Reach, Sink};
/// use ksyslog_osal_api::Error;
///
/// #[derive(Debug)]
/// struct Uart;
///
/// impl Sink for Uart {
///     fn reach(&self) -> Reach {
///         Reach::Anywhere
///     }
///
///     fn write(&self, bytes: &[u8]) -> Result<usize, Error> {
///         // Push `bytes` into the transmit FIFO here.
///         Ok(bytes.len())
///     }
/// }
/// ```
pub trait Sink: fmt::Debug + Sync {
    /// Where this sink may be written from.
    fn reach(&self) -> Reach;

    /// Writes `bytes`, returning how many were accepted.
    ///
    /// A short count is not an error; the caller writes the remainder again.
    fn write(&self, bytes: &[u8]) -> Result<usize, Error>;
}

/// Forwards to the already-initialized kernel logging channel `C`.
pub struct StructuredSink<C> {
    _channel: PhantomData<fn() -> C>,
}

impl<C> StructuredSink<C> {
    /// Creates the sink.
    pub const fn new() -> Self {
        Self {
            _channel: PhantomData,
        }
    }
}

impl<C> Default for StructuredSink<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for StructuredSink<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StructuredSink")
            .field(&type_name::<C>())
            .finish()
    }
}

impl<C> Sink for StructuredSink<C>
where
    C: LogChannel,
{
    fn reach(&self) -> Reach {
        Reach::Anywhere
    }

    fn write(&self, bytes: &[u8]) -> Result<usize, Error> {
        C::write(bytes)
    }
}

/// Writes to a numbered file descriptor through `D`, conventionally standard output.
pub struct RawDescriptorSink<D> {
    fd: i32,
    _descriptor: PhantomData<fn() -> D>,
}

impl<D> RawDescriptorSink<D> {
    /// The standard output descriptor.
    pub const STDOUT: i32 = 1;

    /// Creates a sink writing to descriptor `fd`.
    pub const fn new(fd: i32) -> Self {
        Self {
            fd,
            _descriptor: PhantomData,
        }
    }

    /// Creates a sink writing to standard output.
    pub const fn stdout() -> Self {
        Self::new(Self::STDOUT)
    }

    /// Returns the descriptor number.
    pub const fn fd(&self) -> i32 {
        self.fd
    }
}

impl<D> fmt::Debug for RawDescriptorSink<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawDescriptorSink")
            .field("fd", &self.fd)
            .field("descriptor", &type_name::<D>())
            .finish()
    }
}

impl<D> Sink for RawDescriptorSink<D>
where
    D: Descriptor,
{
    fn reach(&self) -> Reach {
        Reach::TaskOnly
    }

    fn write(&self, bytes: &[u8]) -> Result<usize, Error> {
        D::write(self.fd, bytes)
    }
}

/// Emits bytes one at a time through the bare character primitive `P`.
///
/// This is the only backend usable as the interrupt fallback of a [`RawDescriptorSink`].
pub struct LowLevelConsoleSink<P> {
    _putc: PhantomData<fn() -> P>,
}

impl<P> LowLevelConsoleSink<P> {
    /// Creates the sink.
    pub const fn new() -> Self {
        Self { _putc: PhantomData }
    }
}

impl<P> Default for LowLevelConsoleSink<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for LowLevelConsoleSink<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LowLevelConsoleSink")
            .field(&type_name::<P>())
            .finish()
    }
}

impl<P> Sink for LowLevelConsoleSink<P>
where
    P: LowPutc,
{
    fn reach(&self) -> Reach {
        Reach::Anywhere
    }

    fn write(&self, bytes: &[u8]) -> Result<usize, Error> {
        bytes.iter().copied().for_each(P::putc);
        Ok(bytes.len())
    }
}

/// Discards everything; bound when no backend is configured.
#[derive(Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn reach(&self) -> Reach {
        Reach::Nowhere
    }

    fn write(&self, bytes: &[u8]) -> Result<usize, Error> {
        Ok(bytes.len())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Mutex;
    use std::vec::Vec;

    use ksyslog_osal_api::Error;
    use ksyslog_osal_api::console::{Descriptor, LowPutc};
    use ksyslog_osal_api::log::LogChannel;
    use pretty_assertions::assert_eq;

    use super::*;

    static PUTC: Mutex<Vec<u8>> = Mutex::new(Vec::new());
    static CHANNEL: Mutex<Vec<u8>> = Mutex::new(Vec::new());
    static DESCRIPTOR: Mutex<Vec<(i32, Vec<u8>)>> = Mutex::new(Vec::new());

    struct Putc;

    impl LowPutc for Putc {
        fn putc(byte: u8) {
            PUTC.lock().unwrap().push(byte);
        }
    }

    struct Channel;

    impl LogChannel for Channel {
        fn init() {}

        fn write(bytes: &[u8]) -> Result<usize, Error> {
            CHANNEL.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }
    }

    struct Fd;

    impl Descriptor for Fd {
        fn write(fd: i32, bytes: &[u8]) -> Result<usize, Error> {
            if fd < 0 {
                return Err(Error::Io(9));
            }
            DESCRIPTOR.lock().unwrap().push((fd, bytes.to_vec()));
            Ok(bytes.len())
        }
    }

    #[test]
    fn reach_per_variant() {
        assert_eq!(StructuredSink::<Channel>::new().reach(), Reach::Anywhere);
        assert_eq!(RawDescriptorSink::<Fd>::stdout().reach(), Reach::TaskOnly);
        assert_eq!(LowLevelConsoleSink::<Putc>::new().reach(), Reach::Anywhere);
        assert_eq!(NullSink.reach(), Reach::Nowhere);
    }

    #[test]
    fn console_emits_each_byte() {
        let sink = LowLevelConsoleSink::<Putc>::new();

        assert_eq!(sink.write(b"irq"), Ok(3));
        assert_eq!(PUTC.lock().unwrap().as_slice(), b"irq");
    }

    #[test]
    fn structured_forwards_to_channel() {
        let sink = StructuredSink::<Channel>::new();

        assert_eq!(sink.write(b"boot ok"), Ok(7));
        assert_eq!(CHANNEL.lock().unwrap().as_slice(), b"boot ok");
    }

    #[test]
    fn descriptor_uses_its_number() {
        assert_eq!(RawDescriptorSink::<Fd>::new(2).write(b"x"), Ok(1));
        assert_eq!(RawDescriptorSink::<Fd>::new(-1).write(b"x"), Err(Error::Io(9)));
        assert_eq!(DESCRIPTOR.lock().unwrap().as_slice(), &[(2, b"x".to_vec())]);
    }

    #[test]
    fn null_accepts_everything() {
        assert_eq!(NullSink.write(b"gone"), Ok(4));
    }

    #[test]
    fn debug_names_the_primitive() {
        let sink = RawDescriptorSink::<Fd>::stdout();
        let debug = std::format!("{sink:?}");

        assert!(debug.starts_with("RawDescriptorSink { fd: 1, descriptor: "));
        assert!(debug.ends_with("::Fd\" }"));
    }
}
