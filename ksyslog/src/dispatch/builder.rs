use ksyslog_osal_api::console::LowPutc;
use ksyslog_osal_api::context::ExecutionContext;
use ksyslog_osal_api::time::Clock;

use super::Dispatcher;
use crate::error::SetGlobalError;
use crate::mask::SeverityMask;
use crate::sink::{LowLevelConsoleSink, NullSink, Sink};
use crate::timestamp::Timestamp;

/// Type-state markers for builder
mod state {
    use crate::mask::SeverityMask;
    use crate::sink::Sink;

    #[derive(Debug)]
    pub struct NoMask;
    #[derive(Debug)]
    pub struct WithMask<'a>(pub(super) &'a SeverityMask);
    #[derive(Debug)]
    pub struct NoSink;
    #[derive(Debug)]
    pub struct WithSink<'a>(pub(super) &'a dyn Sink);
    #[derive(Debug)]
    pub struct NoContext;
    #[derive(Debug)]
    pub struct WithContext(pub(super) fn() -> bool);
}

/// Builder for binding a [`Dispatcher`] to its mask, sink and platform.
///
/// Uses the type-state pattern to ensure the mask, the sink and the execution context are configured at compile time.
/// Created via [`build()`] and finalized with [`finish()`](Builder::finish) or [`set_global()`](Builder::set_global).
#[derive(Debug)]
#[must_use]
pub struct Builder<'a, MASK, SINK, CONTEXT> {
    mask: MASK,
    sink: SINK,
    context: CONTEXT,
    fallback: Option<&'a dyn Sink>,
    timestamp_fn: Option<fn() -> Timestamp>,
}

/// Creates a new dispatcher builder.
///
/// # Example
///
/// ```rust,no_run
/// use ksyslog::sink::{LowLevelConsoleSink, RawDescriptorSink};
/// use ksyslog_osal_std::console::{Console, Fd};
/// use ksyslog_osal_std::context::Context;
/// use ksyslog_osal_std::time::Time;
///
/// static STDOUT: RawDescriptorSink<Fd> = RawDescriptorSink::stdout();
/// static CONSOLE: LowLevelConsoleSink<Console> = LowLevelConsoleSink::new();
///
/// ksyslog::dispatch::build()
///     .global_mask()
///     .sink(&STDOUT)
///     .fallback(&CONSOLE)
///     .context::<Context>()
///     .timestamps::<Time>()
///     .set_global()
///     .unwrap();
/// ```
pub fn build<'a>() -> Builder<'a, state::NoMask, state::NoSink, state::NoContext> {
    Builder {
        mask: state::NoMask,
        sink: state::NoSink,
        context: state::NoContext,
        fallback: None,
        timestamp_fn: None,
    }
}

impl<'a, MASK, SINK, CONTEXT> Builder<'a, MASK, SINK, CONTEXT> {
    /// Sets the low-level console used instead of a task-only sink for calls from interrupt context.
    ///
    /// Only consulted when the main sink is task-only. Without a fallback such calls are dropped.
    pub fn fallback<P>(self, fallback: &'a LowLevelConsoleSink<P>) -> Self
    where
        P: LowPutc,
    {
        Self {
            fallback: Some(fallback),
            ..self
        }
    }

    /// Prefixes every message with the time since boot read from `C`.
    pub fn timestamps<C>(self) -> Self
    where
        C: Clock,
    {
        Self {
            timestamp_fn: Some(Timestamp::capture::<C>),
            ..self
        }
    }
}

impl<'a, SINK, CONTEXT> Builder<'a, state::NoMask, SINK, CONTEXT> {
    /// Sets the severity mask consulted on every call.
    pub fn mask(self, mask: &'a SeverityMask) -> Builder<'a, state::WithMask<'a>, SINK, CONTEXT> {
        Builder {
            mask: state::WithMask(mask),
            sink: self.sink,
            context: self.context,
            fallback: self.fallback,
            timestamp_fn: self.timestamp_fn,
        }
    }

    /// Uses the process-wide [`MASK`](crate::MASK), the one [`set_mask`](crate::set_mask) updates.
    ///
    /// Equivalent to `.mask(&ksyslog::MASK)`.
    pub fn global_mask(self) -> Builder<'a, state::WithMask<'a>, SINK, CONTEXT> {
        self.mask(&crate::MASK)
    }
}

impl<'a, MASK, CONTEXT> Builder<'a, MASK, state::NoSink, CONTEXT> {
    /// Binds the sink every message is written to.
    pub fn sink(self, sink: &'a dyn Sink) -> Builder<'a, MASK, state::WithSink<'a>, CONTEXT> {
        Builder {
            mask: self.mask,
            sink: state::WithSink(sink),
            context: self.context,
            fallback: self.fallback,
            timestamp_fn: self.timestamp_fn,
        }
    }

    /// Binds the [`NullSink`], for systems without any output backend.
    ///
    /// Equivalent to `.sink(&NullSink)`.
    pub fn no_sink(self) -> Builder<'a, MASK, state::WithSink<'a>, CONTEXT> {
        self.sink(&NullSink)
    }
}

impl<'a, MASK, SINK> Builder<'a, MASK, SINK, state::NoContext> {
    /// Configures how the dispatcher detects interrupt context.
    pub fn context<X>(self) -> Builder<'a, MASK, SINK, state::WithContext>
    where
        X: ExecutionContext,
    {
        Builder {
            mask: self.mask,
            sink: self.sink,
            context: state::WithContext(X::in_interrupt),
            fallback: self.fallback,
            timestamp_fn: self.timestamp_fn,
        }
    }
}

impl<'a> Builder<'a, state::WithMask<'a>, state::WithSink<'a>, state::WithContext> {
    /// Builds this configuration into a [`Dispatcher`].
    pub fn finish(self) -> Dispatcher<'a> {
        Dispatcher::new(
            self.mask.0,
            self.sink.0,
            self.fallback,
            self.context.0,
            self.timestamp_fn,
        )
    }
}

impl Builder<'static, state::WithMask<'static>, state::WithSink<'static>, state::WithContext> {
    /// Installs this configuration as the global dispatcher used by [`syslog!`](crate::syslog).
    ///
    /// This can only be called once per process.
    pub fn set_global(self) -> Result<(), SetGlobalError> {
        crate::global::set_dispatcher(self.finish())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use ksyslog_osal_api::Error;
    use ksyslog_osal_api::context::ExecutionContext;
    use ksyslog_osal_api::time::{Clock, Duration};
    use pretty_assertions::assert_eq;

    use super::build;
    use crate::dispatch::Outcome;
    use crate::mask::SeverityMask;
    use crate::priority::Level;
    use crate::sink::{LowLevelConsoleSink, Reach, RecordingPutc, RecordingSink};

    struct Task;

    impl ExecutionContext for Task {
        fn in_interrupt() -> bool {
            false
        }
    }

    struct Uptime;

    impl Clock for Uptime {
        fn is_ready() -> bool {
            true
        }

        fn now() -> Result<Duration, Error> {
            Ok(Duration::from_secs(1))
        }
    }

    struct Irq;

    impl ExecutionContext for Irq {
        fn in_interrupt() -> bool {
            true
        }
    }

    #[test]
    fn order_of_calls_does_not_matter() {
        let mask = SeverityMask::all();
        let (sink, recorded) = RecordingSink::new(Reach::Anywhere);

        let dispatcher = build()
            .timestamps::<Uptime>()
            .context::<Task>()
            .sink(&sink)
            .mask(&mask)
            .finish();

        assert_eq!(
            dispatcher.logv(Level::Info, format_args!("up")),
            Ok(Outcome::Delivered(2))
        );
        assert_eq!(recorded.count(), 2);
    }

    #[test]
    fn fallback_given_before_the_sink_is_kept() {
        let mask = SeverityMask::all();
        let (sink, primary) = RecordingSink::new(Reach::TaskOnly);
        let console = LowLevelConsoleSink::<RecordingPutc>::new();
        RecordingPutc::take();

        let dispatcher = build()
            .fallback(&console)
            .mask(&mask)
            .sink(&sink)
            .context::<Irq>()
            .finish();

        assert_eq!(
            dispatcher.logv(Level::Err, format_args!("irq")),
            Ok(Outcome::Delivered(3))
        );
        assert_eq!(RecordingPutc::take(), "irq");
        assert_eq!(primary.count(), 0);
    }
}
