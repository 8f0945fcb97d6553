//! Execution context for hosted targets.
//!
//! A hosted process has no interrupt handlers. To exercise interrupt-only paths, [`Context::interrupt`] runs a
//! closure as if it were an interrupt handler on the current thread.

use std::cell::Cell;

pub use ksyslog_osal_api::context::ExecutionContext;

/// Implements the [`ExecutionContext`] trait for standard Rust.
#[derive(Debug)]
pub struct Context;

thread_local! {
    /// Nesting depth of simulated interrupt handlers on this thread.
    static INTERRUPT_DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// Restores the previous depth, including when the handler unwinds.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Self {
        INTERRUPT_DEPTH.with(|depth| depth.set(depth.get() + 1));
        DepthGuard
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        INTERRUPT_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

impl Context {
    /// Runs `handler` in a simulated interrupt context on the current thread.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ksyslog_osal_std::context::{Context, ExecutionContext};
    ///
    /// assert!(!Context::in_interrupt());
    /// assert!(Context::interrupt(Context::in_interrupt));
    /// assert!(!Context::in_interrupt());
    /// ```
    pub fn interrupt<R>(handler: impl FnOnce() -> R) -> R {
        let _guard = DepthGuard::enter();
        handler()
    }
}

impl ExecutionContext for Context {
    fn in_interrupt() -> bool {
        INTERRUPT_DEPTH.with(|depth| depth.get() > 0)
    }
}
