//! Abstractions for querying the current execution context.

/// `ExecutionContext` tells whether the calling code runs as a normal task or inside an interrupt handler.
pub trait ExecutionContext {
    /// Returns `true` while executing an interrupt handler.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ksyslog_osal_api::context::ExecutionContext;
    /// use ksyslog_osal_std::context::Context;
    ///
    /// assert!(!Context::in_interrupt());
    /// ```
    fn in_interrupt() -> bool;
}
