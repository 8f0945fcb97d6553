//! Traits for the raw console primitives: numbered descriptors and the bare character emitter.

/// Writes to a numbered file descriptor.
///
/// Descriptor I/O goes through the task-context I/O path and must never be invoked from an interrupt handler.
pub trait Descriptor: Send + Sync + 'static {
    /// Writes `bytes` to descriptor `fd`, returning how many bytes were written.
    fn write(fd: i32, bytes: &[u8]) -> crate::Result<usize>;
}

/// The bare hardware character output primitive (`up_putc` on most ports).
///
/// Emitting a character must be safe from both task and interrupt context. The primitive has no way to report
/// failure.
pub trait LowPutc: Send + Sync + 'static {
    /// Emits one character.
    fn putc(byte: u8);
}
