//! Traits for handing bytes to the kernel logging channel.

/// `LogChannel` is the kernel-internal structured logging channel.
///
/// The channel owns its buffering and flow control. It must be callable from any execution context, including
/// interrupt handlers, and is responsible for serializing concurrent writers if that matters to it.
pub trait LogChannel: Send + Sync + 'static {
    /// Initializes global state necessary for this type.
    fn init();

    /// Appends `bytes` to the channel, returning how many bytes were accepted.
    fn write(bytes: &[u8]) -> crate::Result<usize>;
}
