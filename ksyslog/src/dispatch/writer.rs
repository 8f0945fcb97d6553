//! Adapter between the `core::fmt` rendering engine and a [`Sink`].

use core::fmt;

use ksyslog_osal_api::Error;

use crate::error::LogError;
use crate::sink::Sink;
use crate::timestamp::Timestamp;

/// Hands all of `bytes` to `sink`, repeating after short writes.
fn write_all(sink: &dyn Sink, mut bytes: &[u8]) -> Result<usize, Error> {
    let total = bytes.len();

    while !bytes.is_empty() {
        match sink.write(bytes)? {
            // A sink that accepts nothing would loop forever.
            0 => return Err(Error::Unknown),
            accepted => bytes = &bytes[accepted.min(bytes.len())..],
        }
    }

    Ok(total)
}

/// Streams rendered text into a sink, counting the bytes it accepted.
struct SinkWriter<'s> {
    sink: &'s dyn Sink,
    written: usize,
    error: Option<Error>,
}

impl fmt::Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match write_all(self.sink, s.as_bytes()) {
            Ok(written) => {
                self.written += written;
                Ok(())
            }
            Err(error) => {
                self.error = Some(error);
                Err(fmt::Error)
            }
        }
    }
}

/// Renders `args` into `sink`, returning the number of bytes written.
///
/// Text is handed to the sink piece by piece as the formatter produces it; nothing is buffered here.
pub(crate) fn render(sink: &dyn Sink, args: fmt::Arguments<'_>) -> Result<usize, LogError> {
    let mut writer = SinkWriter {
        sink,
        written: 0,
        error: None,
    };

    match fmt::write(&mut writer, args) {
        Ok(()) => Ok(writer.written),
        Err(fmt::Error) => Err(writer.error.map_or(LogError::Format, LogError::Write)),
    }
}

/// Stack buffer holding one rendered timestamp.
struct PrefixBuf {
    bytes: [u8; Timestamp::MAX_LEN],
    len: usize,
}

impl fmt::Write for PrefixBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        self.bytes
            .get_mut(self.len..end)
            .ok_or(fmt::Error)?
            .copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Writes `timestamp` to `sink` as a single write.
pub(crate) fn prefix(sink: &dyn Sink, timestamp: Timestamp) -> Result<usize, LogError> {
    let mut buf = PrefixBuf {
        bytes: [0; Timestamp::MAX_LEN],
        len: 0,
    };
    fmt::write(&mut buf, format_args!("{timestamp}")).map_err(|fmt::Error| LogError::Format)?;

    write_all(sink, &buf.bytes[..buf.len]).map_err(LogError::Write)
}
