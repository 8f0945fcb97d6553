use std::cell::RefCell;
use std::string::String;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use ksyslog_osal_api::Error;
use ksyslog_osal_api::console::LowPutc;

use super::{Reach, Sink};

/// A sink for testing that stores every write in memory.
///
/// Each call to [`Sink::write`] is recorded separately, so tests can tell the timestamp prefix apart from the
/// message body.
#[derive(Debug)]
pub struct RecordingSink {
    reach: Reach,
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

/// Handle to the writes recorded by a [`RecordingSink`].
#[derive(Debug, Clone)]
pub struct Recorded {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingSink {
    /// Creates a new recording sink and returns both the sink and a handle to its writes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ksyslog::sink::{Reach, RecordingSink, Sink};
    ///
    /// let (sink, recorded) = RecordingSink::new(Reach::Anywhere);
    /// sink.write(b"boot ok").unwrap();
    /// assert_eq!(recorded.contents(), "boot ok");
    /// ```
    pub fn new(reach: Reach) -> (Self, Recorded) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                reach,
                writes: writes.clone(),
            },
            Recorded { writes },
        )
    }
}

impl Sink for RecordingSink {
    fn reach(&self) -> Reach {
        self.reach
    }

    fn write(&self, bytes: &[u8]) -> Result<usize, Error> {
        self.writes.lock().unwrap().push(bytes.to_vec());
        Ok(bytes.len())
    }
}

impl Recorded {
    /// Returns every write so far, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().unwrap().clone()
    }

    /// Returns all written bytes concatenated, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.writes().concat()).into_owned()
    }

    /// Returns how many writes were made.
    pub fn count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    /// Removes and returns the concatenated contents.
    pub fn take(&self) -> String {
        let writes: Vec<Vec<u8>> = self.writes.lock().unwrap().drain(..).collect();
        String::from_utf8_lossy(&writes.concat()).into_owned()
    }
}

std::thread_local! {
    static PUTC: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// A character primitive for testing that records into a buffer of the calling thread.
///
/// Use it as `LowLevelConsoleSink<RecordingPutc>` wherever a low-level console is needed.
#[derive(Debug)]
pub struct RecordingPutc;

impl RecordingPutc {
    /// Removes and returns everything emitted on this thread, lossily decoded as UTF-8.
    pub fn take() -> String {
        let bytes = PUTC.with(|buffer| buffer.take());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl LowPutc for RecordingPutc {
    fn putc(byte: u8) {
        PUTC.with(|buffer| buffer.borrow_mut().push(byte));
    }
}
