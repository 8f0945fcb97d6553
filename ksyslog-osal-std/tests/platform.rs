#![expect(missing_docs, reason = "tests")]

use std::io::{Read, Seek};
use std::os::fd::AsRawFd;

use ksyslog_osal_std::console::{Descriptor, Fd};
use ksyslog_osal_std::context::{Context, ExecutionContext};
use ksyslog_osal_std::time::{Clock, Time};
use pretty_assertions::assert_eq;

/// Mirrors what a dispatcher does with the platform: check the context, then read the clock.
fn snapshot<X: ExecutionContext, C: Clock>() -> (bool, bool) {
    (X::in_interrupt(), C::is_ready() && C::now().is_ok())
}

#[test]
fn platform_through_generic_bounds() {
    assert_eq!(snapshot::<Context, Time>(), (false, true));
    assert_eq!(Context::interrupt(snapshot::<Context, Time>), (true, true));
}

#[test]
fn descriptor_writes_land_in_order() {
    let mut file = tempfile::tempfile().unwrap();

    for chunk in [&b"[     0.000000]"[..], b"boot ok\n"] {
        assert_eq!(Fd::write(file.as_raw_fd(), chunk), Ok(chunk.len()));
    }

    let mut contents = String::new();
    file.rewind().unwrap();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "[     0.000000]boot ok\n");
}
