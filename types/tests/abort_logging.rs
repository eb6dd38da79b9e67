//! Contract violations are logged through `tracing` before unwinding, and
//! mutators leave a trace-level breadcrumb.

use std::io;
use std::panic;
use std::sync::{Arc, Mutex, PoisonError};

use oxyde_types::{Either, Option, Result};
use tracing::{Level, subscriber};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = Captured::default();
    let collector = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();
    let out = subscriber::with_default(collector, f);
    (out, sink.contents())
}

#[test]
fn unwrap_on_none_logs_before_panicking() {
    let unwrap_none = || Option::<i32>::none().unwrap();
    let (outcome, logs) = capture(|| panic::catch_unwind(unwrap_none));

    assert!(outcome.is_err());
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("variant access contract violated"), "{logs}");
    let message = "called `Option::unwrap()` on a `None` value";
    assert!(logs.contains(message), "{logs}");
}

#[test]
fn logged_location_is_the_callers() {
    let unwrap_err = || Result::<(), &str>::err("boom").unwrap();
    let (_, logs) = capture(|| panic::catch_unwind(unwrap_err));

    assert!(logs.contains("abort_logging.rs"), "{logs}");
}

#[test]
fn two_sided_violations_name_the_found_branch() {
    let ((), logs) = capture(|| {
        let _ = panic::catch_unwind(|| Result::<i32, &str>::ok(1).unwrap_err());
        let _ = panic::catch_unwind(|| Either::<i32, &str>::left(1).unwrap_right());
    });

    for message in [
        "called `Result::unwrap_err()` on an `Ok` value",
        "called `Either::unwrap_right()` on a `Left` value",
    ] {
        assert!(logs.contains(message), "{logs}");
    }
}

#[test]
fn expect_logs_the_caller_message() {
    let expect_none = || Option::<i32>::none().expect("config must be loaded");
    let (_, logs) = capture(|| panic::catch_unwind(expect_none));

    assert!(logs.contains("config must be loaded"), "{logs}");
}

#[test]
fn successful_access_logs_nothing_at_error() {
    let (value, logs) = capture(|| {
        Option::some(1).unwrap()
            + Result::<i32, ()>::ok(2).unwrap()
            + Either::<i32, ()>::left(3).unwrap_left()
    });

    assert_eq!(value, 6);
    assert!(!logs.contains("ERROR"), "{logs}");
}

#[test]
fn try_unwrap_does_not_log() {
    let (violation, logs) = capture(|| Option::<i32>::none().try_unwrap());

    assert!(violation.is_err());
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn mutators_leave_trace_events() {
    let ((), logs) = capture(|| {
        let mut slot = Option::none();
        let _ = slot.get_or_insert(2);
        let _ = slot.replace(3);
        let _ = slot.take();
    });

    assert!(logs.contains("TRACE"), "{logs}");
    assert!(logs.contains("get_or_insert"), "{logs}");
    assert!(logs.contains("replace"), "{logs}");
    assert!(logs.contains("take"), "{logs}");
}

#[test]
fn get_or_insert_traces_prior_state_even_when_present() {
    let ((), logs) = capture(|| {
        let mut slot = Option::some(1);
        let _ = slot.get_or_insert_with(|| 2);
    });

    let event = logs
        .lines()
        .find(|line| line.contains("get_or_insert_with"))
        .unwrap_or_default();
    assert!(event.contains("TRACE"), "{logs}");
    assert!(event.contains("was="), "{logs}");
    assert!(event.contains("Some"), "{logs}");
}
