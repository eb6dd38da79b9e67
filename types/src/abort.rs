//! Contract-violation reporting.
//!
//! Asking a container for a payload it does not hold is a programming error,
//! not a recoverable failure. The `unwrap` family reports it through [`abort`],
//! which logs the [`Violation`] and unwinds. The `try_unwrap` family hands the
//! same `Violation` back as a value instead.

use std::panic::Location;

use thiserror::Error;

/// Description of an accessor called against the wrong discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A payload was requested from an absent `Option`.
    #[error("called `{family}::{method}()` on a `None` value")]
    Absent {
        family: &'static str,
        method: &'static str,
    },
    /// A payload was requested from the other branch of a two-sided container.
    #[error("called `{family}::{method}()` on {} `{found}` value", article(.found))]
    WrongVariant {
        family: &'static str,
        method: &'static str,
        found: &'static str,
    },
    /// Caller-supplied message from an `expect`-style accessor.
    #[error("{0}")]
    Expectation(String),
}

impl Violation {
    pub(crate) fn expectation(msg: &str) -> Self {
        Self::Expectation(msg.to_owned())
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if "AEIOUaeiou".contains(c) => "an",
        _ => "a",
    }
}

/// Log `violation` and unwind.
///
/// The panic is attributed to the caller of the public accessor, not to this
/// function.
#[cold]
#[track_caller]
pub(crate) fn abort(violation: Violation) -> ! {
    let location = Location::caller();
    tracing::error!(%violation, %location, "variant access contract violated");
    panic!("{violation}")
}
