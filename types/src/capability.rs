//! Capability protocols a payload may satisfy.
//!
//! Two protocols matter to the containers, and both are the standard ones:
//!
//! - *Default-constructible*: [`Default`]. The `*_default` accessors call
//!   `T::default()` on the path that needs a fallback and nowhere else. The
//!   containers never invent a default of their own.
//! - *Debug-representable*: [`fmt::Debug`]. A container renders as its branch
//!   name wrapped around the payload's own debug form (`Some(42)`,
//!   `Err("bad")`), or the bare name for a payload-less branch (`None`).
//!   [`fmt::Display`] composes the same way from the payload's ordinary
//!   string form (`Err(bad)`).

use std::fmt;

use crate::variant::{Shape, Variant};

impl<S: Shape, A: fmt::Debug, B: fmt::Debug> fmt::Debug for Variant<S, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(a) = self.first_ref() {
            return f.debug_tuple(S::FIRST).field(a).finish();
        }
        match self.second_ref() {
            Some(b) if S::SECOND_HAS_PAYLOAD => f.debug_tuple(S::SECOND).field(b).finish(),
            _ => f.write_str(S::SECOND),
        }
    }
}

impl<S: Shape, A: fmt::Display, B: fmt::Display> fmt::Display for Variant<S, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(a) = self.first_ref() {
            return write!(f, "{}({a})", S::FIRST);
        }
        match self.second_ref() {
            Some(b) if S::SECOND_HAS_PAYLOAD => write!(f, "{}({b})", S::SECOND),
            _ => f.write_str(S::SECOND),
        }
    }
}
