//! The "no payload here" marker.
//!
//! `Nothing` occupies the absent branch of [`Option`](crate::Option). It is
//! zero-sized, so an absent option stores nothing at all, and it cannot be
//! constructed outside this crate, so no caller can smuggle one into a slot.

use std::fmt;

/// Marker for an empty slot.
///
/// Every value of this type is identical: it has no state and compares equal to
/// itself. Callers never receive one from an accessor.
///
/// ```compile_fail
/// // The field is private; sentinels cannot be minted outside the crate.
/// let _ = oxyde_types::Nothing { _private: () };
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nothing {
    _private: (),
}

impl Nothing {
    /// The one sentinel. All slot resets go through this constant.
    pub(crate) const INSTANCE: Self = Self { _private: () };
}

impl fmt::Debug for Nothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<nothing>")
    }
}

impl fmt::Display for Nothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
