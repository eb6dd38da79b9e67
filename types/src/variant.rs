//! The generic two-branch container behind [`Option`](crate::Option),
//! [`Result`](crate::Result) and [`Either`](crate::Either).
//!
//! A `Variant<S, A, B>` holds exactly one live payload: an `A` in its first
//! branch or a `B` in its second. The branch enum is private, so the only way
//! to observe or change it is through the methods the three families expose.
//! The shape marker `S` names the family and its branches for diagnostics and
//! selects which public catalogue applies.
//!
//! The methods in this module are the shared machinery; each family wraps them
//! under its own vocabulary (`map`/`map_err`, `map_left`/`map_right`, ...).

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::mem;

use crate::abort::{Violation, abort};
use crate::iter::{IntoIter, Iter};

mod sealed {
    pub trait Sealed {}
}

// ============================================================================
// Shapes
// ============================================================================

/// Names a container family and its two branches.
///
/// Sealed: [`Optional`], [`Fallible`] and [`Choice`] are the only shapes.
pub trait Shape: sealed::Sealed + Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Family name, e.g. `"Result"`.
    const FAMILY: &'static str;
    /// Name of the first branch, e.g. `"Ok"`.
    const FIRST: &'static str;
    /// Name of the second branch, e.g. `"Err"`.
    const SECOND: &'static str;
    /// Whether the second branch carries a caller-visible payload.
    const SECOND_HAS_PAYLOAD: bool;
}

/// Shape of [`Option`](crate::Option): `Some` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional {}

/// Shape of [`Result`](crate::Result): `Ok` or `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallible {}

/// Shape of [`Either`](crate::Either): `Left` or `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {}

impl sealed::Sealed for Optional {}
impl sealed::Sealed for Fallible {}
impl sealed::Sealed for Choice {}

impl Shape for Optional {
    const FAMILY: &'static str = "Option";
    const FIRST: &'static str = "Some";
    const SECOND: &'static str = "None";
    const SECOND_HAS_PAYLOAD: bool = false;
}

impl Shape for Fallible {
    const FAMILY: &'static str = "Result";
    const FIRST: &'static str = "Ok";
    const SECOND: &'static str = "Err";
    const SECOND_HAS_PAYLOAD: bool = true;
}

impl Shape for Choice {
    const FAMILY: &'static str = "Either";
    const FIRST: &'static str = "Left";
    const SECOND: &'static str = "Right";
    const SECOND_HAS_PAYLOAD: bool = true;
}

// ============================================================================
// Container
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<A, B> {
    First(A),
    Second(B),
}

/// A value in one of two branches, tagged with the family shape `S`.
///
/// Use the family aliases rather than naming this type directly:
///
/// ```
/// use oxyde_types::{Either, Option, Result};
///
/// let port: Result<u16, String> = Result::ok(8080);
/// assert_eq!(port.map(|p| p + 1).unwrap(), 8081);
///
/// let missing: Option<u16> = Option::none();
/// assert_eq!(missing.unwrap_or(80), 80);
///
/// let side: Either<i32, &str> = Either::right("west");
/// assert_eq!(side.either(|n| n.to_string(), str::to_uppercase), "WEST");
/// ```
///
/// The branch and payload are private. There is no way to rewrite them from
/// outside the crate:
///
/// ```compile_fail
/// use oxyde_types::Option;
///
/// let mut value = Option::some(1);
/// value.slot = Option::<i32>::none().slot;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant<S, A, B> {
    slot: Slot<A, B>,
    shape: PhantomData<S>,
}

impl<S: Shape, A, B> Variant<S, A, B> {
    pub(crate) const fn first(value: A) -> Self {
        Self {
            slot: Slot::First(value),
            shape: PhantomData,
        }
    }

    pub(crate) const fn second(value: B) -> Self {
        Self {
            slot: Slot::Second(value),
            shape: PhantomData,
        }
    }

    pub(crate) const fn is_first(&self) -> bool {
        matches!(self.slot, Slot::First(_))
    }

    pub(crate) const fn is_second(&self) -> bool {
        matches!(self.slot, Slot::Second(_))
    }

    pub(crate) fn first_ref(&self) -> Option<&A> {
        match &self.slot {
            Slot::First(a) => Some(a),
            Slot::Second(_) => None,
        }
    }

    pub(crate) fn second_ref(&self) -> Option<&B> {
        match &self.slot {
            Slot::First(_) => None,
            Slot::Second(b) => Some(b),
        }
    }

    pub(crate) fn into_first(self) -> Option<A> {
        self.fold(Some, |_| None)
    }

    pub(crate) fn into_second(self) -> Option<B> {
        self.fold(|_| None, Some)
    }

    /// Borrowing view with the same branch.
    pub(crate) fn by_ref(&self) -> Variant<S, &A, &B> {
        match &self.slot {
            Slot::First(a) => Variant::first(a),
            Slot::Second(b) => Variant::second(b),
        }
    }

    /// Total fold: exactly one of the two functions runs.
    pub(crate) fn fold<T>(
        self,
        on_first: impl FnOnce(A) -> T,
        on_second: impl FnOnce(B) -> T,
    ) -> T {
        match self.slot {
            Slot::First(a) => on_first(a),
            Slot::Second(b) => on_second(b),
        }
    }

    pub(crate) fn map_first<U>(self, f: impl FnOnce(A) -> U) -> Variant<S, U, B> {
        self.fold(|a| Variant::first(f(a)), Variant::second)
    }

    pub(crate) fn map_second<U>(self, f: impl FnOnce(B) -> U) -> Variant<S, A, U> {
        self.fold(Variant::first, |b| Variant::second(f(b)))
    }

    pub(crate) fn bind_first<U>(self, f: impl FnOnce(A) -> Variant<S, U, B>) -> Variant<S, U, B> {
        self.fold(f, Variant::second)
    }

    pub(crate) fn bind_second<U>(self, f: impl FnOnce(B) -> Variant<S, A, U>) -> Variant<S, A, U> {
        self.fold(Variant::first, f)
    }

    pub(crate) fn inspect_first(self, f: impl FnOnce(&A)) -> Self {
        if let Slot::First(a) = &self.slot {
            f(a);
        }
        self
    }

    pub(crate) fn inspect_second(self, f: impl FnOnce(&B)) -> Self {
        if let Slot::Second(b) = &self.slot {
            f(b);
        }
        self
    }

    pub(crate) fn first_or_else(self, f: impl FnOnce(B) -> A) -> A {
        self.fold(|a| a, f)
    }

    pub(crate) fn second_or_else(self, f: impl FnOnce(A) -> B) -> B {
        self.fold(f, |b| b)
    }

    // ------------------------------------------------------------------------
    // Checked and aborting extraction
    // ------------------------------------------------------------------------

    pub(crate) fn try_first(self, method: &'static str) -> Result<A, Violation> {
        match self.slot {
            Slot::First(a) => Ok(a),
            Slot::Second(_) if !S::SECOND_HAS_PAYLOAD => Err(Violation::Absent {
                family: S::FAMILY,
                method,
            }),
            Slot::Second(_) => Err(Violation::WrongVariant {
                family: S::FAMILY,
                method,
                found: S::SECOND,
            }),
        }
    }

    pub(crate) fn try_second(self, method: &'static str) -> Result<B, Violation> {
        match self.slot {
            Slot::First(_) => Err(Violation::WrongVariant {
                family: S::FAMILY,
                method,
                found: S::FIRST,
            }),
            Slot::Second(b) => Ok(b),
        }
    }

    #[track_caller]
    pub(crate) fn unwrap_first(self, method: &'static str) -> A {
        match self.try_first(method) {
            Ok(a) => a,
            Err(violation) => abort(violation),
        }
    }

    #[track_caller]
    pub(crate) fn unwrap_second(self, method: &'static str) -> B {
        match self.try_second(method) {
            Ok(b) => b,
            Err(violation) => abort(violation),
        }
    }

    #[track_caller]
    pub(crate) fn expect_first(self, msg: &str) -> A {
        match self.slot {
            Slot::First(a) => a,
            Slot::Second(_) => abort(Violation::expectation(msg)),
        }
    }

    #[track_caller]
    pub(crate) fn expect_second(self, msg: &str) -> B {
        match self.slot {
            Slot::First(_) => abort(Violation::expectation(msg)),
            Slot::Second(b) => b,
        }
    }

    // ------------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------------

    pub(crate) fn iter_first(&self) -> Iter<'_, A> {
        Iter::new(self.first_ref())
    }

    pub(crate) fn iter_second(&self) -> Iter<'_, B> {
        Iter::new(self.second_ref())
    }

    pub(crate) fn into_iter_first(self) -> IntoIter<A> {
        IntoIter::new(self.into_first())
    }

    // ------------------------------------------------------------------------
    // In-place updates
    // ------------------------------------------------------------------------

    /// Swap in `next`, handing back the previous state as its own instance.
    pub(crate) fn swap_state(&mut self, next: Self, op: &'static str) -> Self {
        tracing::trace!(
            family = S::FAMILY,
            op,
            was = self.branch_name(),
            now = next.branch_name(),
            "variant state replaced"
        );
        mem::replace(self, next)
    }

    /// Fill the first branch if the second is live, then borrow the payload.
    ///
    /// `fill` runs only when the slot is actually empty.
    pub(crate) fn first_or_fill(&mut self, fill: impl FnOnce() -> A, op: &'static str) -> &mut A {
        tracing::trace!(
            family = S::FAMILY,
            op,
            was = self.branch_name(),
            "filling slot if empty"
        );
        if let Slot::Second(_) = self.slot {
            self.slot = Slot::First(fill());
        }
        match &mut self.slot {
            Slot::First(a) => a,
            Slot::Second(_) => unreachable!("slot was filled above"),
        }
    }

    pub(crate) const fn branch_name(&self) -> &'static str {
        match self.slot {
            Slot::First(_) => S::FIRST,
            Slot::Second(_) => S::SECOND,
        }
    }
}
