//! A value of one of two types.
//!
//! [`Either`] is the symmetric shape: neither side means success or failure,
//! so every accessor comes in a `left` and a `right` flavor.
//! [`either`](Either::either) folds both sides into one type and
//! [`flip`](Either::flip) swaps them. With the `serde` feature a value encodes
//! as `{"Left": ..}` or `{"Right": ..}`.

use std::result::Result as StdResult;

use crate::abort::Violation;
use crate::option::Option;
use crate::variant::{Choice, Variant};

/// Either a `Left(L)` or a `Right(R)`. Neither side is privileged.
pub type Either<L, R> = Variant<Choice, L, R>;

impl<L, R> Either<L, R> {
    /// A left value.
    #[must_use]
    pub const fn left(value: L) -> Self {
        Self::first(value)
    }

    /// A right value.
    #[must_use]
    pub const fn right(value: R) -> Self {
        Self::second(value)
    }

    /// Whether this is `Left`.
    #[must_use]
    pub const fn is_left(&self) -> bool {
        self.is_first()
    }

    /// Whether this is `Right`.
    #[must_use]
    pub const fn is_right(&self) -> bool {
        self.is_second()
    }

    /// Borrow both sides without consuming the container.
    #[must_use]
    pub fn as_ref(&self) -> Either<&L, &R> {
        self.by_ref()
    }

    /// Return the left value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Right`.
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        self.unwrap_first("unwrap_left")
    }

    /// Return the right value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Left`.
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        self.unwrap_second("unwrap_right")
    }

    /// Return the left value, panicking with `msg` if this is `Right`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `Right`.
    #[track_caller]
    pub fn expect_left(self, msg: &str) -> L {
        self.expect_first(msg)
    }

    /// Return the right value, panicking with `msg` if this is `Left`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `Left`.
    #[track_caller]
    pub fn expect_right(self, msg: &str) -> R {
        self.expect_second(msg)
    }

    /// Return the left value, or the violation `unwrap_left` would have panicked with.
    pub fn try_unwrap_left(self) -> StdResult<L, Violation> {
        self.try_first("unwrap_left")
    }

    /// Return the right value, or the violation `unwrap_right` would have panicked with.
    pub fn try_unwrap_right(self) -> StdResult<R, Violation> {
        self.try_second("unwrap_right")
    }

    /// The left value, or `other` if this is `Right`.
    pub fn left_or(self, other: L) -> L {
        self.first_or_else(|_| other)
    }

    /// The left value, or `L::default()` if this is `Right`.
    pub fn left_or_default(self) -> L
    where
        L: Default,
    {
        self.first_or_else(|_| L::default())
    }

    /// The left value, or one derived from the right value by `f`.
    pub fn left_or_else(self, f: impl FnOnce(R) -> L) -> L {
        self.first_or_else(f)
    }

    /// The right value, or `other` if this is `Left`.
    pub fn right_or(self, other: R) -> R {
        self.second_or_else(|_| other)
    }

    /// The right value, or `R::default()` if this is `Left`.
    pub fn right_or_default(self) -> R
    where
        R: Default,
    {
        self.second_or_else(|_| R::default())
    }

    /// The right value, or one derived from the left value by `f`.
    pub fn right_or_else(self, f: impl FnOnce(L) -> R) -> R {
        self.second_or_else(f)
    }

    /// Fold both branches into one type. Exactly one of `f` and `g` runs.
    pub fn either<T>(self, f: impl FnOnce(L) -> T, g: impl FnOnce(R) -> T) -> T {
        self.fold(f, g)
    }

    /// Like [`either`](Self::either), threading `ctx` into whichever function
    /// runs.
    pub fn either_with<C, T>(
        self,
        ctx: C,
        f: impl FnOnce(C, L) -> T,
        g: impl FnOnce(C, R) -> T,
    ) -> T {
        match self.into_first_or_second() {
            StdResult::Ok(l) => f(ctx, l),
            StdResult::Err(r) => g(ctx, r),
        }
    }

    /// Transform the left value; a `Right` passes through.
    pub fn map_left<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> {
        self.map_first(f)
    }

    /// Transform the right value; a `Left` passes through.
    pub fn map_right<S>(self, f: impl FnOnce(R) -> S) -> Either<L, S> {
        self.map_second(f)
    }

    /// Chain on the left value; a `Right` passes through.
    pub fn left_and_then<M>(self, f: impl FnOnce(L) -> Either<M, R>) -> Either<M, R> {
        self.bind_first(f)
    }

    /// Chain on the right value; a `Left` passes through.
    pub fn right_and_then<S>(self, f: impl FnOnce(R) -> Either<L, S>) -> Either<L, S> {
        self.bind_second(f)
    }

    /// Call `f` with a reference to the left value and return `self` unchanged.
    pub fn inspect_left(self, f: impl FnOnce(&L)) -> Self {
        self.inspect_first(f)
    }

    /// Call `f` with a reference to the right value and return `self` unchanged.
    pub fn inspect_right(self, f: impl FnOnce(&R)) -> Self {
        self.inspect_second(f)
    }

    /// Swap the sides: `Left(x)` becomes `Right(x)` and vice versa.
    pub fn flip(self) -> Either<R, L> {
        self.fold(Either::right, Either::left)
    }

    /// The left value as an [`Option`].
    pub fn into_left(self) -> Option<L> {
        self.into_first().into()
    }

    /// The right value as an [`Option`].
    pub fn into_right(self) -> Option<R> {
        self.into_second().into()
    }

    fn into_first_or_second(self) -> StdResult<L, R> {
        self.fold(StdResult::Ok, StdResult::Err)
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize)]
    #[serde(rename = "Either")]
    pub(super) enum Borrowed<'a, L, R> {
        Left(&'a L),
        Right(&'a R),
    }

    #[derive(Deserialize)]
    #[serde(rename = "Either")]
    pub(super) enum Owned<L, R> {
        Left(L),
        Right(R),
    }
}

#[cfg(feature = "serde")]
impl<L: serde::Serialize, R: serde::Serialize> serde::Serialize for Either<L, R> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> StdResult<Ser::Ok, Ser::Error> {
        let repr = self
            .as_ref()
            .either(serde_repr::Borrowed::Left, serde_repr::Borrowed::Right);
        <serde_repr::Borrowed<'_, L, R> as serde::Serialize>::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, L, R> serde::Deserialize<'de> for Either<L, R>
where
    L: serde::Deserialize<'de>,
    R: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let repr = <serde_repr::Owned<L, R> as serde::Deserialize>::deserialize(deserializer)?;
        StdResult::Ok(match repr {
            serde_repr::Owned::Left(l) => Self::left(l),
            serde_repr::Owned::Right(r) => Self::right(r),
        })
    }
}
