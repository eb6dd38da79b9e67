//! Presence or absence of a value.
//!
//! [`Option`] is the unary shape: a live payload (`Some`) or the empty marker
//! (`None`). It is also the only family with in-place updates:
//! [`get_or_insert`](Option::get_or_insert) and its lazy siblings,
//! [`replace`](Option::replace) and [`take`](Option::take). Everything else
//! consumes the receiver and hands back a new instance.

use std::option::Option as StdOption;
use std::result::Result as StdResult;

use crate::abort::Violation;
use crate::iter::{IntoIter, Iter};
use crate::result::Result;
use crate::sentinel::Nothing;
use crate::variant::{Optional, Variant};

/// An optional value: `Some(T)` or `None`.
pub type Option<T> = Variant<Optional, T, Nothing>;

impl<T> Option<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// A present value.
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self::first(value)
    }

    /// An absent value.
    #[must_use]
    pub const fn none() -> Self {
        Self::second(Nothing::INSTANCE)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether a payload is present.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.is_first()
    }

    /// Whether the value is absent.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.is_second()
    }

    /// `true` if present and the payload satisfies `predicate`.
    ///
    /// `predicate` is not called on an absent value.
    pub fn is_some_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.fold(predicate, |_| false)
    }

    /// `true` if absent, or if present and the payload satisfies `predicate`.
    pub fn is_none_or(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.fold(predicate, |_| true)
    }

    /// `true` if present with a payload equal to `value`.
    #[must_use]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.first_ref().is_some_and(|payload| payload == value)
    }

    /// Borrow the payload without consuming the container.
    #[must_use]
    pub fn as_ref(&self) -> Option<&T> {
        self.first_ref().into()
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    /// Return the payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.unwrap_first("unwrap")
    }

    /// Return the payload, panicking with `msg` if absent.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `None`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        self.expect_first(msg)
    }

    /// Return the payload, or the violation `unwrap` would have panicked with.
    pub fn try_unwrap(self) -> StdResult<T, Violation> {
        self.try_first("unwrap")
    }

    /// Return the payload, or `default` if absent.
    ///
    /// `default` is evaluated eagerly by the caller; prefer
    /// [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive.
    pub fn unwrap_or(self, default: T) -> T {
        self.first_or_else(|_| default)
    }

    /// Return the payload, or compute one. `f` runs only when absent.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        self.first_or_else(|_| f())
    }

    /// Return the payload, or `T::default()` if absent.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.first_or_else(|_| T::default())
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Apply `f` to a present payload. An absent value stays absent and `f`
    /// is never called.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        self.map_first(f)
    }

    /// Apply `f` to a present payload, or return `default`.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        self.fold(f, |_| default)
    }

    /// Apply `f` to a present payload, or compute a fallback with `default`.
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        self.fold(f, |_| default())
    }

    /// Call `f` with a reference to a present payload and return `self`
    /// unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        self.inspect_first(f)
    }

    /// Demote a present value to `None` when `predicate` rejects it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.bind_first(|value| {
            if predicate(&value) {
                Self::some(value)
            } else {
                Self::none()
            }
        })
    }

    /// `None` if `self` is absent, otherwise `other`.
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        self.bind_first(|_| other)
    }

    /// Chain a computation that may itself come up empty.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        self.bind_first(f)
    }

    /// `self` if present, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        self.bind_second(|_| other)
    }

    /// `self` if present, otherwise the result of `f`. `f` runs only when
    /// absent.
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        self.bind_second(|_| f())
    }

    /// The one present value if exactly one of `self` and `other` is present.
    pub fn xor(self, other: Self) -> Self {
        match (self.is_some(), other.is_some()) {
            (true, false) => self,
            (false, true) => other,
            _ => Self::none(),
        }
    }

    /// Pair two present values. `None` if either side is absent.
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combine two present values with `f`. `f` runs only when both are
    /// present.
    pub fn zip_with<U, R>(self, other: Option<U>, f: impl FnOnce(T, U) -> R) -> Option<R> {
        self.and_then(|a| other.map(|b| f(a, b)))
    }

    /// `Ok` with the payload, or `Err(err)` if absent.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        self.fold(Result::ok, |_| Result::err(err))
    }

    /// `Ok` with the payload, or `Err` computed by `err` if absent.
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        self.fold(Result::ok, |_| Result::err(err()))
    }

    // ========================================================================
    // In-place updates
    // ========================================================================

    /// Install `value` if absent, then borrow the payload.
    ///
    /// A present payload is left untouched and `value` is dropped.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.first_or_fill(|| value, "get_or_insert")
    }

    /// Like [`get_or_insert`](Self::get_or_insert), but `f` runs only when
    /// absent.
    pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        self.first_or_fill(f, "get_or_insert_with")
    }

    /// Install `T::default()` if absent, then borrow the payload.
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.first_or_fill(T::default, "get_or_insert_default")
    }

    /// Install `value`, returning the previous state.
    pub fn replace(&mut self, value: T) -> Self {
        self.swap_state(Self::some(value), "replace")
    }

    /// Reset to `None`, returning the previous state.
    pub fn take(&mut self) -> Self {
        self.swap_state(Self::none(), "take")
    }

    // ========================================================================
    // Iteration & conversion
    // ========================================================================

    /// Iterate over the payload: one element if present, none otherwise.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_first()
    }

    /// Convert into the standard library option.
    #[must_use]
    pub fn into_std(self) -> StdOption<T> {
        self.into_first()
    }
}

impl<T> Option<Option<T>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Option<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        value.into_std()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.into_iter_first()
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Option<T> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> StdResult<Ser::Ok, Ser::Error> {
        let value = self.first_ref();
        <StdOption<&T> as serde::Serialize>::serialize(&value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Option<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let value = <StdOption<T> as serde::Deserialize>::deserialize(deserializer)?;
        StdResult::Ok(value.into())
    }
}
