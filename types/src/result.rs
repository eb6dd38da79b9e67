//! Success or represented failure.
//!
//! The `Err` branch of [`Result`] is an ordinary value the caller is expected
//! to inspect. It is never raised; only accessing the wrong branch through the
//! `unwrap` family aborts.

use std::result::Result as StdResult;

use crate::abort::Violation;
use crate::iter::{IntoIter, Iter};
use crate::variant::{Fallible, Variant};

/// A success value `Ok(T)` or a failure value `Err(E)`.
pub type Result<T, E> = Variant<Fallible, T, E>;

impl<T, E> Result<T, E> {
    // ========================================================================
    // Construction & queries
    // ========================================================================

    /// A success value.
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self::first(value)
    }

    /// A failure value.
    #[must_use]
    pub const fn err(error: E) -> Self {
        Self::second(error)
    }

    /// Whether this is `Ok`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.is_first()
    }

    /// Whether this is `Err`.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.is_second()
    }

    /// `true` if `Ok` and the value satisfies `predicate`.
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.fold(predicate, |_| false)
    }

    /// `true` if `Err` and the error satisfies `predicate`.
    pub fn is_err_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        self.fold(|_| false, predicate)
    }

    /// `true` if `Ok` with a value equal to `value`.
    #[must_use]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.first_ref().is_some_and(|payload| payload == value)
    }

    /// `true` if `Err` with an error equal to `error`.
    #[must_use]
    pub fn contains_err<F>(&self, error: &F) -> bool
    where
        E: PartialEq<F>,
    {
        self.second_ref().is_some_and(|payload| payload == error)
    }

    /// Borrow both branches without consuming the container.
    #[must_use]
    pub fn as_ref(&self) -> Result<&T, &E> {
        self.by_ref()
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.unwrap_first("unwrap")
    }

    /// Return the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        self.unwrap_second("unwrap_err")
    }

    /// Return the success value, panicking with `msg` on `Err`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        self.expect_first(msg)
    }

    /// Return the failure value, panicking with `msg` on `Ok`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        self.expect_second(msg)
    }

    /// Return the success value, or the violation `unwrap` would have panicked with.
    pub fn try_unwrap(self) -> StdResult<T, Violation> {
        self.try_first("unwrap")
    }

    /// Return the failure value, or the violation `unwrap_err` would have panicked with.
    pub fn try_unwrap_err(self) -> StdResult<E, Violation> {
        self.try_second("unwrap_err")
    }

    /// Return the success value, or `default` on `Err`.
    pub fn unwrap_or(self, default: T) -> T {
        self.first_or_else(|_| default)
    }

    /// Return the success value, or recover one from the error. `f` runs only
    /// on `Err`.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        self.first_or_else(f)
    }

    /// Return the success value, or `T::default()` on `Err`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.first_or_else(|_| T::default())
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Transform the success value; an `Err` passes through with its
    /// original error.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
        self.map_first(f)
    }

    /// Transform the error; an `Ok` passes through with its original value.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
        self.map_second(f)
    }

    /// Apply `f` to the success value, or return `default` on `Err`.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        self.fold(f, |_| default)
    }

    /// Fold to a plain value. `default` receives the error and runs only on
    /// `Err`.
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        self.fold(f, default)
    }

    /// `res` if `self` is `Ok`, otherwise the original error.
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        self.bind_first(|_| res)
    }

    /// Chain a fallible computation on the success value. An `Err` short
    /// circuits without calling `f`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        self.bind_first(f)
    }

    /// `self` if `Ok`, otherwise `res`.
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        self.bind_second(|_| res)
    }

    /// Attempt recovery from the error. An `Ok` is returned without calling
    /// `f`.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        self.bind_second(f)
    }

    /// Call `f` with a reference to the success value and return `self` unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        self.inspect_first(f)
    }

    /// Call `f` with a reference to the error and return `self` unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        self.inspect_second(f)
    }

    // ========================================================================
    // Iteration & conversion
    // ========================================================================

    /// Iterate over the success value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_first()
    }

    /// Iterate over the error value, if any.
    pub fn iter_err(&self) -> Iter<'_, E> {
        self.iter_second()
    }

    /// Convert into the standard library result.
    pub fn into_std(self) -> StdResult<T, E> {
        self.fold(Ok, Err)
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(value: StdResult<T, E>) -> Self {
        match value {
            Ok(value) => Self::ok(value),
            Err(error) => Self::err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.into_iter_first()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, E: serde::Serialize> serde::Serialize for Result<T, E> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> StdResult<Ser::Ok, Ser::Error> {
        let value = self.as_ref().into_std();
        <StdResult<&T, &E> as serde::Serialize>::serialize(&value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, E> serde::Deserialize<'de> for Result<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let value = <StdResult<T, E> as serde::Deserialize>::deserialize(deserializer)?;
        StdResult::Ok(value.into())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn parse_port(raw: &str) -> Result<u16, String> {
        raw.parse::<u16>().map_err(|e| format!("{raw}: {e}")).into()
    }

    #[test]
    fn exactly_one_branch_is_live() {
        let ok: Result<i32, String> = Result::ok(42);
        let err: Result<i32, String> = Result::err("boom".to_string());

        assert!(ok.is_ok() && !ok.is_err());
        assert!(err.is_err() && !err.is_ok());
    }

    #[test]
    fn unwrap_variants_return_live_payload() {
        assert_eq!(Result::<i32, &str>::ok(42).unwrap(), 42);
        let err: Result<i32, &str> = Result::err("Hello World!");
        assert_eq!(err.unwrap_err(), "Hello World!");
    }

    #[test]
    #[should_panic(expected = "called `Result::unwrap()` on an `Err` value")]
    fn unwrap_on_err_panics() {
        Result::<i32, &str>::err("bad").unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Result::unwrap_err()` on an `Ok` value")]
    fn unwrap_err_on_ok_panics() {
        Result::<i32, &str>::ok(1).unwrap_err();
    }

    #[test]
    #[should_panic(expected = "expected a failure")]
    fn expect_err_uses_caller_message() {
        Result::<i32, &str>::ok(1).expect_err("expected a failure");
    }

    #[test]
    fn try_unwrap_err_reports_found_branch() {
        assert_eq!(
            Result::<i32, &str>::ok(1).try_unwrap_err(),
            Err(Violation::WrongVariant {
                family: "Result",
                method: "unwrap_err",
                found: "Ok",
            })
        );
    }

    #[test]
    fn map_err_leaves_ok_value() {
        let mapped = Result::<i32, &str>::ok(5).map_err(str::len);
        assert_eq!(mapped, Result::ok(5));
    }

    #[test]
    fn map_leaves_err_value_and_skips_f() {
        let calls = Cell::new(0);
        let mapped = Result::<i32, &str>::err("bad").map(|v| {
            calls.set(calls.get() + 1);
            v * 2
        });
        assert_eq!(mapped, Result::err("bad"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn unwrap_or_else_receives_error() {
        let recovered = parse_port("nope").unwrap_or_else(|e| {
            assert!(e.starts_with("nope: "));
            1
        });
        assert_eq!(recovered, 1);
        assert_eq!(parse_port("8080").unwrap_or_else(|_| 0), 8080);
    }

    #[test]
    fn map_or_else_is_lazy_on_ok() {
        let calls = Cell::new(0);
        let doubled = parse_port("21").map_or_else(
            |_| {
                calls.set(calls.get() + 1);
                0
            },
            |p| p * 2,
        );
        assert_eq!(doubled, 42);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn and_then_chains_and_short_circuits() {
        let nonzero = |p: u16| -> Result<u16, String> {
            if p == 0 {
                Result::err("port 0 is reserved".to_string())
            } else {
                Result::ok(p)
            }
        };
        assert_eq!(parse_port("80").and_then(nonzero), Result::ok(80));
        assert_eq!(
            parse_port("0").and_then(nonzero),
            Result::err("port 0 is reserved".to_string())
        );
        let unparsed = parse_port("x").and_then(nonzero).unwrap_err();
        assert!(unparsed.starts_with("x: "));
    }

    #[test]
    fn and_replaces_only_ok() {
        let next: Result<&str, String> = Result::ok("next");
        assert_eq!(parse_port("80").and(next.clone()), Result::ok("next"));

        let failed = parse_port("bad").and(next);
        assert!(failed.unwrap_err().starts_with("bad: "));
    }

    #[test]
    fn or_replaces_only_err() {
        let fallback: Result<u16, ()> = Result::ok(80);
        assert_eq!(parse_port("443").or(fallback), Result::ok(443));
        assert_eq!(parse_port("bad").or(fallback), Result::ok(80));
    }

    #[test]
    fn unwrap_or_and_map_or_fall_back_on_err() {
        assert_eq!(parse_port("8080").unwrap_or(80), 8080);
        assert_eq!(parse_port("bad").unwrap_or(80), 80);

        assert_eq!(parse_port("21").map_or(0, |p| p * 2), 42);
        assert_eq!(parse_port("bad").map_or(0, |p| p * 2), 0);
    }

    #[test]
    fn or_else_recovers_only_from_err() {
        let fallback = |_: String| -> Result<u16, ()> { Result::ok(80) };
        assert_eq!(parse_port("443").or_else(fallback), Result::ok(443));
        assert_eq!(parse_port("bad").or_else(fallback), Result::ok(80));
    }

    #[test]
    fn inspect_err_sees_error_only() {
        let mut seen = Vec::new();
        let res = Result::<i32, &str>::err("bad")
            .inspect(|_| seen.push("ok"))
            .inspect_err(|e| seen.push(*e));
        assert_eq!(res, Result::err("bad"));
        assert_eq!(seen, ["bad"]);
    }

    #[test]
    fn predicate_queries_look_at_one_branch() {
        assert!(parse_port("80").is_ok_and(|p| p < 1024));
        assert!(!parse_port("8080").is_ok_and(|p| p < 1024));
        assert!(parse_port("x").is_err_and(|e| e.starts_with("x: ")));
        assert!(!parse_port("80").is_err_and(|_| true));
    }

    #[test]
    fn contains_checks_the_matching_branch() {
        let ok = Result::<i32, &str>::ok(3);
        assert!(ok.contains(&3));
        assert!(!ok.contains_err(&"3"));

        let err = Result::<i32, &str>::err("x");
        assert!(err.contains_err(&"x"));
        assert!(!err.contains(&3));
    }

    #[test]
    fn iter_and_iter_err_are_disjoint() {
        let ok = Result::<i32, &str>::ok(5);
        assert_eq!(ok.iter().collect::<Vec<_>>(), [&5]);
        assert_eq!(ok.iter_err().count(), 0);

        let err = Result::<i32, &str>::err("e");
        assert_eq!(err.iter().count(), 0);
        assert_eq!(err.iter_err().collect::<Vec<_>>(), [&"e"]);
    }

    #[test]
    fn into_iter_moves_the_ok_value() {
        let ok: Result<String, i32> = Result::ok("owned".to_string());
        assert_eq!(ok.into_iter().collect::<Vec<_>>(), ["owned"]);

        let err: Result<String, i32> = Result::err(1);
        assert_eq!(err.into_iter().count(), 0);
    }

    #[test]
    fn unwrap_or_default_uses_default_impl() {
        assert_eq!(Result::<String, i32>::err(1).unwrap_or_default(), "");
    }

    #[test]
    fn std_conversions_round_trip() {
        let ours: Result<i32, &str> = Err("e").into();
        assert!(ours.is_err());
        let back: StdResult<i32, &str> = ours.into();
        assert_eq!(back, Err("e"));
    }
}
