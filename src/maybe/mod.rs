//! The `Maybe` container - a value that may or may not be present.
//!
//! This module provides [`Maybe<T>`], an immutable container holding zero or
//! one value of type `T`. It models absence without handing sentinel values to
//! application code: a `Maybe` is either **Present** (it holds a value) or
//! **Empty** (it does not), and every transformation returns a new container.
//!
//! # Construction
//!
//! - [`Maybe::just`]: wraps a value that is known to exist
//! - [`Maybe::try_just`]: checked form of `just` for possibly-absent input
//! - [`Maybe::nothing`]: the empty container
//! - [`Maybe::maybe`] / [`Maybe::of`]: total constructor, `None` becomes Empty
//!
//! All absent markers collapse into the same Empty state: `Maybe::nothing()`,
//! `Maybe::maybe(None)` and `Maybe::default()` are indistinguishable.
//!
//! # Examples
//!
//! ```rust
//! use maybe_not::Maybe;
//!
//! let present = Maybe::maybe(Some(5));
//! let empty: Maybe<i32> = Maybe::maybe(None);
//!
//! assert_eq!(present.map(|n| n * 2).with_default(0), 10);
//! assert_eq!(empty.map(|n| n * 2).with_default(0), 0);
//!
//! // Chaining computations that may not produce a value
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
//! }
//!
//! assert_eq!(Maybe::just(8).bind(half).bind(half), Maybe::just(2));
//! assert_eq!(Maybe::just(6).bind(half).bind(half), Maybe::nothing());
//! ```

#[cfg(feature = "async")]
mod bridge;
mod combinators;
mod error;

#[cfg(feature = "async")]
pub use bridge::{IntoMaybe, to_future};
pub use combinators::{
    SequenceTuple, join, just_map, lift, lift_tuple, lift2, lift3, lift4, sequence, traverse,
};
pub use error::{AbsentValueError, InvalidConstructionError};

use std::fmt;

/// An immutable container holding either one value or nothing.
///
/// The slot is private: the only ways to build a `Maybe` are the constructors,
/// so a present payload is always a real value.
///
/// `Maybe` orders like `Option`: Empty sorts before any Present value.
///
/// # Examples
///
/// ```rust
/// use maybe_not::Maybe;
///
/// let name: Maybe<&str> = Maybe::just("Ada");
/// assert!(name.has_something());
///
/// let greeting = name.map(|name| format!("Hello, {name}"));
/// assert_eq!(greeting.with_default(String::new()), "Hello, Ada");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a Present container holding `value`.
    ///
    /// `value` is a plain `T`, so it always exists; use [`Maybe::try_just`]
    /// when the input may be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// let present = Maybe::just("not empty");
    /// assert_eq!(present.with_default(""), "not empty");
    /// ```
    #[inline]
    pub const fn just(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates a Present container, rejecting absent input.
    ///
    /// `just` asserts that its value exists. Passing `None` here is a
    /// construction violation reported as [`InvalidConstructionError`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConstructionError`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::{InvalidConstructionError, Maybe};
    ///
    /// assert_eq!(Maybe::try_just(Some(3)), Ok(Maybe::just(3)));
    /// assert_eq!(Maybe::<i32>::try_just(None), Err(InvalidConstructionError));
    /// ```
    pub fn try_just(value: Option<T>) -> Result<Self, InvalidConstructionError> {
        match value {
            Some(value) => Ok(Self::just(value)),
            None => {
                tracing::debug!("rejected absent value passed to just");
                Err(InvalidConstructionError)
            }
        }
    }

    /// Creates an Empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// let empty: Maybe<String> = Maybe::nothing();
    /// assert_eq!(empty.with_default("nothing in here!".to_string()), "nothing in here!");
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self { value: None }
    }

    /// Creates a Present container if `value` holds something, Empty otherwise.
    ///
    /// This is the total constructor and the one application code should
    /// prefer. Values that are known to exist go through [`Maybe::just`].
    ///
    /// Only the argument's own `Option` layer is inspected: for
    /// `T = Option<X>`, `maybe(Some(None))` is Present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// let present = Maybe::maybe(Some("something is here"));
    /// let absent: Maybe<&str> = Maybe::maybe(None);
    ///
    /// assert_eq!(present.with_default(""), "something is here");
    /// assert_eq!(absent.with_default("nope nothing"), "nope nothing");
    /// ```
    #[inline]
    pub fn maybe(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::just(value),
            None => Self::nothing(),
        }
    }

    /// Alias for [`Maybe::maybe`].
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        Self::maybe(value)
    }

    // =========================================================================
    // State Predicates
    // =========================================================================

    /// Returns `true` if the container holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// assert!(Maybe::just("something").has_something());
    /// assert!(!Maybe::<&str>::nothing().has_something());
    /// ```
    #[inline]
    pub const fn has_something(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the container is empty.
    ///
    /// Always the negation of [`Maybe::has_something`].
    #[inline]
    pub const fn has_nothing(&self) -> bool {
        !self.has_something()
    }

    // =========================================================================
    // Core Algebra
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// On an Empty container `function` is not called at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// let extended = Maybe::just(vec![1]).map(|mut items| {
    ///     items.extend([2, 3, 4]);
    ///     items
    /// });
    /// assert_eq!(extended.with_default(vec![]), vec![1, 2, 3, 4]);
    ///
    /// let empty: Maybe<Vec<i32>> = Maybe::nothing();
    /// assert!(empty.map(|items| items.len()).has_nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.value {
            Some(value) => Maybe::just(function(value)),
            None => Maybe::nothing(),
        }
    }

    /// Applies a function whose result may be absent.
    ///
    /// The result goes through [`Maybe::maybe`], so a `None` produced by
    /// `function` collapses to Empty instead of being wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// let parsed = Maybe::just("42").filter_map(|text| text.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::just(42));
    ///
    /// let rejected = Maybe::just("forty-two").filter_map(|text| text.parse::<i32>().ok());
    /// assert!(rejected.has_nothing());
    /// ```
    #[inline]
    pub fn filter_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.value {
            Some(value) => Maybe::maybe(function(value)),
            None => Maybe::nothing(),
        }
    }

    /// Chains a computation that itself returns a `Maybe`.
    ///
    /// Equivalent to `map` followed by one level of [`Maybe::join`]: the
    /// container returned by `function` is handed back as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// struct Person {
    ///     name: Option<&'static str>,
    ///     seat: u32,
    /// }
    ///
    /// fn welcome(person: Person) -> Maybe<String> {
    ///     Maybe::maybe(person.name)
    ///         .map(|name| format!("Welcome {name} to seat {}", person.seat))
    /// }
    ///
    /// let watcher = Maybe::just(Person { name: Some("Bob"), seat: 42 });
    /// assert_eq!(
    ///     watcher.bind(welcome).with_default(String::new()),
    ///     "Welcome Bob to seat 42"
    /// );
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.map(function).join()
    }

    /// Applies a function held in another container to this container's value.
    ///
    /// The result is Present only if both containers are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// let increment = Maybe::just(|n: i32| n + 1);
    /// assert_eq!(Maybe::just(4).ap(increment), Maybe::just(5));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::nothing();
    /// assert_eq!(Maybe::just(4).ap(missing), Maybe::nothing());
    /// ```
    #[inline]
    pub fn ap<U, F>(self, function: Maybe<F>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        function.bind(|function| self.map(function))
    }

    /// Returns `self` if Present, otherwise `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).alt(Maybe::just(5)), Maybe::just(4));
    /// assert_eq!(Maybe::nothing().alt(Maybe::just(5)), Maybe::just(5));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt(self, fallback: Self) -> Self {
        if self.has_something() { self } else { fallback }
    }

    /// Like [`Maybe::alt`], but computes the fallback only when needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// assert_eq!(Maybe::nothing().alt_map(|| Maybe::just(5)), Maybe::just(5));
    /// assert_eq!(Maybe::just(1).alt_map(Maybe::nothing), Maybe::just(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn alt_map<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.has_something() { self } else { fallback() }
    }

    /// Unwraps the held value, or returns `fallback` when Empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).with_default(0), 5);
    /// assert_eq!(Maybe::nothing().with_default(4), 4);
    /// ```
    #[inline]
    pub fn with_default(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Unwraps the held value, or computes a fallback when Empty.
    ///
    /// `fallback` runs only for an Empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).with_default_fn(|| 0), 5);
    /// assert_eq!(Maybe::nothing().with_default_fn(|| 4), 4);
    /// ```
    #[inline]
    pub fn with_default_fn<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(fallback)
    }

    /// Runs `side_effect` if and only if the container is Empty.
    ///
    /// This is an escape hatch out of the expression style: the closure is run
    /// for its effects and nothing is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use maybe_not::Maybe;
    ///
    /// let mutations = Cell::new(0);
    ///
    /// Maybe::just(4).unsafe_else(|| mutations.set(mutations.get() + 1));
    /// assert_eq!(mutations.get(), 0);
    ///
    /// Maybe::<i32>::nothing().unsafe_else(|| mutations.set(mutations.get() + 1));
    /// assert_eq!(mutations.get(), 1);
    /// ```
    #[inline]
    pub fn unsafe_else<F>(&self, side_effect: F)
    where
        F: FnOnce(),
    {
        if self.has_nothing() {
            side_effect();
        }
    }

    // =========================================================================
    // Borrowing and Conversion
    // =========================================================================

    /// Borrows the held value, producing a `Maybe<&T>`.
    ///
    /// Useful for querying a container without consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// let name = Maybe::just("Ada".to_string());
    /// assert_eq!(name.as_ref().map(String::len).with_default(0), 3);
    /// assert!(name.has_something());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    /// Converts into the equivalent `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Returns an iterator over the held value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Flattens one level of nesting.
    ///
    /// An Empty outer or inner container gives Empty; otherwise the inner
    /// value is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just("hi")).join(), Maybe::just("hi"));
    /// assert_eq!(Maybe::just(Maybe::<&str>::nothing()).join(), Maybe::nothing());
    /// assert_eq!(Maybe::<Maybe<&str>>::nothing().join(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn join(self) -> Maybe<T> {
        self.with_default(Maybe::nothing())
    }
}

// =============================================================================
// Free Constructors
// =============================================================================

/// Creates a Present container. See [`Maybe::just`].
#[inline]
pub const fn just<T>(value: T) -> Maybe<T> {
    Maybe::just(value)
}

/// Creates an Empty container. See [`Maybe::nothing`].
#[inline]
pub const fn nothing<T>() -> Maybe<T> {
    Maybe::nothing()
}

/// Total constructor. See [`Maybe::maybe`].
#[inline]
pub fn maybe<T>(value: Option<T>) -> Maybe<T> {
    Maybe::maybe(value)
}

/// Alias for [`maybe`].
#[inline]
pub fn of<T>(value: Option<T>) -> Maybe<T> {
    Maybe::of(value)
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    /// The default container is Empty.
    #[inline]
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Just").field(value).finish(),
            None => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Just({value})"),
            None => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes Present, `None` becomes Empty.
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::maybe(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(container: Maybe<T>) -> Self {
        container.value
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Encodes a container exactly like the equivalent `Option`.
///
/// Formats without a distinct "present but null" encoding, such as JSON, write
/// both Empty and `Maybe::just(None::<X>)` as `null`. Such a payload reads back
/// as Empty.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

/// Decodes the `Option` encoding; a null value always gives Empty.
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn absent_markers_collapse_to_the_same_state() {
        let from_nothing: Maybe<i32> = Maybe::nothing();
        let from_none: Maybe<i32> = Maybe::maybe(None);
        let from_default: Maybe<i32> = Maybe::default();
        let from_option: Maybe<i32> = None.into();

        assert_eq!(from_nothing, from_none);
        assert_eq!(from_none, from_default);
        assert_eq!(from_default, from_option);
    }

    #[rstest]
    #[case(Maybe::just(1), true)]
    #[case(Maybe::nothing(), false)]
    fn predicates_are_exclusive(#[case] container: Maybe<i32>, #[case] present: bool) {
        assert_eq!(container.has_something(), present);
        assert_eq!(container.has_nothing(), !present);
    }

    #[rstest]
    fn map_on_empty_does_not_call_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::nothing().map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert!(result.has_nothing());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn filter_map_collapses_none_result() {
        let result: Maybe<i32> = Maybe::just(1).filter_map(|_| None);
        assert_eq!(result, Maybe::nothing());
    }

    #[rstest]
    fn debug_format() {
        assert_eq!(format!("{:?}", Maybe::just(5)), "Just(5)");
        assert_eq!(format!("{:?}", Maybe::<i32>::nothing()), "Nothing");
    }

    #[rstest]
    fn display_format() {
        assert_eq!(Maybe::just("x").to_string(), "Just(x)");
        assert_eq!(Maybe::<&str>::nothing().to_string(), "Nothing");
    }

    #[rstest]
    fn empty_orders_before_present() {
        assert!(Maybe::nothing() < Maybe::just(i32::MIN));
        assert!(Maybe::just(1) < Maybe::just(2));
    }

    #[rstest]
    fn iteration_yields_at_most_one_item() {
        assert_eq!(Maybe::just(3).into_iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!((&Maybe::<i32>::nothing()).into_iter().count(), 0);
    }
}
