//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value while keeping
//! its structure. For `Maybe`, Present stays Present and Empty stays Empty.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_not::Maybe;
//! use maybe_not::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::just(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//!
//! let empty: Maybe<String> = Maybe::<i32>::nothing().fmap(|n| n.to_string());
//! assert_eq!(empty, Maybe::nothing());
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use maybe_not::Maybe;
/// use maybe_not::typeclass::Functor;
///
/// let x = Maybe::just(5);
/// assert_eq!(x.fmap(|n| n * 2), Maybe::just(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    /// use maybe_not::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::just(5).fmap(|n| n * 2), Maybe::just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is not consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    /// use maybe_not::typeclass::Functor;
    ///
    /// let word = Maybe::just("hello".to_string());
    /// assert_eq!(word.fmap_ref(|s| s.len()), Maybe::just(5));
    /// assert!(word.has_something());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn fmap_transforms_present_value() {
        assert_eq!(Maybe::just(2).fmap(|n| n + 1), Maybe::just(3));
    }

    #[rstest]
    fn fmap_ref_does_not_call_function_on_empty() {
        let calls = Cell::new(0);
        let empty: Maybe<i32> = Maybe::nothing();
        let result = empty.fmap_ref(|n| {
            calls.set(calls.get() + 1);
            *n
        });
        assert_eq!(result, Maybe::nothing());
        assert_eq!(calls.get(), 0);
    }
}
