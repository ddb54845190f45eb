//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - Lifting pure values into the context (`pure`)
//! - Combining independent values in the context (`map2`, `map3`, `product`)
//! - Applying a function held in the context (`apply`)
//!
//! For `Maybe`, every combination is Present only when all of its inputs are.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_not::Maybe;
//! use maybe_not::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::just(42));
//!
//! let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::just(3));
//!
//! assert_eq!(
//!     Maybe::just(1).product(Maybe::just("hello")),
//!     Maybe::just((1, "hello"))
//! );
//! ```

use super::functor::Functor;
use crate::maybe::{Maybe, lift_tuple};

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    /// use maybe_not::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::just(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    /// use maybe_not::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::just(1).map2(Maybe::just(2), |x, y| x + y), Maybe::just(3));
    /// assert_eq!(
    ///     Maybe::just(1).map2(Maybe::<i32>::nothing(), |x, y| x + y),
    ///     Maybe::nothing()
    /// );
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This is the function-side spelling of [`Maybe::ap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    /// use maybe_not::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        lift_tuple((self, other), |(a, b)| function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        lift_tuple((self, second, third), |(a, b, c)| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        other.ap(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::just(1), Maybe::just(2), Maybe::just(3))]
    #[case(Maybe::nothing(), Maybe::just(2), Maybe::nothing())]
    #[case(Maybe::just(1), Maybe::nothing(), Maybe::nothing())]
    fn map2_requires_both(
        #[case] first: Maybe<i32>,
        #[case] second: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(first.map2(second, |x, y| x + y), expected);
    }

    #[rstest]
    fn map3_combines_three_values() {
        let result = Maybe::just(1).map3(Maybe::just(2), Maybe::just(3), |x, y, z| x * y * z);
        assert_eq!(result, Maybe::just(6));
    }

    #[rstest]
    fn product_pairs_present_values() {
        assert_eq!(Maybe::just(1).product(Maybe::just('a')), Maybe::just((1, 'a')));
        assert_eq!(Maybe::just(1).product(Maybe::<char>::nothing()), Maybe::nothing());
    }

    #[rstest]
    fn apply_with_empty_function_is_empty() {
        let function: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert_eq!(function.apply(Maybe::just(5)), Maybe::nothing());
    }
}
