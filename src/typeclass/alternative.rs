//! Alternative type class - monoid structure on Applicative functors.
//!
//! `Alternative` extends `Applicative` with an empty computation (`empty`)
//! and a choice between two computations (`alt`).
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_not::Maybe;
//! use maybe_not::typeclass::Alternative;
//!
//! fn first_present<F: Alternative>(primary: F, secondary: F, fallback: F) -> F {
//!     primary.alt(secondary).alt(fallback)
//! }
//! assert_eq!(
//!     first_present(Maybe::nothing(), Maybe::just(2), Maybe::just(3)),
//!     Maybe::just(2)
//! );
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for applicative functors with a monoid structure.
pub trait Alternative: Applicative {
    /// Returns the identity element for alt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::Maybe;
    /// use maybe_not::typeclass::Alternative;
    ///
    /// let empty: Maybe<i32> = <Maybe<()>>::empty();
    /// assert_eq!(empty, Maybe::nothing());
    /// ```
    fn empty<A>() -> Self::WithType<A>;

    /// Combines two alternatives, returning the first success.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;
}

impl<A> Alternative for Maybe<A> {
    #[inline]
    fn empty<B>() -> Maybe<B> {
        Maybe::nothing()
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        Self::alt_map(self, || alternative)
    }
}
