//! Type class traits implemented by [`Maybe`](crate::Maybe).
//!
//! One container type satisfies every capability below; the traits exist so
//! that generic code can be written against "any functor" or "any monad".
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Alternative`]: Choosing between computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them.
//!
//! # Examples
//!
//! ```rust
//! use maybe_not::Maybe;
//! use maybe_not::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::just(21)), Maybe::just(42));
//!
//! let chained = <Maybe<()>>::pure(3).flat_map(|n| Maybe::just(n + 1));
//! assert_eq!(chained, Maybe::just(4));
//! ```

mod alternative;
mod applicative;
mod functor;
mod higher;
mod monad;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
