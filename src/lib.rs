//! # maybe-not
//!
//! An immutable optional-value container for Rust.
//!
//! ## Overview
//!
//! [`Maybe<T>`] holds either one value (Present) or nothing (Empty). It provides:
//!
//! - **Construction**: `just`, `try_just`, `nothing`, `maybe` (alias `of`)
//! - **Core algebra**: `map`, `bind`, `join`, `ap`, `alt`, `alt_map`,
//!   `with_default`, `with_default_fn`, `unsafe_else`
//! - **Collection combinators**: [`sequence`], [`traverse`], [`just_map`],
//!   [`lift`], [`lift2`], [`lift3`], [`lift4`]
//! - **Asynchronous bridge**: [`Maybe::async_map`], [`to_future`], `.await`
//!   on a container
//! - **Type classes**: Functor, Applicative, Monad, Alternative
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `async`: Asynchronous bridge, built on `futures`
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, shaped like `Option`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_not::prelude::*;
//!
//! let add = lift2(|x: i32, y: i32| x + y);
//! let total = add(Maybe::just(1), Maybe::maybe("2".parse::<i32>().ok()));
//! assert_eq!(total.with_default(0), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use maybe_not::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use maybe::{
    AbsentValueError, InvalidConstructionError, Maybe, SequenceTuple, join, just_map, lift,
    lift_tuple, lift2, lift3, lift4, sequence, traverse,
};

#[cfg(feature = "async")]
pub use maybe::{IntoMaybe, to_future};
