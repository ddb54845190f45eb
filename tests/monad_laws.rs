#![cfg(feature = "typeclass")]
//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Also checks that `bind` equals `map` followed by `join`.

use maybe_not::Maybe;
use maybe_not::typeclass::{Applicative, Monad};
use proptest::prelude::*;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 {
        Maybe::just(n / 2)
    } else {
        Maybe::nothing()
    }
}

fn positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::just(n) } else { Maybe::nothing() }
}

proptest! {
    #[test]
    fn prop_maybe_left_identity(a in any::<i32>()) {
        let left = <Maybe<()>>::pure(a).flat_map(half);
        prop_assert_eq!(left, half(a));
    }

    #[test]
    fn prop_maybe_right_identity(m in maybe_i32()) {
        prop_assert_eq!(m.flat_map(Maybe::just), m);
        prop_assert_eq!(m.bind(<Maybe<()>>::pure), m);
    }

    #[test]
    fn prop_maybe_associativity(m in maybe_i32()) {
        let left = m.flat_map(half).flat_map(positive);
        let right = m.flat_map(|x| half(x).flat_map(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_bind_is_map_then_join(m in maybe_i32()) {
        prop_assert_eq!(m.bind(half), m.map(half).join());
    }
}
