#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! The inherent `map` is checked against the same laws, since `fmap`
//! delegates to it.

use maybe_not::Maybe;
use maybe_not::typeclass::Functor;
use proptest::prelude::*;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn maybe_string() -> impl Strategy<Value = Maybe<String>> {
    any::<Option<String>>().prop_map(Maybe::from)
}

proptest! {
    /// Identity Law for Maybe<i32>
    #[test]
    fn prop_maybe_identity_law(value in maybe_i32()) {
        prop_assert_eq!(value.fmap(|x| x), value);
        prop_assert_eq!(value.map(|x| x), value);
    }

    /// Composition Law for Maybe<i32>
    #[test]
    fn prop_maybe_composition_law(value in maybe_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for Maybe<String>
    #[test]
    fn prop_maybe_string_identity_law(value in maybe_string()) {
        let result = value.clone().fmap(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Maybe<String>: length then doubling
    #[test]
    fn prop_maybe_string_composition_law(value in maybe_string()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap_ref agrees with fmap and leaves the original usable
    #[test]
    fn prop_maybe_fmap_ref_matches_fmap(value in maybe_string()) {
        let by_ref = value.fmap_ref(String::len);
        let by_value = value.clone().fmap(|s| s.len());
        prop_assert_eq!(by_ref, by_value);
    }

    /// Mapping never changes the state
    #[test]
    fn prop_maybe_map_preserves_state(value in maybe_i32()) {
        prop_assert_eq!(value.fmap(i64::from).has_something(), value.has_something());
    }
}
