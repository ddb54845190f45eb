//! Collection-level combinators built from the `Maybe` primitives.
//!
//! - [`sequence`]: turn a list of containers into a container of a list
//! - [`traverse`]: `sequence`, then map a plain function over the values
//! - [`just_map`]: map a container-producing function and keep only Present results
//! - [`join`]: flatten one level of nesting
//! - [`lift`], [`lift2`], [`lift3`], [`lift4`]: turn a plain function into
//!   one that takes and returns containers
//!
//! All lifts share one routine, [`lift_tuple`]: the arguments are collected
//! into a tuple with [`SequenceTuple`] and the function is mapped over it.
//!
//! # Examples
//!
//! ```rust
//! use maybe_not::{Maybe, lift2, sequence};
//!
//! let all = sequence(vec![Maybe::just(1), Maybe::just(2), Maybe::just(3)]);
//! assert_eq!(all, Maybe::just(vec![1, 2, 3]));
//!
//! let add = lift2(|x: i32, y: i32| x + y);
//! assert_eq!(add(Maybe::just(1), Maybe::just(2)), Maybe::just(3));
//! assert_eq!(add(Maybe::just(1), Maybe::nothing()), Maybe::nothing());
//! ```

use super::Maybe;

// =============================================================================
// Sequencing
// =============================================================================

/// Collects a list of containers into a container of the list.
///
/// The result is Present with the values in input order if every element is
/// Present, and Empty if any element is Empty. Iteration stops at the first
/// Empty element, so an unbounded input is fine as long as it yields one. An
/// empty input gives Present of an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{Maybe, sequence};
///
/// assert_eq!(
///     sequence(vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)]),
///     Maybe::nothing()
/// );
/// assert_eq!(sequence(Vec::<Maybe<i32>>::new()), Maybe::just(vec![]));
/// ```
pub fn sequence<T, I>(items: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    items.into_iter().collect()
}

/// Sequences `items`, then applies `function` to each unwrapped value.
///
/// `function` only ever sees plain values: if any element is Empty the
/// result is Empty and `function` is never called.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{Maybe, traverse};
///
/// let incremented = traverse(|x: i32| x + 1, vec![Maybe::just(1), Maybe::just(2)]);
/// assert_eq!(incremented, Maybe::just(vec![2, 3]));
/// ```
pub fn traverse<A, B, F, I>(function: F, items: I) -> Maybe<Vec<B>>
where
    F: FnMut(A) -> B,
    I: IntoIterator<Item = Maybe<A>>,
{
    sequence(items).map(|values| values.into_iter().map(function).collect())
}

/// Maps a container-producing function over plain values, keeping only the
/// Present results.
///
/// This fuses filtering and mapping: the output keeps the relative order of
/// the inputs and is never longer than them.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{Maybe, just_map};
///
/// let double_reals = |number: f64| {
///     if number.is_nan() { Maybe::nothing() } else { Maybe::just(number * 2.0) }
/// };
///
/// assert_eq!(just_map(double_reals, vec![f64::NAN, 4.0, f64::NAN, 10.0]), vec![8.0, 20.0]);
/// ```
pub fn just_map<A, B, F, I>(function: F, items: I) -> Vec<B>
where
    F: FnMut(A) -> Maybe<B>,
    I: IntoIterator<Item = A>,
{
    items
        .into_iter()
        .map(function)
        .filter_map(Maybe::into_option)
        .collect()
}

/// Flattens one level of nesting. See [`Maybe::join`].
#[inline]
pub fn join<T>(nested: Maybe<Maybe<T>>) -> Maybe<T> {
    nested.join()
}

impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    /// Collects with the same all-or-nothing rule as [`sequence`].
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// =============================================================================
// Arity-generic Lifting
// =============================================================================

/// A tuple of containers that can be turned into a container of a tuple.
///
/// Implemented for tuples of `Maybe` with one to six elements. The result is
/// Present only when every element is.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{Maybe, SequenceTuple};
///
/// let pair = (Maybe::just(false), Maybe::just(31)).sequence_tuple();
/// let can_watch = pair.map(|(allowed, age)| allowed || age > 17);
/// assert_eq!(can_watch, Maybe::just(true));
/// ```
pub trait SequenceTuple {
    /// The tuple of unwrapped values.
    type Output;

    /// Collects the tuple of containers into a container of a tuple.
    fn sequence_tuple(self) -> Maybe<Self::Output>;
}

macro_rules! impl_sequence_tuple {
    ($($argument:ident: $type:ident),+) => {
        impl<$($type),+> SequenceTuple for ($(Maybe<$type>,)+) {
            type Output = ($($type,)+);

            #[inline]
            fn sequence_tuple(self) -> Maybe<Self::Output> {
                let ($($argument,)+) = self;
                match ($($argument.into_option(),)+) {
                    ($(Some($argument),)+) => Maybe::just(($($argument,)+)),
                    _ => Maybe::nothing(),
                }
            }
        }
    };
}

impl_sequence_tuple!(first: A);
impl_sequence_tuple!(first: A, second: B);
impl_sequence_tuple!(first: A, second: B, third: C);
impl_sequence_tuple!(first: A, second: B, third: C, fourth: D);
impl_sequence_tuple!(first: A, second: B, third: C, fourth: D, fifth: E);
impl_sequence_tuple!(first: A, second: B, third: C, fourth: D, fifth: E, sixth: G);

/// Applies `function` to the sequenced `arguments`.
///
/// This is the routine every `lift` is an instance of.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{Maybe, lift_tuple};
///
/// let total = lift_tuple(
///     (Maybe::just(1), Maybe::just(2), Maybe::just(5)),
///     |(x, y, z)| x + y + z,
/// );
/// assert_eq!(total, Maybe::just(8));
/// ```
#[inline]
pub fn lift_tuple<Arguments, Output, F>(arguments: Arguments, function: F) -> Maybe<Output>
where
    Arguments: SequenceTuple,
    F: FnOnce(Arguments::Output) -> Output,
{
    arguments.sequence_tuple().map(function)
}

/// Lifts a one-argument function into the `Maybe` context.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{Maybe, lift};
///
/// let lifted_add_one = lift(|x: i32| x + 1);
/// assert_eq!(lifted_add_one(Maybe::just(1)), Maybe::just(2));
/// assert_eq!(lifted_add_one(Maybe::nothing()), Maybe::nothing());
/// ```
pub fn lift<A, Output, F>(function: F) -> impl Fn(Maybe<A>) -> Maybe<Output>
where
    F: Fn(A) -> Output,
{
    move |first: Maybe<A>| lift_tuple((first,), |(first,)| function(first))
}

macro_rules! define_lift {
    (
        $(#[$meta:meta])*
        $arity:literal; $($argument:ident: $type:ident),+
    ) => {
        paste::paste! {
            $(#[$meta])*
            pub fn [<lift $arity>]<$($type,)+ Output, F>(
                function: F,
            ) -> impl Fn($(Maybe<$type>),+) -> Maybe<Output>
            where
                F: Fn($($type),+) -> Output,
            {
                move |$($argument: Maybe<$type>),+| {
                    lift_tuple(($($argument,)+), |($($argument,)+)| function($($argument),+))
                }
            }
        }
    };
}

define_lift! {
    /// Lifts a two-argument function into the `Maybe` context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::{Maybe, lift2};
    ///
    /// let add_together = lift2(|x: i32, y: i32| x + y);
    /// assert_eq!(add_together(Maybe::just(1), Maybe::just(2)), Maybe::just(3));
    /// ```
    2; first: A, second: B
}

define_lift! {
    /// Lifts a three-argument function into the `Maybe` context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::{Maybe, lift3};
    ///
    /// let add_three = lift3(|x: i32, y: i32, z: i32| x + y + z);
    /// assert_eq!(
    ///     add_three(Maybe::just(1), Maybe::just(2), Maybe::just(5)),
    ///     Maybe::just(8)
    /// );
    /// ```
    3; first: A, second: B, third: C
}

define_lift! {
    /// Lifts a four-argument function into the `Maybe` context.
    4; first: A, second: B, third: C, fourth: D
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn sequence_preserves_order() {
        let values = vec![Maybe::just(3), Maybe::just(1), Maybe::just(2)];
        assert_eq!(sequence(values), Maybe::just(vec![3, 1, 2]));
    }

    #[rstest]
    #[case(vec![Maybe::nothing(), Maybe::just(2)])]
    #[case(vec![Maybe::just(1), Maybe::nothing()])]
    #[case(vec![Maybe::nothing(), Maybe::nothing()])]
    fn sequence_is_empty_when_any_element_is_empty(#[case] values: Vec<Maybe<i32>>) {
        assert!(sequence(values).has_nothing());
    }

    #[rstest]
    fn traverse_skips_function_when_any_element_is_empty() {
        let calls = Cell::new(0);
        let result = traverse(
            |x: i32| {
                calls.set(calls.get() + 1);
                x
            },
            vec![Maybe::just(1), Maybe::nothing(), Maybe::just(3)],
        );
        assert!(result.has_nothing());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn just_map_drops_empty_results() {
        let evens = just_map(
            |x: i32| if x % 2 == 0 { Maybe::just(x) } else { Maybe::nothing() },
            1..=6,
        );
        assert_eq!(evens, vec![2, 4, 6]);
    }

    #[rstest]
    fn collect_is_all_or_nothing() {
        let present: Maybe<Vec<i32>> = vec![Maybe::just(1), Maybe::just(2)].into_iter().collect();
        let empty: Maybe<Vec<i32>> = vec![Maybe::just(1), Maybe::nothing()].into_iter().collect();
        assert_eq!(present, Maybe::just(vec![1, 2]));
        assert_eq!(empty, Maybe::nothing());
    }

    #[rstest]
    fn sequence_tuple_with_six_elements() {
        let tuple = (
            Maybe::just(1),
            Maybe::just('b'),
            Maybe::just("c"),
            Maybe::just(4_u8),
            Maybe::just(5.0_f64),
            Maybe::just(true),
        );
        assert_eq!(
            tuple.sequence_tuple(),
            Maybe::just((1, 'b', "c", 4_u8, 5.0_f64, true))
        );
    }

    #[rstest]
    fn lift4_is_empty_when_any_argument_is_empty() {
        let sum = lift4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
        assert_eq!(
            sum(Maybe::just(1), Maybe::just(2), Maybe::just(3), Maybe::just(4)),
            Maybe::just(10)
        );
        assert_eq!(
            sum(Maybe::just(1), Maybe::just(2), Maybe::nothing(), Maybe::just(4)),
            Maybe::nothing()
        );
    }

    #[rstest]
    fn lifted_function_is_reusable() {
        let double = lift(|x: i32| x * 2);
        assert_eq!(double(Maybe::just(2)), Maybe::just(4));
        assert_eq!(double(Maybe::just(5)), Maybe::just(10));
    }
}
