//! Bridge between `Maybe` and asynchronous computations.
//!
//! Futures need a failure channel to tell asynchronous callers that there was
//! nothing to resolve with, so this is the one place where absence becomes an
//! error: every future built here has output `Result<T, AbsentValueError>`.
//!
//! - [`Maybe::async_map`]: run an asynchronous function on the held value
//! - [`to_future`] / [`IntoFuture`]: turn a container into a ready future
//!
//! # Examples
//!
//! ```rust
//! use maybe_not::{AbsentValueError, Maybe};
//!
//! # futures::executor::block_on(async {
//! assert_eq!(Maybe::just(5).await, Ok(5));
//! assert_eq!(Maybe::<i32>::nothing().await, Err(AbsentValueError::Nothing));
//! # });
//! ```

use std::future::{Future, IntoFuture};

use futures::future::{self, Either, FutureExt, Ready};

use super::{AbsentValueError, Maybe};

/// Conversion of an asynchronous callback's result into a `Maybe`.
///
/// Implemented for `Option<T>` and `Maybe<T>`, the two ways a callback can
/// report that it resolved to nothing.
pub trait IntoMaybe {
    /// The value type of the resulting container.
    type Value;

    /// Converts `self` into a container.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> IntoMaybe for Option<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::maybe(self)
    }
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> Maybe<T> {
    /// Runs an asynchronous function on the held value.
    ///
    /// For a Present container, `function` is called immediately and the
    /// returned future resolves to `Ok(value)` when the callback's future
    /// completes with a value, or to `Err(AbsentValueError::ResolvedToNothing)`
    /// when it completes with `None` or an Empty container.
    ///
    /// For an Empty container, `function` is never called and the returned
    /// future is ready with `Err(AbsentValueError::Nothing)`.
    ///
    /// # Errors
    ///
    /// The returned future fails with [`AbsentValueError`] as described above.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_not::{AbsentValueError, Maybe};
    ///
    /// # futures::executor::block_on(async {
    /// let doubled = Maybe::just(3).async_map(|n| async move { Some(n * 2) }).await;
    /// assert_eq!(doubled, Ok(6));
    ///
    /// let vanished = Maybe::just(3).async_map(|_| async { None::<i32> }).await;
    /// assert_eq!(vanished, Err(AbsentValueError::ResolvedToNothing));
    /// # });
    /// ```
    pub fn async_map<F, Fut>(
        self,
        function: F,
    ) -> impl Future<Output = Result<<Fut::Output as IntoMaybe>::Value, AbsentValueError>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future,
        Fut::Output: IntoMaybe,
    {
        match self.into_option() {
            Some(value) => Either::Left(function(value).map(|resolved| {
                resolved.into_maybe().into_option().ok_or_else(|| {
                    tracing::debug!("async_map callback resolved to nothing");
                    AbsentValueError::ResolvedToNothing
                })
            })),
            None => {
                tracing::debug!("async_map called on an empty maybe");
                Either::Right(future::ready(Err(AbsentValueError::Nothing)))
            }
        }
    }
}

impl<T> IntoFuture for Maybe<T> {
    type Output = Result<T, AbsentValueError>;
    type IntoFuture = Ready<Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        future::ready(self.into_option().ok_or_else(|| {
            tracing::debug!("converted an empty maybe into a rejected future");
            AbsentValueError::Nothing
        }))
    }
}

/// Converts a container into a ready future.
///
/// Resolves to `Ok(value)` for a Present container and to
/// `Err(AbsentValueError::Nothing)` for an Empty one.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{Maybe, to_future};
///
/// # futures::executor::block_on(async {
/// assert_eq!(to_future(Maybe::just("ok")).await, Ok("ok"));
/// assert!(to_future(Maybe::<&str>::nothing()).await.is_err());
/// # });
/// ```
#[inline]
pub fn to_future<T>(container: Maybe<T>) -> Ready<Result<T, AbsentValueError>> {
    container.into_future()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[tokio::test]
    async fn async_map_on_empty_never_calls_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::nothing()
            .async_map(|n| {
                calls.set(calls.get() + 1);
                async move { Some(n) }
            })
            .await;

        assert_eq!(result, Err(AbsentValueError::Nothing));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn async_map_calls_function_before_polling() {
        let calls = Cell::new(0);
        let pending = Maybe::just(3).async_map(|n| {
            calls.set(calls.get() + 1);
            async move { Maybe::just(n + 2) }
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(pending.await, Ok(5));
    }

    #[rstest]
    #[tokio::test]
    async fn async_map_rejects_empty_maybe_result() {
        let result = Maybe::just(3)
            .async_map(|_| async { Maybe::<i32>::nothing() })
            .await;
        assert_eq!(result, Err(AbsentValueError::ResolvedToNothing));
    }

    #[rstest]
    #[case(Maybe::just(5), Ok(5))]
    #[case(Maybe::nothing(), Err(AbsentValueError::Nothing))]
    #[tokio::test]
    async fn to_future_resolves_or_rejects(
        #[case] container: Maybe<i32>,
        #[case] expected: Result<i32, AbsentValueError>,
    ) {
        assert_eq!(to_future(container).await, expected);
    }

    #[rstest]
    fn into_maybe_collapses_none() {
        assert_eq!(None::<i32>.into_maybe(), Maybe::nothing());
        assert_eq!(Some(1).into_maybe(), Maybe::just(1));
    }
}
