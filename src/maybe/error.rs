//! Error types for the `Maybe` container.
//!
//! Only two things can go wrong:
//!
//! - A checked construction ([`Maybe::try_just`](super::Maybe::try_just)) is
//!   given an absent value.
//! - A future produced by the asynchronous bridge finds nothing to resolve with.
//!
//! Every other operation on `Maybe` is total.

use thiserror::Error;

/// Returned when the "value must exist" constructor is given an absent value.
///
/// This signals programmer misuse rather than a data condition. Callers that
/// expect possibly-absent input should use [`Maybe::maybe`](super::Maybe::maybe)
/// instead.
///
/// # Examples
///
/// ```rust
/// use maybe_not::{InvalidConstructionError, Maybe};
///
/// let result = Maybe::<i32>::try_just(None);
/// assert_eq!(result, Err(InvalidConstructionError));
/// assert_eq!(
///     InvalidConstructionError.to_string(),
///     "value passed to just must exist"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("value passed to just must exist")]
pub struct InvalidConstructionError;

/// The rejection carried by futures built from a `Maybe`.
///
/// # Examples
///
/// ```rust
/// use maybe_not::AbsentValueError;
///
/// assert_eq!(AbsentValueError::Nothing.to_string(), "maybe held nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AbsentValueError {
    /// The container was empty, so there was nothing to resolve with.
    #[error("maybe held nothing")]
    Nothing,
    /// The deferred computation completed with an absent value.
    #[error("deferred computation resolved to nothing")]
    ResolvedToNothing,
}
