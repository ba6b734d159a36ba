//! Programming-error type for [`Failable::handle`](crate::Failable::handle).
//!
//! A missing handler is a contract violation by the caller, not a modeled
//! outcome, so it never shows up as a `Failure` of the caller's failure type.

use std::error::Error as StdError;
use std::fmt;

/// The handler for the active variant was not supplied.
///
/// Returned by [`Failable::try_handle`](crate::Failable::try_handle); its
/// `Display` text is the panic message of
/// [`Failable::handle`](crate::Failable::handle).
///
/// # Examples
///
/// ```
/// use failable::{Failable, MissingHandler};
///
/// let value: Failable<i32, String> = Failable::success(1);
/// let outcome = value.try_handle(None::<fn(i32) -> i32>, Some(|_: String| 0));
/// assert_eq!(outcome, Err(MissingHandler::OnSuccess));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingHandler {
    /// A `Success` was handled without an `on_success` handler.
    OnSuccess,
    /// A `Failure` was handled without an `on_failure` handler.
    OnFailure,
}

impl MissingHandler {
    /// Name of the absent handler argument.
    pub fn argument(&self) -> &'static str {
        match self {
            MissingHandler::OnSuccess => "on_success",
            MissingHandler::OnFailure => "on_failure",
        }
    }
}

impl fmt::Display for MissingHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            MissingHandler::OnSuccess => "Success",
            MissingHandler::OnFailure => "Failure",
        };
        write!(
            f,
            "invalid argument: `{}` handler is required for a {} value",
            self.argument(),
            variant
        )
    }
}

impl StdError for MissingHandler {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_argument_and_variant() {
        assert_eq!(
            MissingHandler::OnSuccess.to_string(),
            "invalid argument: `on_success` handler is required for a Success value"
        );
        assert_eq!(
            MissingHandler::OnFailure.to_string(),
            "invalid argument: `on_failure` handler is required for a Failure value"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn StdError> = Box::new(MissingHandler::OnFailure);
        assert!(err.to_string().starts_with("invalid argument"));
        assert!(err.source().is_none());
    }
}
