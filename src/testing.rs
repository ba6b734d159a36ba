//! Testing utilities for code that returns [`Failable`](crate::Failable).
//!
//! ```rust
//! use failable::{Failable, assert_success, assert_failure, assert_failure_eq};
//!
//! let ok = Failable::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let failed = Failable::<i32, _>::failure("not found");
//! assert_failure!(failed);
//! assert_failure_eq!(failed, "not found");
//! ```

/// Assert that a value is a `Success`.
///
/// Panics with the failure payload if it is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($value:expr) => {
        match $value {
            $crate::Failable::Success(_) => {}
            $crate::Failable::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a value is a `Failure`.
///
/// Panics with the success payload if it is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($value:expr) => {
        match $value {
            $crate::Failable::Failure(_) => {}
            $crate::Failable::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a value is a `Failure` equal to `expected`.
///
/// # Example
///
/// ```rust
/// use failable::{Failable, assert_failure_eq};
///
/// let value = Failable::<i32, _>::failure(vec!["e1", "e2"]);
/// assert_failure_eq!(value, vec!["e1", "e2"]);
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($value:expr, $expected:expr) => {
        match $value {
            $crate::Failable::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Failable::Success(v) => {
                panic!(
                    "Expected Failure {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::Failable;

#[cfg(feature = "proptest")]
impl<S, F> Arbitrary for Failable<S, F>
where
    S: Arbitrary + 'static,
    F: Arbitrary + 'static,
    S::Strategy: 'static,
    F::Strategy: 'static,
{
    type Parameters = (S::Parameters, F::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, f_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(Failable::success),
            any_with::<F>(f_params).prop_map(Failable::failure),
        ]
        .boxed()
    }
}
