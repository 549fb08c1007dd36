//! Assertion macros for tests written against a [`Validator`](crate::Validator)
//!
//! # Example
//!
//! ```rust
//! use fluentcheck::{assert_errors, assert_fails, assert_passes, Validator};
//!
//! let name = "Ada";
//! assert_passes!(Validator::collect_all().require_not_blank(|| name, "Name"));
//!
//! let age = -1;
//! let v = Validator::collect_all().require_positive_or_zero(|| age, "Age");
//! assert_fails!(v);
//! assert_errors!(v, ["Age must be positive or zero"]);
//! ```

/// Assert that a validator passes under its strategy.
///
/// Panics with the validation error when it does not.
#[macro_export]
macro_rules! assert_passes {
    ($validator:expr) => {
        match $validator.validate() {
            ::core::result::Result::Ok(()) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected validation to pass, got: {:?}", e.errors());
            }
        }
    };
}

/// Assert that a validator fails under its strategy.
#[macro_export]
macro_rules! assert_fails {
    ($validator:expr) => {
        if $validator.validate().is_ok() {
            panic!("Expected validation to fail, but it passed");
        }
    };
}

/// Assert that running every check yields exactly the expected messages, in order.
#[macro_export]
macro_rules! assert_errors {
    ($validator:expr, $expected:expr) => {{
        let errors = $validator.validate_and_return_errors();
        let expected: ::std::vec::Vec<::std::string::String> = $expected
            .into_iter()
            .map(::std::string::ToString::to_string)
            .collect();
        assert_eq!(errors, expected);
    }};
}
