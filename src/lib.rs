//! # Fluentcheck
//!
//! Fluent, lazily-evaluated validation.
//!
//! Chain checks against *accessors* (closures returning the value to test),
//! then evaluate them all at once. Accessors run only at evaluation time, in
//! the order the checks were registered.
//!
//! Two strategies decide what happens on failure:
//! - **collect all**: run every check and report every failure
//! - **fail fast**: stop at the first failure
//!
//! ## Quick Example
//!
//! ```rust
//! use fluentcheck::Validator;
//!
//! let username = "john_doe";
//! let email = "john@example.com";
//! let age = 25;
//!
//! Validator::collect_all()
//!     .require_not_blank(|| username, "Username")
//!     .require_valid_email(|| email, "Email")
//!     .require_in_range(|| age, 18, 120, "Age")
//!     .validate()
//!     .expect("valid input");
//!
//! let balance = -10;
//! let err = Validator::fail_fast()
//!     .require_non_null(|| Some(42), "User ID")
//!     .require_positive_or_zero(|| balance, "Account Balance")
//!     .validate()
//!     .unwrap_err();
//! assert_eq!(err.errors(), ["Account Balance must be positive or zero"]);
//! ```
//!
//! ## Reporting failures
//!
//! - [`Validator::validate`] returns a [`ValidationError`] listing the failures.
//! - [`Validator::validate_or_fail_with`] returns an error built by the caller.
//! - [`Validator::validate_and_return_errors`] returns the messages as a `Vec`.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when validators are evaluated
//! - `serde`: `Serialize`/`Deserialize` for [`ValidationError`] and [`Strategy`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod inspect;
pub mod number;
pub mod predicate;
pub mod testing;
pub mod validator;

// Re-exports
pub use error::ValidationError;
pub use inspect::{Inspect, Text};
pub use number::Number;
pub use predicate::{Predicate, PredicateExt};
pub use validator::{Strategy, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ValidationError;
    pub use crate::inspect::{Inspect, Text};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::validator::{Strategy, Validator};
}
