//! Fluent validator with deferred checks
//!
//! A [`Validator`] collects checks against *accessors*: closures that produce
//! the value to test. Nothing is read when a check is registered; every
//! accessor runs only when a terminal method evaluates the validator.
//!
//! # Strategies
//!
//! - [`Strategy::CollectAll`] runs every check and reports all failures.
//! - [`Strategy::FailFast`] stops at the first failing check; later checks and
//!   their accessors are never invoked.
//!
//! # Prerequisites
//!
//! Several checks register simpler checks ahead of themselves. For example
//! [`Validator::require_in_range`] first registers a not-null and a numeric
//! check. A failing prerequisite does not suppress the dependent check. Checks
//! that cannot judge a value (null, or the wrong kind) pass it, so each problem
//! is reported once. Not-blank is the exception: null text is blank, so a null
//! value under a text check reports both the null and the blank message.
//!
//! # Example
//!
//! ```rust
//! use fluentcheck::Validator;
//!
//! let username = String::from("john_doe");
//! let email = String::from("john@example");
//! let age: Option<u32> = Some(150);
//!
//! let errors = Validator::collect_all()
//!     .require_not_blank(|| username.as_str(), "Username")
//!     .require_valid_email(|| email.as_str(), "Email")
//!     .require_in_range(|| age, 18, 120, "Age")
//!     .validate_and_return_errors();
//!
//! assert_eq!(
//!     errors,
//!     vec![
//!         "Email must be a valid email address",
//!         "Age must be between 18.0 and 120.0",
//!     ]
//! );
//! ```

use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::inspect::{Inspect, Text};
use crate::predicate::Predicate;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9-]+\.[A-Za-z]{2,}$").expect("email regex is valid")
});

const MAX_EMAIL_LENGTH: usize = 254;

type Check<'a> = Box<dyn Fn() -> Option<String> + 'a>;

/// How a [`Validator`] reacts to failing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Run every check and report every failure.
    CollectAll,
    /// Stop at the first failure.
    FailFast,
}

/// An ordered list of deferred checks evaluated under a [`Strategy`].
///
/// Registration methods take the validator by value and return it, so checks
/// are chained. The lifetime `'a` lets accessors borrow the values they read.
///
/// A validator can be evaluated any number of times. Each evaluation runs the
/// accessors again; nothing is cached between runs.
///
/// Accessors are shared between a check and its prerequisites, so the type is
/// neither `Send` nor `Sync`.
pub struct Validator<'a> {
    checks: Vec<Check<'a>>,
    strategy: Strategy,
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("strategy", &self.strategy)
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl<'a> Validator<'a> {
    /// Create an empty validator using `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            checks: Vec::new(),
            strategy,
        }
    }

    /// Create a validator that reports every failing check.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentcheck::Validator;
    ///
    /// let err = Validator::collect_all()
    ///     .require_non_null(|| None::<u32>, "Id")
    ///     .require_true(|| false, "Accepted")
    ///     .validate()
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.errors(), ["Id must not be null", "Accepted must be true"]);
    /// ```
    pub fn collect_all() -> Self {
        Self::new(Strategy::CollectAll)
    }

    /// Create a validator that stops at the first failing check.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentcheck::Validator;
    ///
    /// let err = Validator::fail_fast()
    ///     .require_non_null(|| None::<u32>, "Id")
    ///     .require_true(|| false, "Accepted")
    ///     .validate()
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "Validation failed: Id must not be null");
    /// ```
    pub fn fail_fast() -> Self {
        Self::new(Strategy::FailFast)
    }

    /// The strategy chosen at construction.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of registered checks, prerequisites included.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when no check has been registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    // ==================== Registration ====================

    /// Require the value to be present.
    ///
    /// Fails with `"{name} must not be null"` when the accessor returns `None`.
    pub fn require_non_null<T, F>(mut self, accessor: F, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self
    }

    /// Require the value to be present and not empty.
    ///
    /// Text, sequences, sets, maps and `Option<Option<T>>` have an emptiness;
    /// other kinds pass. Fails with `"{name} must not be empty"`, after the
    /// not-null prerequisite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentcheck::Validator;
    ///
    /// let tags: Vec<String> = Vec::new();
    /// let errors = Validator::collect_all()
    ///     .require_non_empty(|| &tags, "Tags")
    ///     .validate_and_return_errors();
    ///
    /// assert_eq!(errors, vec!["Tags must not be empty"]);
    /// ```
    pub fn require_non_empty<T, F>(mut self, accessor: F, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_check(&accessor, format!("{name} must not be empty"), |value: &T| {
            value.is_empty_value() == Some(true)
        });
        self
    }

    /// Require the text to contain something other than whitespace.
    ///
    /// Fails with `"{name} must not be blank"`, after the not-null
    /// prerequisite. Null counts as blank, so a null value fails both.
    pub fn require_not_blank<T, F>(mut self, accessor: F, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Text + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_not_blank(&accessor, name);
        self
    }

    /// Require the value to be a recognized numeric kind.
    ///
    /// Fails with `"{name} must be numeric"`, after the not-null prerequisite.
    pub fn require_numeric<T, F>(mut self, accessor: F, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_numeric(&accessor, name);
        self
    }

    /// Require `min <= value <= max`, compared in the value's own numeric kind.
    ///
    /// Fails with `"{name} must be between {min} and {max}"`, after the
    /// not-null and numeric prerequisites.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentcheck::Validator;
    ///
    /// let age = 200;
    /// let errors = Validator::collect_all()
    ///     .require_in_range(|| age, 0, 100, "Age")
    ///     .validate_and_return_errors();
    ///
    /// assert_eq!(errors, vec!["Age must be between 0.0 and 100.0"]);
    /// ```
    pub fn require_in_range<T, F>(
        mut self,
        accessor: F,
        min: impl Into<f64>,
        max: impl Into<f64>,
        name: &str,
    ) -> Self
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        let (min, max) = (min.into(), max.into());
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_numeric(&accessor, name);
        self.push_check(
            &accessor,
            format!("{name} must be between {min:?} and {max:?}"),
            move |value: &T| {
                value
                    .as_number()
                    .is_some_and(|n| n.is_below(min) || n.is_above(max))
            },
        );
        self
    }

    /// Require the value to be zero or greater.
    ///
    /// Fails with `"{name} must be positive or zero"`, after the not-null and
    /// numeric prerequisites.
    pub fn require_positive_or_zero<T, F>(mut self, accessor: F, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_numeric(&accessor, name);
        self.push_check(
            &accessor,
            format!("{name} must be positive or zero"),
            |value: &T| value.as_number().is_some_and(|n| n.is_below(0.0)),
        );
        self
    }

    /// Require the value to be zero or less.
    ///
    /// Fails with `"{name} must be negative or zero"`, after the not-null and
    /// numeric prerequisites.
    pub fn require_negative_or_zero<T, F>(mut self, accessor: F, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_numeric(&accessor, name);
        self.push_check(
            &accessor,
            format!("{name} must be negative or zero"),
            |value: &T| value.as_number().is_some_and(|n| n.is_above(0.0)),
        );
        self
    }

    /// Require the trimmed text to match `regex` in full.
    ///
    /// The pattern is compiled here, once. Fails with
    /// `"{name} must match pattern: {regex}"`, after the not-null and not-blank
    /// prerequisites. A pattern that does not compile matches nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentcheck::Validator;
    ///
    /// let code = "  AB-12 ";
    /// assert!(Validator::fail_fast()
    ///     .require_matches(|| code, r"[A-Z]{2}-\d+", "Code")
    ///     .validate()
    ///     .is_ok());
    /// ```
    pub fn require_matches<T, F>(mut self, accessor: F, regex: &str, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Text + 'a,
    {
        // Anchoring an unbalanced pattern can make it compile, so check it bare first.
        let pattern = Regex::new(regex).and_then(|_| Regex::new(&format!("^(?:{regex})$")));
        #[cfg(feature = "tracing")]
        if let Err(err) = &pattern {
            tracing::warn!(check = name, pattern = regex, error = %err, "pattern does not compile");
        }

        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_not_blank(&accessor, name);
        self.push_check(
            &accessor,
            format!("{name} must match pattern: {regex}"),
            move |value: &T| match value.as_text() {
                Some(text) => !pattern
                    .as_ref()
                    .is_ok_and(|pattern| pattern.is_match(text.trim())),
                None => false,
            },
        );
        self
    }

    /// Require the condition to be true.
    ///
    /// Fails with `"{name} must be true"`.
    pub fn require_true<F>(mut self, condition: F, name: &str) -> Self
    where
        F: Fn() -> bool + 'a,
    {
        let message = format!("{name} must be true");
        self.checks
            .push(Box::new(move || (!condition()).then(|| message.clone())));
        self
    }

    /// Require the condition to be false.
    ///
    /// Fails with `"{name} must be false"`.
    pub fn require_false<F>(mut self, condition: F, name: &str) -> Self
    where
        F: Fn() -> bool + 'a,
    {
        let message = format!("{name} must be false");
        self.checks
            .push(Box::new(move || condition().then(|| message.clone())));
        self
    }

    /// Require the text to look like an email address of at most 254 characters.
    ///
    /// Accepts `local@domain.tld` where the local part uses letters, digits,
    /// `_`, `.` and `-`, the domain is a single label of letters, digits and
    /// `-`, and the top-level domain has two or more letters. Fails with
    /// `"{name} must be a valid email address"`, after the not-null and
    /// not-blank prerequisites.
    pub fn require_valid_email<T, F>(mut self, accessor: F, name: &str) -> Self
    where
        F: Fn() -> T + 'a,
        T: Text + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_not_blank(&accessor, name);
        self.push_check(
            &accessor,
            format!("{name} must be a valid email address"),
            |value: &T| {
                value.as_text().is_some_and(|email| {
                    !EMAIL_PATTERN.is_match(email) || email.chars().count() > MAX_EMAIL_LENGTH
                })
            },
        );
        self
    }

    /// Require the value to satisfy `condition`.
    ///
    /// Fails with `message` exactly as given, after the not-null prerequisite.
    /// The condition is not consulted for a null value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentcheck::Validator;
    ///
    /// let quantity = 10;
    /// let errors = Validator::collect_all()
    ///     .require_that(|| quantity, |q: &i32| *q == 0, "Quantity", "Quantity must be zero")
    ///     .validate_and_return_errors();
    ///
    /// assert_eq!(errors, vec!["Quantity must be zero"]);
    /// ```
    pub fn require_that<T, F, P>(
        mut self,
        accessor: F,
        condition: P,
        name: &str,
        message: &str,
    ) -> Self
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
        P: Predicate<T> + 'a,
    {
        let accessor = Rc::new(accessor);
        self.push_non_null(&accessor, name);
        self.push_check(&accessor, message.to_string(), move |value: &T| {
            !value.is_null() && !condition.check(value)
        });
        self
    }

    fn push_check<T, F, V>(&mut self, accessor: &Rc<F>, message: String, violated: V)
    where
        F: Fn() -> T + 'a,
        T: 'a,
        V: Fn(&T) -> bool + 'a,
    {
        let accessor = Rc::clone(accessor);
        self.checks.push(Box::new(move || {
            let value = accessor();
            violated(&value).then(|| message.clone())
        }));
    }

    fn push_non_null<T, F>(&mut self, accessor: &Rc<F>, name: &str)
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        self.push_check(accessor, format!("{name} must not be null"), |value: &T| {
            value.is_null()
        });
    }

    fn push_not_blank<T, F>(&mut self, accessor: &Rc<F>, name: &str)
    where
        F: Fn() -> T + 'a,
        T: Text + 'a,
    {
        self.push_check(accessor, format!("{name} must not be blank"), |value: &T| {
            value.is_null() || value.as_text().is_none_or(|text| text.trim().is_empty())
        });
    }

    fn push_numeric<T, F>(&mut self, accessor: &Rc<F>, name: &str)
    where
        F: Fn() -> T + 'a,
        T: Inspect + 'a,
    {
        self.push_check(accessor, format!("{name} must be numeric"), |value: &T| {
            !value.is_null() && value.as_number().is_none()
        });
    }

    // ==================== Evaluation ====================

    /// Evaluate under the validator's strategy.
    ///
    /// On failure the error's message is `"Validation failed: "` followed by
    /// the failures joined with `", "`, and [`ValidationError::errors`] holds
    /// them individually. A fail-fast validator reports only the first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let errors = self.run(self.strategy);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_failures(errors))
        }
    }

    /// Evaluate under the validator's strategy, failing with the error built
    /// by `error`.
    ///
    /// `error` is called once when any check fails and never otherwise. The
    /// individual failure messages are discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fluentcheck::Validator;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct BadRequest;
    ///
    /// let name = "";
    /// let result = Validator::fail_fast()
    ///     .require_not_blank(|| name, "Name")
    ///     .validate_or_fail_with(|| BadRequest);
    ///
    /// assert_eq!(result, Err(BadRequest));
    /// ```
    pub fn validate_or_fail_with<E, F>(&self, error: F) -> Result<(), E>
    where
        F: FnOnce() -> E,
    {
        if self.run(self.strategy).is_empty() {
            Ok(())
        } else {
            Err(error())
        }
    }

    /// Run every check, whatever the strategy, and return the failures in
    /// registration order.
    pub fn validate_and_return_errors(&self) -> Vec<String> {
        self.run(Strategy::CollectAll)
    }

    fn run(&self, strategy: Strategy) -> Vec<String> {
        let errors: Vec<String> = match strategy {
            Strategy::CollectAll => self.checks.iter().filter_map(|check| check()).collect(),
            Strategy::FailFast => self.checks.iter().find_map(|check| check()).into_iter().collect(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?strategy,
            checks = self.checks.len(),
            failures = errors.len(),
            "validation evaluated"
        );

        errors
    }
}
