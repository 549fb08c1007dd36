//! Conditions for custom checks
//!
//! [`Validator::require_that`](crate::Validator::require_that) accepts any
//! [`Predicate`]. Closures of the form `Fn(&T) -> bool` are predicates, and
//! predicates compose with [`PredicateExt::and`], [`PredicateExt::or`] and
//! [`PredicateExt::not`].
//!
//! # Example
//!
//! ```rust
//! use fluentcheck::predicate::{Predicate, PredicateExt};
//!
//! let adult = |age: &u32| *age >= 18;
//! let retired = |age: &u32| *age >= 67;
//! let working_age = adult.and(retired.not());
//!
//! assert!(working_age.check(&30));
//! assert!(!working_age.check(&12));
//! assert!(!working_age.check(&70));
//! ```

/// A condition over values of type `T`.
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Logical combinators available on every [`Predicate`].
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Both predicates must hold. Short-circuits on the left.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Either predicate must hold. Short-circuits on the left.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// Inverts a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
