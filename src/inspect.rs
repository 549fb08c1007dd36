//! Value kinds the built-in checks understand
//!
//! Accessors registered with a [`Validator`](crate::Validator) return any type
//! implementing [`Inspect`]. The trait answers the questions the checks ask:
//!
//! - is the value null? (`Option::None` is the only null)
//! - is it an emptiness-checkable kind, and if so is it empty?
//! - is it a recognized numeric kind?
//!
//! Text checks additionally require [`Text`], which exposes the value as `&str`.
//!
//! Every method has a default answering "not null, no emptiness, not numeric",
//! so a domain type opts in with an empty impl and can then be used with
//! `require_non_null` and `require_that`.
//!
//! # Emptiness kinds
//!
//! | Kind | Types |
//! |------|-------|
//! | text | `String`, `str`, `Cow<str>`, `Box<str>` |
//! | sequence | `Vec<T>`, `[T]`, `[T; N]`, `VecDeque<T>` |
//! | collection | `HashSet<T>`, `BTreeSet<T>` |
//! | map | `HashMap<K, V>`, `BTreeMap<K, V>` |
//! | optional | `Option<Option<T>>`: `Some(None)` is empty, outer `None` is null |
//!
//! Numbers, booleans and chars have no emptiness; the emptiness check passes
//! them through.
//!
//! # Example
//!
//! ```rust
//! use fluentcheck::{Inspect, Number};
//!
//! assert!(None::<String>.is_null());
//! assert_eq!(Vec::<u8>::new().is_empty_value(), Some(true));
//! assert_eq!(Some(Some(3i32)).is_empty_value(), None);
//! assert_eq!(Some(None::<i32>).is_empty_value(), Some(true));
//! assert_eq!(7u16.as_number(), Some(Number::Integer(7)));
//! assert_eq!("7".as_number(), None);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::number::Number;

/// Classification of a value for the null, emptiness and numeric checks.
pub trait Inspect {
    /// True when the value is absent.
    fn is_null(&self) -> bool {
        false
    }

    /// `Some(empty)` for emptiness-checkable kinds, `None` otherwise.
    fn is_empty_value(&self) -> Option<bool> {
        None
    }

    /// The value as a [`Number`] when it is a recognized numeric kind.
    fn as_number(&self) -> Option<Number> {
        None
    }
}

/// Textual values, for the blank, pattern and email checks.
pub trait Text: Inspect {
    /// The text, or `None` when the value is null.
    fn as_text(&self) -> Option<&str>;
}

macro_rules! impl_inspect_numeric {
    ($($t:ty),*) => {
        $(
            impl Inspect for $t {
                #[inline]
                fn as_number(&self) -> Option<Number> {
                    Some(Number::from(*self))
                }
            }
        )*
    };
}

impl_inspect_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Decimal
);

impl Inspect for bool {}
impl Inspect for char {}

macro_rules! impl_inspect_text {
    ($($t:ty),*) => {
        $(
            impl Inspect for $t {
                #[inline]
                fn is_empty_value(&self) -> Option<bool> {
                    Some(self.is_empty())
                }
            }
        )*
    };
}

impl_inspect_text!(str, String, Cow<'_, str>);

impl Text for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Text for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(&**self)
    }
}

macro_rules! impl_inspect_len {
    ($(impl<$($g:ident),*> for $t:ty;)*) => {
        $(
            impl<$($g),*> Inspect for $t {
                #[inline]
                fn is_empty_value(&self) -> Option<bool> {
                    Some(self.is_empty())
                }
            }
        )*
    };
}

impl_inspect_len! {
    impl<T> for Vec<T>;
    impl<T> for [T];
    impl<T> for VecDeque<T>;
    impl<T, S> for HashSet<T, S>;
    impl<T> for BTreeSet<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<K, V> for BTreeMap<K, V>;
}

impl<T, const N: usize> Inspect for [T; N] {
    #[inline]
    fn is_empty_value(&self) -> Option<bool> {
        Some(N == 0)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn is_empty_value(&self) -> Option<bool> {
        match self {
            None => None,
            // A present value that is itself null is an empty optional.
            Some(inner) if inner.is_null() => Some(true),
            Some(inner) => inner.is_empty_value(),
        }
    }

    #[inline]
    fn as_number(&self) -> Option<Number> {
        self.as_ref().and_then(Inspect::as_number)
    }
}

impl<T: Text> Text for Option<T> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::as_text)
    }
}

macro_rules! impl_inspect_deref {
    ($(impl<$g:ident> for $t:ty;)*) => {
        $(
            impl<$g: Inspect + ?Sized> Inspect for $t {
                #[inline]
                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                #[inline]
                fn is_empty_value(&self) -> Option<bool> {
                    (**self).is_empty_value()
                }

                #[inline]
                fn as_number(&self) -> Option<Number> {
                    (**self).as_number()
                }
            }

            impl<$g: Text + ?Sized> Text for $t {
                #[inline]
                fn as_text(&self) -> Option<&str> {
                    (**self).as_text()
                }
            }
        )*
    };
}

impl_inspect_deref! {
    impl<T> for &T;
    impl<T> for &mut T;
    impl<T> for Box<T>;
    impl<T> for Rc<T>;
    impl<T> for Arc<T>;
}
