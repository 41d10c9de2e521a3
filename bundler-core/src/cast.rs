//! Narrowing of values read from a bundle to a field's declared type.
//!
//! Concrete families come back already typed, so their cast is the
//! identity. The dynamic families hand back trait objects that are narrowed
//! by downcasting.

use crate::bundle::Bundle;
use crate::error::{Error, Result};
use crate::object::{Parcelable, Serializable};
use crate::types::{Binder, CharSequence, Size, SizeF};
use std::sync::Arc;

/// Conversion from a value read out of a bundle into a target type.
pub trait CastFrom<S>: Sized {
    /// Narrows `value`, returning `None` if it is not a `Self`.
    fn cast_from(value: S) -> Option<Self>;
}

macro_rules! identity_cast {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CastFrom<$ty> for $ty {
                #[inline]
                fn cast_from(value: $ty) -> Option<Self> {
                    Some(value)
                }
            }
        )*
    };
}

identity_cast!(
    bool,
    i8,
    char,
    f64,
    f32,
    i32,
    i64,
    i16,
    String,
    CharSequence,
    Bundle,
    Binder,
    Size,
    SizeF,
    Box<[i8]>,
    Box<[bool]>,
    Box<[char]>,
    Box<[f64]>,
    Box<[f32]>,
    Box<[i32]>,
    Box<[i64]>,
    Box<[i16]>,
    Box<[String]>,
    Box<[CharSequence]>,
    Vec<CharSequence>,
    Vec<i32>,
    Vec<String>,
);

impl<T: Parcelable + Clone> CastFrom<Arc<dyn Parcelable>> for T {
    fn cast_from(value: Arc<dyn Parcelable>) -> Option<Self> {
        (*value).as_any().downcast_ref::<T>().cloned()
    }
}

impl<T: Serializable + Clone> CastFrom<Arc<dyn Serializable>> for T {
    fn cast_from(value: Arc<dyn Serializable>) -> Option<Self> {
        (*value).as_any().downcast_ref::<T>().cloned()
    }
}

impl<T: Parcelable + Clone> CastFrom<Box<[Arc<dyn Parcelable>]>> for Box<[T]> {
    fn cast_from(value: Box<[Arc<dyn Parcelable>]>) -> Option<Self> {
        value
            .iter()
            .map(|item| (**item).as_any().downcast_ref::<T>().cloned())
            .collect::<Option<Vec<T>>>()
            .map(Vec::into_boxed_slice)
    }
}

/// Narrows a required value read under `key`.
///
/// # Errors
/// Returns [`Error::MissingKey`] if nothing was stored and
/// [`Error::CastFailed`] if the stored value is not a `T`.
pub fn cast<T, S>(value: Option<S>, key: &str) -> Result<T>
where
    T: CastFrom<S>,
{
    let value = require(value, key)?;
    T::cast_from(value).ok_or_else(|| Error::cast_failed(key, std::any::type_name::<T>()))
}

/// Narrows an optional value read under `key`; absence maps to `None`.
///
/// # Errors
/// Returns [`Error::CastFailed`] if a stored value is not a `T`.
pub fn cast_nullable<T, S>(value: Option<S>, key: &str) -> Result<Option<T>>
where
    T: CastFrom<S>,
{
    value
        .map(|value| {
            T::cast_from(value).ok_or_else(|| Error::cast_failed(key, std::any::type_name::<T>()))
        })
        .transpose()
}

/// Requires a value to be present under `key`.
///
/// # Errors
/// Returns [`Error::MissingKey`] if `value` is `None`.
pub fn require<T>(value: Option<T>, key: &str) -> Result<T> {
    value.ok_or_else(|| Error::missing_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
    }

    impl Parcelable for Point {}

    #[derive(Debug, Clone, PartialEq, serde::Serialize)]
    struct Note {
        text: String,
    }

    #[test]
    fn test_identity_cast() {
        assert_eq!(cast::<i32, _>(Some(5), "k").unwrap(), 5);
        assert_eq!(
            cast::<Vec<String>, _>(Some(vec![String::from("a")]), "k").unwrap(),
            vec![String::from("a")]
        );
    }

    #[test]
    fn test_cast_missing_key() {
        let err = cast::<i32, i32>(None, "KEY_x").unwrap_err();
        assert!(matches!(err, Error::MissingKey { key } if key == "KEY_x"));
    }

    #[test]
    fn test_cast_nullable_absent() {
        assert_eq!(cast_nullable::<String, String>(None, "k").unwrap(), None);
        assert_eq!(cast_nullable::<i64, _>(Some(9_i64), "k").unwrap(), Some(9));
    }

    #[test]
    fn test_parcelable_downcast() {
        let value: Arc<dyn Parcelable> = Arc::new(Point { x: 3 });
        assert_eq!(cast::<Point, _>(Some(value), "k").unwrap(), Point { x: 3 });
    }

    #[test]
    fn test_parcelable_wrong_type() {
        let value: Arc<dyn Parcelable> = Arc::new(Bundle::new());
        let err = cast::<Point, _>(Some(value), "k").unwrap_err();
        assert!(matches!(err, Error::CastFailed { .. }));
    }

    #[test]
    fn test_serializable_downcast() {
        let note = Note {
            text: String::from("hi"),
        };
        let value: Arc<dyn Serializable> = Arc::new(note.clone());
        assert_eq!(cast::<Note, _>(Some(value), "k").unwrap(), note);
    }

    #[test]
    fn test_parcelable_array_downcast() {
        let items: Box<[Arc<dyn Parcelable>]> =
            vec![Arc::new(Point { x: 1 }) as Arc<dyn Parcelable>].into_boxed_slice();
        let points = cast::<Box<[Point]>, _>(Some(items), "k").unwrap();
        assert_eq!(&*points, &[Point { x: 1 }]);
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(1), "k").unwrap(), 1);
        assert!(require::<i32>(None, "k").is_err());
    }
}
