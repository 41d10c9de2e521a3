//! The typed key-value container.
//!
//! A [`Bundle`] maps string keys to [`Value`]s. Every value family has a
//! `put_*` / `get_*` pair:
//! - `put_*` replaces whatever was stored under the key
//! - `get_*` returns `Ok(None)` for an absent key and
//!   [`Error::TypeMismatch`] when the key holds another family

use crate::error::{Error, Result};
use crate::object::{Parcelable, Serializable};
use crate::types::{Binder, CharSequence, Size, SizeF};
use crate::value::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Typed key-value container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    values: BTreeMap<String, Value>,
}

impl Bundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the bundle holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if a value of any family is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Stores a raw value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Removes the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Copies every entry of `other` into this bundle.
    pub fn put_all(&mut self, other: &Bundle) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Returns the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Stores a platform-transferable object.
    pub fn put_parcelable<T: Parcelable>(&mut self, key: impl Into<String>, value: T) {
        self.insert(key, Value::Parcelable(Arc::new(value)));
    }

    /// Reads a platform-transferable object.
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] if the key holds another family.
    pub fn get_parcelable(&self, key: &str) -> Result<Option<Arc<dyn Parcelable>>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Parcelable(value)) => Ok(Some(Arc::clone(value))),
            Some(other) => Err(Error::type_mismatch(key, "Parcelable", other.kind())),
        }
    }

    /// Stores an array of platform-transferable objects.
    pub fn put_parcelable_array<T: Parcelable>(&mut self, key: impl Into<String>, value: Box<[T]>) {
        let items = value
            .into_vec()
            .into_iter()
            .map(|item| Arc::new(item) as Arc<dyn Parcelable>)
            .collect();
        self.insert(key, Value::ParcelableArray(items));
    }

    /// Reads an array of platform-transferable objects.
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] if the key holds another family.
    pub fn get_parcelable_array(&self, key: &str) -> Result<Option<Box<[Arc<dyn Parcelable>]>>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::ParcelableArray(items)) => Ok(Some(items.clone())),
            Some(other) => Err(Error::type_mismatch(key, "ParcelableArray", other.kind())),
        }
    }

    /// Stores a list of platform-transferable objects.
    pub fn put_parcelable_array_list<T: Parcelable>(&mut self, key: impl Into<String>, value: Vec<T>) {
        let items = value
            .into_iter()
            .map(|item| Arc::new(item) as Arc<dyn Parcelable>)
            .collect();
        self.insert(key, Value::ParcelableArrayList(items));
    }

    /// Reads a list of platform-transferable objects as concrete `T`.
    ///
    /// The accessor is generic over the element type, so callers get a typed
    /// list back without a separate cast.
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] if the key holds another family and
    /// [`Error::CastFailed`] if an element is not a `T`.
    pub fn get_parcelable_array_list<T>(&self, key: &str) -> Result<Option<Vec<T>>>
    where
        T: Parcelable + Clone,
    {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::ParcelableArrayList(items)) => items
                .iter()
                .map(|item| {
                    (**item)
                        .as_any()
                        .downcast_ref::<T>()
                        .cloned()
                        .ok_or_else(|| Error::cast_failed(key, std::any::type_name::<T>()))
                })
                .collect::<Result<Vec<T>>>()
                .map(Some),
            Some(other) => Err(Error::type_mismatch(key, "ParcelableArrayList", other.kind())),
        }
    }

    /// Stores a value that can be flattened to bytes.
    pub fn put_serializable<T: Serializable>(&mut self, key: impl Into<String>, value: T) {
        self.insert(key, Value::Serializable(Arc::new(value)));
    }

    /// Reads a value that can be flattened to bytes.
    ///
    /// # Errors
    /// Returns [`Error::TypeMismatch`] if the key holds another family.
    pub fn get_serializable(&self, key: &str) -> Result<Option<Arc<dyn Serializable>>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(Value::Serializable(value)) => Ok(Some(Arc::clone(value))),
            Some(other) => Err(Error::type_mismatch(key, "Serializable", other.kind())),
        }
    }
}

/// Generates a `put_*` / `get_*` pair per concrete value family.
macro_rules! concrete_accessors {
    ($($variant:ident => $put:ident, $get:ident, $ty:ty;)*) => {
        impl Bundle {
            $(
                #[doc = concat!("Stores a `", stringify!($ty), "` under `key`.")]
                pub fn $put(&mut self, key: impl Into<String>, value: $ty) {
                    self.insert(key, Value::$variant(value));
                }

                #[doc = concat!("Reads the `", stringify!($ty), "` stored under `key`.")]
                ///
                /// # Errors
                /// Returns [`Error::TypeMismatch`] if the key holds another family.
                pub fn $get(&self, key: &str) -> Result<Option<$ty>> {
                    match self.values.get(key) {
                        None => Ok(None),
                        Some(Value::$variant(value)) => Ok(Some(value.clone())),
                        Some(other) => Err(Error::type_mismatch(
                            key,
                            stringify!($variant),
                            other.kind(),
                        )),
                    }
                }
            )*
        }
    };
}

concrete_accessors! {
    Boolean => put_boolean, get_boolean, bool;
    Byte => put_byte, get_byte, i8;
    Char => put_char, get_char, char;
    Double => put_double, get_double, f64;
    Float => put_float, get_float, f32;
    Int => put_int, get_int, i32;
    Long => put_long, get_long, i64;
    Short => put_short, get_short, i16;
    String => put_string, get_string, String;
    CharSequence => put_char_sequence, get_char_sequence, CharSequence;
    Bundle => put_bundle, get_bundle, Bundle;
    Binder => put_binder, get_binder, Binder;
    Size => put_size, get_size, Size;
    SizeF => put_size_f, get_size_f, SizeF;
    ByteArray => put_byte_array, get_byte_array, Box<[i8]>;
    BooleanArray => put_boolean_array, get_boolean_array, Box<[bool]>;
    CharArray => put_char_array, get_char_array, Box<[char]>;
    DoubleArray => put_double_array, get_double_array, Box<[f64]>;
    FloatArray => put_float_array, get_float_array, Box<[f32]>;
    IntArray => put_int_array, get_int_array, Box<[i32]>;
    LongArray => put_long_array, get_long_array, Box<[i64]>;
    ShortArray => put_short_array, get_short_array, Box<[i16]>;
    StringArray => put_string_array, get_string_array, Box<[String]>;
    CharSequenceArray => put_char_sequence_array, get_char_sequence_array, Box<[CharSequence]>;
    CharSequenceArrayList => put_char_sequence_array_list, get_char_sequence_array_list, Vec<CharSequence>;
    IntegerArrayList => put_integer_array_list, get_integer_array_list, Vec<i32>;
    StringArrayList => put_string_array_list, get_string_array_list, Vec<String>;
}

/// A bundle can itself travel as a platform-transferable object.
impl Parcelable for Bundle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Parcelable for Point {}

    #[derive(Debug, Clone, PartialEq)]
    struct Other;

    impl Parcelable for Other {}

    #[test]
    fn test_put_get_int() {
        let mut bundle = Bundle::new();
        bundle.put_int("a", 42);
        assert_eq!(bundle.get_int("a").unwrap(), Some(42));
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_absent_key_is_none() {
        let bundle = Bundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.get_string("missing").unwrap(), None);
        assert!(bundle.get_parcelable("missing").unwrap().is_none());
    }

    #[test]
    fn test_put_replaces_previous_value() {
        let mut bundle = Bundle::new();
        bundle.put_int("a", 1);
        bundle.put_string("a", String::from("text"));
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.get_string("a").unwrap().as_deref(), Some("text"));
    }

    #[test]
    fn test_family_mismatch() {
        let mut bundle = Bundle::new();
        bundle.put_long("a", 7);
        let err = bundle.get_int("a").unwrap_err();
        match err {
            Error::TypeMismatch { key, expected, found } => {
                assert_eq!(key, "a");
                assert_eq!(expected, "Int");
                assert_eq!(found, "Long");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_string_and_char_sequence_are_separate_families() {
        let mut bundle = Bundle::new();
        bundle.put_char_sequence("a", CharSequence::from("hello"));
        assert!(bundle.get_string("a").is_err());
        assert_eq!(
            bundle.get_char_sequence("a").unwrap(),
            Some(CharSequence::from("hello"))
        );
    }

    #[test]
    fn test_arrays_and_lists() {
        let mut bundle = Bundle::new();
        bundle.put_byte_array("bytes", vec![i8::MIN, 0, i8::MAX].into_boxed_slice());
        bundle.put_integer_array_list("ints", vec![1, 2, 3]);
        bundle.put_string_array("strings", Vec::new().into_boxed_slice());
        assert_eq!(
            bundle.get_byte_array("bytes").unwrap().as_deref(),
            Some(&[i8::MIN, 0, i8::MAX][..])
        );
        assert_eq!(bundle.get_integer_array_list("ints").unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(bundle.get_string_array("strings").unwrap().map(|s| s.len()), Some(0));
    }

    #[test]
    fn test_nested_bundle() {
        let mut inner = Bundle::new();
        inner.put_boolean("flag", true);
        let mut outer = Bundle::new();
        outer.put_bundle("inner", inner.clone());
        assert_eq!(outer.get_bundle("inner").unwrap(), Some(inner));
    }

    #[test]
    fn test_parcelable_round_trip() {
        let mut bundle = Bundle::new();
        bundle.put_parcelable("p", Point { x: 1, y: 2 });
        let value = bundle.get_parcelable("p").unwrap().unwrap();
        assert_eq!(
            (*value).as_any().downcast_ref::<Point>(),
            Some(&Point { x: 1, y: 2 })
        );
    }

    #[test]
    fn test_parcelable_array_list_typed() {
        let mut bundle = Bundle::new();
        let points = vec![Point { x: 1, y: 1 }, Point { x: 2, y: 2 }];
        bundle.put_parcelable_array_list("list", points.clone());
        assert_eq!(bundle.get_parcelable_array_list::<Point>("list").unwrap(), Some(points));
    }

    #[test]
    fn test_parcelable_array_list_wrong_element() {
        let mut bundle = Bundle::new();
        bundle.put_parcelable_array_list("list", vec![Other]);
        let err = bundle.get_parcelable_array_list::<Point>("list").unwrap_err();
        assert!(matches!(err, Error::CastFailed { .. }));
    }

    #[test]
    fn test_parcelable_array() {
        let mut bundle = Bundle::new();
        bundle.put_parcelable_array("arr", vec![Point { x: 3, y: 4 }].into_boxed_slice());
        let items = bundle.get_parcelable_array("arr").unwrap().unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_serializable() {
        let mut bundle = Bundle::new();
        bundle.put_serializable("s", vec![1_u32, 2]);
        let value = bundle.get_serializable("s").unwrap().unwrap();
        assert_eq!(value.to_bytes().unwrap(), b"[1,2]".to_vec());
        assert!(bundle.get_parcelable("s").is_err());
    }

    #[test]
    fn test_put_all_and_remove() {
        let mut a = Bundle::new();
        a.put_int("x", 1);
        let mut b = Bundle::new();
        b.put_int("y", 2);
        a.put_all(&b);
        assert_eq!(a.keys().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!(a.remove("x").is_some());
        assert!(!a.contains_key("x"));
    }

    #[test]
    fn test_size_values() {
        let mut bundle = Bundle::new();
        bundle.put_size("s", Size::new(10, 20));
        bundle.put_size_f("f", SizeF::new(1.5, 2.5));
        assert_eq!(bundle.get_size("s").unwrap(), Some(Size::new(10, 20)));
        assert_eq!(bundle.get_size_f("f").unwrap(), Some(SizeF::new(1.5, 2.5)));
        assert!(bundle.get_size("f").is_err());
    }
}
