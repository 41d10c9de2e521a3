//! Values stored in a [`Bundle`](crate::Bundle).

use crate::bundle::Bundle;
use crate::object::{Parcelable, Serializable};
use crate::types::{Binder, CharSequence, Size, SizeF};
use std::sync::Arc;

/// A single container entry, tagged by accessor family.
#[derive(Debug, Clone)]
pub enum Value {
    /// `bool`.
    Boolean(bool),
    /// `i8`.
    Byte(i8),
    /// `char`.
    Char(char),
    /// `f64`.
    Double(f64),
    /// `f32`.
    Float(f32),
    /// `i32`.
    Int(i32),
    /// `i64`.
    Long(i64),
    /// `i16`.
    Short(i16),
    /// Text string.
    String(String),
    /// Generic character sequence.
    CharSequence(CharSequence),
    /// Nested container.
    Bundle(Bundle),
    /// IPC handle.
    Binder(Binder),
    /// Integer size.
    Size(Size),
    /// Floating point size.
    SizeF(SizeF),
    /// `i8` array.
    ByteArray(Box<[i8]>),
    /// `bool` array.
    BooleanArray(Box<[bool]>),
    /// `char` array.
    CharArray(Box<[char]>),
    /// `f64` array.
    DoubleArray(Box<[f64]>),
    /// `f32` array.
    FloatArray(Box<[f32]>),
    /// `i32` array.
    IntArray(Box<[i32]>),
    /// `i64` array.
    LongArray(Box<[i64]>),
    /// `i16` array.
    ShortArray(Box<[i16]>),
    /// Text string array.
    StringArray(Box<[String]>),
    /// Character sequence array.
    CharSequenceArray(Box<[CharSequence]>),
    /// Growable list of character sequences.
    CharSequenceArrayList(Vec<CharSequence>),
    /// Growable list of integers.
    IntegerArrayList(Vec<i32>),
    /// Growable list of text strings.
    StringArrayList(Vec<String>),
    /// Array of platform-transferable objects.
    ParcelableArray(Box<[Arc<dyn Parcelable>]>),
    /// Growable list of platform-transferable objects.
    ParcelableArrayList(Vec<Arc<dyn Parcelable>>),
    /// Value that can be flattened to bytes.
    Serializable(Arc<dyn Serializable>),
    /// Platform-transferable object.
    Parcelable(Arc<dyn Parcelable>),
}

impl Value {
    /// Returns the accessor family name of this value.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Byte(_) => "Byte",
            Self::Char(_) => "Char",
            Self::Double(_) => "Double",
            Self::Float(_) => "Float",
            Self::Int(_) => "Int",
            Self::Long(_) => "Long",
            Self::Short(_) => "Short",
            Self::String(_) => "String",
            Self::CharSequence(_) => "CharSequence",
            Self::Bundle(_) => "Bundle",
            Self::Binder(_) => "Binder",
            Self::Size(_) => "Size",
            Self::SizeF(_) => "SizeF",
            Self::ByteArray(_) => "ByteArray",
            Self::BooleanArray(_) => "BooleanArray",
            Self::CharArray(_) => "CharArray",
            Self::DoubleArray(_) => "DoubleArray",
            Self::FloatArray(_) => "FloatArray",
            Self::IntArray(_) => "IntArray",
            Self::LongArray(_) => "LongArray",
            Self::ShortArray(_) => "ShortArray",
            Self::StringArray(_) => "StringArray",
            Self::CharSequenceArray(_) => "CharSequenceArray",
            Self::CharSequenceArrayList(_) => "CharSequenceArrayList",
            Self::IntegerArrayList(_) => "IntegerArrayList",
            Self::StringArrayList(_) => "StringArrayList",
            Self::ParcelableArray(_) => "ParcelableArray",
            Self::ParcelableArrayList(_) => "ParcelableArrayList",
            Self::Serializable(_) => "Serializable",
            Self::Parcelable(_) => "Parcelable",
        }
    }
}

/// Object-valued entries compare by identity; everything else by value.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::CharSequence(a), Self::CharSequence(b)) => a == b,
            (Self::Bundle(a), Self::Bundle(b)) => a == b,
            (Self::Binder(a), Self::Binder(b)) => a == b,
            (Self::Size(a), Self::Size(b)) => a == b,
            (Self::SizeF(a), Self::SizeF(b)) => a == b,
            (Self::ByteArray(a), Self::ByteArray(b)) => a == b,
            (Self::BooleanArray(a), Self::BooleanArray(b)) => a == b,
            (Self::CharArray(a), Self::CharArray(b)) => a == b,
            (Self::DoubleArray(a), Self::DoubleArray(b)) => a == b,
            (Self::FloatArray(a), Self::FloatArray(b)) => a == b,
            (Self::IntArray(a), Self::IntArray(b)) => a == b,
            (Self::LongArray(a), Self::LongArray(b)) => a == b,
            (Self::ShortArray(a), Self::ShortArray(b)) => a == b,
            (Self::StringArray(a), Self::StringArray(b)) => a == b,
            (Self::CharSequenceArray(a), Self::CharSequenceArray(b)) => a == b,
            (Self::CharSequenceArrayList(a), Self::CharSequenceArrayList(b)) => a == b,
            (Self::IntegerArrayList(a), Self::IntegerArrayList(b)) => a == b,
            (Self::StringArrayList(a), Self::StringArrayList(b)) => a == b,
            (Self::ParcelableArray(a), Self::ParcelableArray(b)) => same_objects(a, b),
            (Self::ParcelableArrayList(a), Self::ParcelableArrayList(b)) => same_objects(a, b),
            (Self::Serializable(a), Self::Serializable(b)) => Arc::ptr_eq(a, b),
            (Self::Parcelable(a), Self::Parcelable(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn same_objects(a: &[Arc<dyn Parcelable>], b: &[Arc<dyn Parcelable>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker;

    impl Parcelable for Marker {}

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Int(1).kind(), "Int");
        assert_eq!(Value::SizeF(SizeF::new(1.0, 2.0)).kind(), "SizeF");
        assert_eq!(
            Value::CharSequenceArrayList(Vec::new()).kind(),
            "CharSequenceArrayList"
        );
    }

    #[test]
    fn test_value_eq_by_value() {
        assert_eq!(Value::Int(3), Value::Int(3));
        assert_ne!(Value::Int(3), Value::Long(3));
        assert_eq!(
            Value::IntArray(vec![1, 2].into_boxed_slice()),
            Value::IntArray(vec![1, 2].into_boxed_slice())
        );
    }

    #[test]
    fn test_value_eq_objects_by_identity() {
        let shared: Arc<dyn Parcelable> = Arc::new(Marker);
        assert_eq!(
            Value::Parcelable(Arc::clone(&shared)),
            Value::Parcelable(shared)
        );
        assert_ne!(
            Value::Parcelable(Arc::new(Marker)),
            Value::Parcelable(Arc::new(Marker))
        );
    }
}
