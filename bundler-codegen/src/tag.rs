//! Container accessor families.

use crate::rust::to_snake_case;
use std::fmt;

/// The container family a field is stored under.
///
/// Each tag maps to one `put_*` / `get_*` pair on the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `bool`.
    Boolean,
    /// `i8`.
    Byte,
    /// `char`.
    Char,
    /// `f64`.
    Double,
    /// `f32`.
    Float,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `i16`.
    Short,
    /// Text string.
    String,
    /// Character sequence.
    CharSequence,
    /// Nested bundle.
    ContainerRef,
    /// IPC handle.
    OpaqueHandle,
    /// Integer size.
    Size,
    /// Floating point size.
    SizeF,
    /// `Box<[i8]>`.
    ByteArray,
    /// `Box<[bool]>`.
    BooleanArray,
    /// `Box<[char]>`.
    CharArray,
    /// `Box<[f64]>`.
    DoubleArray,
    /// `Box<[f32]>`.
    FloatArray,
    /// `Box<[i32]>`.
    IntArray,
    /// `Box<[i64]>`.
    LongArray,
    /// `Box<[i16]>`.
    ShortArray,
    /// `Box<[String]>`.
    StringArray,
    /// `Box<[CharSequence]>`.
    CharSequenceArray,
    /// `Vec<CharSequence>`.
    CharSequenceList,
    /// `Vec<i32>`.
    IntegerList,
    /// `Vec<String>`.
    StringList,
    /// Boxed slice of platform-transferable objects.
    PolymorphicArray,
    /// List of platform-transferable objects.
    PolymorphicList,
    /// Anything that can be flattened to bytes.
    SerializableFallback,
    /// Any platform-transferable object.
    PolymorphicFallback,
}

impl TypeTag {
    /// Returns the accessor suffix of the family.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Char => "Char",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::String => "String",
            Self::CharSequence => "CharSequence",
            Self::ContainerRef => "Bundle",
            Self::OpaqueHandle => "Binder",
            Self::Size => "Size",
            Self::SizeF => "SizeF",
            Self::ByteArray => "ByteArray",
            Self::BooleanArray => "BooleanArray",
            Self::CharArray => "CharArray",
            Self::DoubleArray => "DoubleArray",
            Self::FloatArray => "FloatArray",
            Self::IntArray => "IntArray",
            Self::LongArray => "LongArray",
            Self::ShortArray => "ShortArray",
            Self::StringArray => "StringArray",
            Self::CharSequenceArray => "CharSequenceArray",
            Self::CharSequenceList => "CharSequenceArrayList",
            Self::IntegerList => "IntegerArrayList",
            Self::StringList => "StringArrayList",
            Self::PolymorphicArray => "ParcelableArray",
            Self::PolymorphicList => "ParcelableArrayList",
            Self::SerializableFallback => "Serializable",
            Self::PolymorphicFallback => "Parcelable",
        }
    }

    /// Returns the name of the bundle's write accessor (`put_size_f`).
    #[must_use]
    pub fn put_method(self) -> String {
        format!("put_{}", to_snake_case(self.suffix()))
    }

    /// Returns the name of the bundle's read accessor (`get_size_f`).
    #[must_use]
    pub fn get_method(self) -> String {
        format!("get_{}", to_snake_case(self.suffix()))
    }

    /// Returns true if a value read for this family must be cast to the
    /// field's type.
    ///
    /// The list accessor for platform-transferable objects is generic over
    /// its element type and returns the typed list directly.
    #[must_use]
    pub const fn requires_cast(self) -> bool {
        !matches!(self, Self::PolymorphicList)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
