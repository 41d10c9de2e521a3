//! Type descriptors.
//!
//! A [`TypeDescriptor`] is the schema-level view of a field, parameter or
//! return type. It keeps just enough structure for classification:
//! primitives and their nullable counterparts, nominal types with generic
//! arguments, boxed slices and optional values. Everything else is kept as
//! opaque text.

use std::fmt;

/// Canonical names of the types the classifier knows about.
pub mod names {
    /// Owned text string.
    pub const STRING: &str = "String";
    /// Generic character sequence.
    pub const CHAR_SEQUENCE: &str = "CharSequence";
    /// The container itself.
    pub const BUNDLE: &str = "Bundle";
    /// IPC handle.
    pub const BINDER: &str = "Binder";
    /// Integer size.
    pub const SIZE: &str = "Size";
    /// Floating point size.
    pub const SIZE_F: &str = "SizeF";
    /// Growable list.
    pub const VEC: &str = "Vec";
    /// Platform-transferable capability.
    pub const PARCELABLE: &str = "Parcelable";
    /// Flatten-to-bytes capability.
    pub const SERIALIZABLE: &str = "Serializable";
}

/// Primitive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
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
}

impl PrimitiveKind {
    /// All kinds, in classification order.
    pub const ALL: [Self; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
    ];

    /// Returns the Rust spelling of the kind.
    #[must_use]
    pub const fn rust_name(self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Byte => "i8",
            Self::Char => "char",
            Self::Double => "f64",
            Self::Float => "f32",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Short => "i16",
        }
    }

    /// Parses a Rust primitive spelling.
    #[must_use]
    pub fn from_rust_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.rust_name() == name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// A nominal type with its generic arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclaredType {
    /// Canonical path (`String`, `Vec`, `crate::geo::Point`).
    pub name: String,
    /// Generic arguments; primitive arguments are always [`TypeDescriptor::Boxed`].
    pub args: Vec<TypeDescriptor>,
}

/// Schema-level description of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A primitive value (`i32`).
    Primitive(PrimitiveKind),
    /// A nullable primitive (`Option<i32>`), the reference counterpart of a
    /// primitive.
    Boxed(PrimitiveKind),
    /// A nominal type.
    Declared(DeclaredType),
    /// A boxed slice (`Box<[T]>`).
    Array(Box<TypeDescriptor>),
    /// An optional non-primitive value (`Option<T>`).
    Nullable(Box<TypeDescriptor>),
    /// Syntax with no model (references, tuples, fixed arrays, nested options).
    Opaque(String),
}

impl TypeDescriptor {
    /// Creates a nominal type without generic arguments.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Declared(DeclaredType {
            name: name.into(),
            args: Vec::new(),
        })
    }

    /// Creates a nominal type with generic arguments.
    ///
    /// Primitive arguments are stored as their nullable counterpart.
    #[must_use]
    pub fn declared(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        Self::Declared(DeclaredType {
            name: name.into(),
            args: args.into_iter().map(Self::into_type_arg).collect(),
        })
    }

    /// Creates a boxed slice of `element`.
    #[must_use]
    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array(Box::new(element))
    }

    /// Wraps `inner` in `Option`.
    #[must_use]
    pub fn nullable(inner: TypeDescriptor) -> Self {
        match inner {
            Self::Primitive(kind) => Self::Boxed(kind),
            Self::Boxed(_) | Self::Nullable(_) => Self::Opaque(format!("Option<{inner}>")),
            other => Self::Nullable(Box::new(other)),
        }
    }

    fn into_type_arg(self) -> Self {
        match self {
            Self::Primitive(kind) => Self::Boxed(kind),
            other => other,
        }
    }

    /// Returns true for `Option` types.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Boxed(_) | Self::Nullable(_))
    }

    /// Strips an outer `Nullable` wrapper.
    #[must_use]
    pub fn non_null(&self) -> &TypeDescriptor {
        match self {
            Self::Nullable(inner) => inner,
            other => other,
        }
    }

    /// Returns the type of a present value: `Option<T>` becomes `T`.
    #[must_use]
    pub fn value_type(&self) -> TypeDescriptor {
        match self {
            Self::Boxed(kind) => Self::Primitive(*kind),
            Self::Nullable(inner) => (**inner).clone(),
            other => other.clone(),
        }
    }

    /// Returns the type with generic arguments removed.
    #[must_use]
    pub fn erasure(&self) -> TypeDescriptor {
        match self {
            Self::Declared(declared) => Self::named(declared.name.clone()),
            other => other.clone(),
        }
    }

    /// Returns the element type of a boxed slice.
    #[must_use]
    pub fn element(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the argument of a single-argument generic type.
    #[must_use]
    pub fn single_arg(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Declared(declared) if declared.args.len() == 1 => declared.args.first(),
            _ => None,
        }
    }

    /// Returns the innermost nominal type name, looking through `Option`,
    /// boxed slices and single-argument generics.
    #[must_use]
    pub fn innermost_name(&self) -> Option<&str> {
        match self {
            Self::Nullable(inner) | Self::Array(inner) => inner.innermost_name(),
            Self::Declared(declared) => match declared.args.as_slice() {
                [arg] => arg.innermost_name(),
                _ => Some(&declared.name),
            },
            _ => None,
        }
    }

    fn fmt_type_arg(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boxed(kind) => write!(f, "{kind}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Boxed(kind) => write!(f, "Option<{kind}>"),
            Self::Declared(declared) => {
                f.write_str(&declared.name)?;
                if !declared.args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in declared.args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        arg.fmt_type_arg(f)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Array(element) => write!(f, "Box<[{element}]>"),
            Self::Nullable(inner) => write!(f, "Option<{inner}>"),
            Self::Opaque(text) => f.write_str(text),
        }
    }
}
