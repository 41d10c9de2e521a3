//! Scalar reference types with a dedicated accessor family.
//!
//! These are the well-known non-primitive types that a bundle stores
//! without going through a capability: text sequences, IPC handles and
//! the two geometry values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, cheaply cloneable character sequence.
///
/// Distinct from [`String`]: a `String` is assignable to a char sequence
/// but the container keeps them in separate families.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharSequence(Arc<str>);

impl CharSequence {
    /// Creates a char sequence from any string-like value.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Arc::from(text.as_ref()))
    }

    /// Returns the sequence as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CharSequence {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharSequence {
    fn from(text: &str) -> Self {
        Self(Arc::from(text))
    }
}

impl From<String> for CharSequence {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

impl fmt::Display for CharSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to an IPC endpoint.
///
/// Handles compare by identity: two clones of the same handle are equal,
/// two handles created separately are not, even with the same descriptor.
#[derive(Debug, Clone)]
pub struct Binder {
    inner: Arc<BinderInner>,
}

#[derive(Debug)]
struct BinderInner {
    descriptor: String,
}

impl Binder {
    /// Creates a new handle for the given interface descriptor.
    #[must_use]
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(BinderInner {
                descriptor: descriptor.into(),
            }),
        }
    }

    /// Returns the interface descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.inner.descriptor
    }
}

impl PartialEq for Binder {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Binder {}

/// Integer width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Floating point width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeF {
    width: f32,
    height: f32,
}

impl SizeF {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }
}

impl fmt::Display for SizeF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
