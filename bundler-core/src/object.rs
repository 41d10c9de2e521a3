//! Capability traits for values stored behind a trait object.
//!
//! Two broad capabilities decide how user-defined types travel through a
//! bundle:
//! - [`Parcelable`]: platform-transferable objects, stored as shared
//!   trait objects and recovered by downcasting.
//! - [`Serializable`]: anything that can be flattened to bytes. Every
//!   `serde::Serialize` type qualifies.

use crate::error::Result;
use serde::Serialize;
use std::any::Any;
use std::fmt;

/// Access to a value as [`Any`], so trait objects can be downcast.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Marker for platform-transferable objects.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl Parcelable for Point {}
/// ```
pub trait Parcelable: AsAny + fmt::Debug + Send + Sync {}

/// Values that can be flattened to bytes.
pub trait Serializable: AsAny + fmt::Debug + Send + Sync {
    /// Flattens the value to its byte representation.
    ///
    /// # Errors
    /// Returns [`crate::Error::Serialization`] if the value cannot be encoded.
    fn to_bytes(&self) -> Result<Vec<u8>>;
}

impl<T> Serializable for T
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
