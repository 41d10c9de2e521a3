//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use bundler::prelude::*;
//! ```

// Container and value types
pub use bundler_core::{Binder, Bundle, CharSequence, Size, SizeF, Value};

// Traits
pub use bundler_core::{Bundled, Envelope, Parcelable, Serializable};
pub use bundler_derive::Bundled;

// Errors
pub use bundler_core::error::{Error as BundleError, Result as BundleResult};

// Envelope and registry
pub use crate::registry::{Registry, RegistryBuilder};
pub use bundler_core::Intent;
