//! # Bundler Core
//!
//! Runtime types shared by generated bundle companions.
//!
//! This crate provides:
//! - [`Bundle`], the typed key-value container, and its [`Value`] families
//! - Value types with a dedicated family ([`CharSequence`], [`Binder`], [`Size`], [`SizeF`])
//! - The [`Parcelable`] and [`Serializable`] capabilities
//! - Cast helpers used by generated decoders
//! - The [`Bundled`] trait and the [`Envelope`] carrier
//! - Error types for container access and companion dispatch

pub mod bundle;
pub mod bundled;
pub mod cast;
pub mod envelope;
pub mod error;
pub mod object;
pub mod types;
pub mod value;

pub use bundle::Bundle;
pub use bundled::Bundled;
pub use cast::{CastFrom, cast, cast_nullable, require};
pub use envelope::{Envelope, Intent};
pub use error::{Error, Result};
pub use object::{AsAny, Parcelable, Serializable};
pub use types::{Binder, CharSequence, Size, SizeF};
pub use value::Value;
