//! # Bundler
//!
//! Generated marshaling between plain structs and typed key-value bundles.
//!
//! Bundler inspects a struct at build time and generates a companion with
//! two functions: one writes every eligible field into a [`Bundle`], the
//! other rebuilds the struct from one. Fields are routed to one of 31
//! container accessor families according to their type.
//!
//! ## Features
//!
//! - **Derive** - `#[derive(Bundled)]` generates the companion in place
//! - **Schema-driven generation** - Generate companions from XML class schemas in `build.rs`
//! - **Static registry** - Resolve companions by type without reflection
//! - **Envelopes** - Carry a whole bundle as a named extra of an [`Intent`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use bundler::prelude::*;
//!
//! #[derive(Debug, Default, Bundled)]
//! #[bundler(constructor = "default")]
//! pub struct Profile {
//!     pub title: String,
//!     pub score: i32,
//! }
//!
//! let bundle = Profile { title: "x".into(), score: 3 }.to_bundle();
//! let profile = Profile::from_bundle(&bundle)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Container, value types, capabilities, runtime errors
//! - [`schema`] - Class schemas, type relations, XML schema parsing
//! - [`codegen`] - Companion generation and the build-script driver
//! - [`registry`] - Companion registry and runtime facade

pub mod prelude;
pub mod registry;

/// Container, value types and runtime errors.
pub mod core {
    pub use bundler_core::*;
}

/// Class schemas and type relations.
pub mod schema {
    pub use bundler_schema::*;
}

/// Companion code generation.
pub mod codegen {
    pub use bundler_codegen::*;
}

// Re-export the items generated code refers to at the crate root
pub use bundler_core::{
    AsAny, Binder, Bundle, Bundled, CastFrom, CharSequence, Envelope, Error, Intent, Parcelable,
    Result, Serializable, Size, SizeF, Value, cast, cast_nullable, require,
};
pub use bundler_derive::Bundled;

pub use registry::{
    Companion, Registry, RegistryBuilder, from_bundle, from_envelope, global, has_companion,
    install, put_extra, to_bundle,
};
