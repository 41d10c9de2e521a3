//! # Bundler Schema
//!
//! Schema model and type relations for bundle companion generation.
//!
//! This crate provides:
//! - Class schemas: fields, accessor methods, constructors
//! - Type descriptors and the lowering of Rust type syntax
//! - The type universe answering identity and assignability questions
//! - XML schema parsing and validation

pub mod class;
pub mod document;
pub mod error;
pub mod lower;
pub mod parser;
pub mod types;
pub mod universe;
pub mod validation;

pub use class::{
    AccessorStyle, ClassSchema, ConstructorDescriptor, FieldDescriptor, MethodDescriptor,
    Visibility, capitalize,
};
pub use document::{Schema, TypeDecl};
pub use error::{ParseError, SchemaError};
pub use lower::{lower_type, parse_type};
pub use parser::parse_schema;
pub use types::{DeclaredType, PrimitiveKind, TypeDescriptor, names};
pub use universe::{TypeOracle, TypeUniverse, canonical_name};
pub use validation::{field_ident, validate_class, validate_schema};
