//! # Bundler Codegen
//!
//! Generation of bundle companions from class schemas.
//!
//! This crate provides:
//! - Field eligibility filtering and type classification
//! - Access planning and Rust companion emission
//! - Generation settings
//! - Build script integration

pub mod classify;
pub mod config;
pub mod driver;
pub mod error;
pub mod filter;
pub mod generator;
pub mod plan;
pub mod rust;
pub mod tag;

pub use classify::{Classifier, MatchPolicy, RULES, Rule, Target};
pub use config::{GeneratorConfig, KeyRoot};
pub use driver::{BuildDriver, GeneratedCompanion};
pub use error::CodegenError;
pub use filter::{AccessMode, EligibleField, eligible_fields};
pub use generator::{Generator, generate_companion};
pub use plan::{FieldPlan, plan_class};
pub use tag::TypeTag;

/// Generates Rust code from a Bundler XML schema string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    let schema = bundler_schema::parse_schema(xml)?;
    let generator = Generator::new(&schema);
    generator.generate()
}

/// Generates Rust code from a Bundler XML schema file.
///
/// # Arguments
/// * `path` - Path to the XML schema file
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}
