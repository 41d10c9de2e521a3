//! Schema-level code generation.
//!
//! Ties the pipeline together: filter, classify, plan, emit. Generation is a
//! pure transform of the schema; nothing is cached between classes.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::plan::plan_class;
use crate::rust::CompanionGenerator;
use bundler_schema::{ClassSchema, Schema, TypeOracle, TypeUniverse, validate_schema};

/// Generates the companion source for one class.
///
/// # Errors
/// Returns [`CodegenError::UnknownType`] for the first eligible field with no
/// container family and [`CodegenError::MissingDefaultConstructor`] if the
/// class cannot be built without arguments. No source is produced on error.
pub fn generate_companion<O: TypeOracle>(
    class: &ClassSchema,
    oracle: &O,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let plans = plan_class(class, oracle)?;
    CompanionGenerator::new(class, &plans, config).generate()
}

/// Code generator for a whole schema document.
pub struct Generator<'a> {
    schema: &'a Schema,
    universe: TypeUniverse,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the default configuration.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            universe: schema.universe(),
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one companion per class, in schema order.
    ///
    /// # Errors
    /// Returns the first validation or generation failure.
    pub fn generate_classes(&self) -> Result<Vec<(&'a ClassSchema, String)>, CodegenError> {
        validate_schema(self.schema)?;
        self.schema
            .classes
            .iter()
            .map(|class| {
                generate_companion(class, &self.universe, &self.config).map(|code| (class, code))
            })
            .collect()
    }

    /// Generates every companion into a single source string.
    ///
    /// # Errors
    /// Returns the first validation or generation failure.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = self.generate_header();
        for (_, code) in self.generate_classes()? {
            output.push_str(&code);
        }
        Ok(output)
    }

    fn generate_header(&self) -> String {
        let mut output = String::new();
        output.push_str("// Generated by bundler-codegen. Do not edit.\n");
        if !self.schema.package.is_empty() {
            output.push_str(&format!("// Package: {}\n", self.schema.package));
        }
        output.push('\n');
        output
    }
}
