//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] bundler_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] bundler_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field's type matches none of the container families.
    #[error("field {field} in class {class} cannot be included in bundle: unknown type {type_name}")]
    UnknownType {
        /// Field name.
        field: String,
        /// Qualified class name.
        class: String,
        /// Rendered field type.
        type_name: String,
    },

    /// The class cannot be instantiated without arguments.
    #[error("type {class} does not have default constructor")]
    MissingDefaultConstructor {
        /// Qualified class name.
        class: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(
        field: impl Into<String>,
        class: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnknownType {
            field: field.into(),
            class: class.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates a missing default constructor error.
    pub fn missing_default_constructor(class: impl Into<String>) -> Self {
        Self::MissingDefaultConstructor {
            class: class.into(),
        }
    }
}
