//! Error types for Bundler runtime operations.

use thiserror::Error;

/// Core error type for container access and companion dispatch.
#[derive(Debug, Error)]
pub enum Error {
    /// The key holds a value of a different accessor family.
    #[error("key '{key}' expected {expected} but value was a {found}")]
    TypeMismatch {
        /// Container key.
        key: String,
        /// Family the caller asked for.
        expected: &'static str,
        /// Family actually stored under the key.
        found: &'static str,
    },

    /// A required value is absent from the container.
    #[error("missing value for key '{key}'")]
    MissingKey {
        /// Container key.
        key: String,
    },

    /// The stored value could not be narrowed to the requested type.
    #[error("value for key '{key}' cannot be cast to {target}")]
    CastFailed {
        /// Container key.
        key: String,
        /// Requested Rust type.
        target: &'static str,
    },

    /// No companion is registered for the type.
    #[error("could not find bundler companion for {type_name}")]
    CompanionNotFound {
        /// Name of the type that was looked up.
        type_name: String,
    },

    /// A resolved companion failed while encoding or decoding.
    #[error("could not invoke bundler companion for {type_name}")]
    InvocationFailure {
        /// Name of the type whose companion failed.
        type_name: String,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// A serializable value could not be flattened to bytes.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Creates a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Creates a cast failure error.
    pub fn cast_failed(key: impl Into<String>, target: &'static str) -> Self {
        Self::CastFailed {
            key: key.into(),
            target,
        }
    }

    /// Creates a companion lookup error.
    pub fn companion_not_found(type_name: impl Into<String>) -> Self {
        Self::CompanionNotFound {
            type_name: type_name.into(),
        }
    }

    /// Wraps a failure raised by a resolved companion.
    pub fn invocation(type_name: impl Into<String>, source: Error) -> Self {
        Self::InvocationFailure {
            type_name: type_name.into(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for Bundler runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_type_mismatch_display() {
        let err = Error::type_mismatch("KEY_a", "String", "Int");
        assert_eq!(err.to_string(), "key 'KEY_a' expected String but value was a Int");
    }

    #[test]
    fn test_invocation_keeps_source() {
        let err = Error::invocation("demo::State", Error::missing_key("KEY_x"));
        assert!(err.to_string().contains("demo::State"));
        let source = err.source().expect("source");
        assert!(source.to_string().contains("KEY_x"));
    }

    #[test]
    fn test_companion_not_found_display() {
        let err = Error::companion_not_found("demo::Missing");
        assert!(err.to_string().contains("demo::Missing"));
    }
}
