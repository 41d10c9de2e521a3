//! The parsed schema document.

use crate::class::ClassSchema;
use crate::universe::TypeUniverse;

/// A user type and the capabilities it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Type name as it appears in field types.
    pub name: String,
    /// Direct supertypes (`Parcelable`, `Serializable`, or another type).
    pub implements: Vec<String>,
}

impl TypeDecl {
    /// Creates a type declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, implements: Vec<String>) -> Self {
        Self {
            name: name.into(),
            implements,
        }
    }
}

/// Complete schema document: declared types plus classes to generate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Package (module path) prefixed to unqualified class names.
    pub package: String,
    /// User type declarations.
    pub types: Vec<TypeDecl>,
    /// Class definitions.
    pub classes: Vec<ClassSchema>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            types: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Qualifies a class name with the package unless it is already a path.
    #[must_use]
    pub fn qualify(&self, name: &str) -> String {
        if name.contains("::") || self.package.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.package, name)
        }
    }

    /// Looks up a class by qualified or simple name.
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&ClassSchema> {
        self.classes
            .iter()
            .find(|c| c.qualified_name == name)
            .or_else(|| self.classes.iter().find(|c| c.simple_name() == name))
    }

    /// Builds the type universe: well-known types plus every declaration.
    #[must_use]
    pub fn universe(&self) -> TypeUniverse {
        let mut universe = TypeUniverse::new();
        for decl in &self.types {
            universe.declare(decl.name.as_str(), decl.implements.iter().map(String::as_str));
        }
        universe
    }
}
