//! Schema validation utilities.
//!
//! Checks that a parsed schema can be turned into Rust source: names are
//! valid identifiers and nothing is defined twice.

use crate::class::ClassSchema;
use crate::document::Schema;
use crate::error::SchemaError;
use std::collections::HashSet;

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen_types = HashSet::new();
    for decl in &schema.types {
        if !seen_types.insert(decl.name.as_str()) {
            return Err(SchemaError::duplicate("type", &decl.name));
        }
        if decl.implements.iter().any(|s| s == &decl.name) {
            return Err(SchemaError::Validation {
                message: format!("type '{}' cannot implement itself", decl.name),
            });
        }
    }

    let mut seen_classes = HashSet::new();
    for class in &schema.classes {
        if !seen_classes.insert(class.qualified_name.as_str()) {
            return Err(SchemaError::duplicate("class", &class.qualified_name));
        }
        validate_class(class)?;
    }
    Ok(())
}

/// Validates a single class schema.
///
/// # Errors
/// Returns `SchemaError` if a name is not a valid identifier or a field is
/// declared twice.
pub fn validate_class(class: &ClassSchema) -> Result<(), SchemaError> {
    for segment in class.qualified_name.split("::") {
        if !is_path_segment(segment) {
            return Err(SchemaError::invalid_ident("class", &class.qualified_name));
        }
    }

    let mut seen_fields = HashSet::new();
    for field in &class.fields {
        if !is_identifier(&field_ident(&field.name)) {
            return Err(SchemaError::invalid_ident("field", &field.name));
        }
        if !seen_fields.insert(field.name.as_str()) {
            return Err(SchemaError::duplicate(
                "field",
                format!("{}.{}", class.qualified_name, field.name),
            ));
        }
    }

    for method in &class.methods {
        if !is_identifier(&method.name) {
            return Err(SchemaError::invalid_ident("method", &method.name));
        }
    }
    for ctor in &class.constructors {
        if !is_identifier(&ctor.name) {
            return Err(SchemaError::invalid_ident("constructor", &ctor.name));
        }
    }
    Ok(())
}

/// Returns true if `name` parses as a Rust identifier (keywords excluded).
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}

/// Renders a field name as it appears in a field access, escaping
/// keywords as raw identifiers (`type` becomes `r#type`).
#[must_use]
pub fn field_ident(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        format!("r#{name}")
    }
}

/// Path segments additionally allow `crate`, `self` and `super`.
fn is_path_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super") || is_identifier(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    #[test]
    fn test_validate_valid_schema() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<bundlerSchema package="demo">
  <types><type name="Point" implements="Parcelable"/></types>
  <class name="Profile">
    <constructor name="default"/>
    <field name="name" type="String" visibility="public"/>
  </class>
</bundlerSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_validate_duplicate_class() {
        let xml = r#"<bundlerSchema package="demo">
  <class name="Profile"/>
  <class name="demo::Profile"/>
</bundlerSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        let err = validate_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateDefinition { .. }));
    }

    #[test]
    fn test_validate_duplicate_field() {
        let xml = r#"<bundlerSchema>
  <class name="C">
    <field name="x" type="i32"/>
    <field name="x" type="i64"/>
  </class>
</bundlerSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        let err = validate_schema(&schema).unwrap_err();
        assert!(err.to_string().contains("C.x"));
    }

    #[test]
    fn test_validate_keyword_field() {
        let xml = r#"<bundlerSchema><class name="C"><field name="type" type="i32"/></class></bundlerSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        assert!(validate_schema(&schema).is_ok());

        let xml = r#"<bundlerSchema><class name="C"><field name="self" type="i32"/></class></bundlerSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        let err = validate_schema(&schema).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_field_ident_escapes_keywords() {
        assert_eq!(field_ident("score"), "score");
        assert_eq!(field_ident("type"), "r#type");
        assert_eq!(field_ident("match"), "r#match");
        assert!(!is_identifier(&field_ident("self")));
    }

    #[test]
    fn test_validate_bad_class_path() {
        let class = ClassSchema::new("demo::1Profile");
        assert!(validate_class(&class).is_err());
        assert!(validate_class(&ClassSchema::new("crate::demo::Profile")).is_ok());
    }

    #[test]
    fn test_validate_duplicate_type() {
        let xml = r#"<bundlerSchema><types>
  <type name="Point"/>
  <type name="Point" implements="Parcelable"/>
</types></bundlerSchema>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        assert!(validate_schema(&schema).is_err());
    }
}
