//! Field eligibility.
//!
//! Decides which fields of a class take part in marshaling and how each one
//! is reached. Ineligible fields are dropped silently.

use bundler_schema::{ClassSchema, FieldDescriptor, TypeOracle};

/// How generated code reads and writes a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessMode {
    /// Direct field access.
    Direct,
    /// Through a getter and a setter.
    AccessorPair {
        /// Getter name.
        getter: String,
        /// Setter name.
        setter: String,
    },
}

/// A field that passed the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleField<'a> {
    /// The field.
    pub field: &'a FieldDescriptor,
    /// How it is accessed.
    pub access: AccessMode,
}

/// Returns the eligible fields of `class` in declaration order.
///
/// - static fields are excluded
/// - public fields are accessed directly
/// - other fields need a matching getter and setter
#[must_use]
pub fn eligible_fields<'a, O: TypeOracle>(
    class: &'a ClassSchema,
    oracle: &O,
) -> Vec<EligibleField<'a>> {
    class
        .fields
        .iter()
        .filter(|field| !field.is_static)
        .filter_map(|field| {
            access_mode(class, field, oracle).map(|access| EligibleField { field, access })
        })
        .collect()
}

fn access_mode<O: TypeOracle>(
    class: &ClassSchema,
    field: &FieldDescriptor,
    oracle: &O,
) -> Option<AccessMode> {
    if field.is_public() {
        return Some(AccessMode::Direct);
    }

    let getter = class.accessor_style.getter_name(&field.name);
    let setter = class.accessor_style.setter_name(&field.name);

    let has_getter = class.methods_named(&getter).any(|m| {
        m.params.is_empty()
            && m
                .return_type
                .as_ref()
                .is_some_and(|ret| oracle.is_same_type(ret, &field.ty))
    });
    let has_setter = class.methods_named(&setter).any(|m| {
        matches!(m.params.as_slice(), [param] if oracle.is_same_type(param, &field.ty))
    });

    (has_getter && has_setter).then_some(AccessMode::AccessorPair { getter, setter })
}
