//! Access planning: one [`FieldPlan`] per eligible field.

use crate::classify::Classifier;
use crate::error::CodegenError;
use crate::filter::{AccessMode, eligible_fields};
use crate::tag::TypeTag;
use bundler_schema::{ClassSchema, FieldDescriptor, TypeOracle};

/// Everything the emitter needs to know about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan<'a> {
    /// The field.
    pub field: &'a FieldDescriptor,
    /// Container family.
    pub tag: TypeTag,
    /// How the field is read and written.
    pub access: AccessMode,
    /// True if the value read back must be cast to the field type.
    pub requires_cast: bool,
}

impl FieldPlan<'_> {
    /// Returns true if the field is optional.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.field.ty.is_nullable()
    }
}

/// Filters and classifies the fields of `class`.
///
/// # Errors
/// Returns [`CodegenError::UnknownType`] for the first field whose type has
/// no container family; no plans are returned in that case.
pub fn plan_class<'a, O: TypeOracle>(
    class: &'a ClassSchema,
    oracle: &O,
) -> Result<Vec<FieldPlan<'a>>, CodegenError> {
    let classifier = Classifier::new(oracle);
    eligible_fields(class, oracle)
        .into_iter()
        .map(|eligible| {
            let tag = classifier.classify(class, eligible.field)?;
            Ok(FieldPlan {
                field: eligible.field,
                tag,
                access: eligible.access,
                requires_cast: tag.requires_cast(),
            })
        })
        .collect()
}
