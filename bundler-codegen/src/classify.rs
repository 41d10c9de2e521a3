//! Type classification.
//!
//! Maps a field's type to exactly one [`TypeTag`] by walking an ordered rule
//! table; the first matching rule wins. The order matters: a `String` is
//! also a char sequence and serializable, and a primitive also matches its
//! nullable counterpart.

use crate::error::CodegenError;
use crate::tag::TypeTag;
use bundler_schema::{ClassSchema, FieldDescriptor, PrimitiveKind, TypeDescriptor, TypeOracle, names};

/// How a rule compares a type with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// The types must be identical.
    Exact,
    /// The type must be assignable to the target.
    Assignable,
}

/// The type a rule compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A nullable primitive (`Option<i32>`).
    Boxed(PrimitiveKind),
    /// A nominal type by canonical name.
    Named(&'static str),
}

impl Target {
    fn descriptor(self) -> TypeDescriptor {
        match self {
            Self::Boxed(kind) => TypeDescriptor::Boxed(kind),
            Self::Named(name) => TypeDescriptor::named(name),
        }
    }
}

/// A structural pattern over field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field type itself matches the target.
    Class(Target, MatchPolicy),
    /// A boxed slice of exactly this primitive.
    PrimitiveArray(PrimitiveKind),
    /// A boxed slice whose element matches the target.
    Array(Target, MatchPolicy),
    /// A single-argument list whose argument matches the target.
    List(Target, MatchPolicy),
}

use MatchPolicy::{Assignable, Exact};
use PrimitiveKind::{Boolean, Byte, Char, Double, Float, Int, Long, Short};

/// Classification rules in precedence order.
pub const RULES: [(Rule, TypeTag); 31] = [
    (Rule::Class(Target::Boxed(Boolean), Assignable), TypeTag::Boolean),
    (Rule::Class(Target::Boxed(Byte), Assignable), TypeTag::Byte),
    (Rule::Class(Target::Boxed(Char), Assignable), TypeTag::Char),
    (Rule::Class(Target::Boxed(Double), Assignable), TypeTag::Double),
    (Rule::Class(Target::Boxed(Float), Assignable), TypeTag::Float),
    (Rule::Class(Target::Boxed(Int), Assignable), TypeTag::Int),
    (Rule::Class(Target::Boxed(Long), Assignable), TypeTag::Long),
    (Rule::Class(Target::Boxed(Short), Assignable), TypeTag::Short),
    (Rule::Class(Target::Named(names::STRING), Exact), TypeTag::String),
    (Rule::Class(Target::Named(names::CHAR_SEQUENCE), Exact), TypeTag::CharSequence),
    (Rule::Class(Target::Named(names::BUNDLE), Exact), TypeTag::ContainerRef),
    (Rule::Class(Target::Named(names::BINDER), Exact), TypeTag::OpaqueHandle),
    (Rule::Class(Target::Named(names::SIZE), Exact), TypeTag::Size),
    (Rule::Class(Target::Named(names::SIZE_F), Exact), TypeTag::SizeF),
    (Rule::PrimitiveArray(Byte), TypeTag::ByteArray),
    (Rule::PrimitiveArray(Boolean), TypeTag::BooleanArray),
    (Rule::PrimitiveArray(Char), TypeTag::CharArray),
    (Rule::PrimitiveArray(Double), TypeTag::DoubleArray),
    (Rule::PrimitiveArray(Float), TypeTag::FloatArray),
    (Rule::PrimitiveArray(Int), TypeTag::IntArray),
    (Rule::PrimitiveArray(Long), TypeTag::LongArray),
    (Rule::PrimitiveArray(Short), TypeTag::ShortArray),
    (Rule::Array(Target::Named(names::STRING), Exact), TypeTag::StringArray),
    (Rule::Array(Target::Named(names::CHAR_SEQUENCE), Exact), TypeTag::CharSequenceArray),
    (Rule::List(Target::Named(names::CHAR_SEQUENCE), Exact), TypeTag::CharSequenceList),
    (Rule::List(Target::Boxed(Int), Exact), TypeTag::IntegerList),
    (Rule::List(Target::Named(names::STRING), Exact), TypeTag::StringList),
    (Rule::Array(Target::Named(names::PARCELABLE), Assignable), TypeTag::PolymorphicArray),
    (Rule::List(Target::Named(names::PARCELABLE), Assignable), TypeTag::PolymorphicList),
    (Rule::Class(Target::Named(names::SERIALIZABLE), Assignable), TypeTag::SerializableFallback),
    (Rule::Class(Target::Named(names::PARCELABLE), Assignable), TypeTag::PolymorphicFallback),
];

/// Classifies field types against a [`TypeOracle`].
#[derive(Debug)]
pub struct Classifier<'a, O: TypeOracle> {
    oracle: &'a O,
}

impl<'a, O: TypeOracle> Classifier<'a, O> {
    /// Creates a classifier backed by `oracle`.
    #[must_use]
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Returns the family for `field` of `class`.
    ///
    /// # Errors
    /// Returns [`CodegenError::UnknownType`] if no rule matches.
    pub fn classify(
        &self,
        class: &ClassSchema,
        field: &FieldDescriptor,
    ) -> Result<TypeTag, CodegenError> {
        self.classify_type(&field.ty).ok_or_else(|| {
            CodegenError::unknown_type(&field.name, &class.qualified_name, field.ty.to_string())
        })
    }

    /// Returns the family for `ty`, if any rule matches.
    #[must_use]
    pub fn classify_type(&self, ty: &TypeDescriptor) -> Option<TypeTag> {
        let ty = ty.non_null();
        RULES
            .iter()
            .find(|(rule, _)| self.matches(ty, *rule))
            .map(|(_, tag)| *tag)
    }

    fn matches(&self, ty: &TypeDescriptor, rule: Rule) -> bool {
        match rule {
            Rule::Class(target, policy) => self.compare(ty, target, policy),
            Rule::PrimitiveArray(kind) => self.oracle.is_same_type(
                ty,
                &TypeDescriptor::array(TypeDescriptor::Primitive(kind)),
            ),
            Rule::Array(target, policy) => ty
                .element()
                .is_some_and(|element| self.compare(element, target, policy)),
            Rule::List(target, policy) => ty.single_arg().is_some_and(|arg| {
                self.oracle
                    .is_assignable(&self.oracle.erasure(ty), &TypeDescriptor::named(names::VEC))
                    && self.compare(arg, target, policy)
            }),
        }
    }

    fn compare(&self, ty: &TypeDescriptor, target: Target, policy: MatchPolicy) -> bool {
        let target = target.descriptor();
        match policy {
            MatchPolicy::Exact => self.oracle.is_same_type(ty, &target),
            MatchPolicy::Assignable => self.oracle.is_assignable(ty, &target),
        }
    }
}
