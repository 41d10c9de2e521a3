//! Type relations used by the classifier.
//!
//! The [`TypeOracle`] trait answers two questions: is A the same type as B,
//! and is a value of A assignable to B. [`TypeUniverse`] implements it from
//! a table of nominal supertypes seeded with the well-known container types.

use crate::types::{TypeDescriptor, names};
use std::collections::{HashMap, HashSet};

/// Answers type identity and assignability questions.
pub trait TypeOracle {
    /// Returns true if `a` and `b` denote the same type.
    fn is_same_type(&self, a: &TypeDescriptor, b: &TypeDescriptor) -> bool;

    /// Returns true if a value of `from` may be used where `to` is expected.
    fn is_assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool;

    /// Returns `ty` with generic arguments removed.
    fn erasure(&self, ty: &TypeDescriptor) -> TypeDescriptor {
        ty.erasure()
    }
}

/// Aliases folded to canonical names during lowering.
const ALIASES: &[(&str, &str)] = &[
    ("std::string::String", names::STRING),
    ("alloc::string::String", names::STRING),
    ("std::vec::Vec", names::VEC),
    ("alloc::vec::Vec", names::VEC),
    ("bundler::Bundle", names::BUNDLE),
    ("bundler_core::Bundle", names::BUNDLE),
    ("bundler::core::Bundle", names::BUNDLE),
    ("bundler::CharSequence", names::CHAR_SEQUENCE),
    ("bundler_core::CharSequence", names::CHAR_SEQUENCE),
    ("bundler::core::CharSequence", names::CHAR_SEQUENCE),
    ("bundler::Binder", names::BINDER),
    ("bundler_core::Binder", names::BINDER),
    ("bundler::core::Binder", names::BINDER),
    ("bundler::Size", names::SIZE),
    ("bundler_core::Size", names::SIZE),
    ("bundler::core::Size", names::SIZE),
    ("bundler::SizeF", names::SIZE_F),
    ("bundler_core::SizeF", names::SIZE_F),
    ("bundler::core::SizeF", names::SIZE_F),
];

/// Returns the canonical spelling of a type path.
#[must_use]
pub fn canonical_name(path: &str) -> String {
    let path = path.strip_prefix("::").unwrap_or(path);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == path)
        .map_or_else(|| path.to_string(), |(_, canonical)| (*canonical).to_string())
}

const NO_SUPERTYPES: [&str; 0] = [];

/// Nominal type table with transitive supertypes.
#[derive(Debug, Clone)]
pub struct TypeUniverse {
    supertypes: HashMap<String, Vec<String>>,
}

impl Default for TypeUniverse {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeUniverse {
    /// Creates a universe seeded with the well-known types.
    #[must_use]
    pub fn new() -> Self {
        let mut universe = Self::empty();
        universe.declare(names::STRING, [names::CHAR_SEQUENCE, names::SERIALIZABLE]);
        universe.declare(names::CHAR_SEQUENCE, NO_SUPERTYPES);
        universe.declare(names::BUNDLE, [names::PARCELABLE]);
        universe.declare(names::BINDER, NO_SUPERTYPES);
        universe.declare(names::SIZE, NO_SUPERTYPES);
        universe.declare(names::SIZE_F, NO_SUPERTYPES);
        universe.declare(names::VEC, [names::SERIALIZABLE]);
        universe.declare(names::PARCELABLE, NO_SUPERTYPES);
        universe.declare(names::SERIALIZABLE, NO_SUPERTYPES);
        for unsigned in ["u8", "u16", "u32", "u64", "u128", "usize", "i128", "isize"] {
            universe.declare(unsigned, [names::SERIALIZABLE]);
        }
        universe
    }

    /// Creates a universe with no declared types.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            supertypes: HashMap::new(),
        }
    }

    /// Declares a nominal type and its direct supertypes.
    ///
    /// Declaring the same type again adds to its supertypes.
    pub fn declare<I, S>(&mut self, name: impl Into<String>, supertypes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.supertypes.entry(canonical_name(&name.into())).or_default();
        for supertype in supertypes {
            let supertype = canonical_name(&supertype.into());
            if !entry.contains(&supertype) {
                entry.push(supertype);
            }
        }
    }

    /// Declares a type and returns the universe.
    #[must_use]
    pub fn with_type<I, S>(mut self, name: impl Into<String>, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declare(name, supertypes);
        self
    }

    /// Returns true if the type has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.supertypes.contains_key(name)
    }

    /// Returns true if `name` is `target` or one of its transitive subtypes.
    #[must_use]
    pub fn is_subtype(&self, name: &str, target: &str) -> bool {
        let mut pending = vec![name];
        let mut seen = HashSet::new();
        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(supers) = self.supertypes.get(current) {
                pending.extend(supers.iter().map(String::as_str));
            }
        }
        false
    }

    /// Returns true if values of `ty` can be flattened to bytes.
    ///
    /// Generic types qualify only when every argument does.
    #[must_use]
    pub fn is_serializable(&self, ty: &TypeDescriptor) -> bool {
        match ty {
            TypeDescriptor::Primitive(_) | TypeDescriptor::Boxed(_) => true,
            TypeDescriptor::Declared(declared) => {
                self.is_subtype(&declared.name, names::SERIALIZABLE)
                    && declared.args.iter().all(|arg| self.is_serializable(arg))
            }
            TypeDescriptor::Array(inner) | TypeDescriptor::Nullable(inner) => {
                self.is_serializable(inner)
            }
            TypeDescriptor::Opaque(_) => false,
        }
    }

    fn conforms(&self, ty: &TypeDescriptor, target: &str) -> bool {
        if target == names::SERIALIZABLE {
            return self.is_serializable(ty);
        }
        match ty {
            TypeDescriptor::Declared(declared) => self.is_subtype(&declared.name, target),
            _ => false,
        }
    }
}

impl TypeOracle for TypeUniverse {
    fn is_same_type(&self, a: &TypeDescriptor, b: &TypeDescriptor) -> bool {
        a == b
    }

    fn is_assignable(&self, from: &TypeDescriptor, to: &TypeDescriptor) -> bool {
        match (from, to) {
            (TypeDescriptor::Nullable(inner), _) => self.is_assignable(inner, to),
            (_, TypeDescriptor::Nullable(inner)) => self.is_assignable(from, inner),
            (
                TypeDescriptor::Primitive(a) | TypeDescriptor::Boxed(a),
                TypeDescriptor::Primitive(b) | TypeDescriptor::Boxed(b),
            ) => a == b,
            (_, TypeDescriptor::Declared(target)) if target.args.is_empty() => {
                self.conforms(from, &target.name)
            }
            (TypeDescriptor::Declared(a), TypeDescriptor::Declared(b)) => {
                self.is_subtype(&a.name, &b.name)
                    && a.args.len() == b.args.len()
                    && a.args.iter().zip(&b.args).all(|(x, y)| self.is_same_type(x, y))
            }
            _ => self.is_same_type(from, to),
        }
    }
}
