//! Rust code generation modules.

pub mod companion;

pub use companion::CompanionGenerator;

use bundler_schema::{TypeDescriptor, names};

/// Runtime types that generated code names through the runtime path.
const RUNTIME_TYPES: [&str; 5] = [
    names::BUNDLE,
    names::CHAR_SEQUENCE,
    names::BINDER,
    names::SIZE,
    names::SIZE_F,
];

/// Converts a string to snake_case. Only ASCII capitals start a new word.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

/// Returns the associated constant holding a field's container key.
#[must_use]
pub fn key_const_name(field: &str) -> String {
    format!("KEY_{}", to_snake_case(field).to_ascii_uppercase())
}

/// Renders a type as Rust source, naming runtime types through `runtime`.
#[must_use]
pub fn rust_type(ty: &TypeDescriptor, runtime: &str) -> String {
    match ty {
        TypeDescriptor::Primitive(kind) => kind.rust_name().to_string(),
        TypeDescriptor::Boxed(kind) => format!("Option<{kind}>"),
        TypeDescriptor::Declared(declared) => {
            let name = if RUNTIME_TYPES.contains(&declared.name.as_str()) {
                format!("{runtime}::{}", declared.name)
            } else {
                declared.name.clone()
            };
            if declared.args.is_empty() {
                name
            } else {
                let args: Vec<String> = declared
                    .args
                    .iter()
                    .map(|arg| match arg {
                        TypeDescriptor::Boxed(kind) => kind.rust_name().to_string(),
                        other => rust_type(other, runtime),
                    })
                    .collect();
                format!("{}<{}>", name, args.join(", "))
            }
        }
        TypeDescriptor::Array(element) => format!("Box<[{}]>", rust_type(element, runtime)),
        TypeDescriptor::Nullable(inner) => format!("Option<{}>", rust_type(inner, runtime)),
        TypeDescriptor::Opaque(text) => text.clone(),
    }
}
