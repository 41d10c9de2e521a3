//! Lowering of Rust type syntax to [`TypeDescriptor`]s.
//!
//! Both schema sources go through here: the derive hands over `syn::Type`s
//! taken from the struct, and the XML parser parses type attributes with
//! [`parse_type`].

use crate::error::ParseError;
use crate::types::{PrimitiveKind, TypeDescriptor};
use crate::universe::canonical_name;
use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

/// Parses Rust type syntax into a descriptor.
///
/// # Errors
/// Returns [`ParseError::InvalidType`] if `text` is not a Rust type.
pub fn parse_type(text: &str) -> Result<TypeDescriptor, ParseError> {
    let ty = syn::parse_str::<Type>(text)
        .map_err(|e| ParseError::invalid_type(text, e.to_string()))?;
    Ok(lower_type(&ty))
}

/// Lowers a parsed Rust type.
#[must_use]
pub fn lower_type(ty: &Type) -> TypeDescriptor {
    match ty {
        Type::Paren(paren) => lower_type(&paren.elem),
        Type::Group(group) => lower_type(&group.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            lower_path(&type_path.path).unwrap_or_else(|| opaque(ty))
        }
        _ => opaque(ty),
    }
}

fn opaque(ty: &Type) -> TypeDescriptor {
    TypeDescriptor::Opaque(ty.to_token_stream().to_string())
}

fn lower_path(path: &syn::Path) -> Option<TypeDescriptor> {
    let last = path.segments.last()?;
    let prefix_len = path.segments.len() - 1;
    if path
        .segments
        .iter()
        .take(prefix_len)
        .any(|segment| !segment.arguments.is_none())
    {
        return None;
    }
    let joined = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");
    let name = canonical_name(&joined);
    let args = type_args(&last.arguments)?;

    if args.is_empty() && prefix_len == 0 && path.leading_colon.is_none() {
        if let Some(kind) = PrimitiveKind::from_rust_name(&name) {
            return Some(TypeDescriptor::Primitive(kind));
        }
    }

    match (name.as_str(), args.as_slice()) {
        ("Option" | "std::option::Option" | "core::option::Option", [inner]) => {
            Some(TypeDescriptor::nullable(lower_type(inner)))
        }
        ("Box" | "std::boxed::Box" | "alloc::boxed::Box", [Type::Slice(slice)]) => {
            Some(TypeDescriptor::array(lower_type(&slice.elem)))
        }
        ("Box" | "std::boxed::Box" | "alloc::boxed::Box", _) => None,
        _ => Some(TypeDescriptor::declared(
            name,
            args.into_iter().map(lower_type_arg).collect(),
        )),
    }
}

/// Collects the type arguments of a path segment; `None` if any argument is
/// not a type.
fn type_args(arguments: &PathArguments) -> Option<Vec<&Type>> {
    match arguments {
        PathArguments::None => Some(Vec::new()),
        PathArguments::AngleBracketed(bracketed) => bracketed
            .args
            .iter()
            .map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        PathArguments::Parenthesized(_) => None,
    }
}

/// Generic arguments are reference typed: `Option<i32>` has no distinct
/// model there and stays opaque.
fn lower_type_arg(ty: &Type) -> TypeDescriptor {
    match lower_type(ty) {
        TypeDescriptor::Boxed(_) => opaque(ty),
        other => other,
    }
}
