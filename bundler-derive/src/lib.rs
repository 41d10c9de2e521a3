//! # Bundler Derive
//!
//! Procedural macro generating bundle companions.
//!
//! `#[derive(Bundled)]` extracts a class schema from a struct declaration,
//! runs it through the companion generator and splices the resulting
//! `<Name>Bundler` struct and `Bundled` implementation into the crate.

use bundler_codegen::{CodegenError, GeneratorConfig, KeyRoot, generate_companion};
use bundler_schema::{
    AccessorStyle, ClassSchema, ConstructorDescriptor, FieldDescriptor, MethodDescriptor,
    TypeUniverse, Visibility, lower_type, names, validate_class,
};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives a bundle companion and the `Bundled` trait for a struct.
///
/// # Example
/// ```ignore
/// #[derive(Default, Bundled)]
/// #[bundler(constructor = "default")]
/// pub struct Profile {
///     pub title: String,
///     pub nick: Option<String>,
///     #[bundler(getter, setter)]
///     score: i32,
///     #[bundler(parcelable)]
///     pub origin: Point,
/// }
/// ```
///
/// Struct attributes:
/// - `constructor = "default" | "<fn>"`: zero-argument constructor, required
/// - `accessors = "snake" | "bean"`: accessor naming, `snake` by default
/// - `crate = "<path>"`: path of the runtime crate, `::bundler` by default
///
/// Field attributes:
/// - `getter`, `setter`: the struct provides the accessor named by the style
/// - `parcelable`, `serializable`: the field's innermost type implements the
///   capability
#[proc_macro_derive(Bundled, attributes(bundler))]
pub fn derive_bundled(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Debug)]
struct ContainerAttrs {
    constructor: Option<String>,
    accessors: AccessorStyle,
    runtime: Option<String>,
}

#[derive(Debug, Default)]
struct FieldAttrs {
    getter: bool,
    setter: bool,
    parcelable: bool,
    serializable: bool,
}

fn bundler_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("bundler"))
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs {
        constructor: None,
        accessors: AccessorStyle::Snake,
        runtime: None,
    };
    for attr in bundler_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("constructor") {
                let value: LitStr = meta.value()?.parse()?;
                out.constructor = Some(value.value());
            } else if meta.path.is_ident("accessors") {
                let value: LitStr = meta.value()?.parse()?;
                out.accessors = AccessorStyle::parse(&value.value()).ok_or_else(|| {
                    syn::Error::new(value.span(), "expected \"snake\" or \"bean\"")
                })?;
            } else if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                out.runtime = Some(value.value());
            } else {
                return Err(meta.error("unsupported bundler attribute"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in bundler_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("getter") {
                out.getter = true;
            } else if meta.path.is_ident("setter") {
                out.setter = true;
            } else if meta.path.is_ident("parcelable") {
                out.parcelable = true;
            } else if meta.path.is_ident("serializable") {
                out.serializable = true;
            } else {
                return Err(meta.error("unsupported bundler field attribute"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(_) => Visibility::Restricted,
        syn::Visibility::Inherited => Visibility::Private,
    }
}

/// Extracts the class schema and the type universe from a struct.
fn extract(input: &DeriveInput) -> syn::Result<(ClassSchema, TypeUniverse, ContainerAttrs)> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Bundled cannot be derived for generic types",
        ));
    }
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Bundled requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Bundled can only be derived for structs",
            ));
        }
    };

    let attrs = parse_container_attrs(&input.attrs)?;
    let mut class =
        ClassSchema::new(input.ident.to_string()).with_accessor_style(attrs.accessors);
    if let Some(name) = &attrs.constructor {
        class = class.with_constructor(ConstructorDescriptor::new(name.clone(), Vec::new()));
    }

    let mut universe = TypeUniverse::new();
    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = ident.unraw().to_string();
        let ty = lower_type(&field.ty);
        let field_attrs = parse_field_attrs(&field.attrs)?;

        if field_attrs.parcelable || field_attrs.serializable {
            let Some(inner) = ty.innermost_name() else {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "capability attributes require a named type",
                ));
            };
            let mut supertypes = Vec::new();
            if field_attrs.parcelable {
                supertypes.push(names::PARCELABLE);
            }
            if field_attrs.serializable {
                supertypes.push(names::SERIALIZABLE);
            }
            universe.declare(inner, supertypes);
        }
        if field_attrs.getter {
            class = class.with_method(MethodDescriptor::getter(
                attrs.accessors.getter_name(&name),
                ty.clone(),
            ));
        }
        if field_attrs.setter {
            class = class.with_method(MethodDescriptor::setter(
                attrs.accessors.setter_name(&name),
                ty.clone(),
            ));
        }
        class = class.with_field(FieldDescriptor::new(name, ty).with_visibility(visibility(&field.vis)));
    }
    Ok((class, universe, attrs))
}

fn error_span(input: &DeriveInput, err: &CodegenError) -> Span {
    let field_span = |wanted: &str| {
        let Data::Struct(data) = &input.data else {
            return None;
        };
        data.fields
            .iter()
            .filter_map(|f| f.ident.as_ref())
            .find(|ident| ident.unraw() == wanted)
            .map(syn::Ident::span)
    };
    match err {
        CodegenError::UnknownType { field, .. } => {
            field_span(field).unwrap_or_else(|| input.ident.span())
        }
        _ => input.ident.span(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let (class, universe, attrs) = extract(input)?;
    validate_class(&class).map_err(|e| syn::Error::new(input.ident.span(), e.to_string()))?;

    let mut config = GeneratorConfig::default()
        .with_key_root(KeyRoot::ModulePath)
        .with_visibility(input.vis.to_token_stream().to_string());
    if let Some(runtime) = attrs.runtime {
        config = config.with_runtime_path(runtime);
    }

    let code = generate_companion(&class, &universe, &config)
        .map_err(|e| syn::Error::new(error_span(input, &e), e.to_string()))?;
    syn::parse_str::<TokenStream2>(&code)
        .map_err(|e| syn::Error::new(input.ident.span(), format!("generated invalid code: {e}")))
}
