//! Companion struct code generation.

use crate::config::{GeneratorConfig, KeyRoot};
use crate::error::CodegenError;
use crate::filter::AccessMode;
use crate::plan::FieldPlan;
use crate::rust::{key_const_name, rust_type};
use bundler_schema::{ClassSchema, ConstructorDescriptor, field_ident};
use std::collections::HashSet;

/// Generator for one class's bundle companion.
pub struct CompanionGenerator<'a> {
    class: &'a ClassSchema,
    plans: &'a [FieldPlan<'a>],
    config: &'a GeneratorConfig,
}

impl<'a> CompanionGenerator<'a> {
    /// Creates a new companion generator.
    #[must_use]
    pub fn new(
        class: &'a ClassSchema,
        plans: &'a [FieldPlan<'a>],
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            class,
            plans,
            config,
        }
    }

    /// Generates the companion struct and the `Bundled` implementation.
    ///
    /// # Errors
    /// Returns [`CodegenError::MissingDefaultConstructor`] if the class has no
    /// zero-parameter constructor, and [`CodegenError::Generation`] if two
    /// fields map to the same key constant.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let ctor = self.class.default_constructor().ok_or_else(|| {
            CodegenError::missing_default_constructor(&self.class.qualified_name)
        })?;
        self.check_key_names()?;

        let mut output = String::new();
        output.push_str(&self.generate_struct());
        output.push_str(&self.generate_impl(ctor));
        output.push_str(&self.generate_bundled_impl());
        Ok(output)
    }

    fn check_key_names(&self) -> Result<(), CodegenError> {
        let mut seen = HashSet::new();
        for plan in self.plans {
            let name = key_const_name(&plan.field.name);
            if !seen.insert(name.clone()) {
                return Err(CodegenError::generation(format!(
                    "field '{}' of {} collides with another field on key constant {}",
                    plan.field.name, self.class.qualified_name, name
                )));
            }
        }
        Ok(())
    }

    fn vis(&self) -> String {
        if self.config.visibility.is_empty() {
            String::new()
        } else {
            format!("{} ", self.config.visibility)
        }
    }

    fn runtime(&self) -> &str {
        &self.config.runtime_path
    }

    fn companion_name(&self) -> String {
        self.config.companion_name(self.class.simple_name())
    }

    fn key_expr(&self, field: &str) -> String {
        match self.config.key_root {
            KeyRoot::Qualified => {
                format!("{:?}", format!("KEY_{}_{}", self.class.qualified_name, field))
            }
            KeyRoot::ModulePath => format!(
                "concat!(\"KEY_\", module_path!(), \"::\", {:?}, \"_\", {:?})",
                self.class.simple_name(),
                field
            ),
        }
    }

    fn type_name_expr(&self) -> String {
        match self.config.key_root {
            KeyRoot::Qualified => format!("{:?}", self.class.qualified_name),
            KeyRoot::ModulePath => format!(
                "concat!(module_path!(), \"::\", {:?})",
                self.class.simple_name()
            ),
        }
    }

    fn constructor_expr(&self, ctor: &ConstructorDescriptor) -> String {
        let simple = self.class.simple_name();
        if ctor.is_default_trait() {
            format!("<{simple} as ::core::default::Default>::default()")
        } else {
            format!("{simple}::{}()", ctor.name)
        }
    }

    fn generate_struct(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "/// Bundle companion for [`{}`].\n",
            self.class.simple_name()
        ));
        output.push_str("#[derive(Debug, Clone, Copy, Default)]\n");
        output.push_str(&format!("{}struct {};\n\n", self.vis(), self.companion_name()));
        output
    }

    fn generate_impl(&self, ctor: &ConstructorDescriptor) -> String {
        let simple = self.class.simple_name();
        let runtime = self.runtime();
        let vis = self.vis();
        let mut output = String::new();

        output.push_str("#[allow(unused_mut, clippy::clone_on_copy)]\n");
        output.push_str(&format!("impl {} {{\n", self.companion_name()));

        for plan in self.plans {
            output.push_str(&format!(
                "    /// Container key of `{}`.\n",
                plan.field.name
            ));
            output.push_str(&format!(
                "    {}const {}: &'static str = {};\n\n",
                vis,
                key_const_name(&plan.field.name),
                self.key_expr(&plan.field.name)
            ));
        }

        // Encoder
        output.push_str(&format!(
            "    /// Writes every eligible field of a [`{simple}`] into a new bundle.\n"
        ));
        output.push_str(&format!(
            "    {vis}fn to_bundle(object: &{simple}) -> {runtime}::Bundle {{\n"
        ));
        output.push_str(&format!(
            "        let mut bundle = {runtime}::Bundle::new();\n"
        ));
        if self.plans.is_empty() {
            output.push_str("        let _ = object;\n");
        }
        for plan in self.plans {
            output.push_str(&self.generate_put(plan));
        }
        output.push_str("        bundle\n");
        output.push_str("    }\n\n");

        // Decoder
        output.push_str(&format!(
            "    /// Builds a [`{simple}`] from the entries of `bundle`.\n"
        ));
        output.push_str(&format!(
            "    {vis}fn from_bundle(bundle: &{runtime}::Bundle) -> {runtime}::Result<{simple}> {{\n"
        ));
        output.push_str(&format!(
            "        let mut object = {};\n",
            self.constructor_expr(ctor)
        ));
        if self.plans.is_empty() {
            output.push_str("        let _ = bundle;\n");
        }
        for plan in self.plans {
            output.push_str(&self.generate_get(plan));
        }
        output.push_str("        Ok(object)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");
        output
    }

    fn generate_put(&self, plan: &FieldPlan<'_>) -> String {
        let read = match &plan.access {
            AccessMode::Direct => format!("object.{}.clone()", field_ident(&plan.field.name)),
            AccessMode::AccessorPair { getter, .. } => format!("object.{getter}()"),
        };
        let key = key_const_name(&plan.field.name);
        let put = plan.tag.put_method();

        if plan.is_nullable() {
            format!(
                "        if let Some(value) = {read} {{\n            bundle.{put}(Self::{key}, value);\n        }}\n"
            )
        } else {
            format!("        bundle.{put}(Self::{key}, {read});\n")
        }
    }

    fn generate_get(&self, plan: &FieldPlan<'_>) -> String {
        let runtime = self.runtime();
        let key = key_const_name(&plan.field.name);
        let read = format!("bundle.{}(Self::{key})?", plan.tag.get_method());

        let value = if plan.requires_cast {
            let target = rust_type(&plan.field.ty.value_type(), runtime);
            let cast = if plan.is_nullable() { "cast_nullable" } else { "cast" };
            format!("{runtime}::{cast}::<{target}, _>({read}, Self::{key})?")
        } else if plan.is_nullable() {
            read
        } else {
            format!("{runtime}::require({read}, Self::{key})?")
        };

        match &plan.access {
            AccessMode::Direct => {
                format!("        object.{} = {value};\n", field_ident(&plan.field.name))
            }
            AccessMode::AccessorPair { setter, .. } => {
                format!("        object.{setter}({value});\n")
            }
        }
    }

    fn generate_bundled_impl(&self) -> String {
        let simple = self.class.simple_name();
        let runtime = self.runtime();
        let companion = self.companion_name();
        let mut output = String::new();

        output.push_str(&format!("impl {runtime}::Bundled for {simple} {{\n"));
        output.push_str(&format!(
            "    const TYPE_NAME: &'static str = {};\n\n",
            self.type_name_expr()
        ));
        output.push_str(&format!(
            "    fn to_bundle(&self) -> {runtime}::Bundle {{\n        {companion}::to_bundle(self)\n    }}\n\n"
        ));
        output.push_str(&format!(
            "    fn from_bundle(bundle: &{runtime}::Bundle) -> {runtime}::Result<Self> {{\n        {companion}::from_bundle(bundle)\n    }}\n"
        ));
        output.push_str("}\n\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan_class;
    use bundler_schema::{FieldDescriptor, MethodDescriptor, TypeUniverse, Visibility, parse_type};

    fn public(name: &str, ty: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, parse_type(ty).unwrap()).with_visibility(Visibility::Public)
    }

    fn generate(class: &ClassSchema, config: &GeneratorConfig) -> Result<String, CodegenError> {
        let universe = TypeUniverse::new().with_type("Point", ["Parcelable"]);
        let plans = plan_class(class, &universe)?;
        CompanionGenerator::new(class, &plans, config).generate()
    }

    #[test]
    fn test_generate_direct_fields() {
        let class = ClassSchema::new("demo::Profile")
            .with_constructor(ConstructorDescriptor::new("new", Vec::new()))
            .with_field(public("title", "String"));
        let code = generate(&class, &GeneratorConfig::default()).unwrap();

        assert!(code.contains("pub struct ProfileBundler;"));
        assert!(code.contains("pub const KEY_TITLE: &'static str = \"KEY_demo::Profile_title\";"));
        assert!(code.contains("bundle.put_string(Self::KEY_TITLE, object.title.clone());"));
        assert!(code.contains("let mut object = Profile::new();"));
        assert!(code.contains(
            "object.title = ::bundler::cast::<String, _>(bundle.get_string(Self::KEY_TITLE)?, Self::KEY_TITLE)?;"
        ));
        assert!(code.contains("impl ::bundler::Bundled for Profile {"));
        assert!(code.contains("const TYPE_NAME: &'static str = \"demo::Profile\";"));
    }

    #[test]
    fn test_generate_accessor_pair() {
        let int = parse_type("i32").unwrap();
        let class = ClassSchema::new("demo::Profile")
            .with_constructor(ConstructorDescriptor::default_trait())
            .with_field(FieldDescriptor::new("score", int.clone()))
            .with_method(MethodDescriptor::getter("getScore", int.clone()))
            .with_method(MethodDescriptor::setter("setScore", int));
        let code = generate(&class, &GeneratorConfig::default()).unwrap();

        assert!(code.contains("bundle.put_int(Self::KEY_SCORE, object.getScore());"));
        assert!(code.contains(
            "object.setScore(::bundler::cast::<i32, _>(bundle.get_int(Self::KEY_SCORE)?, Self::KEY_SCORE)?);"
        ));
        assert!(code.contains("<Profile as ::core::default::Default>::default()"));
    }

    #[test]
    fn test_generate_nullable_field() {
        let class = ClassSchema::new("demo::Profile")
            .with_constructor(ConstructorDescriptor::default_trait())
            .with_field(public("nick", "Option<String>"));
        let code = generate(&class, &GeneratorConfig::default()).unwrap();

        assert!(code.contains("if let Some(value) = object.nick.clone() {"));
        assert!(code.contains("bundle.put_string(Self::KEY_NICK, value);"));
        assert!(code.contains("::bundler::cast_nullable::<String, _>("));
    }

    #[test]
    fn test_polymorphic_list_skips_cast() {
        let class = ClassSchema::new("demo::Scene")
            .with_constructor(ConstructorDescriptor::default_trait())
            .with_field(public("points", "Vec<Point>"))
            .with_field(public("extra", "Option<Vec<Point>>"));
        let code = generate(&class, &GeneratorConfig::default()).unwrap();

        assert!(code.contains(
            "object.points = ::bundler::require(bundle.get_parcelable_array_list(Self::KEY_POINTS)?, Self::KEY_POINTS)?;"
        ));
        assert!(code.contains("object.extra = bundle.get_parcelable_array_list(Self::KEY_EXTRA)?;"));
    }

    #[test]
    fn test_runtime_types_use_runtime_path() {
        let class = ClassSchema::new("demo::Scene")
            .with_constructor(ConstructorDescriptor::default_trait())
            .with_field(public("inner", "Bundle"));
        let config = GeneratorConfig::default().with_runtime_path("crate::rt");
        let code = generate(&class, &config).unwrap();

        assert!(code.contains("crate::rt::cast::<crate::rt::Bundle, _>("));
        assert!(code.contains("fn to_bundle(object: &Scene) -> crate::rt::Bundle {"));
    }

    #[test]
    fn test_module_path_keys() {
        let class = ClassSchema::new("Profile")
            .with_constructor(ConstructorDescriptor::default_trait())
            .with_field(public("title", "String"));
        let config = GeneratorConfig::default()
            .with_key_root(KeyRoot::ModulePath)
            .with_visibility("");
        let code = generate(&class, &config).unwrap();

        assert!(code.contains(
            "const KEY_TITLE: &'static str = concat!(\"KEY_\", module_path!(), \"::\", \"Profile\", \"_\", \"title\");"
        ));
        assert!(code.contains("const TYPE_NAME: &'static str = concat!(module_path!(), \"::\", \"Profile\");"));
        assert!(code.contains("\nstruct ProfileBundler;"));
    }

    #[test]
    fn test_missing_default_constructor() {
        let class = ClassSchema::new("demo::Profile")
            .with_constructor(ConstructorDescriptor::new("with_title", vec![parse_type("String").unwrap()]))
            .with_field(public("title", "String"));
        let err = generate(&class, &GeneratorConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "type demo::Profile does not have default constructor");
    }

    #[test]
    fn test_empty_class() {
        let class = ClassSchema::new("demo::Empty").with_constructor(ConstructorDescriptor::default_trait());
        let code = generate(&class, &GeneratorConfig::default()).unwrap();
        assert!(code.contains("let _ = bundle;"));
        assert!(code.contains("let _ = object;"));
    }

    #[test]
    fn test_key_constant_collision() {
        let class = ClassSchema::new("demo::Profile")
            .with_constructor(ConstructorDescriptor::default_trait())
            .with_field(public("userName", "String"))
            .with_field(public("user_name", "String"));
        let err = generate(&class, &GeneratorConfig::default()).unwrap_err();
        assert!(matches!(err, CodegenError::Generation { .. }));
    }

    #[test]
    fn test_keyword_field_uses_raw_access() {
        let class = ClassSchema::new("demo::Token")
            .with_constructor(ConstructorDescriptor::default_trait())
            .with_field(public("type", "i32"));
        let code = generate(&class, &GeneratorConfig::default()).unwrap();

        assert!(code.contains("pub const KEY_TYPE: &'static str = \"KEY_demo::Token_type\";"));
        assert!(code.contains("bundle.put_int(Self::KEY_TYPE, object.r#type.clone());"));
        assert!(code.contains("        object.r#type = "));
    }
}
