//! Class schema definitions.
//!
//! A [`ClassSchema`] is the read-only description of one record type: its
//! fields, the methods that may act as accessors, and its constructors.

use crate::types::TypeDescriptor;

/// Visibility of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible everywhere (`pub`).
    Public,
    /// Visible to a restricted scope (`pub(crate)`, `pub(super)`).
    Restricted,
    /// Visible only to the defining module.
    #[default]
    Private,
}

impl Visibility {
    /// Parses a visibility keyword.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "restricted" | "crate" => Some(Self::Restricted),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

/// Naming convention used to find accessor methods for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessorStyle {
    /// `getName` / `setName`.
    #[default]
    Bean,
    /// `get_name` / `set_name`.
    Snake,
}

impl AccessorStyle {
    /// Parses an accessor style keyword.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bean" => Some(Self::Bean),
            "snake" => Some(Self::Snake),
            _ => None,
        }
    }

    /// Returns the getter name for a field.
    #[must_use]
    pub fn getter_name(self, field: &str) -> String {
        match self {
            Self::Bean => format!("get{}", capitalize(field)),
            Self::Snake => format!("get_{field}"),
        }
    }

    /// Returns the setter name for a field.
    #[must_use]
    pub fn setter_name(self, field: &str) -> String {
        match self {
            Self::Bean => format!("set{}", capitalize(field)),
            Self::Snake => format!("set_{field}"),
        }
    }
}

/// Upper-cases the first character of `name`.
///
/// Only ASCII letters are affected; other leading characters are kept as is.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// A declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeDescriptor,
    /// Visibility.
    pub visibility: Visibility,
    /// True for class-level (static) fields.
    pub is_static: bool,
}

impl FieldDescriptor {
    /// Creates a private instance field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Private,
            is_static: false,
        }
    }

    /// Sets the visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the field as static.
    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Returns true if the field is visible everywhere.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A declared method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name.
    pub name: String,
    /// Parameter types, excluding the receiver.
    pub params: Vec<TypeDescriptor>,
    /// Return type; `None` for unit.
    pub return_type: Option<TypeDescriptor>,
}

impl MethodDescriptor {
    /// Creates a method.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        params: Vec<TypeDescriptor>,
        return_type: Option<TypeDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
        }
    }

    /// Creates a zero-parameter method returning `ty`.
    #[must_use]
    pub fn getter(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(name, Vec::new(), Some(ty))
    }

    /// Creates a unit method taking a single `ty`.
    #[must_use]
    pub fn setter(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self::new(name, vec![ty], None)
    }
}

/// A declared constructor.
///
/// The name `default` stands for the `Default` trait; any other name is an
/// associated function of the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    /// Constructor name.
    pub name: String,
    /// Parameter types.
    pub params: Vec<TypeDescriptor>,
}

impl ConstructorDescriptor {
    /// Name that denotes the `Default` trait.
    pub const DEFAULT_TRAIT: &'static str = "default";

    /// Creates a constructor.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Creates the zero-parameter constructor provided by `Default`.
    #[must_use]
    pub fn default_trait() -> Self {
        Self::new(Self::DEFAULT_TRAIT, Vec::new())
    }

    /// Returns true if this constructor is `Default::default`.
    #[must_use]
    pub fn is_default_trait(&self) -> bool {
        self.name == Self::DEFAULT_TRAIT
    }

    /// Returns true if the constructor takes no parameters.
    #[must_use]
    pub fn is_nullary(&self) -> bool {
        self.params.is_empty()
    }
}

/// The schema of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSchema {
    /// Qualified name (`a::b::Name`).
    pub qualified_name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Methods.
    pub methods: Vec<MethodDescriptor>,
    /// Constructors.
    pub constructors: Vec<ConstructorDescriptor>,
    /// Accessor naming convention.
    pub accessor_style: AccessorStyle,
}

impl ClassSchema {
    /// Creates an empty class schema.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            accessor_style: AccessorStyle::default(),
        }
    }

    /// Sets the accessor naming convention.
    #[must_use]
    pub fn with_accessor_style(mut self, style: AccessorStyle) -> Self {
        self.accessor_style = style;
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a constructor.
    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Returns the last path segment of the qualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Returns the first zero-parameter constructor.
    #[must_use]
    pub fn default_constructor(&self) -> Option<&ConstructorDescriptor> {
        self.constructors.iter().find(|c| c.is_nullary())
    }

    /// Returns the methods with the given name.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDescriptor> {
        self.methods.iter().filter(move |m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveKind;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "éclair");
    }

    #[test]
    fn test_accessor_names() {
        assert_eq!(AccessorStyle::Bean.getter_name("score"), "getScore");
        assert_eq!(AccessorStyle::Bean.setter_name("score"), "setScore");
        assert_eq!(AccessorStyle::Snake.getter_name("score"), "get_score");
        assert_eq!(AccessorStyle::Snake.setter_name("score"), "set_score");
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(ClassSchema::new("a::b::Name").simple_name(), "Name");
        assert_eq!(ClassSchema::new("Name").simple_name(), "Name");
    }

    #[test]
    fn test_default_constructor() {
        let int = TypeDescriptor::Primitive(PrimitiveKind::Int);
        let class = ClassSchema::new("demo::Point")
            .with_constructor(ConstructorDescriptor::new("with_x", vec![int]));
        assert!(class.default_constructor().is_none());

        let class = class.with_constructor(ConstructorDescriptor::default_trait());
        let ctor = class.default_constructor().unwrap();
        assert!(ctor.is_default_trait());
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!(Visibility::parse("public"), Some(Visibility::Public));
        assert_eq!(Visibility::parse("crate"), Some(Visibility::Restricted));
        assert_eq!(Visibility::parse("protected"), None);
        assert_eq!(Visibility::default(), Visibility::Private);
    }
}
