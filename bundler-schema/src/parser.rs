//! Bundler XML schema parser.
//!
//! A schema document declares user types with their capabilities and the
//! classes to generate companions for:
//!
//! ```xml
//! <bundlerSchema package="demo">
//!   <types>
//!     <type name="Point" implements="Parcelable"/>
//!   </types>
//!   <class name="Profile" accessors="bean">
//!     <constructor name="new"/>
//!     <field name="title" type="String" visibility="public"/>
//!     <field name="score" type="i32"/>
//!     <method name="getScore" returns="i32"/>
//!     <method name="setScore"><param type="i32"/></method>
//!   </class>
//! </bundlerSchema>
//! ```
//!
//! Type attributes use Rust type syntax, XML-escaped (`Vec&lt;String&gt;`).

use crate::class::{
    AccessorStyle, ClassSchema, ConstructorDescriptor, FieldDescriptor, MethodDescriptor,
    Visibility,
};
use crate::document::{Schema, TypeDecl};
use crate::error::ParseError;
use crate::lower::parse_type;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// Parses a Bundler XML schema from a string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or contains invalid schema elements.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut builder = SchemaBuilder::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let (name, attrs) = element(e)?;
                builder.open(&name, &attrs)?;
            }
            Ok(Event::Empty(ref e)) => {
                let (name, attrs) = element(e)?;
                builder.open(&name, &attrs)?;
                builder.close(&name)?;
            }
            Ok(Event::End(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                builder.close(&name)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    builder.finish()
}

type Attributes = HashMap<String, String>;

/// Reads an element's name and unescaped attributes.
fn element(e: &BytesStart<'_>) -> Result<(String, Attributes), ParseError> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut attrs = HashMap::new();
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        attrs.insert(key.to_string(), unescape(raw)?.into_owned());
    }
    Ok((name, attrs))
}

fn required<'a>(attrs: &'a Attributes, element: &str, attribute: &str) -> Result<&'a str, ParseError> {
    attrs
        .get(attribute)
        .map(String::as_str)
        .ok_or_else(|| ParseError::missing_attr(element, attribute))
}

fn parse_bool(value: &str, element: &str, attribute: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

/// A class member whose children are still being read.
#[derive(Debug)]
enum Member {
    Method(MethodDescriptor),
    Constructor(ConstructorDescriptor),
}

/// Incremental builder driven by element open/close events.
#[derive(Debug, Default)]
struct SchemaBuilder {
    schema: Option<Schema>,
    class: Option<ClassSchema>,
    member: Option<Member>,
    stack: Vec<String>,
}

impl SchemaBuilder {
    fn open(&mut self, name: &str, attrs: &Attributes) -> Result<(), ParseError> {
        let parent = self.stack.last().cloned();
        match (parent.as_deref(), name) {
            (None, "bundlerSchema") => {
                let package = attrs.get("package").cloned().unwrap_or_default();
                self.schema = Some(Schema::new(package));
            }
            (Some("bundlerSchema"), "types") => {}
            (Some("types"), "type") => self.open_type(attrs)?,
            (Some("bundlerSchema"), "class") => self.open_class(attrs)?,
            (Some("class"), "constructor") => {
                let ctor_name = attrs.get("name").map_or("new", String::as_str);
                self.member = Some(Member::Constructor(ConstructorDescriptor::new(
                    ctor_name,
                    Vec::new(),
                )));
            }
            (Some("class"), "field") => self.open_field(attrs)?,
            (Some("class"), "method") => {
                let method_name = required(attrs, "method", "name")?;
                let return_type = attrs.get("returns").map(|t| parse_type(t)).transpose()?;
                self.member = Some(Member::Method(MethodDescriptor::new(
                    method_name,
                    Vec::new(),
                    return_type,
                )));
            }
            (Some("method" | "constructor"), "param") => {
                let ty = parse_type(required(attrs, "param", "type")?)?;
                match self.member.as_mut() {
                    Some(Member::Method(method)) => method.params.push(ty),
                    Some(Member::Constructor(ctor)) => ctor.params.push(ty),
                    None => return Err(ParseError::structure("param outside of a member")),
                }
            }
            (parent, _) => {
                return Err(ParseError::unknown_element(name, parent.unwrap_or("document")));
            }
        }
        self.stack.push(name.to_string());
        Ok(())
    }

    fn open_type(&mut self, attrs: &Attributes) -> Result<(), ParseError> {
        let type_name = required(attrs, "type", "name")?.to_string();
        let implements = attrs
            .get("implements")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        self.schema_mut()?.types.push(TypeDecl::new(type_name, implements));
        Ok(())
    }

    fn open_class(&mut self, attrs: &Attributes) -> Result<(), ParseError> {
        let class_name = required(attrs, "class", "name")?;
        let accessor_style = match attrs.get("accessors") {
            Some(value) => AccessorStyle::parse(value)
                .ok_or_else(|| ParseError::invalid_attr("class", "accessors", value.as_str()))?,
            None => AccessorStyle::Bean,
        };
        let qualified = self.schema_mut()?.qualify(class_name);
        self.class = Some(ClassSchema::new(qualified).with_accessor_style(accessor_style));
        Ok(())
    }

    fn open_field(&mut self, attrs: &Attributes) -> Result<(), ParseError> {
        let field_name = required(attrs, "field", "name")?;
        let ty = parse_type(required(attrs, "field", "type")?)?;
        let visibility = match attrs.get("visibility") {
            Some(value) => Visibility::parse(value)
                .ok_or_else(|| ParseError::invalid_attr("field", "visibility", value.as_str()))?,
            None => Visibility::Private,
        };
        let is_static = match attrs.get("static") {
            Some(value) => parse_bool(value, "field", "static")?,
            None => false,
        };
        let field = FieldDescriptor::new(field_name, ty)
            .with_visibility(visibility)
            .with_static(is_static);
        self.class_mut()?.fields.push(field);
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<(), ParseError> {
        match self.stack.pop() {
            Some(open) if open == name => {}
            Some(open) => {
                return Err(ParseError::structure(format!(
                    "expected closing '{open}' but found '{name}'"
                )));
            }
            None => return Err(ParseError::structure(format!("unexpected closing '{name}'"))),
        }

        match name {
            "class" => {
                if let Some(class) = self.class.take() {
                    self.schema_mut()?.classes.push(class);
                }
            }
            "method" | "constructor" => match self.member.take() {
                Some(Member::Method(method)) => self.class_mut()?.methods.push(method),
                Some(Member::Constructor(ctor)) => self.class_mut()?.constructors.push(ctor),
                None => {}
            },
            _ => {}
        }
        Ok(())
    }

    fn schema_mut(&mut self) -> Result<&mut Schema, ParseError> {
        self.schema
            .as_mut()
            .ok_or_else(|| ParseError::structure("no bundlerSchema element found"))
    }

    fn class_mut(&mut self) -> Result<&mut ClassSchema, ParseError> {
        self.class
            .as_mut()
            .ok_or_else(|| ParseError::structure("member outside of a class"))
    }

    fn finish(self) -> Result<Schema, ParseError> {
        if let Some(open) = self.stack.last() {
            return Err(ParseError::structure(format!("unclosed element '{open}'")));
        }
        self.schema
            .ok_or_else(|| ParseError::structure("no bundlerSchema element found"))
    }
}
