//! Textual templates with named placeholders.
//!
//! A template body contains placeholders written `{{FieldName}}`. Rendering
//! replaces each one with the request's value; nothing else is interpreted.

use craft_core::TokenSet;

use crate::{Error, Result, TargetPath};

/// A substitution field a template may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Effective Go package name
    PackageName,
    /// Exported type name, e.g. `Order`
    TypeName,
    /// Unexported instance name, e.g. `order`
    InstanceName,
}

impl Field {
    /// Placeholder text between the braces.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::PackageName => "PackageName",
            Field::TypeName => "TypeName",
            Field::InstanceName => "InstanceName",
        }
    }

    fn from_placeholder(name: &str) -> Option<Self> {
        match name {
            "PackageName" => Some(Field::PackageName),
            "TypeName" => Some(Field::TypeName),
            "InstanceName" => Some(Field::InstanceName),
            _ => None,
        }
    }
}

/// How a template's output file is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileName {
    /// Always the same name, e.g. `service.go`
    Fixed(&'static str),
    /// The snake_case leaf name plus the Go extension
    Derived,
}

/// A template in a bundle.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Identifier used in reports and errors
    pub name: &'static str,
    pub file_name: FileName,
    /// Fields the body is allowed to reference
    pub fields: &'static [Field],
    pub body: &'static str,
}

impl Template {
    /// Substitute every placeholder in the body.
    pub fn render(&self, values: &FieldValues) -> Result<String> {
        let mut out = String::with_capacity(self.body.len() + 64);
        let mut rest = self.body;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);

            let inner = &rest[start + 2..];
            let Some(end) = inner.find("}}") else {
                return Err(Error::UnterminatedPlaceholder {
                    template: self.name,
                    offset: offset + start,
                });
            };

            let name = inner[..end].trim();
            let field = Field::from_placeholder(name)
                .filter(|field| self.fields.contains(field))
                .ok_or_else(|| Error::UndeclaredField {
                    template: self.name,
                    field: name.to_string(),
                })?;
            out.push_str(values.get(field));

            let consumed = start + 2 + end + 2;
            rest = &rest[consumed..];
            offset += consumed;
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Values for every field, computed once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    package_name: String,
    type_name: String,
    instance_name: String,
}

impl FieldValues {
    pub fn new(target: &TargetPath, tokens: &TokenSet) -> Self {
        Self {
            package_name: target.package.clone(),
            type_name: tokens.type_name().to_string(),
            instance_name: tokens.instance_name().to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PackageName => &self.package_name,
            Field::TypeName => &self.type_name,
            Field::InstanceName => &self.instance_name,
        }
    }
}
