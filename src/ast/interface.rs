//! TypeScript interface builder.

use crate::builder::CodeBuilder;
use crate::format::Options;

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field (`name?: ty`).
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    /// Render the interface to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder, options: &Options) -> CodeBuilder {
        if self.fields.is_empty() {
            return builder.line(&format!("export interface {} {{}}", self.name));
        }
        let builder = builder
            .line(&format!("export interface {} {{", self.name))
            .indent();
        self.render_fields(builder, options).dedent().line("}")
    }

    fn render_fields(&self, builder: CodeBuilder, options: &Options) -> CodeBuilder {
        self.fields.iter().fold(builder, |b, field| {
            let optional = if field.optional { "?" } else { "" };
            b.line(&format!(
                "{}{}: {}{}",
                field.name,
                optional,
                field.ty,
                options.terminator()
            ))
        })
    }

    /// Build the interface as a string.
    pub fn build(&self, options: &Options) -> String {
        self.render(CodeBuilder::new(options.indent), options).build()
    }
}
