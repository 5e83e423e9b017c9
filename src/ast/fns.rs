//! TypeScript function builder.

use crate::builder::CodeBuilder;
use crate::format::{Options, TrailingComma};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
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

    fn render(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, optional, self.ty)
    }
}

/// Builder for exported TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    /// Render the function to a CodeBuilder.
    ///
    /// The parameter list breaks onto its own lines when the one-line
    /// signature would exceed the configured print width.
    pub fn render(&self, builder: CodeBuilder, options: &Options) -> CodeBuilder {
        let params: Vec<String> = self.params.iter().map(Param::render).collect();
        let one_line = match &self.return_type {
            Some(ret) => format!(
                "export function {}({}): {} {{",
                self.name,
                params.join(", "),
                ret
            ),
            None => format!("export function {}({}) {{", self.name, params.join(", ")),
        };

        let builder = if one_line.len() <= options.print_width {
            builder.line(&one_line)
        } else {
            self.render_broken_signature(builder, &params, options)
        };

        let builder = builder.indent();
        let builder = self.body.iter().fold(builder, |b, line| b.line(line));
        builder.dedent().line("}")
    }

    fn render_broken_signature(
        &self,
        builder: CodeBuilder,
        params: &[String],
        options: &Options,
    ) -> CodeBuilder {
        let mut builder = builder
            .line(&format!("export function {}(", self.name))
            .indent();
        for (idx, param) in params.iter().enumerate() {
            let last = idx + 1 == params.len();
            let comma = if !last || options.trailing_comma == TrailingComma::All {
                ","
            } else {
                ""
            };
            builder = builder.line(&format!("{}{}", param, comma));
        }
        let close = match &self.return_type {
            Some(ret) => format!("): {} {{", ret),
            None => ") {".to_string(),
        };
        builder.dedent().line(&close)
    }

    /// Build the function as a string.
    pub fn build(&self, options: &Options) -> String {
        self.render(CodeBuilder::new(options.indent), options).build()
    }
}
