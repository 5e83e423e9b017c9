//! Emission pipeline: renders the generated module and writes it next to
//! the schema list.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::{Fn, Import, Interface, ObjectLiteral, Param, Union};
use crate::builder::CodeBuilder;
use crate::error::{Error, Result};
use crate::format::{self, Options};
use crate::naming;
use crate::schema::{Operator, Schema};
use crate::type_mapper::{ResolvedType, resolve};

/// Directory holding the schema list and the generated module.
pub const WOQL_DEFS_DIR: &str = "src/woql_defs";
/// Schema list file name inside [`WOQL_DEFS_DIR`].
pub const SCHEMA_FILE: &str = "woql_list.json";
/// Generated module name, written next to the schema list.
pub const OUTPUT_FILE: &str = "woql.ts";

/// A union category with extra members injected verbatim.
struct Category {
    name: &'static str,
    extras: &'static [&'static str],
}

/// The three emitted categories, in output order. The arithmetic union
/// also accepts plain numeric literals.
const CATEGORIES: &[Category] = &[
    Category {
        name: "Query",
        extras: &[],
    },
    Category {
        name: "PathPattern",
        extras: &[],
    },
    Category {
        name: "ArithmeticExpression",
        extras: &["number"],
    },
];

/// Renders the generated module for a loaded schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: Options,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            options: Options::default(),
        }
    }

    pub fn with_options(schema: &'a Schema, options: Options) -> Self {
        Self { schema, options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render the full module: header plus the three category blocks.
    pub fn render(&self) -> String {
        let mut module = self.render_header();
        for category in CATEGORIES {
            module.push_str(&self.render_category(category));
        }
        module
    }

    /// Suppression directives and the import of the shared primitive
    /// aliases the generated code references but does not define.
    fn render_header(&self) -> String {
        let import = Import::new("./types.js")
            .named_type("Graph")
            .named_type("Value")
            .named_type("Node");
        import
            .render(
                CodeBuilder::new(self.options.indent)
                    .line("/* eslint-disable @typescript-eslint/no-empty-interface */")
                    .line("/* eslint-disable @typescript-eslint/naming-convention */"),
                &self.options,
            )
            .blank()
            .build()
    }

    /// Interfaces and constructors for one category, followed by its
    /// union type.
    fn render_category(&self, category: &Category) -> String {
        let mut block = String::new();
        let mut members: Vec<&str> = Vec::new();

        for op in self
            .schema
            .operators()
            .iter()
            .filter(|op| op.in_category(category.name))
        {
            let definition = self.render_operator(op);
            // Diagnostic echo of each definition as it is generated.
            print!("{definition}");
            block.push_str(&definition);
            members.push(&op.id);
        }

        let union = Union::new(category.name)
            .members(members)
            .members(category.extras.iter().copied());
        block.push_str(&union.build(&self.options));
        block.push('\n');
        block
    }

    /// Interface and constructor for one operator.
    fn render_operator(&self, op: &Operator) -> String {
        let quote = self.options.quote;
        let resolved: Vec<ResolvedType> = op.types.iter().map(|token| resolve(token)).collect();

        let mut interface = Interface::new(&op.id).field(quote.wrap("@type"), quote.wrap(&op.id));
        let mut constructor = Fn::new(naming::constructor_name(&op.id)).returns(&op.id);
        let mut body = ObjectLiteral::new().pair(quote.wrap("@type"), quote.wrap(&op.id));

        for (field, ty) in op.fields.iter().zip(&resolved) {
            interface = if ty.optional {
                interface.optional_field(field, &ty.ts)
            } else {
                interface.field(field, &ty.ts)
            };
            let param = Param::new(field, &ty.ts);
            constructor = constructor.param(if ty.optional { param.optional() } else { param });
            body = body.shorthand(field);
        }

        let constructor = constructor.body(self.render_return(&body));
        format!(
            "{}\n{}\n",
            interface.build(&self.options),
            constructor.build(&self.options)
        )
    }

    /// The `return` statement, inline when it fits the print width.
    fn render_return(&self, body: &ObjectLiteral) -> String {
        let inline = format!("return {}{}", body.build_inline(), self.options.terminator());
        if self.options.indent.width() + inline.len() <= self.options.print_width {
            inline
        } else {
            format!(
                "return {}{}",
                body.build_block(&self.options),
                self.options.terminator()
            )
        }
    }
}

/// Generate the module for the schema at the fixed repository location.
pub fn generate() -> Result<PathBuf> {
    generate_in(Path::new(WOQL_DEFS_DIR))
}

/// Generate the module for the schema list inside `dir`, writing the
/// output next to it. Returns the path of the written module.
pub fn generate_in(dir: &Path) -> Result<PathBuf> {
    let schema = Schema::from_file(dir.join(SCHEMA_FILE))?;
    let generator = Generator::new(&schema);
    let rendered = generator.render();
    let formatted = format::apply(&rendered, generator.options()).map_err(Error::format)?;

    let output = dir.join(OUTPUT_FILE);
    fs::write(&output, &formatted).map_err(|e| Error::write(output.clone(), e))?;
    Ok(output)
}
