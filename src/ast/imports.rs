//! TypeScript import builder.

use crate::builder::CodeBuilder;
use crate::format::Options;

/// A named binding in an import statement.
#[derive(Debug, Clone)]
struct ImportName {
    name: String,
    type_only: bool,
}

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<ImportName>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(ImportName {
            name: name.into(),
            type_only: false,
        });
        self
    }

    /// Import a named export as a type (`import { type Foo }`).
    pub fn named_type(mut self, name: impl Into<String>) -> Self {
        self.named.push(ImportName {
            name: name.into(),
            type_only: true,
        });
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder, options: &Options) -> CodeBuilder {
        let names = self
            .named
            .iter()
            .map(|binding| {
                if binding.type_only {
                    format!("type {}", binding.name)
                } else {
                    binding.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        builder.line(&format!(
            "import {{ {} }} from {}{}",
            names,
            options.quote.wrap(&self.from),
            options.terminator()
        ))
    }

    /// Build the import as a string.
    pub fn build(&self, options: &Options) -> String {
        self.render(CodeBuilder::new(options.indent), options).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Quote;

    #[test]
    fn test_named_import() {
        let i = Import::new("./utils.js")
            .named("foo")
            .named("bar")
            .build(&Options::default());
        assert_eq!(i, "import { foo, bar } from './utils.js'\n");
    }

    #[test]
    fn test_type_bindings() {
        let i = Import::new("./types.js")
            .named_type("Graph")
            .named_type("Value")
            .named_type("Node")
            .build(&Options::default());
        assert_eq!(
            i,
            "import { type Graph, type Value, type Node } from './types.js'\n"
        );
    }

    #[test]
    fn test_quote_and_semicolon_follow_the_options() {
        let options = Options {
            semi: true,
            quote: Quote::Double,
            ..Options::default()
        };
        let i = Import::new("./types.js").named_type("Graph").build(&options);
        assert_eq!(i, "import { type Graph } from \"./types.js\";\n");
    }
}
