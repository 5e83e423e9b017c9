//! TypeScript union type builder.

use crate::builder::CodeBuilder;
use crate::format::Options;

/// Builder for exported union type aliases.
///
/// An empty union renders as `never`, the only type with no values.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    members: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a single member.
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Add members in order.
    pub fn members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for member in members {
            self.members.push(member.into());
        }
        self
    }

    /// Render the union to a CodeBuilder.
    ///
    /// Breaks into the leading-pipe form when the one-line alias would
    /// exceed the configured print width.
    pub fn render(&self, builder: CodeBuilder, options: &Options) -> CodeBuilder {
        if self.members.is_empty() {
            return builder.line(&format!(
                "export type {} = never{}",
                self.name,
                options.terminator()
            ));
        }

        let one_line = format!(
            "export type {} = {}{}",
            self.name,
            self.members.join(" | "),
            options.terminator()
        );
        if one_line.len() <= options.print_width {
            return builder.line(&one_line);
        }

        let mut builder = builder
            .line(&format!("export type {} =", self.name))
            .indent();
        let count = self.members.len();
        for (idx, member) in self.members.iter().enumerate() {
            let terminator = if idx + 1 == count {
                options.terminator()
            } else {
                ""
            };
            builder = builder.line(&format!("| {}{}", member, terminator));
        }
        builder.dedent()
    }

    /// Build the union as a string.
    pub fn build(&self, options: &Options) -> String {
        self.render(CodeBuilder::new(options.indent), options).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_union_is_never() {
        let u = Union::new("PathPattern").build(&Options::default());
        assert_eq!(u, "export type PathPattern = never\n");
    }

    #[test]
    fn test_inline_union() {
        let u = Union::new("ArithmeticExpression")
            .member("Plus")
            .member("number")
            .build(&Options::default());
        assert_eq!(u, "export type ArithmeticExpression = Plus | number\n");
    }

    #[test]
    fn test_members_appends_in_order() {
        let u = Union::new("Query")
            .members(["And", "Or"])
            .member("Not")
            .build(&Options::default());
        assert_eq!(u, "export type Query = And | Or | Not\n");
    }

    #[test]
    fn test_long_union_breaks_into_leading_pipe_form() {
        let u = Union::new("Query")
            .members([
                "Using",
                "Select",
                "Distinct",
                "And",
                "Or",
                "From",
                "Into",
                "Triple",
                "AddTriple",
                "AddedTriple",
            ])
            .build(&Options::default());
        assert!(u.starts_with("export type Query =\n  | Using\n  | Select\n"));
        assert!(u.ends_with("  | AddedTriple\n"));
    }

    #[test]
    fn test_semicolon_lands_on_the_last_member() {
        let options = Options {
            semi: true,
            ..Options::default()
        };
        let inline = Union::new("A").member("B").build(&options);
        assert_eq!(inline, "export type A = B;\n");

        let broken = Union::new("Query")
            .members([
                "Using",
                "Select",
                "Distinct",
                "And",
                "Or",
                "From",
                "Into",
                "Triple",
                "AddTriple",
                "AddedTriple",
            ])
            .build(&options);
        assert!(broken.ends_with("  | AddedTriple;\n"));
    }
}
