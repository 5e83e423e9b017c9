//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use woqlgen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export interface Not {")
///     .indent()
///     .line("query: Query")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export interface Not {\n  query: Query\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1").build();
        assert_eq!(code, "const x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::typescript()
            .line("function foo() {")
            .indent()
            .line("return 1")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function foo() {\n  return 1\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::typescript()
            .line("import { foo } from './foo.js'")
            .blank()
            .line("foo()")
            .build();

        assert_eq!(code, "import { foo } from './foo.js'\n\nfoo()\n");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let code = CodeBuilder::typescript().dedent().line("top").build();
        assert_eq!(code, "top\n");
    }

    #[test]
    fn test_wide_indent() {
        let code = CodeBuilder::new(Indent::Spaces(4))
            .line("if (a) {")
            .indent()
            .line("b()")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "if (a) {\n    b()\n}\n");
    }
}
