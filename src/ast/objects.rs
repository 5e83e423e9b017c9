//! TypeScript/JavaScript object literal builder.

use crate::format::{Options, TrailingComma};

/// A property in an object literal.
#[derive(Debug, Clone)]
enum Property {
    /// `key: value` with a raw (unquoted) value expression.
    Pair { key: String, value: String },
    /// `name` shorthand for `name: name`.
    Shorthand(String),
}

impl Property {
    fn render(&self) -> String {
        match self {
            Self::Pair { key, value } => format!("{}: {}", key, value),
            Self::Shorthand(name) => name.clone(),
        }
    }
}

/// Builder for object literal expressions.
#[derive(Debug, Clone, Default)]
pub struct ObjectLiteral {
    properties: Vec<Property>,
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `key: value` property with a raw value expression.
    pub fn pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::Pair {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Add a shorthand property where the key equals the variable name.
    pub fn shorthand(mut self, name: impl Into<String>) -> Self {
        self.properties.push(Property::Shorthand(name.into()));
        self
    }

    /// Single-line form: `{ a: 1, b }`.
    pub fn build_inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let parts: Vec<String> = self.properties.iter().map(Property::render).collect();
        format!("{{ {} }}", parts.join(", "))
    }

    /// Multi-line form with one property per line.
    ///
    /// Lines after the first carry relative indentation so the result can
    /// be embedded in a function body.
    pub fn build_block(&self, options: &Options) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let mut text = String::from("{\n");
        let count = self.properties.len();
        for (idx, property) in self.properties.iter().enumerate() {
            let last = idx + 1 == count;
            let comma = if !last || options.trailing_comma == TrailingComma::All {
                ","
            } else {
                ""
            };
            text.push_str(options.indent.as_str());
            text.push_str(&property.render());
            text.push_str(comma);
            text.push('\n');
        }
        text.push('}');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        let obj = ObjectLiteral::new();
        assert_eq!(obj.build_inline(), "{}");
        assert_eq!(obj.build_block(&Options::default()), "{}");
    }

    #[test]
    fn test_inline_with_pair_and_shorthand() {
        let obj = ObjectLiteral::new()
            .pair("'@type'", "'Triple'")
            .shorthand("subject")
            .shorthand("predicate");
        assert_eq!(
            obj.build_inline(),
            "{ '@type': 'Triple', subject, predicate }"
        );
    }

    #[test]
    fn test_block_with_trailing_commas() {
        let obj = ObjectLiteral::new().pair("'@type'", "'Triple'").shorthand("subject");
        assert_eq!(
            obj.build_block(&Options::default()),
            "{\n  '@type': 'Triple',\n  subject,\n}"
        );
    }

    #[test]
    fn test_block_without_trailing_comma() {
        let options = Options {
            trailing_comma: TrailingComma::None,
            ..Options::default()
        };
        let obj = ObjectLiteral::new().shorthand("a").shorthand("b");
        assert_eq!(obj.build_block(&options), "{\n  a,\n  b\n}");
    }
}
