//! Type mapping from schema type tokens to TypeScript types.
//!
//! Type tokens form a small grammar: an atom such as `query` or `string`,
//! or a wrapper `list(T)` / `optional(T)` around another token.

/// A schema type token resolved to TypeScript.
///
/// Optionality is tracked as a flag rather than baked into the rendered
/// type, so interface fields and constructor parameters can use `?` syntax
/// while nested positions keep the `| undefined` spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// The TypeScript type, without any top-level optionality marker.
    pub ts: String,
    /// Whether the token was wrapped in `optional(...)` at the top level.
    pub optional: bool,
}

impl ResolvedType {
    /// Render the full type expression, including optionality.
    pub fn render(&self) -> String {
        if self.optional {
            format!("{} | undefined", self.ts)
        } else {
            self.ts.clone()
        }
    }
}

/// Resolve a type token to its TypeScript representation.
pub fn resolve(token: &str) -> ResolvedType {
    if let Some(inner) = unwrap_token(token, "list(") {
        let element = resolve(inner);
        return ResolvedType {
            ts: format!("{}[]", element.render()),
            optional: false,
        };
    }
    if let Some(inner) = unwrap_token(token, "optional(") {
        let value = resolve(inner);
        return ResolvedType {
            ts: value.render(),
            optional: true,
        };
    }
    ResolvedType {
        ts: atom(token).to_string(),
        optional: false,
    }
}

/// Strip a `prefix(` ... `)` wrapper, returning the inner token.
fn unwrap_token<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    token.strip_prefix(prefix)?.strip_suffix(')')
}

/// TypeScript type for an atomic token. Unknown atoms map to `any`.
fn atom(token: &str) -> &'static str {
    match token {
        "query" => "Query",
        "graph" => "Graph",
        "node" => "Node",
        "value" => "Value",
        "integer" => "number",
        "boolean" => "boolean",
        "json" => "any",
        "resource" => "string",
        "string" => "string",
        "float" => "number",
        "path" => "PathPattern",
        "arithmetic" => "ArithmeticExpression",
        _ => "any",
    }
}
