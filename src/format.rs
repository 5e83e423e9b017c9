//! Formatting pass applied to the rendered module before it is written.
//!
//! The emitters in [`crate::ast`] already produce text in the target style;
//! this pass holds the style configuration, rejects output that would not
//! parse as TypeScript, and normalizes whitespace so repeated runs produce
//! byte-identical files.

use thiserror::Error;

use crate::builder::Indent;

/// Quote style for emitted string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    /// Wrap `text` in the configured quote character.
    pub fn wrap(&self, text: &str) -> String {
        match self {
            Self::Single => format!("'{}'", text),
            Self::Double => format!("\"{}\"", text),
        }
    }
}

/// Trailing-comma policy for multi-line literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingComma {
    /// Trailing comma after the last element of every multi-line literal.
    All,
    /// No trailing comma after the last element.
    None,
}

/// Style configuration for the generated module.
#[derive(Debug, Clone)]
pub struct Options {
    /// Target syntax. Only `"typescript"` is supported.
    pub parser: &'static str,
    pub trailing_comma: TrailingComma,
    pub indent: Indent,
    /// Whether statements end with a semicolon.
    pub semi: bool,
    pub quote: Quote,
    /// Column limit used when deciding between single-line and broken forms.
    pub print_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parser: "typescript",
            trailing_comma: TrailingComma::All,
            indent: Indent::TYPESCRIPT,
            semi: false,
            quote: Quote::Single,
            print_width: 80,
        }
    }
}

impl Options {
    /// Statement terminator under the current semicolon policy.
    pub fn terminator(&self) -> &'static str {
        if self.semi { ";" } else { "" }
    }
}

/// Reasons the format pass can reject rendered output.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unsupported parser '{0}', only 'typescript' is supported")]
    UnsupportedParser(String),
    #[error("unbalanced '{delimiter}' on line {line}")]
    Unbalanced { delimiter: char, line: usize },
    #[error("declaration with an empty right-hand side on line {line}")]
    EmptyDeclaration { line: usize },
}

/// Validate and normalize a rendered module.
///
/// Returns the normalized text, or an error when the output is not valid
/// under the configured parser.
pub fn apply(source: &str, options: &Options) -> Result<String, FormatError> {
    if options.parser != "typescript" {
        return Err(FormatError::UnsupportedParser(options.parser.to_string()));
    }
    check_balance(source)?;
    check_declarations(source)?;
    Ok(normalize(source))
}

#[derive(Debug, PartialEq, Eq)]
enum State {
    Code,
    Single,
    Double,
    Template,
    LineComment,
    BlockComment,
}

/// Ensure brackets pair up, ignoring those inside strings and comments.
fn check_balance(source: &str) -> Result<(), FormatError> {
    let mut state = State::Code;
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut line = 1usize;
    let mut escaped = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
            escaped = false;
            if state == State::LineComment {
                state = State::Code;
            }
            continue;
        }

        match state {
            State::Code => match c {
                '\'' => state = State::Single,
                '"' => state = State::Double,
                '`' => state = State::Template,
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment;
                }
                '(' | '[' | '{' => stack.push((c, line)),
                ')' | ']' | '}' => {
                    let expected = match c {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    match stack.pop() {
                        Some((open, _)) if open == expected => {}
                        _ => return Err(FormatError::Unbalanced { delimiter: c, line }),
                    }
                }
                _ => {}
            },
            State::Single | State::Double | State::Template => {
                let close = match state {
                    State::Single => '\'',
                    State::Double => '"',
                    _ => '`',
                };
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == close {
                    state = State::Code;
                }
            }
            State::LineComment => {}
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    if let Some((open, line)) = stack.pop() {
        return Err(FormatError::Unbalanced {
            delimiter: open,
            line,
        });
    }
    Ok(())
}

/// Reject declarations that end with `=` and are not continued on the
/// following lines. A broken union continues on an indented line.
fn check_declarations(source: &str) -> Result<(), FormatError> {
    let lines: Vec<&str> = source.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        if !line.trim_end().ends_with('=') {
            continue;
        }
        let continued = lines[idx + 1..]
            .iter()
            .find(|next| !next.trim().is_empty())
            .is_some_and(|next| next.starts_with(char::is_whitespace));
        if !continued {
            return Err(FormatError::EmptyDeclaration { line: idx + 1 });
        }
    }
    Ok(())
}

/// Strip trailing whitespace, collapse blank-line runs, and end the file
/// with exactly one newline.
fn normalize(source: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in source.lines().map(str::trim_end) {
        if line.is_empty() && lines.last().is_some_and(|prev: &&str| prev.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
