use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::format::FormatError;

/// Result type for woqlgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the schema content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self.position_span(source.line(), source.column());
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a schema validation error.
    pub fn schema_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Schema {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Byte span for a 1-based line/column position. serde_json reports
    /// line 0 for errors with no position.
    fn position_span(&self, line: usize, column: usize) -> Option<SourceSpan> {
        if line == 0 {
            return None;
        }
        let mut offset = 0usize;
        for (idx, text) in self.src.lines().enumerate() {
            if idx + 1 == line {
                let start = offset + column.saturating_sub(1).min(text.len());
                if start >= self.src.len() {
                    return Some((self.src.len(), 0).into());
                }
                return Some((start, 1).into());
            }
            offset += text.len() + 1;
        }
        None
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("the schema list is expected at src/woql_defs/woql_list.json"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse the schema list")]
    #[diagnostic(code(woqlgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(woqlgen::schema_error))]
    Schema {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("generated module failed the format pass")]
    #[diagnostic(code(woqlgen::format_error))]
    Format {
        #[source]
        source: FormatError,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a read error for the schema file
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a format pass error
    pub fn format(source: FormatError) -> Box<Self> {
        Box::new(Error::Format { source })
    }

    /// Create a write error for the generated module
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }
}
