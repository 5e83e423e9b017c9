//! Indentation-aware code building utilities.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
