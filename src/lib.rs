//! Typed WOQL constructor generator.
//!
//! Reads the WOQL class definitions from `woql_list.json`, resolves each
//! declared field type against a small recursive token grammar
//! (`list(T)`, `optional(T)`, primitive atoms), and emits a TypeScript
//! module with one interface and one constructor function per operator,
//! plus one union type per category (`Query`, `PathPattern`,
//! `ArithmeticExpression`).
//!
//! # Usage
//!
//! ```no_run
//! fn main() -> woqlgen::Result<()> {
//!     let output = woqlgen::generate()?;
//!     println!("wrote {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! # Generated Output
//!
//! For a schema entry `Not` inheriting from `Query` with a single `query`
//! field, the emitted module contains:
//!
//! ```typescript
//! export interface Not {
//!   '@type': 'Not'
//!   query: Query
//! }
//!
//! export function not(query: Query): Not {
//!   return { '@type': 'Not', query }
//! }
//! ```
//!
//! Category unions close the module, e.g.
//! `export type Query = Not | ...`.

mod error;
mod generator;
mod naming;
mod schema;
mod type_mapper;

pub mod ast;
pub mod builder;
pub mod format;

pub use error::{Error, Result, SourceContext};
pub use format::{FormatError, Options, Quote, TrailingComma};
pub use generator::{Generator, OUTPUT_FILE, SCHEMA_FILE, WOQL_DEFS_DIR, generate, generate_in};
pub use naming::{constructor_name, lower_camel_case};
pub use schema::{DEFINITION_KEY, Operator, Schema, parse_schema};
pub use type_mapper::{ResolvedType, resolve};
