//! TypeScript AST builders for the generated module.

mod fns;
mod imports;
mod interface;
mod objects;
mod types;

pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use objects::ObjectLiteral;
pub use types::Union;
