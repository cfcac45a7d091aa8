pub mod access;
pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod serializer;
pub mod source;

use std::io::Write;

pub use ast::{Expr, ExprKind, Item, Program};
pub use error::BrikError;
pub use serializer::{serialize_to_file, to_tree_string};
pub use source::SourceFile;

/// Parse brik source text into a program tree.
pub fn parse(source: &str) -> Result<Program, BrikError> {
    parser::Parser::new(source)?.parse()
}

/// Write the canonical tree form of `program` to `out`.
pub fn serialize<W: Write>(program: &Program, out: &mut W) -> Result<(), BrikError> {
    serializer::serialize(program, out)
}
