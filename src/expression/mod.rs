//! Expression trees rebuilt from postfix hits

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::Expression;
pub use errors::ExpressionError;
