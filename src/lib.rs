/// Bitype - a bidirectional type checker
///
/// This crate implements type checking for a small lambda calculus with
/// unit, function and intersection types, including:
/// - Abstract syntax tree (AST) representation of expressions and types
/// - Bidirectional synthesis and checking judgments
/// - Structural function subtyping with intersection elimination
/// - A catalogue of example programs

pub mod ast;
pub mod programs;
pub mod typechecker;

pub use ast::Expr;
pub use ast::types::Type;
pub use typechecker::{Environment, TypeChecker, TypeError, TypeResult};
