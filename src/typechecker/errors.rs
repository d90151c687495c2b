/**
Error types for the type checker

Ill-typed programs are not errors: the judgments report them as `false` or
`None`. The variants here cover misuse of the type model and lookups in the
program catalogue.
*/
use crate::ast::types::Type;
use thiserror::Error;

/// Errors raised outside of the typing judgments
#[derive(Debug, Clone, Error)]
pub enum TypeError {
    /// Structural equality was requested on an intersection type
    #[error("structural equality is not supported for intersection type `{ty}`")]
    UnsupportedEquality { ty: Type },

    /// An intersection was built from zero members
    #[error("an intersection needs at least one member")]
    EmptyIntersection,

    /// No catalogued program has this name
    #[error("unknown program `{name}`")]
    UnknownProgram { name: String },
}

/// Result type for type model and catalogue operations
pub type TypeResult<T> = Result<T, TypeError>;
