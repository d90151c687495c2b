/// Type checker
///
/// This module implements bidirectional type checking with:
/// - Type synthesis and checking as mutually recursive judgments
/// - Structural function subtyping
/// - Existential elimination of intersection types

pub mod checker;
pub mod environment;
pub mod errors;
pub mod judgment;
pub mod subtyping;

pub use checker::TypeChecker;
pub use environment::Environment;
pub use errors::{TypeError, TypeResult};
pub use judgment::{check, synthesize};
pub use subtyping::is_subtype;
