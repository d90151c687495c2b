/// Abstract Syntax Tree definitions
///
/// Expressions are built directly by callers; there is no parser. They carry
/// no type annotations: every type comes from the typing environment or from
/// the direction in which the checker visits a node.

pub mod types;

use crate::typechecker::errors::{TypeError, TypeResult};
use std::fmt;

/// An expression of the calculus
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Variable reference
    Variable(String),

    /// Lambda abstraction `\param. body`
    Lambda { param: String, body: Box<Expr> },

    /// Application `function argument`
    Application {
        function: Box<Expr>,
        argument: Box<Expr>,
    },

    /// The unit value `()`
    Empty,

    /// `let name = bound; body`
    Let {
        name: String,
        bound: Box<Expr>,
        body: Box<Expr>,
    },

    /// Intersection of one or more expressions
    Intersect(Vec<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn lambda(param: impl Into<String>, body: Expr) -> Self {
        Expr::Lambda {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn apply(function: Expr, argument: Expr) -> Self {
        Expr::Application {
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }

    pub fn let_in(name: impl Into<String>, bound: Expr, body: Expr) -> Self {
        Expr::Let {
            name: name.into(),
            bound: Box::new(bound),
            body: Box::new(body),
        }
    }

    /// Build an intersection, rejecting an empty member list
    pub fn intersect(exprs: Vec<Expr>) -> TypeResult<Self> {
        if exprs.is_empty() {
            return Err(TypeError::EmptyIntersection);
        }
        Ok(Expr::Intersect(exprs))
    }

    /// Name of the node's constructor, without its children
    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Variable(_) => "variable",
            Expr::Lambda { .. } => "lambda",
            Expr::Application { .. } => "application",
            Expr::Empty => "unit",
            Expr::Let { .. } => "let",
            Expr::Intersect(_) => "intersect",
        }
    }

    /// Whether the expression prints as a single token or bracketed group
    fn is_atomic(&self) -> bool {
        matches!(self, Expr::Variable(_) | Expr::Empty | Expr::Intersect(_))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Lambda { param, body } => write!(f, "\\{}. {}", param, body),
            Expr::Application { function, argument } => {
                match &**function {
                    Expr::Lambda { .. } | Expr::Let { .. } => write!(f, "({})", function)?,
                    _ => write!(f, "{}", function)?,
                }
                if argument.is_atomic() {
                    write!(f, " {}", argument)
                } else {
                    write!(f, " ({})", argument)
                }
            }
            Expr::Empty => write!(f, "()"),
            Expr::Let { name, bound, body } => write!(f, "let {} = {}; {}", name, bound, body),
            Expr::Intersect(exprs) => {
                write!(f, "(")?;
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " /\\ ")?;
                    }
                    write!(f, "{}", expr)?;
                }
                write!(f, ")")
            }
        }
    }
}
