/**
Catalogue of example programs

Hand-built environments and expressions that exercise the checker, each with
the outcome it is expected to produce. The `bitype` binary lists and runs
them.
*/
use crate::ast::Expr;
use crate::ast::types::Type;
use crate::typechecker::environment::Environment;
use crate::typechecker::errors::{TypeError, TypeResult};
use crate::typechecker::TypeChecker;
use std::fmt;

/// Which judgment a program is run through
#[derive(Debug, Clone)]
pub enum Goal {
    /// Check the expression against this type
    Check(Type),
    /// Synthesize a type for the expression
    Synthesize,
}

/// Result of running a program
#[derive(Debug, Clone)]
pub enum Outcome {
    Checked(bool),
    Synthesized(Option<Type>),
}

impl Outcome {
    /// Whether two outcomes agree.
    ///
    /// Intersections have no structural equality, so synthesized types are
    /// compared tree by tree with `same_shape`.
    pub fn agrees_with(&self, other: &Outcome) -> bool {
        match (self, other) {
            (Outcome::Checked(a), Outcome::Checked(b)) => a == b,
            (Outcome::Synthesized(None), Outcome::Synthesized(None)) => true,
            (Outcome::Synthesized(Some(a)), Outcome::Synthesized(Some(b))) => a.same_shape(b),
            _ => false,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checked(result) => write!(f, "{}", result),
            Outcome::Synthesized(Some(ty)) => write!(f, "{}", ty),
            Outcome::Synthesized(None) => write!(f, "no type"),
        }
    }
}

/// An example program with its environment and expected outcome
#[derive(Debug, Clone)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    pub environment: Environment,
    pub expr: Expr,
    pub goal: Goal,
    pub expected: Outcome,
}

/// What running a program produced
#[derive(Debug, Clone)]
pub struct Report {
    pub name: &'static str,
    pub outcome: Outcome,
    pub passed: bool,
}

impl Program {
    /// Run the program in a fresh session over its own environment
    pub fn run(&self) -> Report {
        let mut checker = TypeChecker::with_environment(self.environment.clone());
        let outcome = match &self.goal {
            Goal::Check(ty) => Outcome::Checked(checker.check(&self.expr, ty)),
            Goal::Synthesize => Outcome::Synthesized(checker.synthesize(&self.expr)),
        };
        let passed = outcome.agrees_with(&self.expected);
        log::debug!("{}: {} (expected {})", self.name, outcome, self.expected);

        Report {
            name: self.name,
            outcome,
            passed,
        }
    }
}

fn unit_to_unit() -> Type {
    Type::function(Type::Unit, Type::Unit)
}

/// All built-in programs, in presentation order
pub fn catalogue() -> Vec<Program> {
    vec![
        Program {
            name: "lambda-unit",
            description: "a lambda returning unit checks against () -> ()",
            environment: Environment::new().with("x", Type::Unit),
            expr: Expr::lambda("x", Expr::Empty),
            goal: Goal::Check(unit_to_unit()),
            expected: Outcome::Checked(true),
        },
        Program {
            name: "let-intersection-lambda",
            description: "an intersection bound by let is passed to a lambda",
            environment: Environment::new()
                .with("x", Type::Unit)
                .with("z", Type::Unit)
                .with("g", unit_to_unit()),
            expr: Expr::let_in(
                "y",
                Expr::Intersect(vec![Expr::var("z"), Expr::var("g")]),
                Expr::apply(Expr::lambda("x", Expr::var("y")), Expr::var("y")),
            ),
            goal: Goal::Check(Type::Unit),
            expected: Outcome::Checked(true),
        },
        Program {
            name: "curried-application",
            description: "a curried function applied to unit, then to a function",
            environment: Environment::new()
                .with("f", unit_to_unit())
                .with(
                    "g",
                    Type::function(Type::Unit, Type::function(unit_to_unit(), Type::Unit)),
                ),
            expr: Expr::apply(Expr::apply(Expr::var("g"), Expr::Empty), Expr::var("f")),
            goal: Goal::Check(Type::Unit),
            expected: Outcome::Checked(true),
        },
        Program {
            name: "intersection-polymorphism",
            description: "a value of type () /\\ (() -> ()) is accepted where () is expected",
            environment: Environment::new().with("f", unit_to_unit()),
            expr: Expr::let_in(
                "x",
                Expr::Intersect(vec![Expr::Empty, Expr::var("f")]),
                Expr::apply(Expr::var("f"), Expr::var("x")),
            ),
            goal: Goal::Check(Type::Unit),
            expected: Outcome::Checked(true),
        },
        Program {
            name: "unbound-variable",
            description: "a variable missing from the environment has no type",
            environment: Environment::new(),
            expr: Expr::var("x"),
            goal: Goal::Synthesize,
            expected: Outcome::Synthesized(None),
        },
        Program {
            name: "unit-against-function",
            description: "the unit value does not check against a function type",
            environment: Environment::new(),
            expr: Expr::Empty,
            goal: Goal::Check(unit_to_unit()),
            expected: Outcome::Checked(false),
        },
    ]
}

/// Look up a program by name
pub fn find(name: &str) -> TypeResult<Program> {
    catalogue()
        .into_iter()
        .find(|program| program.name == name)
        .ok_or_else(|| TypeError::UnknownProgram {
            name: name.to_string(),
        })
}
