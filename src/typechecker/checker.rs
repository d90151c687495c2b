/**
Type checker session

Fixes one typing environment for a sequence of `check` and `synthesize`
calls. Bindings written by `let` during one call remain visible to the next.
*/
use crate::ast::Expr;
use crate::ast::types::Type;
use crate::typechecker::environment::Environment;
use crate::typechecker::judgment;

/// The main type checker
pub struct TypeChecker {
    env: Environment,
}

impl TypeChecker {
    /// Create a type checker over an empty environment
    pub fn new() -> Self {
        TypeChecker {
            env: Environment::new(),
        }
    }

    /// Create a type checker over a pre-populated environment
    pub fn with_environment(env: Environment) -> Self {
        TypeChecker { env }
    }

    /// Check `expr` against `ty`
    pub fn check(&mut self, expr: &Expr, ty: &Type) -> bool {
        judgment::check(expr, ty, &mut self.env)
    }

    /// Synthesize a type for `expr`
    pub fn synthesize(&mut self, expr: &Expr) -> Option<Type> {
        judgment::synthesize(expr, &mut self.env)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}
