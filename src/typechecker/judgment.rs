/**
Bidirectional typing judgments

`synthesize` infers a type bottom-up (Γ ⊢ e ⇒ A), `check` verifies an
expression against an expected type (Γ ⊢ e ⇐ A). The two are mutually
recursive and total over the expression grammar: a program that does not
type-check yields `None` or `false`, never an error.

The environment is a single mutable context for the whole session. `let`
writes into it and never restores it, and lambda parameters are read from it
rather than introduced, so callers bind every parameter up front.
*/
use crate::ast::Expr;
use crate::ast::types::Type;
use crate::typechecker::environment::Environment;
use crate::typechecker::subtyping::is_subtype;
use log::{debug, trace};

/// Synthesize a type for `expr`, or `None` if no rule applies
pub fn synthesize(expr: &Expr, env: &mut Environment) -> Option<Type> {
    trace!("synthesize {}", expr.kind());

    let result = match expr {
        Expr::Variable(name) => synthesize_variable(name, env),

        Expr::Lambda { param, body } => {
            let param_ty = synthesize_variable(param, env);
            let body_ty = synthesize(body, env);
            match (param_ty, body_ty) {
                (Some(param_ty), Some(body_ty)) => Some(Type::function(param_ty, body_ty)),
                _ => None,
            }
        }

        Expr::Application { function, argument } => {
            let function_ty = synthesize(function, env)?;
            let (domain, codomain) = function_ty.as_function()?;
            if check(argument, domain, env) {
                Some(codomain.clone())
            } else {
                None
            }
        }

        Expr::Empty => Some(Type::Unit),

        Expr::Let { name, bound, body } => {
            let bound_ty = synthesize(bound, env);

            // The binding is written even when synthesis failed
            match &bound_ty {
                None => debug!("let {}: bound expression has no type", name),
                Some(ty) if env.is_bound(name) => debug!("let {}: overwriting binding with {}", name, ty),
                Some(_) => {}
            }
            env.bind(name.as_str(), bound_ty.clone());

            if bound_ty.is_some() {
                synthesize(body, env)
            } else {
                None
            }
        }

        Expr::Intersect(exprs) => {
            // Stops at the first member without a type
            let members = exprs
                .iter()
                .map(|e| synthesize(e, env))
                .collect::<Option<Vec<_>>>()?;
            if members.is_empty() {
                None
            } else {
                Some(Type::Intersection(members))
            }
        }
    };

    match &result {
        Some(ty) => trace!("{} => {}", expr.kind(), ty),
        None => trace!("{} => no type", expr.kind()),
    }
    result
}

/// Check `expr` against the expected type `ty`
pub fn check(expr: &Expr, ty: &Type, env: &mut Environment) -> bool {
    trace!("check {} <= {}", expr.kind(), ty);

    let result = match expr {
        Expr::Lambda { param, body } => match ty.as_function() {
            Some((domain, codomain)) => {
                check_variable(param, domain, env) && check(body, codomain, env)
            }
            None => false,
        },

        // The argument's type drives the expected function type
        Expr::Application { function, argument } => match synthesize(argument, env) {
            Some(argument_ty) => check(function, &Type::function(argument_ty, ty.clone()), env),
            None => false,
        },

        Expr::Variable(_) | Expr::Empty | Expr::Let { .. } | Expr::Intersect(_) => {
            check_by_synthesis(expr, ty, env)
        }
    };

    trace!("{} <= {}: {}", expr.kind(), ty, result);
    result
}

/// Subsumption: synthesize, then compare against the expected type
fn check_by_synthesis(expr: &Expr, ty: &Type, env: &mut Environment) -> bool {
    synthesize(expr, env).is_some_and(|actual| is_subtype(&actual, ty))
}

fn synthesize_variable(name: &str, env: &Environment) -> Option<Type> {
    env.lookup(name).cloned()
}

fn check_variable(name: &str, ty: &Type, env: &Environment) -> bool {
    synthesize_variable(name, env).is_some_and(|actual| is_subtype(&actual, ty))
}
