/**
Typing environment

A single flat mapping from variable names to types, shared by every judgment
of a session. There is no scoping: a binding made by `let` stays visible for
the rest of the session, and nothing is ever removed.
*/
use crate::ast::types::Type;
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from variable names to their types.
///
/// A name may be bound to "no type", which is what a `let` whose bound
/// expression fails to synthesize leaves behind.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: BTreeMap<String, Option<Type>>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Environment {
            bindings: BTreeMap::new(),
        }
    }

    /// Insert or overwrite a binding. Passing `None` records the name as
    /// bound to no type.
    pub fn bind(&mut self, name: impl Into<String>, ty: impl Into<Option<Type>>) {
        self.bindings.insert(name.into(), ty.into());
    }

    /// Builder form of `bind`
    pub fn with(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.bind(name, ty);
        self
    }

    /// Look up the type of a variable.
    ///
    /// Unbound names and names bound to no type both give `None`.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.bindings.get(name).and_then(Option::as_ref)
    }

    /// Whether the name has a binding at all, typed or not
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, ty)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match ty {
                Some(ty) => write!(f, "{}: {}", name, ty)?,
                None => write!(f, "{}: ?", name)?,
            }
        }
        write!(f, "}}")
    }
}
