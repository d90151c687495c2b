/// Type definitions
///
/// Types are immutable trees over three constructors. Equality is
/// structural, except on intersections where it is deliberately left
/// undefined; `Type` therefore does not implement `PartialEq`.
use crate::typechecker::errors::{TypeError, TypeResult};
use std::fmt;

/// A type in the calculus
#[derive(Debug, Clone)]
pub enum Type {
    /// The unit type, inhabited by `()`
    Unit,

    /// Function type `domain -> codomain`
    Function(Box<Type>, Box<Type>),

    /// Intersection of one or more member types.
    /// A type belongs to it when it belongs to any member.
    Intersection(Vec<Type>),
}

impl Type {
    /// Build a function type
    pub fn function(domain: Type, codomain: Type) -> Self {
        Type::Function(Box::new(domain), Box::new(codomain))
    }

    /// Build an intersection, rejecting an empty member list
    pub fn intersection(members: Vec<Type>) -> TypeResult<Self> {
        if members.is_empty() {
            return Err(TypeError::EmptyIntersection);
        }
        Ok(Type::Intersection(members))
    }

    /// Split a function type into domain and codomain
    pub fn as_function(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Function(domain, codomain) => Some((domain, codomain)),
            _ => None,
        }
    }

    /// Structural equality.
    ///
    /// Fails with `UnsupportedEquality` when the receiver is an
    /// intersection, including one reached through the receiver's function
    /// components. A unit or function is never equal to an intersection.
    pub fn structurally_equal(&self, other: &Type) -> TypeResult<bool> {
        match (self, other) {
            (Type::Intersection(_), _) => Err(TypeError::UnsupportedEquality { ty: self.clone() }),
            (Type::Unit, Type::Unit) => Ok(true),
            (Type::Function(d1, c1), Type::Function(d2, c2)) => {
                Ok(d1.structurally_equal(d2)? && c1.structurally_equal(c2)?)
            }
            _ => Ok(false),
        }
    }

    /// Whether two types are the same tree, intersections compared member by
    /// member in order. Used to compare outcomes, not part of the type model.
    pub(crate) fn same_shape(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Unit, Type::Unit) => true,
            (Type::Function(d1, c1), Type::Function(d2, c2)) => d1.same_shape(d2) && c1.same_shape(c2),
            (Type::Intersection(a), Type::Intersection(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }

    /// Whether this type needs parentheses when nested inside another type
    fn is_compound(&self) -> bool {
        !matches!(self, Type::Unit)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unit => write!(f, "()"),
            Type::Function(domain, codomain) => {
                if domain.is_compound() {
                    write!(f, "({})", domain)?;
                } else {
                    write!(f, "{}", domain)?;
                }
                write!(f, " -> ")?;
                match &**codomain {
                    Type::Intersection(_) => write!(f, "({})", codomain),
                    _ => write!(f, "{}", codomain),
                }
            }
            Type::Intersection(members) => {
                // A lone member keeps a leading separator so it never reads
                // as the member itself
                if members.len() == 1 {
                    write!(f, "/\\ ")?;
                }
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " /\\ ")?;
                    }
                    if member.is_compound() {
                        write!(f, "({})", member)?;
                    } else {
                        write!(f, "{}", member)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_to_unit() -> Type {
        Type::function(Type::Unit, Type::Unit)
    }

    #[test]
    fn test_structural_equality() {
        assert!(Type::Unit.structurally_equal(&Type::Unit).unwrap());
        assert!(unit_to_unit().structurally_equal(&unit_to_unit()).unwrap());
        assert!(!Type::Unit.structurally_equal(&unit_to_unit()).unwrap());

        let higher = Type::function(unit_to_unit(), Type::Unit);
        assert!(!higher.structurally_equal(&unit_to_unit()).unwrap());
        assert!(higher.structurally_equal(&higher.clone()).unwrap());
    }

    #[test]
    fn test_intersection_equality_unsupported() {
        let inter = Type::Intersection(vec![Type::Unit]);

        match inter.structurally_equal(&Type::Unit) {
            Err(TypeError::UnsupportedEquality { .. }) => (),
            other => panic!("Expected UnsupportedEquality, got {:?}", other),
        }

        // Reached through the receiver's components as well
        let nested = Type::function(Type::Unit, inter.clone());
        assert!(nested.structurally_equal(&nested.clone()).is_err());
    }

    #[test]
    fn test_intersection_on_right_is_unequal() {
        let inter = Type::Intersection(vec![Type::Unit]);

        assert!(!Type::Unit.structurally_equal(&inter).unwrap());
        assert!(!unit_to_unit().structurally_equal(&inter).unwrap());
        assert!(
            !Type::function(Type::Unit, Type::Unit)
                .structurally_equal(&Type::function(Type::Unit, inter))
                .unwrap()
        );
    }

    #[test]
    fn test_same_shape() {
        let single = Type::Intersection(vec![Type::Unit]);
        let pair = Type::Intersection(vec![Type::Unit, unit_to_unit()]);

        assert!(single.same_shape(&single.clone()));
        assert!(pair.same_shape(&pair.clone()));
        assert!(!single.same_shape(&Type::Unit));
        assert!(!Type::Unit.same_shape(&single));
        assert!(!single.same_shape(&pair));
        assert!(!pair.same_shape(&Type::Intersection(vec![unit_to_unit(), Type::Unit])));
        assert!(unit_to_unit().same_shape(&unit_to_unit()));
        assert!(!Type::function(Type::Unit, single).same_shape(&unit_to_unit()));
    }

    #[test]
    fn test_empty_intersection_rejected() {
        assert!(matches!(
            Type::intersection(vec![]),
            Err(TypeError::EmptyIntersection)
        ));
        assert!(Type::intersection(vec![Type::Unit]).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Type::Unit.to_string(), "()");
        assert_eq!(unit_to_unit().to_string(), "() -> ()");
        assert_eq!(
            Type::function(Type::Unit, unit_to_unit()).to_string(),
            "() -> () -> ()"
        );
        assert_eq!(
            Type::function(unit_to_unit(), Type::Unit).to_string(),
            "(() -> ()) -> ()"
        );
        assert_eq!(
            Type::Intersection(vec![Type::Unit, unit_to_unit()]).to_string(),
            "() /\\ (() -> ())"
        );
        assert_eq!(
            Type::function(Type::Unit, Type::Intersection(vec![Type::Unit, Type::Unit])).to_string(),
            "() -> (() /\\ ())"
        );
        assert_eq!(Type::Intersection(vec![Type::Unit]).to_string(), "/\\ ()");
        assert_eq!(
            Type::function(Type::Intersection(vec![Type::Unit]), Type::Unit).to_string(),
            "(/\\ ()) -> ()"
        );
    }
}
