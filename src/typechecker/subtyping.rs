/**
Subtype relation

`sub <: sup` holds when a value of type `sub` may be used where `sup` is
expected:

- `() <: ()`
- `A1 -> B1 <: A2 -> B2` iff `A2 <: A1` and `B1 <: B2`
- `T1 /\ ... /\ Tn <: S` iff some `Ti <: S`

Everything else, including an intersection on the right only, is not a
subtype. Intersections are eliminated existentially: one member suffices.
*/
use crate::ast::types::Type;

/// Check whether `sub` is a subtype of `sup`
pub fn is_subtype(sub: &Type, sup: &Type) -> bool {
    match (sub, sup) {
        (Type::Intersection(members), _) => members.iter().any(|member| is_subtype(member, sup)),
        (Type::Unit, Type::Unit) => true,
        (Type::Function(sub_domain, sub_codomain), Type::Function(sup_domain, sup_codomain)) => {
            is_subtype(sup_domain, sub_domain) && is_subtype(sub_codomain, sup_codomain)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Type {
        Type::Unit
    }

    fn arrow(domain: Type, codomain: Type) -> Type {
        Type::function(domain, codomain)
    }

    fn inter(members: Vec<Type>) -> Type {
        Type::Intersection(members)
    }

    #[test]
    fn test_reflexivity() {
        let samples = vec![
            unit(),
            arrow(unit(), unit()),
            arrow(arrow(unit(), unit()), unit()),
            arrow(unit(), arrow(unit(), unit())),
            arrow(arrow(unit(), unit()), arrow(unit(), unit())),
        ];

        for ty in &samples {
            assert!(is_subtype(ty, ty), "{} should be a subtype of itself", ty);
        }
    }

    #[test]
    fn test_mismatched_constructors() {
        assert!(!is_subtype(&unit(), &arrow(unit(), unit())));
        assert!(!is_subtype(&arrow(unit(), unit()), &unit()));
    }

    #[test]
    fn test_function_variance() {
        // (() /\ (() -> ())) is a subtype of ()
        let narrow = inter(vec![unit(), arrow(unit(), unit())]);
        // ... but () is not a subtype of it
        assert!(is_subtype(&narrow, &unit()));
        assert!(!is_subtype(&unit(), &narrow));

        // Domain contravariant: () -> () <: narrow -> () since narrow <: ()
        assert!(is_subtype(&arrow(unit(), unit()), &arrow(narrow.clone(), unit())));
        // Only the domain relation in the wrong direction
        assert!(!is_subtype(&arrow(narrow.clone(), unit()), &arrow(unit(), unit())));

        // Codomain covariant: () -> narrow <: () -> ()
        assert!(is_subtype(&arrow(unit(), narrow.clone()), &arrow(unit(), unit())));
        // Only the codomain relation in the wrong direction
        assert!(!is_subtype(&arrow(unit(), unit()), &arrow(unit(), narrow.clone())));

        // Domain holds but codomain fails
        assert!(!is_subtype(
            &arrow(unit(), unit()),
            &arrow(narrow.clone(), arrow(unit(), unit()))
        ));
        // Codomain holds but domain fails
        assert!(!is_subtype(
            &arrow(arrow(unit(), unit()), narrow.clone()),
            &arrow(unit(), unit())
        ));
    }

    #[test]
    fn test_intersection_existential() {
        let mixed = inter(vec![arrow(unit(), unit()), unit()]);
        assert!(is_subtype(&mixed, &unit()));
        assert!(is_subtype(&mixed, &arrow(unit(), unit())));

        let all_functions = inter(vec![arrow(unit(), unit()), arrow(arrow(unit(), unit()), unit())]);
        assert!(!is_subtype(&all_functions, &unit()));
    }

    #[test]
    fn test_intersection_not_reflexive() {
        // No rule accepts an intersection on the right, so intersections
        // are not subtypes of themselves.
        let both = inter(vec![unit(), arrow(unit(), unit())]);
        assert!(!is_subtype(&both, &both));
    }

    #[test]
    fn test_intersection_on_right_only() {
        assert!(!is_subtype(&unit(), &inter(vec![unit()])));
        assert!(!is_subtype(
            &arrow(unit(), unit()),
            &inter(vec![arrow(unit(), unit()), unit()])
        ));
    }
}
