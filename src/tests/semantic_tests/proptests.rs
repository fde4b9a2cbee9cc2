use super::*;
use proptest::prelude::*;

// =============================================================================
// PROPERTY-BASED TESTS
// =============================================================================
//
// Variables are drawn from two clause scopes so that same-named variables in
// different scopes show up regularly.

fn arb_var() -> impl Strategy<Value = Var> {
    ("[XYZW]", 1u64..=2).prop_map(|(name, clause)| Var::new(name, clause))
}

fn arb_constant() -> impl Strategy<Value = Term> {
    "[abc]".prop_map(Term::constant)
}

fn arb_ground_term(depth: u32) -> impl Strategy<Value = Term> {
    if depth == 0 {
        arb_constant().boxed()
    } else {
        prop_oneof![
            arb_constant(),
            ("[fg]", prop::collection::vec(arb_ground_term(depth - 1), 1..=2))
                .prop_map(|(name, args)| Term::app(name, args))
        ]
        .boxed()
    }
}

fn arb_term(depth: u32) -> impl Strategy<Value = Term> {
    if depth == 0 {
        prop_oneof![arb_var().prop_map(Term::Var), arb_constant()].boxed()
    } else {
        prop_oneof![
            arb_var().prop_map(Term::Var),
            arb_constant(),
            ("[fg]", prop::collection::vec(arb_term(depth - 1), 1..=2))
                .prop_map(|(name, args)| Term::app(name, args))
        ]
        .boxed()
    }
}

fn arb_literal(clause: u64) -> impl Strategy<Value = Literal> {
    (any::<bool>(), "[pq]", prop::collection::vec(arb_term(1), 0..=2)).prop_map(
        move |(positive, predicate, args)| {
            let args = args.iter().map(|t| rescope(t, clause)).collect();
            if positive {
                Literal::pos(predicate, args)
            } else {
                Literal::neg(predicate, args)
            }
        },
    )
}

/// Move every variable of `term` into the scope of `clause`.
fn rescope(term: &Term, clause: u64) -> Term {
    match term {
        Term::Var(var) => Term::var(var.name(), clause),
        Term::Const(_) => term.clone(),
        Term::App(name, args) => Term::app(name.clone(), args.iter().map(|a| rescope(a, clause)).collect()),
    }
}

/// Render literals back into the input syntax.
fn source_line(literals: &[Literal]) -> String {
    literals
        .iter()
        .map(|lit| {
            let args: Vec<String> = lit.args().iter().map(source_term).collect();
            format!(
                "{}{}({})",
                if lit.positive { "" } else { "-" },
                lit.predicate(),
                args.join(",")
            )
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn source_term(term: &Term) -> String {
    match term {
        Term::Var(var) => var.name().to_string(),
        Term::Const(name) => name.clone(),
        Term::App(name, args) => format!(
            "{}({})",
            name,
            args.iter().map(source_term).collect::<Vec<_>>().join(",")
        ),
    }
}

proptest! {
    #[test]
    fn self_unification_is_identity(term in arb_term(2)) {
        let result = unify(&term, &term);
        prop_assert!(result.is_success(), "any term unifies with itself");
        if let UnifyResult::Success(sigma) = result {
            prop_assert!(sigma.is_empty());
            prop_assert_eq!(sigma.apply_to_term(&term), term);
        }
    }
}

proptest! {
    #[test]
    fn ground_unification_iff_equal(t1 in arb_ground_term(2), t2 in arb_ground_term(2)) {
        let result = unify(&t1, &t2);
        prop_assert_eq!(result.is_success(), t1 == t2);
    }
}

proptest! {
    #[test]
    fn successful_unifier_equalizes(t1 in arb_term(2), t2 in arb_term(2)) {
        if let UnifyResult::Success(sigma) = unify(&t1, &t2) {
            prop_assert_eq!(sigma.apply_to_term(&t1), sigma.apply_to_term(&t2));
        }
    }
}

proptest! {
    #[test]
    fn unification_success_is_symmetric(t1 in arb_term(2), t2 in arb_term(2)) {
        prop_assert_eq!(unify(&t1, &t2).is_success(), unify(&t2, &t1).is_success());
    }
}

proptest! {
    #[test]
    fn variable_never_unifies_with_proper_superterm(var in arb_var(), name in "[fg]", extra in arb_term(1)) {
        let term = Term::app(name, vec![Term::Var(var.clone()), extra]);
        let is_occurs_failure = matches!(
            unify(&Term::Var(var), &term),
            UnifyResult::Failure(UnifyError::OccursCheck { .. })
        );
        prop_assert!(is_occurs_failure);
    }
}

proptest! {
    #[test]
    fn argument_lists_equalize(
        left in prop::collection::vec(arb_term(1), 0..=3),
        right in prop::collection::vec(arb_term(1), 0..=3),
    ) {
        match unify_many(&left, &right) {
            UnifyResult::Success(sigma) => {
                prop_assert_eq!(sigma.apply_to_terms(&left), sigma.apply_to_terms(&right));
            }
            UnifyResult::Failure(UnifyError::ArityMismatch { expected, found }) => {
                // Either the lists themselves differ in length, or a nested
                // function pair such as g(W) against g(W, W) does.
                let outer = expected == left.len() && found == right.len() && expected != found;
                let nested = left.iter().chain(&right).any(Term::is_function);
                prop_assert!(outer || nested);
            }
            UnifyResult::Failure(_) => {}
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn limit_of_one_refutes_only_clashing_units(
        first in prop::collection::vec(arb_literal(1), 1..=2),
        second in prop::collection::vec(arb_literal(2), 1..=2),
    ) {
        // With a limit of 1 no resolvent is kept, so the only way to derive
        // the empty clause is from two unifiable complementary units.
        let source = format!("{}\n{}", source_line(&first), source_line(&second));
        let mut sat = saturation_of(&source, ClauseLimit::Max(1));
        let outcome = sat.run();

        prop_assert_eq!(sat.store().len(), 2);
        prop_assert_eq!(sat.kept_clause_count(), 0);

        let expected = match (first.as_slice(), second.as_slice()) {
            ([l1], [l2]) => l1.clashes_with(l2) && unify_literals(l1, l2).is_success(),
            _ => false,
        };
        prop_assert_eq!(outcome == Outcome::Unsatisfiable, expected);
    }
}
