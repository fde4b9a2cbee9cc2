use super::*;

// -------------------------------------------------------------------------
// A successful unifier makes both sides syntactically identical.
// -------------------------------------------------------------------------
#[test]
fn unifier_equalizes_terms() {
    let t1 = Term::app("f", vec![v("X", 1), c("a")]);
    let t2 = Term::app("f", vec![c("b"), v("Y", 2)]);
    let sigma = unify(&t1, &t2).ok().expect("should unify");
    assert_eq!(sigma.apply_to_term(&t1), sigma.apply_to_term(&t2));
}

#[test]
fn head_bindings_flow_into_tail() {
    // X is bound by the first argument before the second is compared.
    let left = vec![v("X", 1), v("X", 1)];
    let right = vec![c("a"), c("b")];
    let result = unify_many(&left, &right);
    assert_eq!(
        result,
        UnifyResult::Failure(UnifyError::SymbolClash {
            expected: "a".to_string(),
            found: "b".to_string(),
        })
    );
}

#[test]
fn chained_variables_resolve_to_constant() {
    let left = vec![v("X", 1), v("Y", 1), v("Z", 1)];
    let right = vec![v("Y", 1), v("Z", 1), c("a")];
    let sigma = unify_many(&left, &right).ok().expect("should unify");
    for t in &left {
        assert_eq!(sigma.apply_to_term(t), c("a"));
    }
}

#[test]
fn nested_functions_unify_through_arguments() {
    let t1 = Term::app("f", vec![v("X", 1), Term::app("g", vec![v("X", 1)])]);
    let t2 = Term::app("f", vec![Term::app("h", vec![v("Y", 2)]), v("Z", 2)]);
    let sigma = unify(&t1, &t2).ok().expect("should unify");
    let unified = sigma.apply_to_term(&t1);
    assert_eq!(unified, sigma.apply_to_term(&t2));
    assert_eq!(unified.to_string(), "f(h(Y_2), g(h(Y_2)))");
}

#[test]
fn occurs_check_rejects_cyclic_binding() {
    let t1 = v("X", 1);
    let t2 = Term::app("f", vec![v("X", 1)]);
    assert!(matches!(
        unify(&t1, &t2),
        UnifyResult::Failure(UnifyError::OccursCheck { .. })
    ));
}

#[test]
fn occurs_check_detected_after_head_binding() {
    // X := Y from the head, then Y against f(Y) must fail.
    let left = vec![v("X", 1), v("X", 1)];
    let right = vec![v("Y", 2), Term::app("f", vec![v("Y", 2)])];
    assert!(unify_many(&left, &right).is_failure());
}

#[test]
fn same_name_in_different_clauses_is_not_the_same_variable() {
    let t1 = Term::app("p", vec![v("X", 1), c("a")]);
    let t2 = Term::app("p", vec![c("b"), v("X", 2)]);
    let sigma = unify(&t1, &t2).ok().expect("scoped variables are distinct");
    assert_eq!(sigma.lookup(&Var::new("X", 1)), Some(&c("b")));
    assert_eq!(sigma.lookup(&Var::new("X", 2)), Some(&c("a")));
}

#[test]
fn constant_never_unifies_with_function() {
    assert!(matches!(
        unify(&c("a"), &Term::app("a", vec![c("b")])),
        UnifyResult::Failure(UnifyError::KindMismatch { .. })
    ));
}

#[test]
fn literals_with_different_predicates_do_not_unify() {
    let l1 = Literal::pos("p", vec![v("X", 1)]);
    let l2 = Literal::neg("q", vec![v("X", 2)]);
    assert!(unify_literals(&l1, &l2).is_failure());
}

#[test]
fn literal_arity_mismatch_fails() {
    let l1 = Literal::pos("p", vec![c("a")]);
    let l2 = Literal::neg("p", vec![c("a"), c("b")]);
    assert_eq!(
        unify_literals(&l1, &l2),
        UnifyResult::Failure(UnifyError::ArityMismatch {
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn nested_arity_mismatch_fails_equal_length_lists() {
    let left = vec![Term::app("g", vec![v("W", 1)]), v("W", 1), v("W", 1)];
    let right = vec![Term::app("g", vec![v("W", 1), v("W", 1)]), v("W", 1), v("W", 1)];
    assert_eq!(
        unify_many(&left, &right),
        UnifyResult::Failure(UnifyError::ArityMismatch {
            expected: 1,
            found: 2
        })
    );
}
