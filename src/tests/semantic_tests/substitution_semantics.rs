use super::*;

// -------------------------------------------------------------------------
// Bindings apply one after another, so later bindings see the output of
// earlier ones.
// -------------------------------------------------------------------------
#[test]
fn bindings_apply_in_sequence() {
    let mut sigma = Substitution::singleton(Var::new("X", 1), v("Y", 1));
    sigma.bind(Var::new("Y", 1), c("a"));
    assert_eq!(sigma.apply_to_term(&v("X", 1)), c("a"));
}

#[test]
fn reversed_bindings_do_not_chain() {
    let mut sigma = Substitution::singleton(Var::new("Y", 1), c("a"));
    sigma.bind(Var::new("X", 1), v("Y", 1));
    assert_eq!(sigma.apply_to_term(&v("X", 1)), v("Y", 1));
}

#[test]
fn empty_substitution_is_identity() {
    let t = Term::app("f", vec![v("X", 1), c("a")]);
    assert_eq!(Substitution::empty().apply_to_term(&t), t);
}

#[test]
fn ground_terms_are_fixed_points() {
    let mut sigma = Substitution::singleton(Var::new("X", 1), c("b"));
    sigma.bind(Var::new("Y", 2), Term::app("g", vec![c("c")]));
    let t = Term::app("f", vec![c("a"), Term::app("h", vec![c("d")])]);
    assert_eq!(sigma.apply_to_term(&t), t);
}

#[test]
fn substitution_respects_clause_scope() {
    let sigma = Substitution::singleton(Var::new("X", 1), c("a"));
    assert_eq!(sigma.apply_to_term(&v("X", 2)), v("X", 2));
}
