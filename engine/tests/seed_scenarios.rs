//! Integration tests covering the worked scenarios in the decision core's design notes:
//! a pure propagation chain, an immediate top-level contradiction, a decision with a single
//! forced consequence, a 1-UIP conflict with a learned unit clause, and re-enqueueing on undo.

use cdcl_engine::{Limits, SatState};
use cdcl_formula::{cnf_formula, lit, lits};

#[test]
fn unit_propagation_chain() {
    // p cnf 3 3 / 1 0 / -1 2 0 / -2 3 0
    let formula = cnf_formula![1; -1, 2; -2, 3;];
    let mut state = SatState::from_formula(formula, Limits::unbounded()).unwrap();

    assert!(state.unit_resolution());
    assert!(state.decision_stack().is_empty());

    assert!(state.implied(lit!(1)));
    assert!(state.implied(lit!(2)));
    assert!(state.implied(lit!(3)));
    for v in 1..=3 {
        assert!(!state.implied(lit!(-v)));
    }
}

#[test]
fn immediate_contradiction() {
    // p cnf 1 2 / 1 0 / -1 0
    let formula = cnf_formula![1; -1;];
    let mut state = SatState::from_formula(formula, Limits::unbounded()).unwrap();

    assert!(!state.unit_resolution());
    let ac = state.asserting_clause().expect("conflict must set an asserting clause");
    assert!(ac.is_empty(), "a top-level conflict has no decisions to blame");
}

#[test]
fn decision_then_forced_consequence() {
    // p cnf 2 1 / -1 -2 0
    let formula = cnf_formula![-1, -2;];
    let mut state = SatState::from_formula(formula, Limits::unbounded()).unwrap();

    assert!(state.unit_resolution());
    assert!(state.decision_stack().is_empty());

    let conflict = state.decide_literal(lit!(1));
    assert!(conflict.is_none());
    assert!(state.implied(lit!(1)));
    assert!(state.implied(lit!(-2)));

    state.undo_decide_literal();
    assert!(state.decision_stack().is_empty());
    assert!(!state.implied(lit!(1)));
    assert!(!state.implied(lit!(-2)));
    assert!(!state.implied(lit!(2)));
}

#[test]
fn one_uip_learning_and_assertion() {
    // p cnf 4 4 / -1 2 0 / -1 3 0 / -2 -3 4 0 / -4 0
    let formula = cnf_formula![-1, 2; -1, 3; -2, -3, 4; -4;];
    let mut state = SatState::from_formula(formula, Limits::unbounded()).unwrap();

    assert!(state.unit_resolution());
    assert!(state.implied(lit!(-4)));

    let conflict = state.decide_literal(lit!(1));
    let ac = conflict.expect("deciding +1 must contradict the unit-forced -4");
    assert_eq!(ac.literals(), &lits![-1][..]);

    // still at the decision's level: the driver has not backtracked yet
    assert!(!state.at_assertion_level(&ac));

    state.undo_decide_literal();
    assert!(state.decision_stack().is_empty());
    assert!(state.at_assertion_level(&ac));

    let second_conflict = state.assert_clause(ac);
    assert!(second_conflict.is_none());
    assert!(state.implied(lit!(-1)));

    // every clause mentioning the now-forced -1 (both original clauses containing it, plus
    // the freshly asserted unit clause itself) is satisfied outright; the ternary clause's
    // own literals are all independent of var 1, so it is left as a live constraint.
    assert!(state.subsumed(0)); // -1 2
    assert!(state.subsumed(1)); // -1 3
    assert!(!state.subsumed(2)); // -2 -3 4, still unresolved
    assert!(state.subsumed(3)); // -4, subsumed since construction
    assert!(state.subsumed(4)); // the learned unit clause {-1} itself
}

#[test]
fn undo_reenqueues_clauses_subsumed_only_by_the_retracted_literal() {
    // p cnf 2 2 / 1 2 0 / 1 -2 0 -- deciding +1 subsumes both clauses; undoing must put
    // both back on the propagation queue with their subsumed flag cleared.
    let formula = cnf_formula![1, 2; 1, -2;];
    let mut state = SatState::from_formula(formula, Limits::unbounded()).unwrap();

    assert!(state.unit_resolution());
    assert!(state.decision_stack().is_empty());
    assert!(!state.subsumed(0));
    assert!(!state.subsumed(1));

    assert!(state.decide_literal(lit!(1)).is_none());
    assert!(state.subsumed(0));
    assert!(state.subsumed(1));

    state.undo_decide_literal();
    assert!(!state.implied(lit!(1)));
    assert!(!state.subsumed(0));
    assert!(!state.subsumed(1));

    // quiescence is restorable: running unit resolution again is a no-op that still succeeds
    assert!(state.unit_resolution());
}

#[test]
fn unit_resolution_is_idempotent_on_success() {
    let formula = cnf_formula![1; -1, 2;];
    let mut state = SatState::from_formula(formula, Limits::unbounded()).unwrap();

    assert!(state.unit_resolution());
    let trail_after_first = state.merged_trail().to_vec();
    assert!(state.unit_resolution());
    assert_eq!(state.merged_trail(), &trail_after_first[..]);
}

#[test]
fn merged_trail_is_order_preserving_merge_of_decisions_and_implications() {
    let formula = cnf_formula![-1, 2;];
    let mut state = SatState::from_formula(formula, Limits::unbounded()).unwrap();

    assert!(state.unit_resolution());
    assert!(state.decide_literal(lit!(1)).is_none());

    assert_eq!(state.decision_stack().len() + state.implication_trail().len(), state.merged_trail().len());
    assert_eq!(state.merged_trail(), &[lit!(1), lit!(2)][..]);
}
