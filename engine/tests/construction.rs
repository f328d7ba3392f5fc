//! Integration tests for the construction boundary: parsing a DIMACS file from disk via
//! `SatState::from_dimacs_path` (the `sat_state_new` realization named in spec.md §6.2), and
//! the `Limits`-driven rejection path construction can take instead of building an arena.

use std::io::Write;

use tempfile::NamedTempFile;

use cdcl_engine::{Limits, SatError, SatState};
use cdcl_formula::{cnf_formula, Lit};

#[test]
fn from_dimacs_path_parses_and_builds_a_working_state() {
    let _ = env_logger::try_init();

    let mut file = NamedTempFile::new().expect("creating temp DIMACS file");
    writeln!(file, "c a comment line").unwrap();
    writeln!(file, "p cnf 3 3").unwrap();
    writeln!(file, "1 0").unwrap();
    writeln!(file, "-1 2 0").unwrap();
    writeln!(file, "-2 3 0").unwrap();
    file.flush().unwrap();

    let mut state = SatState::from_dimacs_path(file.path(), Limits::unbounded())
        .expect("parsing and building from a well-formed file should succeed");

    assert_eq!(state.var_count(), 3);
    assert_eq!(state.clause_count(), 3);

    assert!(state.unit_resolution());
    for v in 1..=3 {
        assert!(state.implied(Lit::from_dimacs(v)));
    }
}

#[test]
fn from_dimacs_path_reports_io_and_parse_failures() {
    let _ = env_logger::try_init();

    let missing = SatState::from_dimacs_path("/nonexistent/path/to/formula.cnf", Limits::unbounded());
    assert!(missing.is_err(), "a missing file must surface as an error, not panic");

    let mut file = NamedTempFile::new().expect("creating temp DIMACS file");
    writeln!(file, "not a dimacs file at all").unwrap();
    file.flush().unwrap();

    let malformed = SatState::from_dimacs_path(file.path(), Limits::unbounded());
    assert!(malformed.is_err(), "a file with no 'p cnf' header must be rejected");
}

#[test]
fn limits_reject_formulas_exceeding_the_variable_ceiling() {
    let formula = cnf_formula![1, 2, 3;];
    let limits = Limits {
        max_variables: Some(2),
        max_clauses: None,
    };

    match SatState::from_formula(formula, limits) {
        Err(SatError::TooManyVariables { found, limit }) => {
            assert_eq!(found, 3);
            assert_eq!(limit, 2);
        }
        other => panic!("expected Err(TooManyVariables), got {:?}", other.map(|_| ())),
    }
}

#[test]
fn limits_reject_formulas_exceeding_the_clause_ceiling() {
    let formula = cnf_formula![1; 2; 3;];
    let limits = Limits {
        max_variables: None,
        max_clauses: Some(2),
    };

    match SatState::from_formula(formula, limits) {
        Err(SatError::TooManyClauses { found, limit }) => {
            assert_eq!(found, 3);
            assert_eq!(limit, 2);
        }
        other => panic!("expected Err(TooManyClauses), got {:?}", other.map(|_| ())),
    }
}
