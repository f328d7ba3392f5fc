//! Construction-time error types.
//!
//! Per the error handling contract, the only recoverable failure class is at construction:
//! a malformed DIMACS input or a formula exceeding the caller's [`crate::Limits`]. Everything
//! that happens afterwards (conflicts during propagation) is a return-value signal, not an
//! error — see [`crate::SatState::decide_literal`] and [`crate::SatState::assert_clause`].

use thiserror::Error;

/// Errors that can prevent a [`crate::SatState`] from being constructed.
#[derive(Debug, Error)]
pub enum SatError {
    #[error("formula declares {found} variables, exceeding the configured limit of {limit}")]
    TooManyVariables { found: usize, limit: usize },

    #[error("formula declares {found} clauses, exceeding the configured limit of {limit}")]
    TooManyClauses { found: usize, limit: usize },
}
