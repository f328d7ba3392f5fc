//! The decision core of a CDCL-style Boolean satisfiability engine.
//!
//! This crate maintains a CNF knowledge base together with an evolving partial assignment,
//! performs unit resolution (Boolean constraint propagation), and on conflict synthesizes a
//! 1-UIP asserting learned clause by walking the implication trail. It does not decide which
//! literal to branch on, does not restart, does not delete clauses, and does not enumerate
//! models — those are a search driver's responsibility, built on top of the primitives here:
//! [`SatState::decide_literal`], [`SatState::unit_resolution`], [`SatState::assert_clause`],
//! [`SatState::at_assertion_level`] and [`SatState::undo_decide_literal`].

mod analyze;
mod clause;
mod config;
mod decision;
mod error;
mod lit_state;
mod occurrence;
mod propagate;
mod queue;
mod state;
mod trail;

pub use clause::Clause;
pub use config::Limits;
pub use error::SatError;
pub use state::SatState;

pub use cdcl_formula::{Lit, Var};
