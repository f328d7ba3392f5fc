//! Construction-time limits.
//!
//! The decision core itself has no tunable heuristics (no branching order, no restart
//! schedule, no clause deletion policy) — those are a search driver's responsibility, not
//! this crate's. The only configuration surface is a pair of sanity limits an embedder can
//! apply to untrusted input before committing to build the arena.

/// Upper bounds checked when constructing a [`crate::SatState`] from a parsed formula.
///
/// Both fields default to `None`, meaning "no limit", matching the original C reference
/// implementation which trusts the DIMACS header unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Reject formulas declaring more variables than this.
    pub max_variables: Option<usize>,
    /// Reject formulas declaring more clauses than this.
    pub max_clauses: Option<usize>,
}

impl Limits {
    /// No limits at all.
    pub fn unbounded() -> Limits {
        Limits::default()
    }
}
