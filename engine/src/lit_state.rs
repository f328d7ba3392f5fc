//! Per-variable and per-literal mutable state.
//!
//! Variables and literals themselves ([`Var`]/[`Lit`]) are plain value types from
//! `cdcl-formula`; everything that changes as the solver runs — whether a literal is
//! currently implied, which clause forced it, its decision level, and the scratch `seen` bit
//! used during conflict analysis — lives here in flat arrays indexed by variable or literal
//! identity, following the arena-plus-index style the original reference implementation
//! keeps per `Var`/`Lit` struct fields.

use cdcl_formula::{Lit, Var};

pub(crate) struct LitState {
    /// Decision level, indexed by variable. Only meaningful once the variable is instantiated.
    level: Vec<u32>,
    /// Whether a literal currently holds, indexed by `Lit::code()`.
    implied: Vec<bool>,
    /// Combined clause index that forced a literal via propagation, indexed by `Lit::code()`.
    /// `None` for literals set by decision, or not currently implied.
    locate: Vec<Option<usize>>,
    /// Scratch space reused by conflict analysis, indexed by variable.
    seen: Vec<bool>,
    /// Opaque caller-owned mark, indexed by variable. Untouched by the core itself.
    marked: Vec<bool>,
}

impl LitState {
    pub(crate) fn new(var_count: usize) -> LitState {
        LitState {
            level: vec![0; var_count],
            implied: vec![false; var_count * 2],
            locate: vec![None; var_count * 2],
            seen: vec![false; var_count],
            marked: vec![false; var_count],
        }
    }

    pub(crate) fn is_implied(&self, lit: Lit) -> bool {
        self.implied[lit.code()]
    }

    pub(crate) fn set_implied(&mut self, lit: Lit, value: bool) {
        self.implied[lit.code()] = value;
    }

    pub(crate) fn instantiated(&self, var: Var) -> bool {
        self.is_implied(var.positive()) || self.is_implied(var.negative())
    }

    pub(crate) fn level(&self, var: Var) -> u32 {
        self.level[var.index()]
    }

    pub(crate) fn set_level(&mut self, var: Var, level: u32) {
        self.level[var.index()] = level;
    }

    pub(crate) fn locate(&self, lit: Lit) -> Option<usize> {
        self.locate[lit.code()]
    }

    pub(crate) fn set_locate(&mut self, lit: Lit, reason: Option<usize>) {
        self.locate[lit.code()] = reason;
    }

    pub(crate) fn seen(&self, var: Var) -> bool {
        self.seen[var.index()]
    }

    pub(crate) fn set_seen(&mut self, var: Var, value: bool) {
        self.seen[var.index()] = value;
    }

    pub(crate) fn marked(&self, var: Var) -> bool {
        self.marked[var.index()]
    }

    pub(crate) fn set_marked(&mut self, var: Var, value: bool) {
        self.marked[var.index()] = value;
    }
}
