//! The top-level aggregate: constructs from a formula or a DIMACS file, and exposes the
//! variable/literal/clause query surface described in the callable surface.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use cdcl_formula::{CnfFormula, Lit, Var};

use crate::clause::{Clause, ClauseStore};
use crate::config::Limits;
use crate::error::SatError;
use crate::lit_state::LitState;
use crate::occurrence::OccurrenceIndex;
use crate::queue::PropagationQueue;
use crate::trail::Trail;

/// The decision core: a CNF knowledge base together with an evolving partial assignment.
///
/// Owns every variable, literal, clause and trail entry it ever creates; nothing escapes with
/// a lifetime shorter than the `SatState` itself, so all internal cross-references are plain
/// indices rather than borrowed pointers.
pub struct SatState {
    pub(crate) var_count: usize,
    pub(crate) clause_store: ClauseStore,
    pub(crate) occurrence: OccurrenceIndex,
    pub(crate) lit_state: LitState,
    pub(crate) trail: Trail,
    pub(crate) queue: PropagationQueue,
    pub(crate) ac: Option<Clause>,
}

impl SatState {
    /// Builds a `SatState` from an already-parsed formula.
    pub fn from_formula(formula: CnfFormula, limits: Limits) -> Result<SatState, SatError> {
        let var_count = formula.var_count();
        if let Some(max) = limits.max_variables {
            if var_count > max {
                return Err(SatError::TooManyVariables {
                    found: var_count,
                    limit: max,
                });
            }
        }

        let clause_count = formula.len();
        if let Some(max) = limits.max_clauses {
            if clause_count > max {
                return Err(SatError::TooManyClauses {
                    found: clause_count,
                    limit: max,
                });
            }
        }

        let kb: Vec<Clause> = formula
            .iter()
            .enumerate()
            .map(|(i, literals)| Clause {
                index: i + 1,
                literals: literals.to_vec(),
                subsumed: false,
                mark: false,
            })
            .collect();

        let mut occurrence = OccurrenceIndex::new(var_count);
        for (k, clause) in kb.iter().enumerate() {
            for &lit in clause.literals() {
                occurrence.push_mention(lit.var(), k);
            }
        }

        log::debug!(
            "constructed SatState with {} variables and {} clauses",
            var_count,
            clause_count
        );

        Ok(SatState {
            var_count,
            queue: PropagationQueue::seeded_with(0..clause_count),
            clause_store: ClauseStore::from_kb(kb),
            occurrence,
            lit_state: LitState::new(var_count),
            trail: Trail::default(),
            ac: None,
        })
    }

    /// Builds a `SatState` by parsing a DIMACS CNF file from `path`.
    ///
    /// Unlike `from_formula`, this wraps I/O and parse failures in `anyhow::Error`: the
    /// construction entry point is the one place this crate uses `anyhow` rather than its own
    /// structured error type, matching the outer-boundary convention the rest of the corpus
    /// follows.
    pub fn from_dimacs_path(path: impl AsRef<Path>, limits: Limits) -> anyhow::Result<SatState> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening DIMACS input {}", path.display()))?;
        let formula = cdcl_dimacs::parse_dimacs(file)
            .with_context(|| format!("parsing DIMACS input {}", path.display()))?;
        Ok(SatState::from_formula(formula, limits)?)
    }

    // --- Variables & literals (component A) --------------------------------------------

    pub fn var_count(&self) -> usize {
        self.var_count
    }

    pub fn index_to_var(&self, index: usize) -> Var {
        Var::from_dimacs(index as isize)
    }

    pub fn var_index(&self, var: Var) -> usize {
        var.to_dimacs() as usize
    }

    pub fn literal_var(&self, lit: Lit) -> Var {
        lit.var()
    }

    pub fn pos_literal(&self, var: Var) -> Lit {
        var.positive()
    }

    pub fn neg_literal(&self, var: Var) -> Lit {
        var.negative()
    }

    pub fn opp_literal(&self, lit: Lit) -> Lit {
        !lit
    }

    pub fn index_to_literal(&self, index: isize) -> Option<Lit> {
        if index == 0 {
            None
        } else {
            Some(Lit::from_dimacs(index))
        }
    }

    pub fn literal_index(&self, lit: Lit) -> isize {
        lit.to_dimacs()
    }

    pub fn implied(&self, lit: Lit) -> bool {
        self.lit_state.is_implied(lit)
    }

    pub fn instantiated(&self, var: Var) -> bool {
        self.lit_state.instantiated(var)
    }

    /// True iff every original clause mentioning `var` is currently subsumed.
    pub fn irrelevant(&self, var: Var) -> bool {
        self.occurrence
            .mentions(var)
            .iter()
            .all(|&k| self.clause_store.get(k).is_subsumed())
    }

    pub fn var_occurrences(&self, var: Var) -> usize {
        self.occurrence.mentions(var).len()
    }

    pub fn clause_of_var(&self, var: Var, index: usize) -> usize {
        self.occurrence.mentions(var)[index]
    }

    pub fn literal_weight(&self, _lit: Lit) -> u64 {
        1
    }

    // --- Clauses (component B) ----------------------------------------------------------

    pub fn clause_count(&self) -> usize {
        self.clause_store.clause_count()
    }

    pub fn learned_clause_count(&self) -> usize {
        self.clause_store.learned_clause_count()
    }

    /// Converts a 1-based clause index into the combined 0-based addressing used by
    /// `clause_literals`/`clause_size`/`subsumed`/`clause_of_var`.
    pub fn index_to_clause(&self, index: usize) -> usize {
        index - 1
    }

    pub fn clause_index(&self, k: usize) -> usize {
        self.clause_store.get(k).index()
    }

    pub fn clause_literals(&self, k: usize) -> &[Lit] {
        self.clause_store.get(k).literals()
    }

    pub fn clause_size(&self, k: usize) -> usize {
        self.clause_store.get(k).len()
    }

    pub fn subsumed(&self, k: usize) -> bool {
        self.clause_store.get(k).is_subsumed()
    }

    // --- Trail & decision level -----------------------------------------------------------

    /// The level the next decision (or the next unit propagation) would receive.
    pub fn decision_level(&self) -> usize {
        self.trail.next_level() as usize
    }

    pub fn decision_stack(&self) -> &[Lit] {
        &self.trail.ds
    }

    pub fn implication_trail(&self) -> &[Lit] {
        &self.trail.il
    }

    pub fn merged_trail(&self) -> &[Lit] {
        &self.trail.s
    }

    // --- Propagation ------------------------------------------------------------------------

    /// Runs unit resolution to quiescence. Returns `true` on success, `false` on conflict —
    /// in which case `asserting_clause()` holds the synthesized clause.
    pub fn unit_resolution(&mut self) -> bool {
        match self.run_propagation() {
            Ok(()) => {
                self.ac = None;
                true
            }
            Err(clause) => {
                self.ac = Some(clause);
                false
            }
        }
    }

    /// The asserting clause from the most recent conflict, if any.
    pub fn asserting_clause(&self) -> Option<&Clause> {
        self.ac.as_ref()
    }

    // --- Opaque marks, owned entirely by the caller ----------------------------------------

    pub fn mark_var(&mut self, var: Var) {
        self.lit_state.set_marked(var, true);
    }

    pub fn unmark_var(&mut self, var: Var) {
        self.lit_state.set_marked(var, false);
    }

    pub fn marked_var(&self, var: Var) -> bool {
        self.lit_state.marked(var)
    }

    pub fn mark_clause(&mut self, k: usize) {
        self.clause_store.get_mut(k).mark = true;
    }

    pub fn unmark_clause(&mut self, k: usize) {
        self.clause_store.get_mut(k).mark = false;
    }

    pub fn marked_clause(&self, k: usize) -> bool {
        self.clause_store.get(k).mark
    }
}
