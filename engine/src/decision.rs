//! The decision controller: decide / undo / assert-clause, and the assertion-level test.

use cdcl_formula::Lit;

use crate::clause::Clause;
use crate::state::SatState;

impl SatState {
    /// Sets `lit` true, advances the decision level, and runs propagation to quiescence.
    ///
    /// Returns the synthesized asserting clause if propagation finds a conflict, `None`
    /// otherwise. The precondition that `lit` is not yet implied is a caller contract
    /// violation, not a recoverable error — see the crate's error handling notes. Note that
    /// the propagation queue is generally *not* empty when this is called: clauses with two or
    /// more unresolved literals are never removed from it (the core never requires watched
    /// literals), so they sit there to be re-scanned by every subsequent propagation round.
    /// "Quiescent" means the previous `unit_resolution` reached a fixpoint without a pending
    /// conflict, not that the queue is literally drained.
    pub fn decide_literal(&mut self, lit: Lit) -> Option<Clause> {
        debug_assert!(
            !self.lit_state.is_implied(lit),
            "decide_literal called on an already-implied literal"
        );

        self.lit_state.set_implied(lit, true);
        self.trail.ds.push(lit);
        self.trail.s.push(lit);
        let level = self.trail.next_level();
        self.lit_state.set_level(lit.var(), level);
        log::debug!("decided {:?} at level {}", lit, level);

        self.propagate_and_record()
    }

    /// Undoes the most recent decision and every implication it produced.
    pub fn undo_decide_literal(&mut self) {
        debug_assert!(
            !self.trail.ds.is_empty(),
            "undo_decide_literal called with no pending decision"
        );

        let lit = *self.trail.ds.last().unwrap();
        self.restore_literal(lit);
        self.trail.ds.pop();
        self.trail.s.pop();
        self.undo_unit_resolution();
        log::trace!("undid decision {:?}", lit);
    }

    /// Adds `clause` as a learned clause and runs propagation to quiescence.
    ///
    /// `clause` must be at the assertion level (`at_assertion_level` must hold); this is a
    /// caller contract, not something the core re-validates at runtime beyond a debug check.
    pub fn assert_clause(&mut self, mut clause: Clause) -> Option<Clause> {
        debug_assert!(
            self.at_assertion_level(&clause),
            "assert_clause called off the clause's assertion level"
        );

        let k = self.clause_store.next_combined_index();
        clause.index = k + 1;
        clause.subsumed = false;
        clause.mark = false;
        for &lit in &clause.literals {
            self.occurrence.push_mention_lc(lit.var(), k);
        }
        self.clause_store.push_learned(clause);
        self.queue.push(k);
        log::debug!(
            "asserted learned clause {} ({} literals)",
            k + 1,
            self.clause_store.get(k).len()
        );

        self.propagate_and_record()
    }

    /// True iff the second-highest decision level among `clause`'s literals equals the level
    /// the next decision would receive — the level the driver must backtrack to before the
    /// clause may be asserted.
    pub fn at_assertion_level(&self, clause: &Clause) -> bool {
        let mut highest = 1u32;
        let mut second_highest = 1u32;
        for &lit in &clause.literals {
            let level = self.lit_state.level(lit.var());
            if level >= highest {
                second_highest = highest;
                highest = level;
            } else if level >= second_highest {
                second_highest = level;
            }
        }
        second_highest == self.trail.next_level()
    }

    fn propagate_and_record(&mut self) -> Option<Clause> {
        if self.unit_resolution() {
            None
        } else {
            self.ac.clone()
        }
    }

    pub(crate) fn restore_literal(&mut self, lit: Lit) {
        self.lit_state.set_implied(lit, false);
        let var = lit.var();
        let occurrences: Vec<usize> = self
            .occurrence
            .mentions(var)
            .iter()
            .chain(self.occurrence.mentions_lc(var).iter())
            .copied()
            .collect();

        for k in occurrences {
            if self.clause_store.get(k).is_subsumed() {
                let still_subsumed = self.check_subsumed(k);
                self.clause_store.get_mut(k).subsumed = still_subsumed;
                if !still_subsumed {
                    self.queue.push(k);
                }
            }
        }
    }

    fn undo_unit_resolution(&mut self) {
        while let Some(&lit) = self.trail.il.last() {
            if self.lit_state.level(lit.var()) > self.trail.next_level() {
                self.restore_literal(lit);
                self.trail.il.pop();
                self.trail.s.pop();
            } else {
                break;
            }
        }
    }
}
