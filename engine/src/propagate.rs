//! The unit-resolution fixpoint.

use crate::clause::Clause;
use crate::state::SatState;

impl SatState {
    /// Scans the propagation queue to quiescence.
    ///
    /// Returns `Ok(())` once no non-subsumed clause has fewer than two unresolved literals, or
    /// `Err(asserting_clause)` the moment a clause becomes empty under the current assignment.
    pub(crate) fn run_propagation(&mut self) -> Result<(), Clause> {
        loop {
            let mut progressed = false;
            let mut i = self.queue.len();
            while i > 0 {
                i -= 1;
                let k = self.queue.get(i);

                let subsumed_now = self.check_subsumed(k);
                self.clause_store.get_mut(k).subsumed = subsumed_now;
                if subsumed_now {
                    self.queue.swap_remove(i);
                    continue;
                }

                let literals = self.clause_store.get(k).literals().to_vec();
                let mut unresolved_count = 0usize;
                let mut unresolved_pos = 0usize;
                for (pos, &lit) in literals.iter().enumerate() {
                    if !self.lit_state.is_implied(!lit) {
                        unresolved_count += 1;
                        unresolved_pos = pos;
                        if unresolved_count == 2 {
                            break;
                        }
                    }
                }

                match unresolved_count {
                    0 => {
                        log::debug!("conflict in clause {}", self.clause_store.get(k).index());
                        return Err(self.analyze_conflict(k));
                    }
                    1 => {
                        let lit = literals[unresolved_pos];
                        let level = self.trail.next_level();
                        self.lit_state.set_implied(lit, true);
                        self.lit_state.set_locate(lit, Some(k));
                        self.lit_state.set_level(lit.var(), level);
                        self.trail.il.push(lit);
                        self.trail.s.push(lit);
                        self.clause_store.get_mut(k).subsumed = true;
                        self.queue.swap_remove(i);
                        progressed = true;
                        log::trace!("propagated {:?} at level {} via clause {}", lit, level, k);
                    }
                    _ => {}
                }
            }
            if !progressed {
                return Ok(());
            }
        }
    }

    pub(crate) fn check_subsumed(&self, k: usize) -> bool {
        self.clause_store
            .get(k)
            .literals()
            .iter()
            .any(|&lit| self.lit_state.is_implied(lit))
    }
}
