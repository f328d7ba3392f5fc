//! Conflict analysis: deriving the 1-UIP asserting clause by walking the merged trail
//! backwards from the literal that caused a clause to become empty.

use cdcl_formula::{Lit, Var};

use crate::clause::Clause;
use crate::state::SatState;

impl SatState {
    /// Produces the asserting clause for a clause `conflict` that became empty under the
    /// current assignment.
    pub(crate) fn analyze_conflict(&mut self, conflict: usize) -> Clause {
        // A conflict with no pending decision is already at the start level: there is no UIP
        // to find, and the asserting clause is simply empty (top-level unsatisfiability).
        if self.trail.ds.is_empty() {
            return Clause::new(Vec::new());
        }

        let current_level = self.trail.next_level();

        for index in 0..self.var_count {
            let var = Var::from_index(index);
            let pre_seen = self.lit_state.level(var) <= 1;
            self.lit_state.set_seen(var, pre_seen);
        }

        let mut literals = Vec::new();
        let mut reason = conflict;
        let mut m = 0usize;
        let mut cursor = self.trail.s.len() as isize - 1;

        loop {
            m += self.collect_reason(reason, current_level, &mut literals);

            let uip = match self.next_seen_trail_literal(&mut cursor) {
                Some(lit) => lit,
                None => return Clause::new(literals),
            };

            if m == 1 {
                literals.push(!uip);
                return Clause::new(literals);
            }

            reason = self
                .lit_state
                .locate(uip)
                .expect("every non-decision literal on the trail has a reason clause");
            m -= 1;
            cursor -= 1;
        }
    }

    /// Marks every not-yet-seen variable in `reason`'s literals as seen; literals below the
    /// current level go straight into the asserting clause, current-level literals are
    /// counted and returned for the caller to fold into `m`.
    fn collect_reason(&mut self, reason: usize, current_level: u32, literals: &mut Vec<Lit>) -> usize {
        let mut newly_current_level = 0usize;
        for lit in self.clause_store.get(reason).literals().to_vec() {
            let var = lit.var();
            if self.lit_state.seen(var) {
                continue;
            }
            self.lit_state.set_seen(var, true);
            if self.lit_state.level(var) < current_level {
                literals.push(lit);
            } else {
                newly_current_level += 1;
            }
        }
        newly_current_level
    }

    fn next_seen_trail_literal(&self, cursor: &mut isize) -> Option<Lit> {
        loop {
            if *cursor < 0 {
                return None;
            }
            let lit = self.trail.s[*cursor as usize];
            if self.lit_state.seen(lit.var()) {
                return Some(lit);
            }
            *cursor -= 1;
        }
    }
}
