//! The merged trail: one conceptual timeline (`s`) with two projections (`ds`, `il`).

use cdcl_formula::Lit;

#[derive(Default)]
pub(crate) struct Trail {
    /// Decision stack: literals pushed by `decide_literal`, popped by `undo_decide_literal`.
    pub(crate) ds: Vec<Lit>,
    /// Implication list: literals forced by unit resolution, in derivation order.
    pub(crate) il: Vec<Lit>,
    /// Merged trail: `ds` and `il` interleaved in the order they actually happened.
    pub(crate) s: Vec<Lit>,
}

impl Trail {
    /// The decision level a newly decided or newly implied literal would receive right now.
    pub(crate) fn next_level(&self) -> u32 {
        self.ds.len() as u32 + 1
    }
}
