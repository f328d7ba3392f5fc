//! The propagation queue: combined clause indices pending a unit-resolution scan.
//!
//! Unordered and not deduplicated, as the contract allows. Removal is swap-remove, mirroring
//! the reference implementation's `vector_erase`.

#[derive(Default)]
pub(crate) struct PropagationQueue(Vec<usize>);

impl PropagationQueue {
    pub(crate) fn seeded_with(range: impl Iterator<Item = usize>) -> PropagationQueue {
        PropagationQueue(range.collect())
    }

    pub(crate) fn push(&mut self, k: usize) {
        self.0.push(k);
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn get(&self, i: usize) -> usize {
        self.0[i]
    }

    pub(crate) fn swap_remove(&mut self, i: usize) -> usize {
        self.0.swap_remove(i)
    }
}
