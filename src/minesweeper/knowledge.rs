#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The agent's belief state: monotone fact sets plus a store of sentences,
//! closed under subset inference after every update.
//!
//! Facts only ever accumulate (a cell proven safe stays safe, a cell proven
//! to be a mine stays a mine) and the two sets are disjoint by construction.
//! Sentences shrink as facts propagate into them and disappear once fully
//! resolved. The closure runs as an explicit fixed-point loop: each pass
//! extracts facts from saturated sentences and prunes what they resolve,
//! then combines subset pairs over a snapshot of the store, merging the
//! derived sentences in atomically. Every effective step either grows a
//! fact set or strictly decreases the total number of cells held in
//! sentences, so the loop terminates.

use crate::minesweeper::cell::Cell;
use crate::minesweeper::sentence::Sentence;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Everything the agent has concluded so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    safes: FxHashSet<Cell>,
    mines: FxHashSet<Cell>,
    sentences: Vec<Sentence>,
}

impl Knowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn safes(&self) -> &FxHashSet<Cell> {
        &self.safes
    }

    #[must_use]
    pub const fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    #[must_use]
    pub fn is_safe(&self, cell: Cell) -> bool {
        self.safes.contains(&cell)
    }

    #[must_use]
    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Records that `cell` is safe and propagates the fact into every
    /// sentence. Returns whether the fact was new.
    ///
    /// # Panics
    ///
    /// If `cell` is already known to be a mine.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        assert!(
            !self.mines.contains(&cell),
            "contradiction: cell {cell} is already known to be a mine"
        );
        if !self.safes.insert(cell) {
            return false;
        }
        for sentence in &mut self.sentences {
            sentence.mark_safe(cell);
        }
        true
    }

    /// Records that `cell` is a mine and propagates the fact into every
    /// sentence. Returns whether the fact was new.
    ///
    /// # Panics
    ///
    /// If `cell` is already known to be safe.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        assert!(
            !self.safes.contains(&cell),
            "contradiction: cell {cell} is already known to be safe"
        );
        if !self.mines.insert(cell) {
            return false;
        }
        for sentence in &mut self.sentences {
            sentence.mark_mine(cell);
        }
        true
    }

    /// Records a fresh observation sentence. A zero-count sentence collapses
    /// immediately into safe marks instead of being stored; an empty cell
    /// set carries no information and is discarded.
    ///
    /// # Panics
    ///
    /// If the sentence is unsatisfiable (`count` exceeds the cell count).
    pub fn add(&mut self, cells: FxHashSet<Cell>, count: usize) {
        if cells.is_empty() {
            assert!(count == 0, "observation asserts {count} mines over no cells");
            return;
        }
        if count == 0 {
            for cell in cells {
                self.mark_safe(cell);
            }
            return;
        }
        self.sentences.push(Sentence::new(cells, count));
    }

    /// Runs the inference closure to a fixed point. Re-running on an
    /// already-closed knowledge base changes nothing.
    pub fn infer(&mut self) {
        while self.infer_pass() {}
    }

    /// One closure pass. Returns whether anything changed.
    fn infer_pass(&mut self) -> bool {
        let mut changed = false;

        // Saturated sentences resolve wholesale into facts.
        let mut safes: SmallVec<[Cell; 8]> = SmallVec::new();
        let mut mines: SmallVec<[Cell; 8]> = SmallVec::new();
        for sentence in &self.sentences {
            if let Some(cells) = sentence.known_safes() {
                safes.extend(cells.iter().copied());
            } else if let Some(cells) = sentence.known_mines() {
                mines.extend(cells.iter().copied());
            }
        }
        for cell in safes {
            changed |= self.mark_safe(cell);
        }
        for cell in mines {
            changed |= self.mark_mine(cell);
        }

        changed |= self.prune();

        // Subset combination over a snapshot: a proper subset splits its
        // superset into the remainder, and the remainder together with the
        // subset subsumes the superset.
        let snapshot = std::mem::take(&mut self.sentences);
        let mut kept = vec![true; snapshot.len()];
        let mut derived: Vec<Sentence> = Vec::new();
        for (i, smaller) in snapshot.iter().enumerate() {
            for (j, larger) in snapshot.iter().enumerate() {
                if i == j || !kept[j] {
                    continue;
                }
                if larger.properly_contains(smaller) {
                    derived.push(larger.subtract(smaller));
                    kept[j] = false;
                }
            }
        }
        changed |= !derived.is_empty();
        self.sentences = snapshot
            .into_iter()
            .zip(kept)
            .filter_map(|(sentence, keep)| keep.then_some(sentence))
            .chain(derived)
            .collect();

        changed
    }

    /// Drops empty sentences and duplicate cell sets (first occurrence
    /// wins). Returns whether anything was removed.
    fn prune(&mut self) -> bool {
        let before = self.sentences.len();
        let mut kept: Vec<Sentence> = Vec::with_capacity(before);
        for sentence in self.sentences.drain(..) {
            if sentence.is_empty() || kept.iter().any(|k| k.same_cells(&sentence)) {
                continue;
            }
            kept.push(sentence);
        }
        self.sentences = kept;
        self.sentences.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[(usize, usize)]) -> FxHashSet<Cell> {
        raw.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_subset_inference_derives_remainder() {
        // A = ({p, q}, 1), B = ({p, q, r}, 2) must yield ({r}, 1), and since
        // the remainder saturates, r becomes a mine.
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1)]), 1);
        kb.add(cells(&[(0, 0), (0, 1), (0, 2)]), 2);
        kb.infer();

        assert!(kb.is_mine(Cell::new(0, 2)));
        assert_eq!(kb.sentences().len(), 1);
        assert_eq!(kb.sentences()[0].cells(), &cells(&[(0, 0), (0, 1)]));
        assert_eq!(kb.sentences()[0].count(), 1);
    }

    #[test]
    fn test_zero_count_collapses_to_safes() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1), (1, 0)]), 0);
        kb.infer();

        assert_eq!(kb.safes(), &cells(&[(0, 0), (0, 1), (1, 0)]));
        assert!(kb.sentences().is_empty());
    }

    #[test]
    fn test_full_count_saturates_to_mines() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1)]), 2);
        kb.infer();

        assert_eq!(kb.mines(), &cells(&[(0, 0), (0, 1)]));
        assert!(kb.sentences().is_empty());
    }

    #[test]
    fn test_cascading_inference() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1)]), 1);
        kb.add(cells(&[(0, 0), (0, 1), (1, 0), (1, 1)]), 3);
        kb.infer();

        // The remainder ({(1, 0), (1, 1)}, 2) saturates into mines.
        assert!(kb.is_mine(Cell::new(1, 0)));
        assert!(kb.is_mine(Cell::new(1, 1)));
        assert!(!kb.is_mine(Cell::new(0, 0)));
        assert_eq!(kb.sentences().len(), 1);
    }

    #[test]
    fn test_marking_propagates_into_sentences() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1), (0, 2)]), 1);
        kb.mark_mine(Cell::new(0, 0));
        kb.infer();

        // The remaining two cells account for zero mines.
        assert!(kb.is_safe(Cell::new(0, 1)));
        assert!(kb.is_safe(Cell::new(0, 2)));
        assert!(kb.sentences().is_empty());
    }

    #[test]
    fn test_marks_are_idempotent() {
        let mut kb = Knowledge::new();
        assert!(kb.mark_safe(Cell::new(0, 0)));
        assert!(!kb.mark_safe(Cell::new(0, 0)));
        assert!(kb.mark_mine(Cell::new(1, 1)));
        assert!(!kb.mark_mine(Cell::new(1, 1)));
        assert_eq!(kb.safes().len(), 1);
        assert_eq!(kb.mines().len(), 1);
    }

    #[test]
    fn test_facts_grow_monotonically() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1)]), 2);
        kb.infer();
        let mines_before = kb.mines().clone();
        let safes_before = kb.safes().clone();

        kb.add(cells(&[(2, 2), (2, 3)]), 0);
        kb.infer();

        assert!(kb.mines().is_superset(&mines_before));
        assert!(kb.safes().is_superset(&safes_before));
    }

    #[test]
    #[should_panic(expected = "already known to be safe")]
    fn test_contradictory_mine_mark_panics() {
        let mut kb = Knowledge::new();
        kb.mark_safe(Cell::new(0, 0));
        kb.mark_mine(Cell::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "already known to be a mine")]
    fn test_contradictory_safe_mark_panics() {
        let mut kb = Knowledge::new();
        kb.mark_mine(Cell::new(0, 0));
        kb.mark_safe(Cell::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "over no cells")]
    fn test_nonzero_count_over_empty_set_panics() {
        let mut kb = Knowledge::new();
        kb.add(FxHashSet::default(), 1);
    }

    #[test]
    fn test_duplicates_are_pruned() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1), (0, 2)]), 1);
        kb.add(cells(&[(0, 0), (0, 1), (0, 2)]), 1);
        kb.infer();

        assert_eq!(kb.sentences().len(), 1);
    }

    #[test]
    fn test_closure_is_idempotent() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1)]), 1);
        kb.add(cells(&[(0, 0), (0, 1), (0, 2), (1, 2)]), 2);
        kb.infer();

        let closed = kb.clone();
        kb.infer();
        assert_eq!(kb, closed);
    }

    #[test]
    fn test_sentence_validity_is_preserved() {
        let mut kb = Knowledge::new();
        kb.add(cells(&[(0, 0), (0, 1), (1, 0), (1, 1)]), 2);
        kb.add(cells(&[(0, 0), (0, 1)]), 1);
        kb.add(cells(&[(1, 0)]), 1);
        kb.infer();

        for sentence in kb.sentences() {
            assert!(sentence.count() <= sentence.len());
        }
        assert!(kb.safes().is_disjoint(kb.mines()));
    }
}
