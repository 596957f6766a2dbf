#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::minesweeper::cell::Cell;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt;

/// A logical statement about the board: exactly `count` of `cells` are mines.
///
/// The invariant `count <= cells.len()` holds for every live sentence; a
/// violation means the observation stream contradicts itself and is treated
/// as a fatal fault rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    cells: FxHashSet<Cell>,
    count: usize,
}

impl Sentence {
    /// # Panics
    ///
    /// If `count` exceeds the number of cells.
    #[must_use]
    pub fn new(cells: FxHashSet<Cell>, count: usize) -> Self {
        assert!(
            count <= cells.len(),
            "sentence asserts {count} mines over {} cells",
            cells.len()
        );
        Self { cells, count }
    }

    #[must_use]
    pub const fn cells(&self) -> &FxHashSet<Cell> {
        &self.cells
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every remaining cell must be a mine once the unresolved count equals
    /// the set size. `None` when nothing new can be concluded.
    #[must_use]
    pub fn known_mines(&self) -> Option<&FxHashSet<Cell>> {
        (self.count == self.cells.len()).then_some(&self.cells)
    }

    /// Every remaining cell is safe once the unresolved count reaches zero.
    #[must_use]
    pub fn known_safes(&self) -> Option<&FxHashSet<Cell>> {
        (self.count == 0).then_some(&self.cells)
    }

    /// Accounts for a cell resolved as a mine elsewhere: the cell leaves the
    /// set and the unresolved count drops by one. No-op if the cell is
    /// absent, so repeated marks are harmless.
    ///
    /// # Panics
    ///
    /// If the sentence asserted zero mines over a set containing `cell`.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count = self.count.checked_sub(1).unwrap_or_else(|| {
                panic!("cell {cell} marked as a mine in a sentence asserting no mines")
            });
        }
    }

    /// Accounts for a cell resolved as safe elsewhere: the cell leaves the
    /// set and the count is untouched. No-op if the cell is absent.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Whether `other` constrains a non-empty, strictly smaller subset of
    /// this sentence's cells.
    #[must_use]
    pub fn properly_contains(&self, other: &Self) -> bool {
        !other.cells.is_empty()
            && other.cells.len() < self.cells.len()
            && other.cells.is_subset(&self.cells)
    }

    /// Subset inference: with `other.cells` contained in this sentence's
    /// cells, the remaining cells hold the remaining mines.
    ///
    /// # Panics
    ///
    /// If the counts are inconsistent (the subset claims more mines than the
    /// superset).
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let cells = self.cells.difference(&other.cells).copied().collect();
        let count = self.count.checked_sub(other.count).unwrap_or_else(|| {
            panic!("inconsistent counts: cannot subtract {other} from {self}")
        });
        Self::new(cells, count)
    }

    /// Duplicate test: sentences over equal cell sets say the same thing,
    /// whatever their count history.
    #[must_use]
    pub fn same_cells(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} = {}",
            self.cells.iter().sorted().format(", "),
            self.count
        )
    }
}
