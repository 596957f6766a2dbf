#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The minesweeper player: consumes `(cell, count)` observations from the
//! environment, keeps the knowledge base closed under inference, and offers
//! moves back to the driver loop.

use crate::minesweeper::cell::Cell;
use crate::minesweeper::knowledge::Knowledge;
use crate::minesweeper::selection::{MoveSelection, RandomChoice};
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// A stateful agent for one game on a `height` x `width` board.
///
/// The selection strategy `S` breaks ties among equally acceptable moves;
/// the default draws uniformly from an entropy-seeded generator.
#[derive(Debug, Clone)]
pub struct Agent<S: MoveSelection = RandomChoice> {
    height: usize,
    width: usize,
    moves_made: FxHashSet<Cell>,
    knowledge: Knowledge,
    selector: S,
}

impl Agent<RandomChoice> {
    /// # Panics
    ///
    /// If either dimension is zero.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_selector(height, width, RandomChoice::new())
    }
}

impl<S: MoveSelection> Agent<S> {
    /// # Panics
    ///
    /// If either dimension is zero.
    #[must_use]
    pub fn with_selector(height: usize, width: usize, selector: S) -> Self {
        assert!(height > 0 && width > 0, "board dimensions must be positive");
        Self {
            height,
            width,
            moves_made: FxHashSet::default(),
            knowledge: Knowledge::new(),
            selector,
        }
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn moves_made(&self) -> &FxHashSet<Cell> {
        &self.moves_made
    }

    /// Injects an outside fact: `cell` is a mine (e.g. a flag placed by the
    /// driver).
    pub fn mark_mine(&mut self, cell: Cell) {
        self.knowledge.mark_mine(cell);
    }

    /// Injects an outside fact: `cell` is safe.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.knowledge.mark_safe(cell);
    }

    /// Incorporates one observation: `cell` was probed and `count` of its
    /// neighbours are mines.
    ///
    /// The probed cell is recorded and marked safe, then a sentence is built
    /// over the neighbours whose status is still unknown: already-safe
    /// neighbours drop out, and already-known mines drop out with a matching
    /// decrement of `count`. Afterwards the closure runs to a fixed point.
    ///
    /// # Panics
    ///
    /// If `count` is inconsistent with what is already known about the
    /// neighbourhood, or if `cell` was previously proven to be a mine.
    pub fn observe(&mut self, cell: Cell, count: usize) {
        self.moves_made.insert(cell);
        self.knowledge.mark_safe(cell);

        let mut unknown: FxHashSet<Cell> = FxHashSet::default();
        let mut remaining = count;
        for neighbour in cell.neighbours(self.height, self.width) {
            if self.knowledge.is_safe(neighbour) {
                continue;
            }
            if self.knowledge.is_mine(neighbour) {
                remaining = remaining.checked_sub(1).unwrap_or_else(|| {
                    panic!(
                        "observation at {cell} reports {count} mines, \
                         fewer than already known in its neighbourhood"
                    )
                });
                continue;
            }
            unknown.insert(neighbour);
        }

        self.knowledge.add(unknown, remaining);
        self.knowledge.infer();
    }

    /// A known-safe cell that has not been probed yet, or `None` if every
    /// proven-safe cell is already explored. Leaves the knowledge base
    /// untouched.
    pub fn safe_move(&mut self) -> Option<Cell> {
        let candidates = self
            .knowledge
            .safes()
            .iter()
            .copied()
            .filter(|cell| !self.moves_made.contains(cell))
            .sorted()
            .collect_vec();
        self.selector.pick(&candidates)
    }

    /// Any cell that is neither probed nor a known mine. `None` signals an
    /// exhausted board; deciding what that means is the caller's business.
    pub fn random_move(&mut self) -> Option<Cell> {
        let candidates = (0..self.height)
            .cartesian_product(0..self.width)
            .map(Cell::from)
            .filter(|cell| !self.moves_made.contains(cell) && !self.knowledge.is_mine(*cell))
            .collect_vec();
        self.selector.pick(&candidates)
    }
}
