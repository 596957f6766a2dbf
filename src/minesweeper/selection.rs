#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::minesweeper::cell::Cell;

/// Tie-breaking strategy over equally acceptable candidate moves.
///
/// Candidates are handed over in sorted order, so a seeded strategy replays
/// identically from one run to the next.
pub trait MoveSelection {
    fn pick(&mut self, candidates: &[Cell]) -> Option<Cell>;
}

/// Uniform choice backed by a seedable generator.
#[derive(Debug, Clone, Default)]
pub struct RandomChoice(fastrand::Rng);

impl RandomChoice {
    #[must_use]
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    /// A reproducible strategy for tests and replays.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl MoveSelection for RandomChoice {
    fn pick(&mut self, candidates: &[Cell]) -> Option<Cell> {
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[self.0.usize(..candidates.len())])
        }
    }
}

/// Always the lowest candidate in sort order. Fully deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidate;

impl MoveSelection for FirstCandidate {
    fn pick(&mut self, candidates: &[Cell]) -> Option<Cell> {
        candidates.first().copied()
    }
}
