#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::minesweeper::cell::Cell;
use rustc_hash::FxHashSet;

/// The game environment: board bounds plus a fixed mine layout.
///
/// The layout is always supplied by the caller; this crate never places
/// mines itself. The board answers the two queries a driver loop needs,
/// `is_mine` and `nearby_mines`, while the agent only ever sees the
/// `(cell, count)` pairs derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    mines: FxHashSet<Cell>,
}

impl Board {
    /// # Panics
    ///
    /// If either dimension is zero or a mine lies outside the board.
    #[must_use]
    pub fn new(height: usize, width: usize, mines: impl IntoIterator<Item = Cell>) -> Self {
        assert!(height > 0 && width > 0, "board dimensions must be positive");
        let mines: FxHashSet<Cell> = mines.into_iter().collect();
        for mine in &mines {
            assert!(
                mine.row < height && mine.col < width,
                "mine {mine} is out of bounds"
            );
        }
        Self {
            height,
            width,
            mines,
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
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    #[must_use]
    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Mines among the in-bounds neighbours of `cell`, the cell itself
    /// excluded.
    #[must_use]
    pub fn nearby_mines(&self, cell: Cell) -> usize {
        cell.neighbours(self.height, self.width)
            .filter(|neighbour| self.is_mine(*neighbour))
            .count()
    }

    /// All board cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }

    /// Whether `flagged` identifies exactly the mines.
    #[must_use]
    pub fn won(&self, flagged: &FxHashSet<Cell>) -> bool {
        *flagged == self.mines
    }
}

impl From<Vec<Vec<bool>>> for Board {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "ragged mine mask"
        );
        let mines = rows.into_iter().enumerate().flat_map(|(row, mask)| {
            mask.into_iter()
                .enumerate()
                .filter_map(move |(col, is_mine)| is_mine.then_some(Cell::new(row, col)))
        });
        Self::new(height, width, mines)
    }
}
