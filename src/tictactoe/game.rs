#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

/// The two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

/// A square on the grid, as `(row, col)`.
pub type Square = (usize, usize);

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[Square; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The 3x3 board; `None` squares are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid([[Option<Player>; 3]; 3]);

impl Grid {
    /// The empty starting grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([[None; 3]; 3])
    }

    #[must_use]
    pub const fn get(&self, square: Square) -> Option<Player> {
        self.0[square.0][square.1]
    }

    /// The player to move: X unless X has played more squares than O.
    #[must_use]
    pub fn player(&self) -> Player {
        let xs = self.squares_of(Player::X);
        let os = self.squares_of(Player::O);
        if xs > os { Player::O } else { Player::X }
    }

    fn squares_of(&self, player: Player) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|&&square| square == Some(player))
            .count()
    }

    /// The empty squares, in row-major order.
    pub fn actions(&self) -> impl Iterator<Item = Square> {
        self.0.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter_map(move |(col, square)| square.is_none().then_some((row, col)))
        })
    }

    /// The successor grid after the side to move plays `square`.
    ///
    /// # Panics
    ///
    /// If `square` is already occupied or out of bounds.
    #[must_use]
    pub fn play(&self, square: Square) -> Self {
        assert!(
            self.get(square).is_none(),
            "square ({}, {}) is already occupied",
            square.0,
            square.1
        );
        let mut next = *self;
        next.0[square.0][square.1] = Some(self.player());
        next
    }

    /// The winning player, if either has completed a line.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let first = self.get(line[0])?;
            line[1..]
                .iter()
                .all(|&square| self.get(square) == Some(first))
                .then_some(first)
        })
    }

    /// The game is over once somebody wins or the grid fills up.
    #[must_use]
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.0.iter().flatten().all(Option::is_some)
    }

    /// +1 if X has won, -1 if O has won, 0 otherwise.
    #[must_use]
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl From<[[Option<Player>; 3]; 3]> for Grid {
    fn from(squares: [[Option<Player>; 3]; 3]) -> Self {
        Self(squares)
    }
}
