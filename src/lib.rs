#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Game-playing AI exercises: a knowledge-based minesweeper solver and a
//! minimax tic-tac-toe player.
//!
//! The heart of the crate is the minesweeper knowledge base. The agent turns
//! every board observation into a logical sentence ("exactly `count` of
//! these cells are mines") and repeatedly combines sentences by subset
//! inference until no further conclusion can be drawn, yielding cells that
//! are provably safe and cells that are provably mines.

/// The `minesweeper` module implements the knowledge-base agent: sentences,
/// inference closure, move selection, and the board environment it plays
/// against.
pub mod minesweeper;

/// The `tictactoe` module implements a self-contained minimax player for the
/// 3x3 perfect-information game.
pub mod tictactoe;
