#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use crate::tictactoe::game::{Grid, Player, Square};

/// The optimal action for the side to move, or `None` on a terminal grid.
///
/// X maximises the final utility and O minimises it; ties resolve to the
/// first best action in row-major order, so the result is deterministic.
#[must_use]
pub fn minimax(grid: &Grid) -> Option<Square> {
    if grid.terminal() {
        return None;
    }

    let mut best: Option<(Square, i8)> = None;
    for action in grid.actions() {
        let value = match grid.player() {
            Player::X => min_value(&grid.play(action)),
            Player::O => max_value(&grid.play(action)),
        };
        let better = match (best, grid.player()) {
            (None, _) => true,
            (Some((_, best_value)), Player::X) => value > best_value,
            (Some((_, best_value)), Player::O) => value < best_value,
        };
        if better {
            best = Some((action, value));
        }
    }
    best.map(|(action, _)| action)
}

// The sentinels sit just outside the utility range [-1, 1], matching the
// bounds any non-terminal position can reach.
fn max_value(grid: &Grid) -> i8 {
    if grid.terminal() {
        return grid.utility();
    }
    grid.actions()
        .map(|action| min_value(&grid.play(action)))
        .fold(-2, i8::max)
}

fn min_value(grid: &Grid) -> i8 {
    if grid.terminal() {
        return grid.utility();
    }
    grid.actions()
        .map(|action| max_value(&grid.play(action)))
        .fold(2, i8::min)
}
