//! Text rendering for the console.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use turnwise_tictactoe::{Board, Cell, Player, Position};

/// Draws the board as the classic three-by-three ASCII grid.
pub fn render_board(board: &Board) -> String {
    let symbol = |pos: Position| match board.get(pos) {
        Cell::Empty => ' ',
        Cell::Marked(m) => m.symbol(),
    };
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            format!(
                "     |     |\n  {}  |  {}  |  {}\n     |     |\n",
                symbol(row[0]),
                symbol(row[1]),
                symbol(row[2])
            )
        })
        .collect();
    rows.join("-----+-----+-----\n")
}

/// One-line reminder of who holds which marker.
pub fn render_markers(human: &Player, computer: &Player) -> String {
    format!(
        "{} is an {}. {} is an {}.",
        human.name(),
        human.marker(),
        computer.name(),
        computer.marker()
    )
}

/// Joins position ids for a prompt: `1`, `1 or 2`, `1, 2, or 3`.
pub fn joinor(positions: &[Position]) -> String {
    let ids: Vec<String> = positions.iter().map(|p| p.id().to_string()).collect();
    match ids.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

/// Clears the terminal and homes the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}
