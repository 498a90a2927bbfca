//! Text rendering of boards and attack outcomes, and coordinate parsing.

use std::fmt::Write;

use crate::{
    board::Board,
    common::{AttackResult, CellState, Position},
    config::BOARD_SIZE,
};

pub const LEGEND: &str = "Legend: . = water, S = ship, X = hit, o = miss, # = sunk";

/// Parse a coordinate such as `A5` or `j10` into a position.
///
/// The letter selects the column and the number (1-based) the row. Returns
/// `None` for anything malformed or off the board.
pub fn parse_coord(input: &str) -> Option<Position> {
    let input = input.trim();
    if !(2..=3).contains(&input.len()) || !input.is_ascii() {
        return None;
    }
    let (col_str, row_str) = input.split_at(1);
    let col_ch = col_str.chars().next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return None;
    }
    if !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE {
        return None;
    }
    Some(Position::new(row - 1, col))
}

/// Format a position the way players type it, e.g. `A5`.
pub fn format_position(pos: Position) -> String {
    let col = (b'A' + pos.col as u8) as char;
    format!("{}{}", col, pos.row + 1)
}

/// Symbol shown for a cell; ships are drawn as water when `hide_ships` is set.
pub fn cell_symbol(state: CellState, hide_ships: bool) -> char {
    match state {
        CellState::Water => '.',
        CellState::ShipPresent if hide_ships => '.',
        CellState::ShipPresent => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Sunk => '#',
    }
}

/// Render a board as a header of column letters followed by numbered rows.
pub fn render_board(board: &Board, hide_ships: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        out.push((b'A' + c as u8) as char);
        out.push(' ');
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let state = board.cell(Position::new(r, c)).unwrap_or(CellState::Water);
            out.push(cell_symbol(state, hide_ships));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Render the tracking board above the player's own fleet.
pub fn render_boards(tracking: &Board, own: &Board) -> String {
    format!(
        "\nYour Target Board (what you know about the enemy):\n{}\nYour Fleet Board:\n{}{}\n",
        render_board(tracking, true),
        render_board(own, false),
        LEGEND,
    )
}

/// One-line report of an attack against `defender`.
pub fn report(defender: &str, result: AttackResult) -> String {
    match result {
        AttackResult::Hit => format!("Hit on {}'s ship!", defender),
        AttackResult::Sunk => format!("{} lost a ship!", defender),
        AttackResult::Miss => "Miss.".to_string(),
        AttackResult::AlreadyTried => "Location already tried.".to_string(),
        AttackResult::Win => "Ship sunk. Fleet destroyed!".to_string(),
    }
}
