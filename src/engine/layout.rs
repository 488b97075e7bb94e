//! Display-grid helpers for the 4x4 board: the cell structure a renderer
//! walks row by row, and a self-check over the positions stamped on the
//! groups. Purely descriptive; nothing here affects play.

use serde::{Deserialize, Serialize};

use crate::game::{OracleGame, CENTER_GROUP};

pub const BOARD_ROWS: u8 = 4;
pub const BOARD_COLS: u8 = 4;
pub const CENTER_SPAN: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoardCell {
    /// Anchor cell of a group; the renderer draws the group here and, for
    /// the center group, lets it span 2x2.
    Group {
        row: u8,
        col: u8,
        group_no: u8,
        is_center: bool,
    },
    /// Covered by the center group's span; nothing separate to draw.
    CenterOverflow { row: u8, col: u8 },
    /// No group claims this cell (an undealt table).
    Empty { row: u8, col: u8 },
}

/// The 16 cells of the board in row-major order.
pub fn board_cells(game: &OracleGame) -> Vec<BoardCell> {
    let mut cells = Vec::with_capacity(usize::from(BOARD_ROWS * BOARD_COLS));
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            cells.push(match group_at(game, row, col) {
                Some(group_no) => BoardCell::Group {
                    row,
                    col,
                    group_no,
                    is_center: group_no == CENTER_GROUP,
                },
                None if is_center_cell(game, row, col) => BoardCell::CenterOverflow { row, col },
                None => BoardCell::Empty { row, col },
            });
        }
    }
    cells
}

/// Group anchored at exactly this cell, if any.
pub fn group_at(game: &OracleGame, row: u8, col: u8) -> Option<u8> {
    game.groups()
        .find(|(_, group)| {
            let pos = group.position();
            pos.row == row && pos.col == col
        })
        .map(|(group_no, _)| group_no)
}

/// Whether the cell falls anywhere inside the center group's span.
pub fn is_center_cell(game: &OracleGame, row: u8, col: u8) -> bool {
    let Some(center) = game.group(CENTER_GROUP) else {
        return false;
    };
    let pos = center.position();
    (pos.row..pos.row + pos.span).contains(&row) && (pos.col..pos.col + pos.span).contains(&col)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks the positions the groups actually carry: every claimed cell in
/// bounds, the center spanning 2x2, and no cell claimed twice (the center
/// claims all four cells of its span).
pub fn validate_layout(game: &OracleGame) -> LayoutValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut claimed: Vec<(u8, u8)> = Vec::new();

    for (group_no, group) in game.groups() {
        let pos = group.position();
        if pos.row + pos.span > BOARD_ROWS || pos.col + pos.span > BOARD_COLS {
            errors.push(format!(
                "group {} spills off the board at ({}, {})",
                group_no, pos.row, pos.col
            ));
            continue;
        }

        for row in pos.row..pos.row + pos.span {
            for col in pos.col..pos.col + pos.span {
                if claimed.contains(&(row, col)) {
                    errors.push(format!(
                        "group {} overlaps an already claimed cell ({}, {})",
                        group_no, row, col
                    ));
                } else {
                    claimed.push((row, col));
                }
            }
        }

        if group_no == CENTER_GROUP && pos.span != CENTER_SPAN {
            warnings.push("the center group does not span its 2x2 area".to_string());
        }
    }

    LayoutValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
