use ultimate_ttt_engine::{Constraint, GRID_SIZE, GameState, cell_index};

/// Renders the nine sub-boards as one 9×9 grid plus the meta board.
/// Cells of the sub-board the next move is forced into are bracketed.
pub fn render(state: &GameState, constraint: Constraint) -> String {
    let mut out = String::new();

    out.push_str("    0 1 2   3 4 5   6 7 8\n");
    for outer_row in 0..GRID_SIZE {
        for inner_row in 0..GRID_SIZE {
            out.push_str(&format!("{}  ", outer_row * GRID_SIZE + inner_row));
            for outer_col in 0..GRID_SIZE {
                let board_index = cell_index(outer_row, outer_col);
                let board = state.sub_board(board_index);
                let forced = constraint == Constraint::Board(board_index);
                for inner_col in 0..GRID_SIZE {
                    let mark = board.cells[inner_row][inner_col].as_char();
                    if forced {
                        out.push_str(&format!("[{}]", mark));
                    } else {
                        out.push_str(&format!(" {} ", mark));
                    }
                }
                out.push(' ');
            }
            out.push('\n');
        }
        if outer_row + 1 < GRID_SIZE {
            out.push_str("   -------+---------+-------\n");
        }
    }

    out.push_str("\nMeta board:\n");
    for row in 0..GRID_SIZE {
        out.push_str("  ");
        for col in 0..GRID_SIZE {
            out.push(state.meta.cells[row][col].as_char());
            out.push(' ');
        }
        out.push('\n');
    }

    match constraint {
        Constraint::Board(index) => {
            out.push_str(&format!("Next move must go to sub-board {}\n", index));
        }
        Constraint::Free => {
            out.push_str("Next move may go to any open sub-board\n");
        }
    }

    out
}
