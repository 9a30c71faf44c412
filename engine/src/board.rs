use crate::game_state::GameState;
use crate::types::{CELL_COUNT, Constraint, Mark};

/// One legal half-move ahead of some position. `outer_cell` is the
/// cell index played inside the chosen sub-board; it doubles as the
/// forced sub-board index for the reply.
#[derive(Clone, Debug)]
pub struct Successor {
    pub state: GameState,
    pub board_index: usize,
    pub outer_cell: usize,
}

/// Enumerates every legal resulting state for `mark` under the given
/// constraint. Sub-boards and cells are visited in row-major order so
/// the ordering is stable, which makes first-seen-wins tie-breaking
/// in the search deterministic. Each successor owns an independent
/// copy of the state.
pub fn generate_successors(
    state: &GameState,
    mark: Mark,
    constraint: Constraint,
) -> Vec<Successor> {
    let mut successors = Vec::new();

    match constraint {
        Constraint::Board(index) if !state.sub_board(index).is_terminal() => {
            push_board_successors(state, mark, index, &mut successors);
        }
        _ => {
            for index in 0..CELL_COUNT {
                if state.sub_board(index).is_terminal() {
                    continue;
                }
                push_board_successors(state, mark, index, &mut successors);
            }
        }
    }

    successors
}

fn push_board_successors(
    state: &GameState,
    mark: Mark,
    board_index: usize,
    successors: &mut Vec<Successor>,
) {
    for cell in state.sub_board(board_index).empty_cell_indices() {
        let mut next = state.clone();
        next.place_marker(mark, board_index, cell);
        successors.push(Successor {
            state: next,
            board_index,
            outer_cell: cell,
        });
    }
}
