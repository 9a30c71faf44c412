use crate::sub_board::{META_BOARD_ID, SubBoard};
use crate::types::{CELL_COUNT, Constraint, GRID_SIZE, Mark, cell_coords};

#[derive(Clone, Debug)]
pub struct GameState {
    pub sub_boards: [[SubBoard; GRID_SIZE]; GRID_SIZE],
    pub meta: SubBoard,
    pub winner: Option<Mark>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let sub_boards = std::array::from_fn(|row| {
            std::array::from_fn(|col| SubBoard::new((row * GRID_SIZE + col) as i8))
        });

        Self {
            sub_boards,
            meta: SubBoard::new(META_BOARD_ID),
            winner: None,
        }
    }

    pub fn sub_board(&self, index: usize) -> &SubBoard {
        let (row, col) = cell_coords(index);
        &self.sub_boards[row][col]
    }

    pub fn sub_board_mut(&mut self, index: usize) -> &mut SubBoard {
        let (row, col) = cell_coords(index);
        &mut self.sub_boards[row][col]
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Places a marker and refreshes the terminal status of the
    /// touched sub-board, the meta board and the outer winner.
    /// Legality against the forced-board constraint is checked by
    /// callers via `check_move`; placement itself only enforces the
    /// empty-cell contract.
    pub fn place_marker(&mut self, mark: Mark, board_index: usize, cell_index: usize) {
        let (row, col) = cell_coords(cell_index);
        self.sub_board_mut(board_index).place_marker(mark, row, col);
        self.refresh_outcome(board_index);
    }

    fn refresh_outcome(&mut self, board_index: usize) {
        let board = self.sub_board_mut(board_index);
        if !board.validate() {
            return;
        }

        let outcome = board.winner.unwrap();
        let (row, col) = cell_coords(board_index);
        if self.meta.cells[row][col] == Mark::Empty {
            self.meta.cells[row][col] = outcome;
        }

        // A full meta board with no line validates as a tie, which
        // covers the case of all nine sub-boards settling undecided.
        if self.meta.validate() {
            self.winner = self.meta.winner;
        }
    }

    /// The constraint the reply move plays under, derived from the
    /// cell index just played: the matching sub-board, unless it is
    /// already terminal.
    pub fn constraint_for_reply(&self, cell_index: usize) -> Constraint {
        if self.sub_board(cell_index).is_terminal() {
            Constraint::Free
        } else {
            Constraint::Board(cell_index)
        }
    }

    /// Boundary validation for externally supplied moves. Never
    /// mutates; violations are reported back for re-prompting.
    pub fn check_move(
        &self,
        constraint: Constraint,
        board_index: usize,
        cell_index: usize,
    ) -> Result<(), String> {
        if board_index >= CELL_COUNT || cell_index >= CELL_COUNT {
            return Err(format!(
                "Move ({}, {}) is out of range, indices go from 0 to 8",
                board_index, cell_index
            ));
        }

        if let Constraint::Board(forced) = constraint {
            if board_index != forced {
                return Err(format!(
                    "You must play in sub-board {}, not {}",
                    forced, board_index
                ));
            }
        }

        let board = self.sub_board(board_index);
        if board.is_terminal() {
            return Err(format!("Sub-board {} is already decided", board_index));
        }

        if board.cell(cell_index) != Mark::Empty {
            return Err(format!(
                "Cell {} of sub-board {} is already occupied",
                cell_index, board_index
            ));
        }

        Ok(())
    }

    pub fn placed_marker_count(&self) -> usize {
        self.sub_boards
            .iter()
            .flatten()
            .flat_map(|board| board.cells.iter().flatten())
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_marker_count() == 0
    }
}
