use crate::types::{GRID_SIZE, Mark, cell_coords};
use crate::win_detector::{Cells, LINES, check_win, is_full};

pub const META_BOARD_ID: i8 = -1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubBoard {
    pub cells: Cells,
    pub id: i8,
    pub winner: Option<Mark>,
}

impl SubBoard {
    pub fn new(id: i8) -> Self {
        Self {
            cells: [[Mark::Empty; GRID_SIZE]; GRID_SIZE],
            id,
            winner: None,
        }
    }

    /// Contract-checked placement: the target cell must be empty and
    /// the mark must be a player marker. Illegal human moves are
    /// rejected at the game-state boundary before this is reached.
    pub fn place_marker(&mut self, mark: Mark, row: usize, col: usize) {
        assert!(
            mark.is_player(),
            "Only X or O may be placed, got {:?}",
            mark
        );
        assert!(
            self.cells[row][col] == Mark::Empty,
            "Cell ({}, {}) of board {} is already occupied",
            row,
            col,
            self.id
        );
        self.cells[row][col] = mark;
    }

    pub fn cell(&self, index: usize) -> Mark {
        let (row, col) = cell_coords(index);
        self.cells[row][col]
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn empty_cell_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row][col] == Mark::Empty {
                    indices.push(row * GRID_SIZE + col);
                }
            }
        }
        indices
    }

    /// Terminal-state check. Sets `winner` on the first call that
    /// finds a completed line or a full board; idempotent afterwards.
    pub fn validate(&mut self) -> bool {
        if self.winner.is_some() {
            return true;
        }

        if let Some(mark) = check_win(&self.cells) {
            self.winner = Some(mark);
            return true;
        }

        if is_full(&self.cells) {
            self.winner = Some(Mark::Tie);
            return true;
        }

        false
    }

    /// Per-line scoring: 10/100/1000 for 1/2/3 own markers in a line
    /// holding nothing else. A line touched by the opponent (or by a
    /// tied sub-board's cell on the meta board) contributes 0.
    pub fn heuristic_score(&self, self_mark: Mark, opponent_mark: Mark) -> i64 {
        let mut score = 0i64;

        for line in &LINES {
            let mut own = 0;
            let mut blocked = false;
            for &(row, col) in line {
                let cell = self.cells[row][col];
                if cell == self_mark {
                    own += 1;
                } else if cell == opponent_mark || cell == Mark::Tie {
                    blocked = true;
                    break;
                }
            }

            if blocked {
                continue;
            }

            score += match own {
                1 => 10,
                2 => 100,
                3 => 1000,
                _ => 0,
            };
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cell_index;

    fn board_from_rows(rows: [[Mark; 3]; 3]) -> SubBoard {
        let mut board = SubBoard::new(0);
        board.cells = rows;
        board
    }

    #[test]
    fn test_validate_empty_board_is_not_terminal() {
        let mut board = SubBoard::new(0);
        assert!(!board.validate());
        assert_eq!(board.winner, None);
    }

    #[test]
    fn test_validate_top_row_win() {
        let mut board = board_from_rows([
            [Mark::X, Mark::X, Mark::X],
            [Mark::Empty, Mark::Empty, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);
        assert!(board.validate());
        assert_eq!(board.winner, Some(Mark::X));
    }

    #[test]
    fn test_validate_full_board_is_tie() {
        let mut board = board_from_rows([
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::O, Mark::X, Mark::O],
        ]);
        assert!(board.validate());
        assert_eq!(board.winner, Some(Mark::Tie));
    }

    #[test]
    fn test_validate_is_idempotent_once_terminal() {
        let mut board = board_from_rows([
            [Mark::O, Mark::Empty, Mark::Empty],
            [Mark::O, Mark::Empty, Mark::Empty],
            [Mark::O, Mark::Empty, Mark::Empty],
        ]);
        assert!(board.validate());
        assert!(board.validate());
        assert_eq!(board.winner, Some(Mark::O));
    }

    #[test]
    #[should_panic]
    fn test_place_marker_rejects_occupied_cell() {
        let mut board = SubBoard::new(3);
        board.place_marker(Mark::X, 1, 1);
        board.place_marker(Mark::O, 1, 1);
    }

    #[test]
    fn test_heuristic_single_marker_counts_line_membership() {
        // A lone marker scores 10 per line through its cell: the
        // center sits on 4 lines, a corner on 3, an edge on 2.
        let mut center = SubBoard::new(0);
        center.place_marker(Mark::X, 1, 1);
        assert_eq!(center.heuristic_score(Mark::X, Mark::O), 40);

        let mut corner = SubBoard::new(0);
        corner.place_marker(Mark::X, 0, 0);
        assert_eq!(corner.heuristic_score(Mark::X, Mark::O), 30);

        let mut edge = SubBoard::new(0);
        edge.place_marker(Mark::X, 0, 1);
        assert_eq!(edge.heuristic_score(Mark::X, Mark::O), 20);
    }

    #[test]
    fn test_heuristic_blocked_line_scores_zero() {
        let mut board = SubBoard::new(0);
        board.place_marker(Mark::X, 0, 0);
        board.place_marker(Mark::X, 0, 1);
        board.place_marker(Mark::O, 0, 2);
        // Row 0 is blocked; X keeps one open column each plus the
        // main diagonal: 10 + 10 + 10 = 30.
        assert_eq!(board.heuristic_score(Mark::X, Mark::O), 30);
    }

    #[test]
    fn test_heuristic_two_in_open_line() {
        let mut board = SubBoard::new(0);
        board.place_marker(Mark::X, 2, 0);
        board.place_marker(Mark::X, 2, 1);
        // Row 2 open with two marks (100), column 0 (10), column 1
        // (10), anti-diagonal through (2,0) (10).
        assert_eq!(board.heuristic_score(Mark::X, Mark::O), 130);
    }

    #[test]
    fn test_tie_cell_blocks_meta_line_for_both_players() {
        let mut meta = SubBoard::new(META_BOARD_ID);
        meta.cells[0][0] = Mark::X;
        meta.cells[0][1] = Mark::Tie;
        // Row 0 is dead; X still scores column 0 and the main
        // diagonal.
        assert_eq!(meta.heuristic_score(Mark::X, Mark::O), 20);
        // O owns nothing yet, so no line scores for it at all.
        assert_eq!(meta.heuristic_score(Mark::O, Mark::X), 0);
    }

    #[test]
    fn test_empty_cell_indices_row_major() {
        let mut board = SubBoard::new(0);
        board.place_marker(Mark::X, 0, 1);
        board.place_marker(Mark::O, 2, 2);
        assert_eq!(
            board.empty_cell_indices(),
            vec![
                cell_index(0, 0),
                cell_index(0, 2),
                cell_index(1, 0),
                cell_index(1, 1),
                cell_index(1, 2),
                cell_index(2, 0),
                cell_index(2, 1),
            ]
        );
    }
}
