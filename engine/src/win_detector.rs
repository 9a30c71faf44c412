use crate::types::{GRID_SIZE, Mark};

pub type Cells = [[Mark; GRID_SIZE]; GRID_SIZE];

/// Scans verticals, then horizontals, then both diagonals; returns the
/// owner of the first completed line.
pub fn check_win(cells: &Cells) -> Option<Mark> {
    for col in 0..GRID_SIZE {
        if cells[0][col] != Mark::Empty
            && cells[0][col] == cells[1][col]
            && cells[1][col] == cells[2][col]
        {
            return Some(cells[0][col]);
        }
    }

    for row in 0..GRID_SIZE {
        if cells[row][0] != Mark::Empty
            && cells[row][0] == cells[row][1]
            && cells[row][1] == cells[row][2]
        {
            return Some(cells[row][0]);
        }
    }

    if cells[0][0] != Mark::Empty && cells[0][0] == cells[1][1] && cells[1][1] == cells[2][2] {
        return Some(cells[0][0]);
    }

    if cells[0][2] != Mark::Empty && cells[0][2] == cells[1][1] && cells[1][1] == cells[2][0] {
        return Some(cells[0][2]);
    }

    None
}

pub fn is_full(cells: &Cells) -> bool {
    cells
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

/// All 8 lines of a 3×3 grid as (row, col) triples: rows, columns,
/// main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];
