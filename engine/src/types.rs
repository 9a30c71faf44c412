use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
    /// Appears only in meta-board cells and `winner` fields, never as
    /// a placed marker inside a sub-board.
    Tie,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty | Mark::Tie => None,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Mark::X | Mark::O)
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Tie => 'T',
        }
    }
}

/// Which sub-board the next move must land in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Free,
    Board(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Random,
    Human,
    Bot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Human,
    Bot,
}

pub fn cell_index(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

pub fn cell_coords(index: usize) -> (usize, usize) {
    (index / GRID_SIZE, index % GRID_SIZE)
}
