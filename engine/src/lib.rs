mod board;
mod bot_controller;
mod game_state;
pub mod logger;
mod session;
mod session_rng;
mod settings;
mod sub_board;
mod types;
mod win_detector;

pub use board::{Successor, generate_successors};
pub use bot_controller::{
    BotInput, BotMove, META_WEIGHT, WIN_SCORE, calculate_minimax_move, calculate_move,
    calculate_opening_move, evaluate,
};
pub use game_state::GameState;
pub use session::{MoveReport, SessionState};
pub use session_rng::SessionRng;
pub use settings::{
    DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH, SessionSettings,
};
pub use sub_board::{META_BOARD_ID, SubBoard};
pub use types::{
    CELL_COUNT, Constraint, FirstPlayerMode, GRID_SIZE, Mark, MatchPhase, Turn, cell_coords,
    cell_index,
};
pub use win_detector::{Cells, check_win, is_full};
