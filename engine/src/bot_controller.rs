use crate::board::{Successor, generate_successors};
use crate::game_state::GameState;
use crate::session_rng::SessionRng;
use crate::types::{CELL_COUNT, Constraint, Mark};

/// Sentinel for an outer game the bot has already won. Every
/// reachable heuristic sum is far below it.
pub const WIN_SCORE: i64 = i64::MAX;

/// Progress on the meta board is worth double a sub-board's local
/// progress.
pub const META_WEIGHT: i64 = 2;

pub struct BotInput<'a> {
    pub state: &'a GameState,
    pub constraint: Constraint,
    pub bot_mark: Mark,
    pub search_depth: u8,
}

/// A chosen half-move: the resulting state plus the cell index that
/// constrains the opponent's reply.
#[derive(Clone, Debug)]
pub struct BotMove {
    pub state: GameState,
    pub board_index: usize,
    pub outer_cell: usize,
    pub score: i64,
}

/// Scores a position from the bot's point of view: sum of the nine
/// sub-board heuristics plus the double-weighted meta-board
/// heuristic. A game the bot has already won short-circuits to
/// `WIN_SCORE`.
pub fn evaluate(state: &GameState, self_mark: Mark, opponent_mark: Mark) -> i64 {
    if state.winner == Some(self_mark) {
        return WIN_SCORE;
    }

    let mut score = 0i64;
    for index in 0..CELL_COUNT {
        score += state
            .sub_board(index)
            .heuristic_score(self_mark, opponent_mark);
    }
    score + META_WEIGHT * state.meta.heuristic_score(self_mark, opponent_mark)
}

/// Picks the bot's move. The very first move of a game carries no
/// heuristic signal, so it is chosen uniformly at random; every later
/// move runs the depth-limited search.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<BotMove> {
    if input.state.is_empty() {
        return Some(calculate_opening_move(input.state, input.bot_mark, rng));
    }
    calculate_minimax_move(input)
}

/// Uniformly random opening: random sub-board, random cell within it.
pub fn calculate_opening_move(state: &GameState, mark: Mark, rng: &mut SessionRng) -> BotMove {
    let board_index = rng.random_range(0..CELL_COUNT);
    let cell = rng.random_range(0..CELL_COUNT);

    let mut next = state.clone();
    next.place_marker(mark, board_index, cell);
    let score = evaluate(&next, mark, mark.opponent().unwrap());

    BotMove {
        state: next,
        board_index,
        outer_cell: cell,
        score,
    }
}

/// Root of the search: expand the bot's moves under the current
/// constraint, run `minimize` on each at the configured depth, keep
/// the best. On equal scores the first successor in row-major order
/// wins, so move choice is deterministic.
pub fn calculate_minimax_move(input: &BotInput) -> Option<BotMove> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent().unwrap();

    let successors = generate_successors(input.state, bot_mark, input.constraint);

    let mut best: Option<BotMove> = None;
    for successor in successors {
        let reply = reply_constraint(&successor);
        let score = minimize(
            &successor.state,
            reply,
            input.search_depth,
            bot_mark,
            opponent_mark,
        );

        if best.as_ref().is_none_or(|current| score > current.score) {
            best = Some(BotMove {
                state: successor.state,
                board_index: successor.board_index,
                outer_cell: successor.outer_cell,
                score,
            });
        }
    }

    best
}

fn reply_constraint(successor: &Successor) -> Constraint {
    successor.state.constraint_for_reply(successor.outer_cell)
}

fn maximize(
    state: &GameState,
    constraint: Constraint,
    depth: u8,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i64 {
    let score = evaluate(state, bot_mark, opponent_mark);
    if score == WIN_SCORE || depth == 0 {
        return score;
    }

    let successors = generate_successors(state, bot_mark, constraint);
    if successors.is_empty() {
        return score;
    }

    let mut best = i64::MIN;
    for successor in &successors {
        let value = minimize(
            &successor.state,
            reply_constraint(successor),
            depth - 1,
            bot_mark,
            opponent_mark,
        );
        best = best.max(value);
    }
    best
}

fn minimize(
    state: &GameState,
    constraint: Constraint,
    depth: u8,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i64 {
    let score = evaluate(state, bot_mark, opponent_mark);
    if score == WIN_SCORE || depth == 0 {
        return score;
    }

    let successors = generate_successors(state, opponent_mark, constraint);
    if successors.is_empty() {
        return score;
    }

    let mut worst = i64::MAX;
    for successor in &successors {
        let value = maximize(
            &successor.state,
            reply_constraint(successor),
            depth - 1,
            bot_mark,
            opponent_mark,
        );
        worst = worst.min(value);
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win_board(state: &mut GameState, board_index: usize, mark: Mark) {
        state.place_marker(mark, board_index, 0);
        state.place_marker(mark, board_index, 1);
        state.place_marker(mark, board_index, 2);
    }

    #[test]
    fn test_evaluate_won_game_is_sentinel() {
        let mut state = GameState::new();
        win_board(&mut state, 0, Mark::X);
        win_board(&mut state, 4, Mark::X);
        win_board(&mut state, 8, Mark::X);
        assert_eq!(state.winner, Some(Mark::X));

        assert_eq!(evaluate(&state, Mark::X, Mark::O), WIN_SCORE);
        assert_ne!(evaluate(&state, Mark::O, Mark::X), WIN_SCORE);
    }

    #[test]
    fn test_evaluate_weights_meta_double() {
        let mut state = GameState::new();
        win_board(&mut state, 0, Mark::X);

        let mut boards = 0i64;
        for index in 0..CELL_COUNT {
            boards += state.sub_board(index).heuristic_score(Mark::X, Mark::O);
        }
        let meta = state.meta.heuristic_score(Mark::X, Mark::O);
        assert!(meta > 0);
        assert_eq!(evaluate(&state, Mark::X, Mark::O), boards + 2 * meta);
    }

    #[test]
    fn test_opening_move_places_single_marker() {
        let state = GameState::new();
        let mut rng = SessionRng::new(7);
        let chosen = calculate_opening_move(&state, Mark::X, &mut rng);

        assert_eq!(chosen.state.placed_marker_count(), 1);
        assert_eq!(
            chosen.state.sub_board(chosen.board_index).cell(chosen.outer_cell),
            Mark::X
        );
    }

    #[test]
    fn test_calculate_move_uses_random_opening_on_empty_board() {
        let state = GameState::new();
        let mut rng_a = SessionRng::new(123);
        let mut rng_b = SessionRng::new(123);

        let input = BotInput {
            state: &state,
            constraint: Constraint::Free,
            bot_mark: Mark::O,
            search_depth: 2,
        };
        let a = calculate_move(&input, &mut rng_a).unwrap();
        let b = calculate_move(&input, &mut rng_b).unwrap();

        assert_eq!(a.board_index, b.board_index);
        assert_eq!(a.outer_cell, b.outer_cell);
        assert_eq!(a.state.placed_marker_count(), 1);
    }

    #[test]
    fn test_depth_one_search_takes_the_winning_line() {
        // X already owns meta cells 0 and 1; sub-board 2 has two X in
        // its top row. Completing that row wins board 2 and with it
        // the meta top row, so the search must pick cell 2 there.
        let mut state = GameState::new();
        win_board(&mut state, 0, Mark::X);
        win_board(&mut state, 1, Mark::X);
        state.place_marker(Mark::X, 2, 0);
        state.place_marker(Mark::X, 2, 1);
        state.place_marker(Mark::O, 4, 4);
        state.place_marker(Mark::O, 5, 4);

        let input = BotInput {
            state: &state,
            constraint: Constraint::Board(2),
            bot_mark: Mark::X,
            search_depth: 1,
        };
        let chosen = calculate_minimax_move(&input).unwrap();

        assert_eq!(chosen.board_index, 2);
        assert_eq!(chosen.outer_cell, 2);
        assert_eq!(chosen.score, WIN_SCORE);
        assert_eq!(chosen.state.winner, Some(Mark::X));
    }

    #[test]
    fn test_search_is_deterministic_on_ties() {
        let mut state = GameState::new();
        state.place_marker(Mark::O, 4, 4);

        let input = BotInput {
            state: &state,
            constraint: Constraint::Board(4),
            bot_mark: Mark::X,
            search_depth: 2,
        };
        let first = calculate_minimax_move(&input).unwrap();
        let second = calculate_minimax_move(&input).unwrap();

        assert_eq!(first.board_index, second.board_index);
        assert_eq!(first.outer_cell, second.outer_cell);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn test_search_stops_expanding_after_a_win() {
        // With the game already won for the bot the root successors
        // all evaluate to the sentinel immediately.
        let mut state = GameState::new();
        win_board(&mut state, 0, Mark::O);
        win_board(&mut state, 3, Mark::O);
        win_board(&mut state, 6, Mark::O);
        assert_eq!(state.winner, Some(Mark::O));

        assert_eq!(
            minimize(&state, Constraint::Free, 4, Mark::O, Mark::X),
            WIN_SCORE
        );
    }
}
