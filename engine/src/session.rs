use crate::bot_controller::{BotInput, calculate_move};
use crate::game_state::GameState;
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::SessionSettings;
use crate::types::{Constraint, FirstPlayerMode, Mark, MatchPhase, Turn};

/// What a half-move did: where it landed and the constraint it puts
/// on the reply.
#[derive(Clone, Copy, Debug)]
pub struct MoveReport {
    pub board_index: usize,
    pub cell_index: usize,
    pub reply_constraint: Constraint,
    pub phase: MatchPhase,
}

/// One human-vs-bot match. Owns its `GameState` outright; nothing is
/// shared across sessions.
pub struct SessionState {
    settings: SessionSettings,
    game_state: GameState,
    rng: SessionRng,
    bot_mark: Mark,
    human_mark: Mark,
    phase: MatchPhase,
    turn: Turn,
    constraint: Constraint,
}

impl SessionState {
    pub fn create(settings: SessionSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;

        Ok(Self {
            settings,
            game_state: GameState::new(),
            rng,
            bot_mark: Mark::O,
            human_mark: Mark::X,
            phase: MatchPhase::NotStarted,
            turn: Turn::Human,
            constraint: Constraint::Free,
        })
    }

    /// Assigns markers (X always opens) and enters `InProgress`.
    pub fn start(&mut self) -> Turn {
        assert!(
            self.phase == MatchPhase::NotStarted,
            "Session already started"
        );

        let bot_plays_x = match self.settings.first_player {
            FirstPlayerMode::Random => self.rng.random_bool(),
            FirstPlayerMode::Human => false,
            FirstPlayerMode::Bot => true,
        };

        if bot_plays_x {
            self.bot_mark = Mark::X;
            self.human_mark = Mark::O;
            self.turn = Turn::Bot;
        } else {
            self.bot_mark = Mark::O;
            self.human_mark = Mark::X;
            self.turn = Turn::Human;
        }

        self.phase = MatchPhase::InProgress;
        log!(
            "Match started (seed {}, depth {}, bot plays {})",
            self.rng.seed(),
            self.settings.search_depth,
            self.bot_mark.as_char()
        );
        self.turn
    }

    pub fn apply_human_move(
        &mut self,
        board_index: usize,
        cell_index: usize,
    ) -> Result<MoveReport, String> {
        if self.phase != MatchPhase::InProgress {
            return Err("No match in progress".to_string());
        }
        if self.turn != Turn::Human {
            return Err("Not your turn".to_string());
        }

        self.game_state
            .check_move(self.constraint, board_index, cell_index)?;

        self.game_state
            .place_marker(self.human_mark, board_index, cell_index);
        Ok(self.finish_half_move(board_index, cell_index, Turn::Bot))
    }

    /// Computes the bot's move via the search (or the random opening)
    /// and applies it to the live state.
    pub fn play_bot_turn(&mut self) -> Result<MoveReport, String> {
        if self.phase != MatchPhase::InProgress {
            return Err("No match in progress".to_string());
        }
        if self.turn != Turn::Bot {
            return Err("It is the human player's turn".to_string());
        }

        let input = BotInput {
            state: &self.game_state,
            constraint: self.constraint,
            bot_mark: self.bot_mark,
            search_depth: self.settings.search_depth,
        };
        let chosen = match calculate_move(&input, &mut self.rng) {
            Some(chosen) => chosen,
            // The session never reaches the bot's turn with every
            // sub-board terminal, so an empty successor set is a
            // broken invariant rather than a runtime condition.
            None => panic!("Search found no legal successor in a live game"),
        };

        log!(
            "Bot plays cell {} of sub-board {} (score {})",
            chosen.outer_cell,
            chosen.board_index,
            chosen.score
        );

        self.game_state = chosen.state;
        Ok(self.finish_half_move(chosen.board_index, chosen.outer_cell, Turn::Human))
    }

    fn finish_half_move(
        &mut self,
        board_index: usize,
        cell_index: usize,
        next_turn: Turn,
    ) -> MoveReport {
        self.constraint = self.game_state.constraint_for_reply(cell_index);
        self.turn = next_turn;

        if self.game_state.is_terminal() {
            self.phase = MatchPhase::Finished;
            log!(
                "Match finished, result: {}",
                self.game_state.winner.map(|w| w.as_char()).unwrap_or('?')
            );
        }

        MoveReport {
            board_index,
            cell_index,
            reply_constraint: self.constraint,
            phase: self.phase,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    pub fn winner(&self) -> Option<Mark> {
        self.game_state.winner
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }
}
