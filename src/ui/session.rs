//! Game session management for the desktop front-end

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::{AppConfig, EngineConfig, GameConfig, Seat};
use crate::engine::{Engine, MoveResult};
use crate::rules::winning_line;
use crate::{GameError, GameState, Player, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    /// Searching for the engine's own move
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
    /// Searching for a hint for the side to move
    Hinting { receiver: Receiver<MoveResult> },
}

/// One game in progress plus everything the UI shows about it.
pub struct Session {
    pub state: GameState,
    pub seat: Seat,
    /// Earlier states, oldest first, for undo
    pub history: Vec<GameState>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    pub ai_thinking_time: Option<Duration>,

    initial: GameState,
    game: GameConfig,
    engine: EngineConfig,
}

impl Session {
    pub fn new(config: &AppConfig) -> Result<Self, GameError> {
        let initial = GameState::new(config.game.size, config.game.win_length)?;
        Ok(Self {
            state: initial.clone(),
            seat: config.ui.seat,
            history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            ai_thinking_time: None,
            initial,
            game: config.game,
            engine: config.engine,
        })
    }

    /// Start over with the same board shape, optionally switching seats.
    pub fn reset(&mut self, seat: Seat) {
        self.state = self.initial.clone();
        self.seat = seat;
        self.history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        self.message = None;
        self.ai_thinking_time = None;
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.seat {
            Seat::HumanX => self.state.current_player() == Player::X,
            Seat::HumanO => self.state.current_player() == Player::O,
            Seat::Hotseat => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking about its own move
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_hinting(&self) -> bool {
        matches!(self.ai_state, AiState::Hinting { .. })
    }

    /// Any search running on the worker thread
    pub fn is_engine_busy(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    /// Cells of the completed line, once someone has won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        winning_line(&self.state)
    }

    /// Attempt a human move at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.execute_move(pos).map_err(|err| err.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let next = self.state.make_move(pos)?;
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(previous);
        self.cancel_hint();
        self.suggested_move = None;
        self.message = None;
        Ok(())
    }

    /// Drop a pending hint; its worker finishes and its send fails quietly.
    fn cancel_hint(&mut self) {
        if self.is_hinting() {
            self.ai_state = AiState::Idle;
        }
    }

    /// Search the current position on a worker thread
    fn spawn_search(&self) -> Receiver<MoveResult> {
        let state = self.state.clone();
        let engine_config = self.engine;
        let game = self.game;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = Engine::from_config(&engine_config, &game);
            let result = engine.get_move_with_stats(&state);
            // The receiver is gone if the game moved on meanwhile
            let _ = tx.send(result);
        });

        rx
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_engine_busy() {
            return;
        }

        self.ai_state = AiState::Thinking {
            receiver: self.spawn_search(),
            start_time: Instant::now(),
        };
    }

    /// Collect a finished search, if any
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Idle => return,
            AiState::Thinking { receiver, .. } | AiState::Hinting { receiver } => {
                receiver.try_recv()
            }
        };

        let result = match received {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.ai_state = AiState::Idle;
                self.message = Some("AI error".to_string());
                return;
            }
        };

        let finished = std::mem::replace(&mut self.ai_state, AiState::Idle);
        let best = result.best_move;
        self.last_ai_result = Some(result);

        match finished {
            AiState::Thinking { start_time, .. } => {
                self.ai_thinking_time = Some(start_time.elapsed());
                match best {
                    Some(pos) => {
                        if let Err(err) = self.execute_move(pos) {
                            warn!(%err, "engine produced an unplayable move");
                            self.message = Some(err.to_string());
                        }
                    }
                    None => self.message = Some("AI could not find a move".to_string()),
                }
            }
            AiState::Hinting { .. } => {
                debug!(hint = ?best, "suggestion computed");
                self.suggested_move = best;
            }
            AiState::Idle => {}
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            _ => None,
        }
    }

    /// Compute a hint for the side to move on a worker thread (hot-seat mode)
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_engine_busy() {
            return;
        }

        self.ai_state = AiState::Hinting {
            receiver: self.spawn_search(),
        };
    }

    /// Undo the last move, or the last human+AI pair against the engine
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() {
            return;
        }
        self.cancel_hint();

        let undo_count = match self.seat {
            Seat::Hotseat => 1,
            _ if self.is_human_turn() && self.history.len() >= 2 => 2,
            _ => 1,
        };

        for _ in 0..undo_count {
            if let Some(previous) = self.history.pop() {
                self.state = previous;
            }
        }
        self.suggested_move = None;
        self.message = None;
    }
}
