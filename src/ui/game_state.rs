//! Game state management for the Ultimate Tic-Tac-Toe GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Coord, Move, Player};
use crate::rules::winning_line;
use crate::{AIEngine, EngineConfig, Game, GameConfig, MoveResult, Outcome, PlayerKind};

/// Minimum time a random player "thinks" so its moves can be followed
const RANDOM_MOVE_DELAY: Duration = Duration::from_millis(300);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<crate::Result<MoveResult>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub config: GameConfig,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(),
            config,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Start over, keeping the configuration
    pub fn reset(&mut self) {
        let config = self.config;
        let rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(0));
        *self = Self::new(config);
        self.rng = rng;
    }

    /// Replace the configuration and start a new game
    pub fn restart_with(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    pub fn kind_of(&self, player: Player) -> PlayerKind {
        match player {
            Player::O => self.config.player_o,
            Player::X => self.config.player_x,
        }
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.game.to_move()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.is_game_over() && self.kind_of(self.current_turn()).is_human()
    }

    /// Check if the side to move is played by the computer
    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && !self.kind_of(self.current_turn()).is_human()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Meta-board line that decided the game
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        match self.game.outcome() {
            Some(Outcome::Winner(_)) => winning_line(self.game.board().meta()),
            _ => None,
        }
    }

    /// Attempt to play a human move
    pub fn try_place(&mut self, mv: Move) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(mv).map_err(|e| e.to_string())
    }

    /// Execute a move (for every kind of player)
    fn execute_move(&mut self, mv: Move) -> crate::Result<()> {
        self.game.play(mv)?;

        self.suggested_move = None;
        self.move_timer.stop();
        self.message = None;

        if !self.is_game_over() {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Advance a computer-controlled turn.
    ///
    /// Minimax searches in a background thread; a random player moves once
    /// [`RANDOM_MOVE_DELAY`] has passed.
    pub fn step_computer(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        match self.kind_of(self.current_turn()) {
            PlayerKind::Minimax => self.start_ai_thinking(),
            PlayerKind::Random => {
                if self.move_timer.elapsed() >= RANDOM_MOVE_DELAY {
                    self.play_random_now();
                }
            }
            PlayerKind::Human => {}
        }
    }

    fn play_random_now(&mut self) {
        let player = self.current_turn();
        let mv = match crate::random_move(self.game.board(), &mut self.rng) {
            Some(mv) => mv,
            None => {
                self.message = Some("No legal move left".to_string());
                return;
            }
        };
        debug!("random player {} picks {}", player, mv);
        if let Err(e) = self.execute_move(mv) {
            self.message = Some(e.to_string());
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.game.board().clone();
        let player = self.current_turn();
        let config = self.config.engine;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let _ = tx.send(engine.suggest(&board, player));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = result else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);

        match result {
            Ok(move_result) => {
                let mv = move_result.best_move;
                self.last_ai_result = Some(move_result);
                if let Err(e) = self.execute_move(mv) {
                    warn!("engine move {} rejected: {}", mv, e);
                    self.message = Some(e.to_string());
                }
            }
            Err(e) => {
                warn!("search failed: {}", e);
                self.message = Some(format!("AI could not find a move: {e}"));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Show the engine's choice for the side to move without playing it
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::with_config(self.hint_config());
        match engine.suggest(self.game.board(), self.current_turn()) {
            Ok(result) => {
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Hints run on the UI thread, so they stay shallow
    fn hint_config(&self) -> EngineConfig {
        let depth = self.config.engine.max_depth().min(4);
        EngineConfig::new(depth).unwrap_or_default()
    }

    /// Undo the last move, or the last two when a human plays the computer
    pub fn undo(&mut self) {
        if self.game.record().is_empty() || self.is_ai_thinking() {
            return;
        }

        let against_computer = self.kind_of(Player::O).is_human() != self.kind_of(Player::X).is_human();
        let count = if against_computer && self.game.record().len() >= 2 { 2 } else { 1 };

        if let Err(e) = self.game.undo(count) {
            self.message = Some(e.to_string());
        }
        self.suggested_move = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(o: PlayerKind, x: PlayerKind, depth: u8) -> GameConfig {
        GameConfig {
            player_o: o,
            player_x: x,
            engine: EngineConfig::new(depth).unwrap(),
        }
    }

    fn mv(k: usize, l: usize, i: usize, j: usize) -> Move {
        Move::new(k, l, i, j).unwrap()
    }

    #[test]
    fn test_human_turns_only() {
        let mut state = GameState::new(config(PlayerKind::Human, PlayerKind::Minimax, 2));
        assert!(state.is_human_turn());
        state.try_place(mv(1, 1, 0, 0)).unwrap();

        assert!(state.is_ai_turn());
        assert_eq!(state.try_place(mv(0, 0, 1, 1)), Err("Not your turn".to_string()));
    }

    #[test]
    fn test_illegal_click_is_reported() {
        let mut state = GameState::new(config(PlayerKind::Human, PlayerKind::Human, 2));
        state.try_place(mv(1, 1, 0, 0)).unwrap();
        assert!(state.try_place(mv(2, 2, 0, 0)).is_err());
        assert_eq!(state.current_turn(), Player::X);
    }

    #[test]
    fn test_ai_thread_plays_a_move() {
        let mut state = GameState::new(config(PlayerKind::Minimax, PlayerKind::Human, 2));
        state.step_computer();
        assert!(state.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.game.record().len(), 1);
        assert_eq!(state.current_turn(), Player::X);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_undo_against_computer_takes_two() {
        let mut state = GameState::new(config(PlayerKind::Human, PlayerKind::Random, 2));
        state.try_place(mv(1, 1, 1, 1)).unwrap();
        state.play_random_now();
        assert_eq!(state.game.record().len(), 2);

        state.undo();
        assert!(state.game.record().is_empty());
        assert_eq!(state.current_turn(), Player::O);
    }

    #[test]
    fn test_hint_does_not_move() {
        let mut state = GameState::new(config(PlayerKind::Human, PlayerKind::Human, 3));
        state.request_suggestion();
        assert!(state.suggested_move.is_some());
        assert!(state.game.record().is_empty());
    }

    #[test]
    fn test_reset_keeps_config() {
        let cfg = config(PlayerKind::Random, PlayerKind::Random, 3);
        let mut state = GameState::new(cfg);
        state.play_random_now();
        state.reset();
        assert!(state.game.record().is_empty());
        assert_eq!(state.config, cfg);
    }
}
