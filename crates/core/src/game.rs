//! Game module - drives one session on top of the board
//!
//! Holds the active and next pieces, advances gravity from elapsed time and
//! turns player actions into board calls. All validation goes through
//! [`Board::is_valid_position`]; moves and rotations that fail are dropped.

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::scoring::fall_interval_ms;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::GameAction;

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Piece,
    next: Piece,
    source: PieceSource,
    /// Time accumulated toward the next gravity step
    fall_timer_ms: u32,
    fast_drop: bool,
    paused: bool,
    game_over: bool,
}

impl Game {
    /// Start a game with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let mut source = PieceSource::new(config.seed);
        let active = source.draw();
        let next = source.draw();
        log::info!(
            "new game (seed {:?}), first piece {}",
            source.seed(),
            active.kind().as_str()
        );

        Self {
            config,
            board: Board::new(),
            active,
            next,
            source,
            fall_timer_ms: 0,
            fast_drop: false,
            paused: false,
            game_over: false,
        }
    }

    /// Start a game with a fixed seed and default gravity
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::seeded(seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn fast_drop(&self) -> bool {
        self.fast_drop
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn level(&self) -> u32 {
        self.board.level()
    }

    pub fn lines(&self) -> u32 {
        self.board.total_lines()
    }

    /// Current gravity interval, including fast drop
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.board.level(), self.fast_drop, &self.config)
    }

    /// Apply a player action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => return self.toggle_pause(),
            GameAction::Restart => return self.restart(),
            _ => {}
        }

        if self.paused || self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::SoftDrop => {
                let changed = !self.fast_drop;
                self.fast_drop = true;
                changed
            }
            GameAction::SoftDropRelease => {
                let changed = self.fast_drop;
                self.fast_drop = false;
                changed
            }
            GameAction::HardDrop => self.hard_drop() > 0,
            GameAction::Pause | GameAction::Restart => false,
        }
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time reaches the fall interval the piece moves
    /// down one row, or locks if it cannot. Fast-dropped rows score 1 point.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.paused || self.game_over {
            return;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms() {
            return;
        }

        if self.board.is_valid_position(&self.active, 0, 1) {
            self.active.y += 1;
            if self.fast_drop {
                self.board.add_soft_drop_score(1);
            }
        } else {
            self.lock_piece();
        }
        self.fall_timer_ms = 0;
    }

    fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        log::debug!("paused: {}", self.paused);
        true
    }

    /// Start over after a game over. Ignored while a game is running.
    fn restart(&mut self) -> bool {
        if !self.game_over {
            return false;
        }

        log::info!("restart after final score {}", self.board.score());
        self.board.reset();
        self.active = self.source.draw();
        self.next = self.source.draw();
        self.fall_timer_ms = 0;
        self.fast_drop = false;
        self.paused = false;
        self.game_over = false;
        true
    }

    fn try_move(&mut self, dx: i8) -> bool {
        if !self.board.is_valid_position(&self.active, dx, 0) {
            return false;
        }
        self.active.x += dx;
        true
    }

    /// Rotate clockwise if the rotated shape fits where the piece is; no kicks.
    fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        if !self.board.is_valid_position(&candidate, 0, 0) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Drop to the floor and lock. Returns rows dropped; 0 leaves the piece to gravity.
    fn hard_drop(&mut self) -> u32 {
        let distance = self.board.drop_distance(&self.active);
        if distance == 0 {
            return 0;
        }

        self.active.y += distance as i8;
        self.board.add_hard_drop_score(distance as u32);
        self.lock_piece();
        distance as u32
    }

    /// Lock the active piece, promote the next one and check for game over.
    fn lock_piece(&mut self) {
        let level_before = self.board.level();
        let lines = self.board.place_tetromino(&self.active);
        log::debug!(
            "locked {} at ({}, {}), {} line(s)",
            self.active.kind().as_str(),
            self.active.x,
            self.active.y,
            lines
        );
        if self.board.level() > level_before {
            log::info!("level up: {}", self.board.level());
        }

        self.active = self.next;
        self.next = self.source.draw();

        if self.board.is_game_over(&self.active) {
            self.game_over = true;
            self.fast_drop = false;
            log::info!(
                "game over: score {}, level {}, lines {}",
                self.board.score(),
                self.board.level(),
                self.board.total_lines()
            );
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = if self.game_over {
            None
        } else {
            Some(PieceSnapshot::from(self.active))
        };
        out.next = PieceSnapshot::from(self.next);
        out.fast_drop = self.fast_drop;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.score = self.board.score();
        out.level = self.board.level();
        out.lines = self.board.total_lines();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    #[cfg(test)]
    pub(crate) fn set_next(&mut self, piece: Piece) {
        self.next = piece;
    }
}
