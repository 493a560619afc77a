//! Game module - owns the board and pieces and runs the rules
//!
//! This module ties together the board, the piece catalog, the randomizer,
//! scoring and the speed curve. It is driven from outside: the runner calls
//! [`Game::tick`] once per frame with the elapsed time and forwards input as
//! [`GameAction`]s. Nothing here reads a clock or blocks.

use std::time::Duration;

use log::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::pieces::try_rotate;
use crate::rng::PieceRandomizer;
use crate::scoring::{calculate_level, calculate_score};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::speed::drop_interval;
use crate::types::{GameAction, GameStatus};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    next: Piece,
    held: Option<Piece>,
    pieces: PieceRandomizer,
    score: u32,
    lines: u32,
    level: u32,
    /// Size of the most recent clear (0 after a lock that cleared nothing)
    last_clear: u32,
    /// Whether the most recent lock was a 4-line clear
    was_tetris: bool,
    can_hold: bool,
    paused: bool,
    game_over: bool,
    drop_interval: Duration,
    /// Time accumulated since the last automatic drop
    drop_timer: Duration,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut pieces = PieceRandomizer::new(seed);
        let active = Piece::new(pieces.draw());
        let next = Piece::new(pieces.draw());
        let level = calculate_level(0);

        Self {
            board: Board::new(),
            active,
            next,
            held: None,
            pieces,
            score: 0,
            lines: 0,
            level,
            last_clear: 0,
            was_tetris: false,
            can_hold: true,
            paused: false,
            game_over: false,
            drop_interval: drop_interval(level),
            drop_timer: Duration::ZERO,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Active
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn last_clear(&self) -> u32 {
        self.last_clear
    }

    /// Whether the most recent lock cleared exactly 4 lines
    pub fn back_to_back(&self) -> bool {
        self.was_tetris
    }

    pub fn drop_interval(&self) -> Duration {
        self.drop_interval
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

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    fn is_playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Advance gravity by `elapsed`.
    ///
    /// Returns true if an automatic one-row drop was attempted this call.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_playable() {
            return false;
        }

        self.drop_timer += elapsed;
        if self.drop_timer < self.drop_interval {
            return false;
        }

        self.drop_timer = Duration::ZERO;
        self.move_piece(0, 1);
        true
    }

    /// Try to move the active piece.
    ///
    /// A blocked downward move means the piece has landed and locks it.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_playable() {
            return false;
        }

        let candidate = self.active.translated(dx, dy);
        if self.board.is_valid_position(&candidate) {
            self.active = candidate;
            return true;
        }

        if dy > 0 {
            self.lock_piece();
        }
        false
    }

    /// Rotate the active piece, trying wall kicks in priority order.
    ///
    /// On failure the piece is left exactly as it was.
    pub fn rotate_piece(&mut self, clockwise: bool) -> bool {
        if !self.is_playable() {
            return false;
        }

        match try_rotate(&self.active, clockwise, |p| self.board.is_valid_position(p)) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => {
                trace!(
                    "rotation rejected: {:?} at ({}, {})",
                    self.active.kind,
                    self.active.x,
                    self.active.y
                );
                false
            }
        }
    }

    /// Drop the active piece until it locks
    pub fn hard_drop(&mut self) {
        if !self.is_playable() {
            return;
        }
        while self.move_piece(0, 1) {}
    }

    /// Swap the active piece into hold.
    ///
    /// Allowed once per lock. Returns false when holding is not allowed.
    pub fn hold_piece(&mut self) -> bool {
        if !self.can_hold || !self.is_playable() {
            return false;
        }

        let current = self.active;
        self.active = match self.held.replace(current) {
            Some(held) => held,
            None => self.promote_next(),
        };
        self.active.reset_to_spawn();
        self.can_hold = false;

        if !self.board.is_valid_position(&self.active) {
            self.game_over = true;
            info!("game over after hold: score {} lines {}", self.score, self.lines);
        }
        true
    }

    /// Toggle between active and paused; no-op once the game is over
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
        true
    }

    /// Replace a finished game with a brand-new one.
    ///
    /// Returns false (and changes nothing) while the game is still running.
    pub fn restart(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        let seed = self.pieces.next_seed();
        info!("restart: previous score {} level {}", self.score, self.level);
        *self = Self::new(seed);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.move_piece(0, 1),
            GameAction::HardDrop => {
                let playable = self.is_playable();
                self.hard_drop();
                playable
            }
            GameAction::RotateCw => self.rotate_piece(true),
            GameAction::RotateCcw => self.rotate_piece(false),
            GameAction::Hold => self.hold_piece(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Take the next piece and draw a fresh one behind it
    fn promote_next(&mut self) -> Piece {
        let drawn = Piece::new(self.pieces.draw());
        std::mem::replace(&mut self.next, drawn)
    }

    /// Lock the active piece onto the board, score any clears and spawn the next piece
    fn lock_piece(&mut self) {
        self.board.place_piece(&self.active);

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            let perfect = self.board.is_perfect_clear();
            let result = calculate_score(cleared, self.level, perfect, self.was_tetris);

            self.score = self.score.saturating_add(result.total);
            self.was_tetris = result.is_tetris;
            self.last_clear = cleared as u32;
            self.lines += cleared as u32;

            if perfect {
                info!(
                    "perfect clear: {} lines for {} points{}",
                    cleared,
                    result.total,
                    if result.b2b_applied { " (back-to-back)" } else { "" }
                );
            }

            let level = calculate_level(self.lines);
            if level > self.level {
                self.level = level;
                self.drop_interval = drop_interval(level);
                info!(
                    "level up: {} (drop interval {} ms)",
                    level,
                    self.drop_interval.as_millis()
                );
            }
        } else {
            self.was_tetris = false;
            self.last_clear = 0;
        }

        debug!(
            "locked {:?}: cleared {} score {} lines {}",
            self.active.kind, cleared, self.score, self.lines
        );

        self.active = self.promote_next();
        self.active.reset_to_spawn();
        self.can_hold = true;

        if !self.board.is_valid_position(&self.active) {
            self.game_over = true;
            info!("game over: score {} lines {} level {}", self.score, self.lines, self.level);
        }
    }

    /// Where the active piece would come to rest if hard-dropped now
    pub fn ghost(&self) -> Piece {
        let mut ghost = self.active;
        loop {
            let below = ghost.translated(0, 1);
            if !self.board.is_valid_position(&below) {
                return ghost;
            }
            ghost = below;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = PieceSnapshot::from(&self.active);
        out.ghost_y = self.ghost().y;
        out.held = self.held.as_ref().map(PieceSnapshot::from);
        out.next = PieceSnapshot::from(&self.next);
        out.can_hold = self.can_hold;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval.as_millis() as u64;
        out.last_clear = self.last_clear;
        out.back_to_back = self.was_tetris;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rgb, Rotation, BOARD_WIDTH};

    const GRAY: Rgb = Rgb::new(90, 90, 90);

    /// Game whose active piece is `kind` at spawn on an empty board
    fn game_with(kind: PieceKind) -> Game {
        let mut game = Game::new(12345);
        game.active = Piece::new(kind);
        game
    }

    /// Fill row `y` except the listed columns
    fn fill_row_except(board: &mut Board, y: i8, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                board.set(x, y, Some(GRAY));
            }
        }
    }

    /// Vertical I piece whose cells sit in column 0
    fn vertical_i_in_left_column() -> Piece {
        let piece = Piece::new(PieceKind::I).rotated(true);
        piece.translated(-piece.x - 2, 0)
    }

    fn occupied_count(board: &Board) -> usize {
        board.cells().iter().filter(|c| c.is_some()).count()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(12345);

        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.drop_interval(), Duration::from_millis(1000));
        assert!(game.can_hold());
        assert!(game.held().is_none());
        assert!(game.board().is_perfect_clear());
        assert_eq!((game.active().x, game.active().y), (3, 0));
        assert_eq!((game.next().x, game.next().y), (3, 0));
    }

    #[test]
    fn test_move_left_and_right() {
        let mut game = game_with(PieceKind::T);

        assert!(game.move_piece(1, 0));
        assert_eq!(game.active.x, 4);
        assert!(game.move_piece(-1, 0));
        assert_eq!(game.active.x, 3);

        // T spans columns 0..=2 of its matrix, so the wall is 3 moves away
        for _ in 0..3 {
            assert!(game.move_piece(-1, 0));
        }
        assert!(!game.move_piece(-1, 0));
        assert_eq!(game.active.x, 0);
        assert!(game.board.is_perfect_clear(), "sideways failure must not lock");
    }

    #[test]
    fn test_failed_down_move_locks_piece() {
        let mut game = game_with(PieceKind::O);
        game.active = game.active.translated(0, 18);
        let next_kind = game.next.kind;

        assert!(!game.move_piece(0, 1));

        assert_eq!(game.board.color(3, 19), Some(Piece::new(PieceKind::O).color()));
        assert_eq!(occupied_count(&game.board), 4);
        assert_eq!(game.active.kind, next_kind);
        assert_eq!((game.active.x, game.active.y), (3, 0));
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut game = game_with(PieceKind::T);
        game.active = game.active.translated(0, 5);

        assert!(game.rotate_piece(true));
        assert_eq!(game.active.rotation, Rotation::East);
        assert_eq!((game.active.x, game.active.y), (3, 5));
        assert_eq!(game.active.shape().to_rows(), vec![".#.", ".##", ".#."]);

        assert!(game.rotate_piece(false));
        assert_eq!(game.active, Piece::new(PieceKind::T).translated(0, 5));
    }

    #[test]
    fn test_rotate_kicks_off_left_wall() {
        let mut game = game_with(PieceKind::T);
        // East-facing T flush against the left wall (cells in matrix columns 1-2)
        game.active = game.active.rotated(true).translated(-4, 5);
        assert!(game.board.is_valid_position(&game.active));

        // Facing south needs matrix column 0, which is off the board; the (1, 0) kick fits
        assert!(game.rotate_piece(true));
        assert_eq!(game.active.rotation, Rotation::South);
        assert_eq!((game.active.x, game.active.y), (0, 5));
    }

    #[test]
    fn test_rotate_fails_when_every_kick_collides() {
        let mut game = game_with(PieceKind::T);
        game.active = game.active.translated(0, 17);
        // T occupies (4,17) and (3..=5,18); everything else in rows 14..=19 is filled
        for y in 14..20 {
            fill_row_except(&mut game.board, y, &[]);
        }
        for (x, y) in game.active.blocks() {
            game.board.set(x, y, None);
        }
        let before = game.active;

        assert!(!game.rotate_piece(true));
        assert!(!game.rotate_piece(false));
        assert_eq!(game.active, before);
    }

    #[test]
    fn test_o_piece_rotation_is_identity() {
        let mut game = game_with(PieceKind::O);
        let cells: Vec<_> = game.active.blocks().collect();

        assert!(game.rotate_piece(true));
        let rotated: Vec<_> = game.active.blocks().collect();
        assert_eq!(cells, rotated);
    }

    #[test]
    fn test_hard_drop_locks_on_floor() {
        let mut game = game_with(PieceKind::O);
        let next_kind = game.next.kind;

        game.hard_drop();

        let color = Some(Piece::new(PieceKind::O).color());
        for (x, y) in [(3, 18), (4, 18), (3, 19), (4, 19)] {
            assert_eq!(game.board.color(x, y), color);
        }
        assert_eq!(game.active.kind, next_kind);
        assert_eq!(game.last_clear, 0);
    }

    #[test]
    fn test_single_clear_scores_100_at_level_1() {
        let mut game = game_with(PieceKind::I);
        fill_row_except(&mut game.board, 19, &[3, 4, 5, 6]);
        game.board.set(0, 18, Some(GRAY));

        game.hard_drop();

        assert_eq!(game.score, 100);
        assert_eq!(game.lines, 1);
        assert_eq!(game.last_clear(), 1);
        assert!(!game.was_tetris);
        // The leftover block fell into the cleared row
        assert!(game.board.is_occupied(0, 19));
    }

    #[test]
    fn test_tetris_at_level_3_scores_2400() {
        let mut game = game_with(PieceKind::I);
        game.lines = 20;
        game.level = 3;
        for y in 16..20 {
            fill_row_except(&mut game.board, y, &[0]);
        }
        game.board.set(5, 15, Some(GRAY));
        game.active = vertical_i_in_left_column();

        game.hard_drop();

        assert_eq!(game.score, 2400);
        assert_eq!(game.lines, 24);
        assert_eq!(game.level, 3);
        assert!(game.was_tetris);
        assert!(!game.board.is_perfect_clear());
    }

    #[test]
    fn test_perfect_tetris_back_to_back() {
        let mut game = game_with(PieceKind::I);
        game.was_tetris = true;
        for y in 16..20 {
            fill_row_except(&mut game.board, y, &[0]);
        }
        game.active = vertical_i_in_left_column();

        game.hard_drop();

        assert!(game.board.is_perfect_clear());
        assert_eq!(game.score, 3200);
        assert!(game.was_tetris);
    }

    #[test]
    fn test_perfect_tetris_without_previous_tetris() {
        let mut game = game_with(PieceKind::I);
        game.level = 2;
        for y in 16..20 {
            fill_row_except(&mut game.board, y, &[0]);
        }
        game.active = vertical_i_in_left_column();

        game.hard_drop();

        assert_eq!(game.score, 2000 * 2);
    }

    #[test]
    fn test_perfect_single_resets_back_to_back() {
        let mut game = game_with(PieceKind::I);
        game.was_tetris = true;
        fill_row_except(&mut game.board, 19, &[3, 4, 5, 6]);

        game.hard_drop();

        assert_eq!(game.score, 800);
        assert!(!game.was_tetris);
        assert_eq!(game.last_clear, 1);
    }

    #[test]
    fn test_lock_without_clear_resets_tracking() {
        let mut game = game_with(PieceKind::O);
        game.was_tetris = true;
        game.last_clear = 4;

        game.hard_drop();

        assert!(!game.was_tetris);
        assert_eq!(game.last_clear, 0);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_level_up_updates_drop_interval() {
        let mut game = game_with(PieceKind::I);
        game.lines = 9;
        fill_row_except(&mut game.board, 19, &[3, 4, 5, 6]);
        game.board.set(0, 18, Some(GRAY));

        game.hard_drop();

        assert_eq!(game.score, 100, "score uses the level before the clear");
        assert_eq!(game.lines, 10);
        assert_eq!(game.level, 2);
        assert_eq!(game.drop_interval, Duration::from_millis(793));
    }

    #[test]
    fn test_hold_with_empty_slot_promotes_next() {
        let mut game = game_with(PieceKind::T);
        let next_kind = game.next.kind;

        assert!(game.hold_piece());
        assert_eq!(game.held.map(|p| p.kind), Some(PieceKind::T));
        assert_eq!(game.active.kind, next_kind);
        assert!(!game.can_hold);

        // Second hold before a lock is a no-op
        let before = (game.active, game.held, game.next.kind);
        assert!(!game.hold_piece());
        assert_eq!((game.active, game.held, game.next.kind), before);
    }

    #[test]
    fn test_hold_swaps_after_lock_and_resets_anchor() {
        let mut game = game_with(PieceKind::T);
        assert!(game.hold_piece());

        game.active = Piece::new(PieceKind::O);
        game.hard_drop();
        assert!(game.can_hold);

        let current_kind = game.active.kind;
        game.move_piece(1, 0);
        game.move_piece(0, 1);
        assert!(game.hold_piece());

        assert_eq!(game.active.kind, PieceKind::T);
        assert_eq!((game.active.x, game.active.y), (3, 0));
        assert_eq!(game.active.rotation, Rotation::North);
        assert_eq!(game.held.map(|p| p.kind), Some(current_kind));
    }

    #[test]
    fn test_hold_resets_rotated_piece_to_spawn_orientation() {
        let mut game = game_with(PieceKind::J);
        game.held = Some(Piece::new(PieceKind::L).rotated(true).translated(2, 6));

        assert!(game.hold_piece());
        assert_eq!(game.active, Piece::new(PieceKind::L));
    }

    #[test]
    fn test_game_over_when_spawn_is_blocked() {
        let mut game = game_with(PieceKind::O);
        // Row 1 is blocked under every spawn shape but not full
        fill_row_except(&mut game.board, 1, &[9]);
        game.active = game.active.translated(-3, 18);

        assert!(!game.move_piece(0, 1));
        assert!(game.game_over());
        assert_eq!(game.status(), GameStatus::GameOver);

        // The new active piece was never placed
        let board = game.board.clone();
        assert_eq!(occupied_count(&board), 9 + 4);
        let score = game.score;

        assert!(!game.move_piece(1, 0));
        assert!(!game.move_piece(0, 1));
        assert!(!game.rotate_piece(true));
        assert!(!game.hold_piece());
        game.hard_drop();
        assert!(!game.tick(Duration::from_secs(10)));
        assert!(!game.toggle_pause());

        assert_eq!(game.board, board);
        assert_eq!(game.score, score);
    }

    #[test]
    fn test_game_over_when_hold_brings_in_blocked_piece() {
        let mut game = game_with(PieceKind::O);
        fill_row_except(&mut game.board, 1, &[9]);
        game.active = game.active.translated(-3, 18);
        game.held = Some(Piece::new(PieceKind::T));
        let board = game.board.clone();

        assert!(game.hold_piece());
        assert!(game.game_over());
        assert_eq!(game.active.kind, PieceKind::T);
        assert_eq!(game.held.map(|p| p.kind), Some(PieceKind::O));
        // Nothing was locked by the swap
        assert_eq!(game.board, board);
        assert!(!game.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_pause_blocks_ticks_and_moves() {
        let mut game = game_with(PieceKind::T);

        assert!(game.toggle_pause());
        assert_eq!(game.status(), GameStatus::Paused);
        assert!(!game.tick(Duration::from_secs(5)));
        assert!(!game.move_piece(1, 0));
        assert!(!game.rotate_piece(true));
        assert_eq!(game.active, Piece::new(PieceKind::T));

        assert!(game.toggle_pause());
        assert_eq!(game.status(), GameStatus::Active);
        assert!(game.move_piece(1, 0));
    }

    #[test]
    fn test_tick_gravity() {
        let mut game = game_with(PieceKind::T);

        assert!(!game.tick(Duration::from_millis(999)));
        assert_eq!(game.active.y, 0);

        assert!(game.tick(Duration::from_millis(1)));
        assert_eq!(game.active.y, 1);

        // The timer restarts after each drop
        assert!(!game.tick(Duration::from_millis(500)));
        assert_eq!(game.active.y, 1);
    }

    #[test]
    fn test_restart_creates_fresh_game() {
        let mut game = game_with(PieceKind::I);
        game.score = 5000;
        game.lines = 42;
        game.level = 5;
        game.board.fill_row(10, GRAY);
        game.game_over = true;

        assert!(game.apply_action(GameAction::Restart));

        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.score, 0);
        assert_eq!(game.lines, 0);
        assert_eq!(game.level, 1);
        assert!(game.board.is_perfect_clear());
        assert!(game.held.is_none());
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut game = Game::new(5);
        assert!(game.apply_action(GameAction::HardDrop));
        assert_eq!(occupied_count(&game.board), 4);

        let board = game.board.clone();
        let (active, next, score) = (game.active, game.next, game.score);

        assert!(!game.apply_action(GameAction::Restart));
        assert_eq!(game.board, board);
        assert_eq!((game.active, game.next, game.score), (active, next, score));

        // Paused is still not over
        game.toggle_pause();
        assert!(!game.restart());
        assert_eq!(game.status(), GameStatus::Paused);
        assert_eq!(occupied_count(&game.board), 4);
    }

    #[test]
    fn test_ghost_lands_on_stack() {
        let mut game = game_with(PieceKind::O);
        assert_eq!(game.ghost().y, 18);

        game.board.set(4, 15, Some(GRAY));
        assert_eq!(game.ghost().y, 13);
        // Projection never moves the real piece
        assert_eq!(game.active.y, 0);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut game = game_with(PieceKind::T);

        assert!(game.apply_action(GameAction::MoveRight));
        assert_eq!(game.active.x, 4);
        assert!(game.apply_action(GameAction::MoveLeft));
        assert!(game.apply_action(GameAction::SoftDrop));
        assert_eq!(game.active.y, 1);
        assert!(game.apply_action(GameAction::RotateCw));
        assert!(game.apply_action(GameAction::RotateCcw));
        assert!(game.apply_action(GameAction::Hold));
        assert!(game.apply_action(GameAction::HardDrop));
        assert_eq!(occupied_count(&game.board), 4);
        assert!(game.apply_action(GameAction::Pause));
        assert!(game.paused());
        assert!(!game.apply_action(GameAction::HardDrop));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = game_with(PieceKind::S);
        game.board.set(0, 19, Some(GRAY));
        game.score = 300;
        assert!(game.hold_piece());

        let snap = game.snapshot();
        assert_eq!(snap.board[19][0], Some(GRAY));
        assert_eq!(snap.active.kind, game.active.kind);
        assert_eq!(snap.held.map(|p| p.kind), Some(PieceKind::S));
        assert_eq!(snap.next.kind, game.next.kind);
        assert_eq!(snap.ghost_y, game.ghost().y);
        assert_eq!(snap.score, 300);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.drop_interval_ms, 1000);
        assert!(!snap.can_hold);
        assert!(snap.playable());
        assert_eq!(snap.active.blocks().count(), 4);
    }
}
