use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::pos::{Dir, Pos};

/// The player snake. `body` holds pixel positions newest-first; `length` is
/// the target body length and only ever shrinks on `reset`.
pub struct Snake {
    pub body: VecDeque<Pos>,
    pub dir: Dir,
    pub pending: Option<Dir>,
    pub length: usize,
}

impl Snake {
    pub fn new(cfg: &GameConfig) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            dir: Dir::Right,
            pending: None,
            length: 1,
        };
        snake.reset(cfg);
        snake
    }

    /// Back to a single segment at the grid center, heading right.
    pub fn reset(&mut self, cfg: &GameConfig) {
        let center = Pos::from_cell(
            cfg.grid_width as i32 / 2,
            cfg.grid_height as i32 / 2,
            cfg.cell_size,
        );
        self.body.clear();
        self.body.push_back(center);
        self.dir = Dir::Right;
        self.pending = None;
        self.length = 1;
    }

    pub fn head(&self) -> Pos {
        // Non-empty from construction through every reset.
        self.body[0]
    }

    /// Record a requested direction for the next tick. The last request
    /// before the tick wins.
    pub fn queue_direction(&mut self, dir: Dir) {
        self.pending = Some(dir);
    }

    /// Apply the queued direction unless it would reverse straight into the
    /// neck. The queued value is consumed either way.
    pub fn update_direction(&mut self) {
        if let Some(pending) = self.pending.take() {
            if pending != self.dir.opposite() {
                self.dir = pending;
            }
        }
    }

    /// One step in the current direction with toroidal wraparound, trimming
    /// the tail when the body exceeds `length`.
    pub fn advance(&mut self, cfg: &GameConfig) {
        let (dx, dy) = self.dir.offset();
        let head = self.head();
        let new_head = Pos::new(
            (head.x + dx * cfg.cell_size as i32).rem_euclid(cfg.screen_width() as i32),
            (head.y + dy * cfg.cell_size as i32).rem_euclid(cfg.screen_height() as i32),
        );
        self.body.push_front(new_head);
        if self.body.len() > self.length {
            self.body.pop_back();
        }
    }

    /// Takes effect on the next `advance`: the tail is simply not trimmed.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}
