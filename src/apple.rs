use rand::Rng;

use crate::config::GameConfig;
use crate::pos::Pos;

pub struct Apple {
    pub pos: Pos,
}

impl Apple {
    pub fn new<R: Rng>(rng: &mut R, cfg: &GameConfig) -> Self {
        let mut apple = Self { pos: Pos::new(0, 0) };
        apple.randomize_position(rng, cfg);
        apple
    }

    /// Move the apple to a uniformly random cell, each axis drawn
    /// independently. The snake's body is deliberately not checked; landing
    /// on it just means the snake eats again on its next pass through that
    /// cell.
    pub fn randomize_position<R: Rng>(&mut self, rng: &mut R, cfg: &GameConfig) {
        let cell_x = rng.gen_range(0..cfg.grid_width as i32);
        let cell_y = rng.gen_range(0..cfg.grid_height as i32);
        self.pos = Pos::from_cell(cell_x, cell_y, cfg.cell_size);
    }
}
