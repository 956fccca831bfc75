use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::config::GameConfig;
use crate::snake::Snake;

/// The whole game state: one snake, one apple, the RNG that places apples.
/// The window loop owns exactly one of these and calls `tick` at the
/// configured rate.
pub struct Game {
    pub cfg: GameConfig,
    pub snake: Snake,
    pub apple: Apple,
    rng: SmallRng,
}

impl Game {
    pub fn new(cfg: GameConfig) -> Self {
        Self::with_rng(cfg, SmallRng::from_entropy())
    }

    /// Seeded constructor so tests get reproducible apple placement.
    pub fn with_rng(cfg: GameConfig, mut rng: SmallRng) -> Self {
        let snake = Snake::new(&cfg);
        let apple = Apple::new(&mut rng, &cfg);
        Self { cfg, snake, apple, rng }
    }

    /// Advance the world by one tick: turn, move, eat, then collide. Eating
    /// does not skip the collision check on the same tick. A self-collision
    /// soft-resets the snake in place; the game itself never ends.
    pub fn tick(&mut self) {
        self.snake.update_direction();
        self.snake.advance(&self.cfg);

        if self.snake.head() == self.apple.pos {
            self.snake.grow();
            self.apple.randomize_position(&mut self.rng, &self.cfg);
            log::debug!("apple eaten, length now {}", self.snake.length);
        }

        if self.snake.self_collision() {
            log::debug!("self-collision at {:?}", self.snake.head());
            self.snake.reset(&self.cfg);
        }
    }
}
