pub mod apple;
pub mod config;
pub mod game;
pub mod pos;
pub mod render;
pub mod snake;

pub use apple::Apple;
pub use config::GameConfig;
pub use game::Game;
pub use pos::{Dir, Pos};
pub use render::{Canvas, Renderable};
pub use snake::Snake;
