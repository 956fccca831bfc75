use std::time::Duration;

pub type Color = [u8; 3];

/// All tunables in one immutable struct, passed by reference to whatever
/// needs it. Tests run the same logic on tiny grids by swapping this out.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    /// Side of one grid cell in pixels. All positions are multiples of this.
    pub cell_size: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Game-logic updates per second.
    pub tick_rate: u32,
    pub background: Color,
    /// Shade for the alternating checkerboard cells.
    pub grid_shade: Color,
    pub apple_color: Color,
    pub snake_head: Color,
    pub snake_body: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            grid_width: 32,
            grid_height: 24,
            tick_rate: 20,
            background: [20, 20, 30],
            grid_shade: [25, 25, 35],
            apple_color: [220, 50, 50],
            snake_head: [100, 255, 100],
            snake_body: [50, 200, 50],
        }
    }
}

impl GameConfig {
    pub fn screen_width(&self) -> u32 {
        self.grid_width * self.cell_size
    }

    pub fn screen_height(&self) -> u32 {
        self.grid_height * self.cell_size
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_dimensions_derive_from_grid() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.screen_width(), 640);
        assert_eq!(cfg.screen_height(), 480);
    }

    #[test]
    fn tick_duration_matches_rate() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.tick_duration(), Duration::from_millis(50));
    }
}
