use crate::apple::Apple;
use crate::config::{Color, GameConfig};
use crate::pos::{Dir, Pos};
use crate::snake::Snake;

/// A borrowed RGBA framebuffer. All writes are clipped to the buffer.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self { frame, width, height }
    }

    pub fn clear(&mut self, [r, g, b]: Color) {
        for px in self.frame.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, [r, g, b]: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.frame[idx] = r;
        self.frame[idx + 1] = g;
        self.frame[idx + 2] = b;
        self.frame[idx + 3] = 255;
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        for py in y..y + h as i32 {
            for px in x..x + w as i32 {
                self.set_pixel(px, py, color);
            }
        }
    }

    pub fn fill_cell(&mut self, pos: Pos, cell_size: u32, color: Color) {
        self.fill_rect(pos.x, pos.y, cell_size, cell_size, color);
    }
}

/// Anything the frame pass knows how to put on screen.
pub trait Renderable {
    fn draw(&self, canvas: &mut Canvas<'_>, cfg: &GameConfig);
}

impl Renderable for Apple {
    fn draw(&self, canvas: &mut Canvas<'_>, cfg: &GameConfig) {
        canvas.fill_cell(self.pos, cfg.cell_size, cfg.apple_color);
    }
}

impl Renderable for Snake {
    fn draw(&self, canvas: &mut Canvas<'_>, cfg: &GameConfig) {
        for (i, &pos) in self.body.iter().enumerate() {
            if i == 0 {
                canvas.fill_cell(pos, cfg.cell_size, cfg.snake_head);
                draw_eyes(canvas, pos, self.dir, cfg);
            } else {
                // Fade the body toward the tail.
                let [r, g, b] = cfg.snake_body;
                let fade = (i * 10).min(100) as u8;
                canvas.fill_cell(pos, cfg.cell_size, [r, g.saturating_sub(fade), b]);
            }
        }
    }
}

fn draw_eyes(canvas: &mut Canvas<'_>, pos: Pos, dir: Dir, cfg: &GameConfig) {
    let near = (cfg.cell_size / 4) as i32;
    let far = (cfg.cell_size * 3 / 5) as i32;
    let (e1, e2) = match dir {
        Dir::Right => ((far, near), (far, far)),
        Dir::Left => ((near, near), (near, far)),
        Dir::Up => ((near, near), (far, near)),
        Dir::Down => ((near, far), (far, far)),
    };
    canvas.set_pixel(pos.x + e1.0, pos.y + e1.1, [0, 0, 0]);
    canvas.set_pixel(pos.x + e2.0, pos.y + e2.1, [0, 0, 0]);
}

/// Alternating cell shading so motion is readable against the arena.
pub fn draw_checkerboard(canvas: &mut Canvas<'_>, cfg: &GameConfig) {
    for cy in 0..cfg.grid_height as i32 {
        for cx in 0..cfg.grid_width as i32 {
            if (cx + cy) % 2 == 0 {
                let pos = Pos::from_cell(cx, cy, cfg.cell_size);
                canvas.fill_cell(pos, cfg.cell_size, cfg.grid_shade);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_cfg() -> GameConfig {
        GameConfig {
            cell_size: 2,
            grid_width: 4,
            grid_height: 3,
            ..GameConfig::default()
        }
    }

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * width + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn fill_cell_writes_rgba_inside_the_cell_only() {
        let cfg = tiny_cfg();
        let (w, h) = (cfg.screen_width(), cfg.screen_height());
        let mut frame = vec![0u8; (w * h * 4) as usize];
        let mut canvas = Canvas::new(&mut frame, w, h);
        canvas.fill_cell(Pos::from_cell(1, 1, cfg.cell_size), cfg.cell_size, [9, 8, 7]);
        assert_eq!(pixel(&frame, w, 2, 2), [9, 8, 7, 255]);
        assert_eq!(pixel(&frame, w, 3, 3), [9, 8, 7, 255]);
        assert_eq!(pixel(&frame, w, 1, 2), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, w, 4, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let cfg = tiny_cfg();
        let (w, h) = (cfg.screen_width(), cfg.screen_height());
        let mut frame = vec![0u8; (w * h * 4) as usize];
        let mut canvas = Canvas::new(&mut frame, w, h);
        canvas.fill_rect(-1, -1, w + 4, h + 4, [1, 2, 3]);
        assert_eq!(pixel(&frame, w, 0, 0), [1, 2, 3, 255]);
        assert_eq!(pixel(&frame, w, w - 1, h - 1), [1, 2, 3, 255]);
    }

    #[test]
    fn clear_sets_every_pixel_opaque() {
        let cfg = tiny_cfg();
        let (w, h) = (cfg.screen_width(), cfg.screen_height());
        let mut frame = vec![0u8; (w * h * 4) as usize];
        let mut canvas = Canvas::new(&mut frame, w, h);
        canvas.clear(cfg.background);
        for px in frame.chunks_exact(4) {
            assert_eq!(px, [20, 20, 30, 255]);
        }
    }
}
