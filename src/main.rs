use std::time::Instant;

use anyhow::Context;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use wrapsnake::render::draw_checkerboard;
use wrapsnake::{Canvas, Dir, Game, GameConfig, Renderable};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = GameConfig::default();
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title("Wrapsnake")
        .with_inner_size(LogicalSize::new(cfg.screen_width(), cfg.screen_height()))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(cfg.screen_width(), cfg.screen_height(), surface_texture)
            .context("creating pixel surface")?
    };

    let mut game = Game::new(cfg);
    let tick = cfg.tick_duration();
    let mut next_tick = Instant::now() + tick;

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            let mut canvas = Canvas::new(pixels.frame_mut(), cfg.screen_width(), cfg.screen_height());
            canvas.clear(cfg.background);
            draw_checkerboard(&mut canvas, &cfg);
            game.apple.draw(&mut canvas, &cfg);
            game.snake.draw(&mut canvas, &cfg);

            if let Err(err) = pixels.render() {
                log::error!("frame presentation failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            // Quit bypasses everything else; dropping `pixels` and the
            // window on the way out releases the surface.
            if input.key_pressed(VirtualKeyCode::Escape)
                || input.close_requested()
                || input.destroyed()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }

            // The request closest to the tick wins.
            if input.key_pressed(VirtualKeyCode::Up) || input.key_pressed(VirtualKeyCode::W) {
                game.snake.queue_direction(Dir::Up);
            }
            if input.key_pressed(VirtualKeyCode::Down) || input.key_pressed(VirtualKeyCode::S) {
                game.snake.queue_direction(Dir::Down);
            }
            if input.key_pressed(VirtualKeyCode::Left) || input.key_pressed(VirtualKeyCode::A) {
                game.snake.queue_direction(Dir::Left);
            }
            if input.key_pressed(VirtualKeyCode::Right) || input.key_pressed(VirtualKeyCode::D) {
                game.snake.queue_direction(Dir::Right);
            }

            let now = Instant::now();
            if now >= next_tick {
                game.tick();
                window.request_redraw();
                next_tick += tick;
                if next_tick < now {
                    // Stalled past a whole tick (window drag etc); drop the
                    // backlog instead of fast-forwarding.
                    next_tick = now + tick;
                }
            }

            // Sleep until the next tick boundary rather than spinning.
            *control_flow = ControlFlow::WaitUntil(next_tick);
        }
    });
}
