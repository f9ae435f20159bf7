use std::sync::Arc;
use std::time::Duration;

use palette::{named, Srgb};
use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info, warn};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use super::{ParticleHandle, Sprite, Surface};
use crate::config::Canvas;
use crate::error::SurfaceError;
use crate::ui;

const BACKGROUND: Srgb<u8> = named::WHITE;
const HEADER: Srgb<u8> = named::GAINSBORO;

/// Desktop window backed by a `pixels` framebuffer.
///
/// The surface owns the event loop and pumps it from [`Surface::frame`],
/// so the caller's loop stays in charge.
pub struct WindowSurface {
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    canvas: Canvas,
    title: String,
    sprites: Vec<Sprite>,
}

impl WindowSurface {
    pub fn new(canvas: Canvas, title: &str) -> Result<Self, SurfaceError> {
        let event_loop = EventLoop::new()?;
        let (frame_width, frame_height) = canvas.frame_size();

        let window = Arc::new(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(frame_width, frame_height))
                .build(&event_loop)?,
        );

        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = Pixels::new(frame_width, frame_height, surface_texture)?;

        info!(frame_width, frame_height, "window surface created");

        Ok(Self {
            event_loop,
            window,
            pixels,
            canvas,
            title: title.to_string(),
            sprites: Vec::new(),
        })
    }

    // 溜まったイベントだけ処理して、待たずに戻る
    fn pump_events(&mut self) {
        let window_id = self.window.id();
        let pixels = &mut self.pixels;

        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _target| {
                let Event::WindowEvent { window_id: id, event } = event else {
                    return;
                };
                if id != window_id {
                    return;
                }
                match event {
                    WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                        if let Err(err) = pixels.resize_surface(size.width, size.height) {
                            error!(%err, "failed to resize surface");
                        }
                    }
                    WindowEvent::CloseRequested => {
                        info!("close requested; the run ends at its deadline");
                    }
                    _ => {}
                }
            });

        if let PumpStatus::Exit(code) = status {
            warn!(code, "event loop reported exit");
        }
    }
}

impl Surface for WindowSurface {
    fn new_particle(&mut self, x: f64, y: f64, size: u32, color: Srgb<u8>) -> ParticleHandle {
        self.sprites.push(Sprite { x, y, size, color });
        ParticleHandle(self.sprites.len() - 1)
    }

    fn move_particle(&mut self, handle: ParticleHandle, x: f64, y: f64) {
        if let Some(sprite) = self.sprites.get_mut(handle.0) {
            sprite.x = x;
            sprite.y = y;
        }
    }

    fn frame(&mut self) {
        self.pump_events();

        let (frame_width, frame_height) = self.canvas.frame_size();
        let frame = self.pixels.frame_mut();
        clear(frame, BACKGROUND);
        fill_rect(
            frame,
            (frame_width, frame_height),
            (0, 0),
            (frame_width, self.canvas.heading),
            HEADER,
        );
        for sprite in &self.sprites {
            let origin = sprite_origin(sprite, self.canvas.heading);
            fill_rect(
                frame,
                (frame_width, frame_height),
                origin,
                (sprite.size, sprite.size),
                sprite.color,
            );
        }

        if let Err(err) = self.pixels.render() {
            error!(%err, "failed to present frame");
        }
    }

    fn set_heading_text(&mut self, text: &str) {
        self.window.set_title(&ui::window_title(&self.title, text));
    }
}

fn rgba(color: Srgb<u8>) -> [u8; 4] {
    [color.red, color.green, color.blue, 0xff]
}

fn clear(frame: &mut [u8], color: Srgb<u8>) {
    let rgba = rgba(color);
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&rgba);
    }
}

/// Top-left pixel of a sprite's square, centred on its canvas position and
/// shifted below the header band.
fn sprite_origin(sprite: &Sprite, heading: u32) -> (i64, i64) {
    let half = (sprite.size / 2) as i64;
    let x = sprite.x as i64 - half;
    let y = sprite.y as i64 + heading as i64 - half;
    (x, y)
}

/// Fills a rectangle, clipped to the frame.
fn fill_rect(
    frame: &mut [u8],
    (frame_width, frame_height): (u32, u32),
    (x, y): (i64, i64),
    (width, height): (u32, u32),
    color: Srgb<u8>,
) {
    let start_x = x.max(0);
    let end_x = (x + width as i64).min(frame_width as i64);
    let start_y = y.max(0);
    let end_y = (y + height as i64).min(frame_height as i64);
    if start_x >= end_x || start_y >= end_y {
        return;
    }

    let rgba = rgba(color);
    for py in start_y..end_y {
        for px in start_x..end_x {
            let index = (py as usize * frame_width as usize + px as usize) * 4;
            frame[index..index + 4].copy_from_slice(&rgba);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], frame_width: u32, x: usize, y: usize) -> [u8; 4] {
        let index = (y * frame_width as usize + x) * 4;
        [frame[index], frame[index + 1], frame[index + 2], frame[index + 3]]
    }

    #[test]
    fn test_clear_sets_every_pixel() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        clear(&mut frame, named::WHITE);
        assert!(frame.iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let size = (4, 3);
        let mut frame = vec![0u8; 4 * 3 * 4];
        fill_rect(&mut frame, size, (-1, 2), (3, 5), named::RED);

        assert_eq!(pixel(&frame, 4, 0, 2), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 4, 1, 2), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 4, 2, 2), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 4, 0, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_outside_frame_is_noop() {
        let mut frame = vec![0u8; 4 * 3 * 4];
        fill_rect(&mut frame, (4, 3), (10, 10), (2, 2), named::RED);
        fill_rect(&mut frame, (4, 3), (-5, 0), (2, 2), named::RED);
        assert!(frame.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_sprite_origin_below_header() {
        let sprite = Sprite {
            x: 10.0,
            y: 5.0,
            size: 2,
            color: named::BLACK,
        };
        assert_eq!(sprite_origin(&sprite, 25), (9, 29));
    }
}
