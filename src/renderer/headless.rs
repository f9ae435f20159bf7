use palette::Srgb;

use super::{ParticleHandle, Sprite, Surface};

/// Surface with no window. Keeps every visual and counts frames, so the
/// simulation can run in tests.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    sprites: Vec<Sprite>,
    frames: u64,
    headings: Vec<String>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn sprite(&self, handle: ParticleHandle) -> Option<&Sprite> {
        self.sprites.get(handle.0)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Every heading text set so far, oldest first.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn heading(&self) -> Option<&str> {
        self.headings.last().map(String::as_str)
    }
}

impl Surface for HeadlessSurface {
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
        self.frames += 1;
    }

    fn set_heading_text(&mut self, text: &str) {
        self.headings.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::named;

    #[test]
    fn test_handles_are_sequential() {
        let mut surface = HeadlessSurface::new();
        let a = surface.new_particle(1.0, 2.0, 2, named::BLACK);
        let b = surface.new_particle(3.0, 4.0, 2, named::BLACK);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(surface.sprites().len(), 2);
    }

    #[test]
    fn test_move_updates_only_target() {
        let mut surface = HeadlessSurface::new();
        let a = surface.new_particle(1.0, 2.0, 2, named::BLACK);
        let b = surface.new_particle(3.0, 4.0, 2, named::BLACK);
        surface.move_particle(b, 10.0, 20.0);

        let sa = surface.sprite(a).unwrap();
        let sb = surface.sprite(b).unwrap();
        assert_eq!((sa.x, sa.y), (1.0, 2.0));
        assert_eq!((sb.x, sb.y), (10.0, 20.0));
    }

    #[test]
    fn test_frames_and_headings() {
        let mut surface = HeadlessSurface::new();
        assert_eq!(surface.heading(), None);
        surface.frame();
        surface.frame();
        surface.set_heading_text("FPS: 2");
        assert_eq!(surface.frames(), 2);
        assert_eq!(surface.heading(), Some("FPS: 2"));
        assert_eq!(surface.headings().len(), 1);
    }
}
