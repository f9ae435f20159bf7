pub mod headless;
pub mod window;

pub use headless::HeadlessSurface;
pub use window::WindowSurface;

use palette::Srgb;

/// Reference to a particle visual owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleHandle(pub(crate) usize);

impl ParticleHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What the simulation needs from whatever draws it.
///
/// Every call is infallible; a surface that can fail internally logs and
/// carries on.
pub trait Surface {
    /// Allocates a visual at `(x, y)` in canvas coordinates.
    fn new_particle(&mut self, x: f64, y: f64, size: u32, color: Srgb<u8>) -> ParticleHandle;

    fn move_particle(&mut self, handle: ParticleHandle, x: f64, y: f64);

    /// Presents one frame.
    fn frame(&mut self);

    fn set_heading_text(&mut self, text: &str);
}

/// A particle visual as the surfaces store it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub size: u32,
    pub color: Srgb<u8>,
}
