use crate::config::{Bounds, ParticleStyle, Params};
use crate::core::mover::Mover;
use crate::core::rng::RandomSource;
use crate::renderer::{ParticleHandle, Surface};

/// A point moving at constant velocity inside [`Bounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64, // x方向速度
    pub vy: f64, // y方向速度
    bounds: Bounds,
    handle: ParticleHandle,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, bounds: Bounds, handle: ParticleHandle) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            bounds,
            handle,
        }
    }

    /// Creates a particle at a random spot with a random velocity and
    /// registers its visual with `surface`.
    ///
    /// Draws happen in the order vx, vy, x, y.
    pub fn spawn(
        bounds: Bounds,
        style: ParticleStyle,
        rng: &mut dyn RandomSource,
        surface: &mut dyn Surface,
    ) -> Self {
        let vx = rng.unit() * Params::MAX_SPEED;
        let vy = rng.unit() * Params::MAX_SPEED;
        let x = rng.unit() * bounds.width;
        let y = rng.unit() * bounds.height;
        let handle = surface.new_particle(x, y, style.size, style.color);
        Self::new(x, y, vx, vy, bounds, handle)
    }

    pub fn handle(&self) -> ParticleHandle {
        self.handle
    }

    /// One frame of motion. The position is clamped to the bounds and the
    /// matching velocity component flips.
    ///
    /// The lower bound is 0 for x but `border` for y; the header sits above
    /// `border`.
    pub fn step(&mut self) {
        self.x += self.vx;
        if self.x < 0.0 {
            self.x = 0.0;
            self.vx = -self.vx;
        } else if self.x > self.bounds.width {
            self.x = self.bounds.width;
            self.vx = -self.vx;
        }

        self.y += self.vy;
        if self.y < self.bounds.border {
            self.y = self.bounds.border;
            self.vy = -self.vy;
        } else if self.y > self.bounds.height {
            self.y = self.bounds.height;
            self.vy = -self.vy;
        }
    }
}

impl Mover for Particle {
    fn advance(&mut self, surface: &mut dyn Surface) {
        self.step();
        surface.move_particle(self.handle, self.x, self.y);
    }
}
