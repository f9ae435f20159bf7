use std::time::Duration;

use palette::{named, Srgb};

/// Tuning values for the mover sample.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const WIDTH: u32 = 700;
    pub const HEIGHT: u32 = 500;
    pub const HEADING: u32 = 25; // ヘッダー帯の高さ
    pub const BORDER: u32 = 5;

    // Particles
    pub const NUM_PARTICLES: usize = 5;
    pub const PARTICLE_SIZE: u32 = 2;
    pub const MAX_SPEED: f64 = 10.0; // 初速の上限 (1フレームあたり)

    // Loop
    pub const SAMPLE_PERIOD: Duration = Duration::from_secs(1);
    pub const RUN_DURATION: Duration = Duration::from_secs(60);

    pub const TITLE: &'static str = "Mover";
}

/// Size of the logical canvas and the margins reserved around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub border: u32,
    pub heading: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: Params::WIDTH,
            height: Params::HEIGHT,
            border: Params::BORDER,
            heading: Params::HEADING,
        }
    }
}

impl Canvas {
    /// Limits a particle is clamped to.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.width as f64,
            height: self.height as f64,
            border: self.border as f64,
        }
    }

    /// Pixel size of the framebuffer, header band included.
    pub fn frame_size(&self) -> (u32, u32) {
        (
            self.width + self.border,
            self.heading + self.height + self.border,
        )
    }
}

/// Clamp limits for the motion update: `0..=width` horizontally,
/// `border..=height` vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub border: f64,
}

/// How a particle's visual is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    pub size: u32,
    pub color: Srgb<u8>,
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            size: Params::PARTICLE_SIZE,
            color: named::BLACK,
        }
    }
}

/// Everything the driver needs to build and run a simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub canvas: Canvas,
    pub num_particles: usize,
    pub style: ParticleStyle,
    pub sample_period: Duration,
    pub run_duration: Duration,
    pub title: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            num_particles: Params::NUM_PARTICLES,
            style: ParticleStyle::default(),
            sample_period: Params::SAMPLE_PERIOD,
            run_duration: Params::RUN_DURATION,
            title: Params::TITLE.to_string(),
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let bounds = Canvas::default().bounds();
        assert_eq!(bounds.width, 700.0);
        assert_eq!(bounds.height, 500.0);
        assert_eq!(bounds.border, 5.0);
    }

    #[test]
    fn test_frame_size_includes_margins() {
        let canvas = Canvas::default();
        assert_eq!(canvas.frame_size(), (705, 530));
    }

    #[test]
    fn test_default_config() {
        let config = SimConfig::new();
        assert_eq!(config.num_particles, 5);
        assert_eq!(config.style.size, 2);
        assert_eq!(config.style.color, named::BLACK);
        assert_eq!(config.sample_period, Duration::from_secs(1));
        assert_eq!(config.run_duration, Duration::from_secs(60));
        assert_eq!(config.title, "Mover");
    }
}
