pub mod clock;
pub mod mover;
pub mod particle;
pub mod rng;

pub use clock::{Clock, FrameCounter, SystemClock, Ticker};
pub use mover::Mover;
pub use particle::Particle;
pub use rng::{RandomSource, SimRng};
